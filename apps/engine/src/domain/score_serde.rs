//! Serialization and deserialization for scoring types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::score_types::{Category, ScoreSection};

// ScoreSection serde
impl Serialize for ScoreSection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScoreSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "upper" => Ok(ScoreSection::Upper),
            "lower" => Ok(ScoreSection::Lower),
            _ => Err(serde::de::Error::custom(format!("Invalid section: {s}"))),
        }
    }
}

// Category serde: the sheet name, so snapshot maps read `"Full House": 25`
impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Category::from_name(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid category: {s}")))
    }
}
