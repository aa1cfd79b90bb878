use std::env;
use std::str::FromStr;

use crate::domain::rules::Rules;
use crate::error::AppError;

pub const MAX_ROLLS_VAR: &str = "YAHTZEE_MAX_ROLLS";
pub const UPPER_BONUS_THRESHOLD_VAR: &str = "YAHTZEE_UPPER_BONUS_THRESHOLD";
pub const UPPER_BONUS_VAR: &str = "YAHTZEE_UPPER_BONUS";

/// Builds the rule set from environment variables, falling back to the
/// classic defaults for anything unset.
pub fn rules_from_env() -> Result<Rules, AppError> {
    let defaults = Rules::default();
    let max_rolls = optional_var(MAX_ROLLS_VAR, defaults.max_rolls)?;
    if max_rolls == 0 {
        return Err(AppError::config(format!(
            "'{MAX_ROLLS_VAR}' must allow at least one roll"
        )));
    }
    Ok(Rules {
        max_rolls,
        upper_bonus_threshold: optional_var(
            UPPER_BONUS_THRESHOLD_VAR,
            defaults.upper_bonus_threshold,
        )?,
        upper_bonus: optional_var(UPPER_BONUS_VAR, defaults.upper_bonus)?,
    })
}

/// Parse an environment variable, or return `default` when it is unset
fn optional_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has invalid value '{raw}'"
            ))
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(AppError::config(format!(
            "Environment variable '{name}' is not valid unicode"
        ))),
    }
}
