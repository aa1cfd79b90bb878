//! Engine test support utilities
//!
//! This crate provides utilities for the engine's integration tests:
//! unified logging initialization, deterministic random sources and
//! player factories.

pub mod logging;
pub mod players;
pub mod random;
