//! Configuration errors.
//!
//! The physics core has no recoverable failures; the only errors are
//! rejected configuration values, caught at construction or at a setter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_ION_COUNT;
use crate::enums::ConfigField;

/// A configuration value the engine refuses to run with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConfigError {
    /// NaN or infinite scalar.
    NonFinite { field: ConfigField },
    /// Must be strictly positive (mass, flow rate).
    NonPositive { field: ConfigField, value: f64 },
    /// Must not be negative (aperture radius, launch spread).
    Negative { field: ConfigField, value: f64 },
    /// Pool capacity outside `1..=MAX_ION_COUNT`.
    IonCountOutOfRange { count: usize },
    /// Derived ion life below one tick.
    IonLifeTooShort { ion_life: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { field } => {
                write!(f, "{} must be a finite number", field.name())
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be greater than zero, got {value}", field.name())
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{} must not be negative, got {value}", field.name())
            }
            ConfigError::IonCountOutOfRange { count } => {
                write!(f, "ion_count must be in 1..={MAX_ION_COUNT}, got {count}")
            }
            ConfigError::IonLifeTooShort { ion_life } => {
                write!(
                    f,
                    "flow_rate and ion_count give an ion life of {ion_life} ticks, need at least 1"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
