//! Trait to validate semantic errors.
//!
//! Errors could involve more than one configuration option. Some configuration
//! combinations can be incompatible.
use thiserror::Error;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SemanticValidationError {
    #[error("The `{name}` scheduler interval must be greater than zero.")]
    ZeroInterval { name: &'static str },

    #[error("The danger threshold ({danger}s) can not be greater than the warning threshold ({warning}s).")]
    DangerAboveWarning { danger: u32, warning: u32 },

    #[error("The snooze length must be between 1 and 1439 minutes, got {minutes}.")]
    SnoozeOutOfRange { minutes: u32 },

    #[error("The UTC offset must be strictly within one day, got {minutes} minutes.")]
    UtcOffsetOutOfRange { minutes: i32 },
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}
