//! Domain error taxonomy for transformer construction and mutation.

use thiserror::Error;

/// Errors raised by protection-device construction and access.
///
/// Every variant carries the name of the offending parameter in its
/// camelCase form (`ratedPower`, `highVoltageLevel`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtectionError {
    /// A required construction input was not supplied.
    #[error("{0} is missing.")]
    MissingParameter(&'static str),

    /// A supplied value failed catalog membership or range validation.
    #[error("{0} is not valid.")]
    IllegalArgument(&'static str),

    /// A write or delete was attempted on a sealed entity.
    #[error("{0} cannot be mutated.")]
    IllegalMutation(String),
}

impl ProtectionError {
    /// Returns the parameter or field name the error refers to.
    pub fn parameter(&self) -> &str {
        match self {
            Self::MissingParameter(name) | Self::IllegalArgument(name) => *name,
            Self::IllegalMutation(name) => name.as_str(),
        }
    }
}
