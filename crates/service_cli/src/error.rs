//! CLI error types.

use sobol_core::SobolError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The sequence engine or direction table rejected the request.
    #[error("Sobol engine error: {0}")]
    Sobol(#[from] SobolError),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output could not be serialised.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// CSV output could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sobol_error() {
        let err: CliError = SobolError::InvalidDimension {
            requested: 0,
            max: 37,
        }
        .into();
        assert!(matches!(err, CliError::Sobol(_)));
        assert!(err.to_string().starts_with("Sobol engine error: Invalid dimension"));
    }

    #[test]
    fn test_from_csv_error() {
        let io = std::io::Error::new(std::io::ErrorKind::WriteZero, "sink closed");
        let err: CliError = csv::Error::from(io).into();
        assert!(matches!(err, CliError::Csv(_)));
        assert!(err.to_string().starts_with("CSV error:"));
    }

    #[test]
    fn test_from_config_error() {
        let err: CliError = ConfigError::InvalidDimension.into();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
