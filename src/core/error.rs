//! Error types for the Cloud Wizard simulation

use thiserror::Error;

/// Main error type for the simulation
#[derive(Debug, Error)]
pub enum Error {
    /// Cloud creation was rejected because the magic pool cannot cover its cost.
    #[error("Not enough magic power! ({available:.0} available, {cost:.0} needed)")]
    InsufficientMagic { available: f32, cost: f32 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error is a transient, user-facing rejection rather than a fault.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Error::InsufficientMagic { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_magic_message() {
        let err = Error::InsufficientMagic { available: 12.4, cost: 20.0 };
        let text = err.to_string();
        assert!(text.starts_with("Not enough magic power!"), "unexpected text: {}", text);
        assert!(text.contains("12 available"), "available amount missing: {}", text);
        assert!(err.is_advisory());
    }

    #[test]
    fn test_config_error_is_not_advisory() {
        let err = Error::Config("bad range".into());
        assert!(!err.is_advisory());
        assert_eq!(err.to_string(), "Config error: bad range");
    }
}
