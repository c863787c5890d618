//! Configuration error types.
//!
//! The network-facing crates own their error enums; core only carries what
//! config loading and preference persistence can fail with.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConfigError = io.into();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
