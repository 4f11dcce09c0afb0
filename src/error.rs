//! Error types for the assistant
//!
//! The dialogue path itself never fails; these errors come from building a
//! custom knowledge store and from the configuration layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate knowledge key: {0}")]
    DuplicateKey(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing assistant section".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing assistant section"));
    }

    #[test]
    fn test_error_display_duplicate_key() {
        let err = Error::DuplicateKey("mcp tools".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Duplicate knowledge key"));
        assert!(msg.contains("mcp tools"));
    }

    #[test]
    fn test_error_display_invalid_argument() {
        let err = Error::InvalidArgument("max_results must be positive".to_string());
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();

        assert!(matches!(err, Error::SerializationError(_)));
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_from_serde_yaml() {
        let yaml_err = serde_yaml::from_str::<Vec<i32>>("{ not: [a list").unwrap_err();
        let err: Error = yaml_err.into();

        assert!(matches!(err, Error::SerializationError(_)));
    }

    #[test]
    fn test_result_unwrap_or_else() {
        let result: Result<i32> = Err(Error::Config("bad".to_string()));
        let value = result.unwrap_or_else(|_| 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_error_debug_impl() {
        let err = Error::DuplicateKey("k".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("DuplicateKey"));
    }
}
