//! Error types for Storefront

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StorefrontError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StorefrontError::InvalidInput(_) => 3,
            StorefrontError::Api(ApiError::Status { code, .. }) if *code == 401 || *code == 403 => 2,
            StorefrontError::Api(_) => 1,
            StorefrontError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Failure surfaced by one CRUD request.
///
/// The store does not branch on these variants; the reducer records the
/// rendered message verbatim and the caller sees the typed value.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = StorefrontError::InvalidInput("missing id".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_unauthorized_status() {
        let error = StorefrontError::Api(ApiError::Status {
            code: 401,
            body: "Unauthorized".to_string(),
        });
        assert_eq!(error.exit_code(), 2);

        let error = StorefrontError::Api(ApiError::Status {
            code: 403,
            body: "Forbidden".to_string(),
        });
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_other_api_errors() {
        let error = StorefrontError::Api(ApiError::Status {
            code: 500,
            body: "Internal Server Error".to_string(),
        });
        assert_eq!(error.exit_code(), 1);

        let error = StorefrontError::Api(ApiError::Decode("unexpected EOF".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_config_error() {
        let config_error = ConfigError::MissingField("api.base_url".to_string());
        let error = StorefrontError::Config(config_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_status() {
        let error = StorefrontError::Api(ApiError::Status {
            code: 404,
            body: "Not Found".to_string(),
        });
        assert_eq!(format!("{}", error), "API error: Server returned 404: Not Found");
    }

    #[test]
    fn test_error_message_formatting_config() {
        let config_error = ConfigError::MissingField("api.base_url".to_string());
        let error = StorefrontError::Config(config_error);
        assert_eq!(
            format!("{}", error),
            "Configuration error: Missing required field: api.base_url"
        );
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("test".to_string());
        let storefront_error: StorefrontError = config_error.into();

        match storefront_error {
            StorefrontError::Config(_) => {}
            _ => panic!("Expected StorefrontError::Config"),
        }
    }

    #[test]
    fn test_error_conversion_from_api_error() {
        let api_error = ApiError::Decode("bad json".to_string());
        let storefront_error: StorefrontError = api_error.into();

        match storefront_error {
            StorefrontError::Api(_) => {}
            _ => panic!("Expected StorefrontError::Api"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_err() -> Result<String> {
            Err(StorefrontError::InvalidInput("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
