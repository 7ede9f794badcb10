use thiserror::Error;

/// Errors that can occur while searching, loading or persisting recipes
#[derive(Error, Debug)]
pub enum AppError {
    /// Request to the recipe API failed before a response arrived
    #[error("Failed to reach recipe API: {0}")]
    Network(#[from] reqwest::Error),

    /// Recipe API answered with a non-success status
    #[error("Recipe API returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Response had an unexpected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Response or stored data was not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write persisted data
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Shopping list item does not exist
    #[error("No shopping list item with id {0}")]
    NotFound(String),

    /// Command could not be understood or its arguments are out of range
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

/// The two failure kinds a user action can end in, plus everything local
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Other,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(e) if e.is_decode() => ErrorKind::Parse,
            AppError::Network(_) | AppError::Status { .. } => ErrorKind::Network,
            AppError::Parse(_) | AppError::Json(_) => ErrorKind::Parse,
            _ => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let parse = AppError::Parse("missing recipes".to_string());
        assert_eq!(parse.kind(), ErrorKind::Parse);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(AppError::from(json).kind(), ErrorKind::Parse);

        let status = AppError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "http://localhost/get".to_string(),
        };
        assert_eq!(status.kind(), ErrorKind::Network);

        assert_eq!(
            AppError::NotFound("abc".to_string()).kind(),
            ErrorKind::Other
        );
    }

    #[test]
    fn test_status_message() {
        let err = AppError::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
            url: "http://localhost/search".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Recipe API returned 400 Bad Request for http://localhost/search"
        );
    }
}
