//! Error handling for passgen


use thiserror::Error;

/// Main error type for passgen
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassgenError {
    #[error("Word pool is empty: no words available to build a password")]
    PoolEmpty,

    #[error("Word index {index} is out of range for a pool of {size} words")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl PassgenError {
    /// Create an out of range error
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::PoolEmpty => {
                "❌ The word pool is empty\n💡 Check that your word list has three letter words in it, one per line".to_string()
            }
            Self::IndexOutOfRange { index, size } => {
                format!("❌ Word {} requested from a pool of {}\n💡 This is a bug, please report it", index, size)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your options and PASSGEN_* environment variables", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Parse { message } => {
                format!("❌ Parse error: {}", message)
            }
        }
    }
}

impl From<std::io::Error> for PassgenError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for PassgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PassgenError>;

/// Helper macro for configuration errors
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::PassgenError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PassgenError::config(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PassgenError::index_out_of_range(12, 3);
        assert_eq!(
            err.to_string(),
            "Word index 12 is out of range for a pool of 3 words"
        );
        assert!(PassgenError::PoolEmpty.to_string().contains("empty"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PassgenError = io.into();
        assert!(matches!(err, PassgenError::Io { path: None, .. }));
        assert!(err.user_message().contains("missing"));
    }

    #[test]
    fn test_macros() {
        let err = config_error!("bad value {}", 7);
        assert_eq!(err, PassgenError::config("bad value 7"));
    }
}
