use strum::IntoStaticStr;
use thiserror::Error;

/// Error outputs from `MediaBridge`.
///
/// Every variant maps to a stable wire code (see [`MediaBridgeError::code`])
/// which is what the application layer matches on.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr, uniffi::Error)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaBridgeError {
    /// A required argument is missing or has the wrong type. Nothing was attempted.
    #[error("invalid_arguments: {message}")]
    InvalidArguments {
        /// Which argument was missing.
        message: String,
    },
    /// The path handed to the media indexer is missing.
    #[error("invalid_path: {message}")]
    InvalidPath {
        /// Human readable reason.
        message: String,
    },
    /// The user declined, or policy restricts, access to the photo library.
    #[error("no_permission: {message}")]
    NoPermission {
        /// Human readable reason.
        message: String,
    },
    /// The photo library rejected the write transaction.
    #[error("save_failed: {message}")]
    SaveFailed {
        /// Description reported by the photo library.
        message: String,
    },
    /// The photo library rejected the deletion transaction.
    #[error("delete_failed: {message}")]
    DeleteFailed {
        /// Description reported by the photo library.
        message: String,
    },
    /// The host does not provide the platform capability the call needs.
    #[error("unavailable: {message}")]
    Unavailable {
        /// Which capability is missing.
        message: String,
    },
}

impl MediaBridgeError {
    /// Wire code of the error, e.g. `SAVE_FAILED`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Message without the code prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArguments { message }
            | Self::InvalidPath { message }
            | Self::NoPermission { message }
            | Self::SaveFailed { message }
            | Self::DeleteFailed { message }
            | Self::Unavailable { message } => message,
        }
    }

    pub(crate) fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    pub(crate) fn no_permission() -> Self {
        Self::NoPermission {
            message: "Access to photo library denied".to_string(),
        }
    }
}

/// Errors raised while loading a [`crate::BridgeConfig`].
#[derive(Debug, Error, uniffi::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for a `BridgeConfig`.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// The application identifier is empty.
    #[error("app_id must not be empty")]
    EmptyAppId,
}

/// Result alias used across the crate.
pub type MediaBridgeResult<T, E = MediaBridgeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            MediaBridgeError::invalid_arguments("x").code(),
            "INVALID_ARGUMENTS"
        );
        assert_eq!(
            MediaBridgeError::InvalidPath {
                message: String::new()
            }
            .code(),
            "INVALID_PATH"
        );
        assert_eq!(MediaBridgeError::no_permission().code(), "NO_PERMISSION");
        assert_eq!(
            MediaBridgeError::SaveFailed {
                message: String::new()
            }
            .code(),
            "SAVE_FAILED"
        );
        assert_eq!(
            MediaBridgeError::DeleteFailed {
                message: String::new()
            }
            .code(),
            "DELETE_FAILED"
        );
        assert_eq!(
            MediaBridgeError::Unavailable {
                message: String::new()
            }
            .code(),
            "UNAVAILABLE"
        );
    }

    #[test]
    fn test_message_has_no_code_prefix() {
        let err = MediaBridgeError::SaveFailed {
            message: "disk full".to_string(),
        };
        assert_eq!(err.message(), "disk full");
        assert_eq!(err.to_string(), "save_failed: disk full");
    }
}
