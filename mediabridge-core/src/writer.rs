//! Asset writer: imports a file into the photo library as a new asset.

use std::sync::Arc;

use crate::{
    asset::SaveRequest,
    authorization::{AccessDecision, AuthorizationGate},
    completion::{ChangeCompletion, ChangeResult},
    error::MediaBridgeError,
    platform::PhotoLibrary,
};

const UNKNOWN_ERROR: &str = "Unknown error";

pub(crate) struct AssetWriter {
    gate: AuthorizationGate,
    library: Arc<dyn PhotoLibrary>,
}

impl AssetWriter {
    pub fn new(gate: AuthorizationGate, library: Arc<dyn PhotoLibrary>) -> Self {
        Self { gate, library }
    }

    /// Saves the file and returns the new asset's identifier.
    ///
    /// The request is already validated; this authorizes, then runs exactly
    /// one creation transaction. A commit that yields no identifier counts as
    /// a failed save.
    pub async fn save(&self, request: SaveRequest) -> Result<String, MediaBridgeError> {
        if self.gate.ensure_write_access().await == AccessDecision::Denied {
            log::warn!("save of {} refused: no photo library access", request.display_name);
            return Err(MediaBridgeError::no_permission());
        }

        let kind = request.kind;
        let (completion, result) = ChangeCompletion::new();
        self.library
            .perform_creation(request.into_creation(), completion);

        let result = result.await.unwrap_or_else(|_| {
            log::warn!("creation transaction dropped its completion");
            ChangeResult::failed(None)
        });

        match result {
            ChangeResult {
                success: true,
                local_identifier: Some(identifier),
                ..
            } => {
                log::debug!("saved {kind:?} asset {identifier}");
                Ok(identifier)
            }
            ChangeResult {
                success: true,
                local_identifier: None,
                ..
            } => {
                log::warn!("creation committed without an asset identifier");
                Err(save_failed(UNKNOWN_ERROR))
            }
            ChangeResult {
                error_description, ..
            } => {
                let message = error_description.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                log::warn!("creation transaction failed: {message}");
                Err(save_failed(message))
            }
        }
    }
}

fn save_failed(message: impl Into<String>) -> MediaBridgeError {
    MediaBridgeError::SaveFailed {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        platform::memory::{LibraryFault, MemoryAuthorization, MemoryPhotoLibrary},
        AuthorizationStatus, MediaKind,
    };

    fn writer(status: AuthorizationStatus) -> (AssetWriter, Arc<MemoryPhotoLibrary>) {
        let library = Arc::new(MemoryPhotoLibrary::new().with_identifiers(["ABCD-1234"]));
        let oracle = Arc::new(MemoryAuthorization::new(status));
        (
            AssetWriter::new(AuthorizationGate::new(oracle), library.clone()),
            library,
        )
    }

    fn request() -> SaveRequest {
        SaveRequest::new(
            Some("/tmp/a.jpg".to_string()),
            Some("IMG_0001.jpg".to_string()),
            MediaKind::Image,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_returns_identifier() {
        let (writer, library) = writer(AuthorizationStatus::Authorized);
        assert_eq!(writer.save(request()).await.unwrap(), "ABCD-1234");
        let resources = library.fetch_resources("ABCD-1234".to_string()).unwrap();
        assert_eq!(resources[0].original_filename, "IMG_0001.jpg");
        assert_eq!(resources[0].kind, MediaKind::Image);
    }

    #[tokio::test]
    async fn test_denied_does_not_touch_library() {
        let (writer, library) = writer(AuthorizationStatus::Denied);
        let err = writer.save(request()).await.unwrap_err();
        assert_eq!(err.code(), "NO_PERMISSION");
        assert_eq!(library.transaction_count(), 0);
        assert!(library.is_empty());
    }

    #[tokio::test]
    async fn test_failure_carries_description() {
        let (writer, library) = writer(AuthorizationStatus::Authorized);
        library.inject_fault(LibraryFault::Fail(Some("The operation couldn't be completed.".into())));
        let err = writer.save(request()).await.unwrap_err();
        assert_eq!(
            err,
            MediaBridgeError::SaveFailed {
                message: "The operation couldn't be completed.".to_string()
            }
        );
        assert!(library.is_empty());
    }

    #[tokio::test]
    async fn test_failure_without_description_is_unknown() {
        let (writer, library) = writer(AuthorizationStatus::Authorized);
        library.inject_fault(LibraryFault::Fail(None));
        let err = writer.save(request()).await.unwrap_err();
        assert_eq!(err.message(), "Unknown error");
    }

    #[tokio::test]
    async fn test_commit_without_identifier_is_a_failure() {
        let (writer, library) = writer(AuthorizationStatus::Authorized);
        library.inject_fault(LibraryFault::CommitWithoutIdentifier);
        let err = writer.save(request()).await.unwrap_err();
        assert_eq!(err.code(), "SAVE_FAILED");
        assert_eq!(err.message(), "Unknown error");
    }

    #[tokio::test]
    async fn test_dropped_completion_is_a_failure() {
        let (writer, library) = writer(AuthorizationStatus::Authorized);
        library.inject_fault(LibraryFault::DropCompletion);
        let err = writer.save(request()).await.unwrap_err();
        assert_eq!(err.code(), "SAVE_FAILED");
    }
}
