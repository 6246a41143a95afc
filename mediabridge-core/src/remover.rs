//! Asset remover: deletes assets by identifier.

use std::sync::Arc;

use crate::{
    asset::DeleteRequest,
    authorization::{AccessDecision, AuthorizationGate},
    completion::{ChangeCompletion, ChangeResult},
    error::MediaBridgeError,
    platform::PhotoLibrary,
};

pub(crate) struct AssetRemover {
    gate: AuthorizationGate,
    library: Arc<dyn PhotoLibrary>,
}

impl AssetRemover {
    pub fn new(gate: AuthorizationGate, library: Arc<dyn PhotoLibrary>) -> Self {
        Self { gate, library }
    }

    /// Deletes the assets of `request` that still exist.
    ///
    /// Returns `Ok(false)` when the library reports failure without saying why.
    pub async fn delete(&self, request: DeleteRequest) -> Result<bool, MediaBridgeError> {
        if self.gate.ensure_write_access().await == AccessDecision::Denied {
            log::warn!("delete refused: no photo library access");
            return Err(MediaBridgeError::no_permission());
        }

        let existing = self
            .library
            .existing_identifiers(request.identifiers().to_vec());
        if existing.is_empty() {
            log::debug!("none of {} assets exist, nothing to delete", request.identifiers().len());
            return Ok(true);
        }

        let count = existing.len();
        let (completion, result) = ChangeCompletion::new();
        self.library.perform_deletion(existing, completion);

        match result.await {
            Ok(ChangeResult { success: true, .. }) => {
                log::debug!("deleted {count} assets");
                Ok(true)
            }
            Ok(ChangeResult {
                error_description: Some(message),
                ..
            }) => {
                log::warn!("deletion transaction failed: {message}");
                Err(MediaBridgeError::DeleteFailed { message })
            }
            Ok(_) => Ok(false),
            Err(_) => {
                log::warn!("deletion transaction dropped its completion");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        platform::memory::{LibraryFault, MemoryAuthorization, MemoryPhotoLibrary},
        AssetResource, AuthorizationStatus, MediaKind,
    };

    fn remover(status: AuthorizationStatus) -> (AssetRemover, Arc<MemoryPhotoLibrary>) {
        let library = Arc::new(MemoryPhotoLibrary::new());
        for id in ["A", "B"] {
            library.insert(
                id,
                vec![AssetResource {
                    original_filename: format!("{id}.jpg"),
                    kind: MediaKind::Image,
                }],
            );
        }
        let oracle = Arc::new(MemoryAuthorization::new(status));
        (
            AssetRemover::new(AuthorizationGate::new(oracle), library.clone()),
            library,
        )
    }

    fn request(ids: &[&str]) -> DeleteRequest {
        DeleteRequest::new(Some(ids.iter().map(ToString::to_string).collect())).unwrap()
    }

    #[tokio::test]
    async fn test_deletes_reachable_subset() {
        let (remover, library) = remover(AuthorizationStatus::Authorized);
        assert!(remover.delete(request(&["A", "ghost"])).await.unwrap());
        assert!(!library.contains("A"));
        assert!(library.contains("B"));
        assert_eq!(library.transaction_count(), 1);
    }

    #[tokio::test]
    async fn test_only_unknown_ids_skip_transaction() {
        let (remover, library) = remover(AuthorizationStatus::Authorized);
        assert!(remover.delete(request(&["ghost"])).await.unwrap());
        assert_eq!(library.transaction_count(), 0);
        assert_eq!(library.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_with_detail() {
        let (remover, library) = remover(AuthorizationStatus::Authorized);
        library.inject_fault(LibraryFault::Fail(Some("user cancelled".to_string())));
        let err = remover.delete(request(&["A"])).await.unwrap_err();
        assert_eq!(
            err,
            MediaBridgeError::DeleteFailed {
                message: "user cancelled".to_string()
            }
        );
        assert!(library.contains("A"));
    }

    #[tokio::test]
    async fn test_failure_without_detail_is_false() {
        let (remover, library) = remover(AuthorizationStatus::Authorized);
        library.inject_fault(LibraryFault::Fail(None));
        assert!(!remover.delete(request(&["A"])).await.unwrap());
    }

    #[tokio::test]
    async fn test_dropped_completion_is_false() {
        let (remover, library) = remover(AuthorizationStatus::Authorized);
        library.inject_fault(LibraryFault::DropCompletion);
        assert!(!remover.delete(request(&["B"])).await.unwrap());
    }

    #[tokio::test]
    async fn test_denied() {
        let (remover, library) = remover(AuthorizationStatus::Denied);
        let err = remover.delete(request(&["A"])).await.unwrap_err();
        assert_eq!(err.code(), "NO_PERMISSION");
        assert_eq!(library.len(), 2);
        assert_eq!(library.transaction_count(), 0);
    }
}
