//! Single-resolution completion handles passed to the host platform.
//!
//! The host's photo APIs report back through completion callbacks. Each
//! callback is represented by a completion object that resolves a
//! `tokio::sync::oneshot` channel at most once; the awaiting command only
//! ever sees the first result.

use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::authorization::AuthorizationStatus;

/// Sender side shared by every completion kind.
struct Completer<T> {
    label: &'static str,
    sender: Mutex<Option<oneshot::Sender<T>>>,
}

impl<T> Completer<T> {
    fn new(label: &'static str) -> (Self, oneshot::Receiver<T>) {
        let (sender, receiver) = oneshot::channel();
        (
            Self {
                label,
                sender: Mutex::new(Some(sender)),
            },
            receiver,
        )
    }

    /// Returns `false` if the completion had already been resolved.
    fn resolve(&self, value: T) -> bool {
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some(sender) = sender else {
            log::warn!("{} completion invoked more than once, ignoring", self.label);
            return false;
        };
        // The receiver is gone only if the awaiting command was dropped.
        if sender.send(value).is_err() {
            log::debug!("{} completion resolved after its command ended", self.label);
        }
        true
    }
}

/// Completion of a permission prompt.
#[derive(uniffi::Object)]
pub struct AuthorizationCompletion {
    inner: Completer<AuthorizationStatus>,
}

impl AuthorizationCompletion {
    pub(crate) fn new() -> (Arc<Self>, oneshot::Receiver<AuthorizationStatus>) {
        let (inner, receiver) = Completer::new("authorization");
        (Arc::new(Self { inner }), receiver)
    }
}

#[uniffi::export]
impl AuthorizationCompletion {
    /// Reports the status the user chose. Only the first call has an effect.
    pub fn complete(&self, status: AuthorizationStatus) -> bool {
        self.inner.resolve(status)
    }
}

/// Result of a photo library change transaction as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ChangeResult {
    /// Whether the transaction committed.
    pub success: bool,
    /// Identifier the creation placeholder resolved to, for creations.
    pub local_identifier: Option<String>,
    /// Description of the failure, if the library gave one.
    pub error_description: Option<String>,
}

impl ChangeResult {
    /// A committed transaction.
    #[must_use]
    pub const fn committed(local_identifier: Option<String>) -> Self {
        Self {
            success: true,
            local_identifier,
            error_description: None,
        }
    }

    /// A failed transaction.
    #[must_use]
    pub const fn failed(error_description: Option<String>) -> Self {
        Self {
            success: false,
            local_identifier: None,
            error_description,
        }
    }
}

/// Completion of a photo library change transaction.
#[derive(uniffi::Object)]
pub struct ChangeCompletion {
    inner: Completer<ChangeResult>,
}

impl ChangeCompletion {
    pub(crate) fn new() -> (Arc<Self>, oneshot::Receiver<ChangeResult>) {
        let (inner, receiver) = Completer::new("change");
        (Arc::new(Self { inner }), receiver)
    }
}

#[uniffi::export]
impl ChangeCompletion {
    /// Reports the transaction result. Only the first call has an effect.
    pub fn complete(&self, result: ChangeResult) -> bool {
        self.inner.resolve(result)
    }
}
