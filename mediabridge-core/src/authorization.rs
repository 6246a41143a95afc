//! Authorization gate for read/write access to the photo library.

use std::sync::Arc;

use crate::{completion::AuthorizationCompletion, platform::AuthorizationOracle};

/// Photo library authorization status as reported by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    NotDetermined,
    /// Full access.
    Authorized,
    /// Access to a user-selected subset of the library.
    Limited,
    /// The user refused access.
    Denied,
    /// Access is blocked by policy (parental controls, MDM).
    Restricted,
}

/// Three-way classification of an [`AuthorizationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum AccessClass {
    /// Writes may proceed.
    Authorized,
    /// Writes are refused and the OS will not prompt again.
    Denied,
    /// The user still has to decide.
    NotDetermined,
}

impl AuthorizationStatus {
    /// Narrows the platform status to an [`AccessClass`].
    #[must_use]
    pub const fn classify(self) -> AccessClass {
        match self {
            Self::Authorized | Self::Limited => AccessClass::Authorized,
            Self::Denied | Self::Restricted => AccessClass::Denied,
            Self::NotDetermined => AccessClass::NotDetermined,
        }
    }
}

/// Classifies a platform status, for hosts that mirror the gate's decision.
#[uniffi::export]
#[must_use]
pub fn classify_authorization(status: AuthorizationStatus) -> AccessClass {
    status.classify()
}

/// Outcome of [`AuthorizationGate::ensure_write_access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccessDecision {
    Authorized,
    Denied,
}

/// Consults the OS for photo library access, prompting once if undecided.
///
/// The status is read fresh on every call; the user can change it in the
/// system settings at any time.
pub(crate) struct AuthorizationGate {
    oracle: Arc<dyn AuthorizationOracle>,
}

impl AuthorizationGate {
    pub fn new(oracle: Arc<dyn AuthorizationOracle>) -> Self {
        Self { oracle }
    }

    pub async fn ensure_write_access(&self) -> AccessDecision {
        let status = self.oracle.current_status();
        match status.classify() {
            AccessClass::Authorized => AccessDecision::Authorized,
            AccessClass::Denied => {
                log::debug!("photo library access refused without prompting ({status:?})");
                AccessDecision::Denied
            }
            AccessClass::NotDetermined => {
                let (completion, decision) = AuthorizationCompletion::new();
                self.oracle.request_authorization(completion);
                match decision.await {
                    Ok(status) if status.classify() == AccessClass::Authorized => {
                        AccessDecision::Authorized
                    }
                    Ok(status) => {
                        log::info!("user declined photo library access ({status:?})");
                        AccessDecision::Denied
                    }
                    Err(_) => {
                        log::warn!("authorization prompt dropped without an answer");
                        AccessDecision::Denied
                    }
                }
            }
        }
    }
}
