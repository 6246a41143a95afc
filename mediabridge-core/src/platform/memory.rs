//! In-memory implementations of platform traits for testing.
//!
//! These stand in for the OS media APIs in unit and integration tests and in
//! desktop development builds. Completions are delivered from a separate
//! thread, like the OS photo library does.

// Allow certain clippy lints for test-only code
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::significant_drop_tightening)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{AuthorizationOracle, DeviceInfo, MediaIndexer, MediaPlatform, PhotoLibrary};
use crate::{
    AssetCreationRequest, AssetResource, AuthorizationCompletion, AuthorizationStatus,
    ChangeCompletion, ChangeResult,
};

// =============================================================================
// Memory Authorization
// =============================================================================

/// Authorization oracle with a scripted user.
///
/// When a prompt is shown the scripted answer becomes the new status. Without
/// an answer the prompt completion is dropped unanswered.
pub struct MemoryAuthorization {
    status: Mutex<AuthorizationStatus>,
    answer: Option<AuthorizationStatus>,
    prompts: AtomicUsize,
}

impl MemoryAuthorization {
    /// Creates an oracle reporting `status`.
    #[must_use]
    pub fn new(status: AuthorizationStatus) -> Self {
        Self {
            status: Mutex::new(status),
            answer: None,
            prompts: AtomicUsize::new(0),
        }
    }

    /// Sets what the user answers when prompted.
    #[must_use]
    pub fn answering(mut self, answer: AuthorizationStatus) -> Self {
        self.answer = Some(answer);
        self
    }

    /// Changes the status, as if the user toggled it in the system settings.
    pub fn set_status(&self, status: AuthorizationStatus) {
        *self.status.lock().unwrap() = status;
    }

    /// Number of prompts shown so far.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

impl AuthorizationOracle for MemoryAuthorization {
    fn current_status(&self) -> AuthorizationStatus {
        *self.status.lock().unwrap()
    }

    fn request_authorization(&self, completion: Arc<AuthorizationCompletion>) {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        let Some(answer) = self.answer else {
            return;
        };
        *self.status.lock().unwrap() = answer;
        std::thread::spawn(move || {
            completion.complete(answer);
        });
    }
}

// =============================================================================
// Memory Photo Library
// =============================================================================

/// Failure injected into the next change transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryFault {
    /// The transaction fails, optionally with a description.
    Fail(Option<String>),
    /// The transaction commits but no identifier is reported.
    CommitWithoutIdentifier,
    /// The completion is dropped without being called.
    DropCompletion,
}

/// Photo library backed by a `BTreeMap` of identifier to resources.
pub struct MemoryPhotoLibrary {
    assets: Mutex<BTreeMap<String, Vec<AssetResource>>>,
    scripted_ids: Mutex<VecDeque<String>>,
    next_fault: Mutex<Option<LibraryFault>>,
    counter: AtomicUsize,
    transactions: AtomicUsize,
}

impl MemoryPhotoLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assets: Mutex::new(BTreeMap::new()),
            scripted_ids: Mutex::new(VecDeque::new()),
            next_fault: Mutex::new(None),
            counter: AtomicUsize::new(0),
            transactions: AtomicUsize::new(0),
        }
    }

    /// Queues identifiers handed out by the next creations, in order.
    #[must_use]
    pub fn with_identifiers<I, S>(self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripted_ids
            .lock()
            .unwrap()
            .extend(identifiers.into_iter().map(Into::into));
        self
    }

    /// Injects a fault into the next change transaction.
    pub fn inject_fault(&self, fault: LibraryFault) {
        *self.next_fault.lock().unwrap() = Some(fault);
    }

    /// Inserts an asset directly, bypassing transactions.
    pub fn insert(&self, identifier: &str, resources: Vec<AssetResource>) {
        self.assets
            .lock()
            .unwrap()
            .insert(identifier.to_string(), resources);
    }

    /// Number of assets in the library.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.lock().unwrap().len()
    }

    /// Returns `true` if the library holds no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.lock().unwrap().is_empty()
    }

    /// Returns `true` if an asset with `identifier` exists.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.assets.lock().unwrap().contains_key(identifier)
    }

    /// Number of change transactions performed, including failed ones.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.load(Ordering::SeqCst)
    }

    fn next_identifier(&self) -> String {
        if let Some(id) = self.scripted_ids.lock().unwrap().pop_front() {
            return id;
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{n:08X}-0000-4000-8000-000000000000/L0/001")
    }

    fn take_fault(&self) -> Option<LibraryFault> {
        self.next_fault.lock().unwrap().take()
    }
}

impl Default for MemoryPhotoLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn deliver(completion: Arc<ChangeCompletion>, result: ChangeResult) {
    std::thread::spawn(move || {
        completion.complete(result);
    });
}

impl PhotoLibrary for MemoryPhotoLibrary {
    fn perform_creation(&self, request: AssetCreationRequest, completion: Arc<ChangeCompletion>) {
        self.transactions.fetch_add(1, Ordering::SeqCst);
        match self.take_fault() {
            Some(LibraryFault::Fail(description)) => {
                deliver(completion, ChangeResult::failed(description));
            }
            Some(LibraryFault::CommitWithoutIdentifier) => {
                // The asset lands in the library but its placeholder never resolves.
                let id = self.next_identifier();
                self.insert(&id, vec![request.into()]);
                deliver(completion, ChangeResult::committed(None));
            }
            Some(LibraryFault::DropCompletion) => drop(completion),
            None => {
                let id = self.next_identifier();
                self.insert(&id, vec![request.into()]);
                deliver(completion, ChangeResult::committed(Some(id)));
            }
        }
    }

    fn fetch_resources(&self, identifier: String) -> Option<Vec<AssetResource>> {
        self.assets.lock().unwrap().get(&identifier).cloned()
    }

    fn existing_identifiers(&self, identifiers: Vec<String>) -> Vec<String> {
        let assets = self.assets.lock().unwrap();
        identifiers
            .into_iter()
            .filter(|id| assets.contains_key(id))
            .collect()
    }

    fn perform_deletion(&self, identifiers: Vec<String>, completion: Arc<ChangeCompletion>) {
        self.transactions.fetch_add(1, Ordering::SeqCst);
        match self.take_fault() {
            Some(LibraryFault::Fail(description)) => {
                deliver(completion, ChangeResult::failed(description));
            }
            Some(LibraryFault::DropCompletion) => drop(completion),
            Some(LibraryFault::CommitWithoutIdentifier) | None => {
                let mut assets = self.assets.lock().unwrap();
                for id in &identifiers {
                    assets.remove(id);
                }
                drop(assets);
                deliver(completion, ChangeResult::committed(None));
            }
        }
    }
}

impl From<AssetCreationRequest> for AssetResource {
    fn from(request: AssetCreationRequest) -> Self {
        Self {
            original_filename: request.original_filename,
            kind: request.kind,
        }
    }
}

// =============================================================================
// Memory Indexer & Device Info
// =============================================================================

/// Media indexer recording every path it was asked to scan.
#[derive(Default)]
pub struct MemoryIndexer {
    scanned: Mutex<Vec<String>>,
}

impl MemoryIndexer {
    /// Creates an indexer with no recorded scans.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths scanned so far, in request order.
    #[must_use]
    pub fn scanned(&self) -> Vec<String> {
        self.scanned.lock().unwrap().clone()
    }
}

impl MediaIndexer for MemoryIndexer {
    fn scan_file(&self, path: String) {
        self.scanned.lock().unwrap().push(path);
    }
}

/// Fixed device information.
pub struct MemoryDeviceInfo {
    sdk_int: i64,
    legacy_dcim: Option<String>,
}

impl MemoryDeviceInfo {
    /// Creates device information with the given values.
    #[must_use]
    pub fn new(sdk_int: i64, legacy_dcim: Option<String>) -> Self {
        Self {
            sdk_int,
            legacy_dcim,
        }
    }
}

impl DeviceInfo for MemoryDeviceInfo {
    fn sdk_int(&self) -> i64 {
        self.sdk_int
    }

    fn legacy_dcim_directory(&self) -> Option<String> {
        self.legacy_dcim.clone()
    }
}

// =============================================================================
// Memory Platform
// =============================================================================

/// A [`MediaPlatform`] assembled from in-memory components.
#[derive(Default)]
pub struct MemoryPlatform {
    /// Authorization oracle, if present.
    pub authorization: Option<Arc<MemoryAuthorization>>,
    /// Photo library, if present.
    pub library: Option<Arc<MemoryPhotoLibrary>>,
    /// Media indexer, if present.
    pub indexer: Option<Arc<MemoryIndexer>>,
    /// Device information, if present.
    pub device: Option<Arc<MemoryDeviceInfo>>,
}

impl MemoryPlatform {
    /// A host with a managed photo library (iOS-like).
    #[must_use]
    pub fn with_library(authorization: MemoryAuthorization, library: MemoryPhotoLibrary) -> Self {
        Self {
            authorization: Some(Arc::new(authorization)),
            library: Some(Arc::new(library)),
            ..Self::default()
        }
    }

    /// A host with a media indexer and device information (Android-like).
    #[must_use]
    pub fn with_indexer(sdk_int: i64, legacy_dcim: Option<String>) -> Self {
        Self {
            indexer: Some(Arc::new(MemoryIndexer::new())),
            device: Some(Arc::new(MemoryDeviceInfo::new(sdk_int, legacy_dcim))),
            ..Self::default()
        }
    }

    /// A host providing every capability.
    #[must_use]
    pub fn full(authorization: MemoryAuthorization, library: MemoryPhotoLibrary) -> Self {
        Self {
            indexer: Some(Arc::new(MemoryIndexer::new())),
            device: Some(Arc::new(MemoryDeviceInfo::new(
                34,
                Some("/storage/emulated/0/DCIM".to_string()),
            ))),
            ..Self::with_library(authorization, library)
        }
    }
}

impl MediaPlatform for MemoryPlatform {
    fn authorization(&self) -> Option<Arc<dyn AuthorizationOracle>> {
        self.authorization
            .clone()
            .map(|a| a as Arc<dyn AuthorizationOracle>)
    }

    fn photo_library(&self) -> Option<Arc<dyn PhotoLibrary>> {
        self.library.clone().map(|l| l as Arc<dyn PhotoLibrary>)
    }

    fn media_indexer(&self) -> Option<Arc<dyn MediaIndexer>> {
        self.indexer.clone().map(|i| i as Arc<dyn MediaIndexer>)
    }

    fn device_info(&self) -> Option<Arc<dyn DeviceInfo>> {
        self.device.clone().map(|d| d as Arc<dyn DeviceInfo>)
    }
}
