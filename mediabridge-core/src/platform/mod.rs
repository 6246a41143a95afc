//! Platform abstraction traits for the media bridge.
//!
//! The bridge never talks to the OS directly. The host application implements
//! these traits (in Swift or Kotlin) on top of its native media APIs and hands
//! them to [`crate::MediaBridge`] through a [`MediaPlatform`].
//!
//! # Overview
//!
//! - [`AuthorizationOracle`]: photo library authorization status and prompt
//! - [`PhotoLibrary`]: write/delete transactions and asset lookups
//! - [`MediaIndexer`]: rescan requests for files outside the library
//! - [`DeviceInfo`]: platform version and legacy directories
//!
//! # Platform Implementations
//!
//! ## iOS (Swift)
//! - `AuthorizationOracle`: `PHPhotoLibrary.authorizationStatus(for: .readWrite)`
//!   and `requestAuthorization(for:)`. Hosts below iOS 14 never report `limited`.
//! - `PhotoLibrary`: `PHPhotoLibrary.performChanges` with
//!   `PHAssetCreationRequest`, `PHAsset.fetchAssets(withLocalIdentifiers:)`
//!   and `PHAssetResource.assetResources(for:)`
//!
//! ## Android (Kotlin)
//! - `MediaIndexer`: `MediaScannerConnection.scanFile`
//! - `DeviceInfo`: `Build.VERSION.SDK_INT` and
//!   `Environment.getExternalStoragePublicDirectory(DIRECTORY_DCIM)`
//!
//! A platform returns `None` for capabilities it does not have; commands that
//! need them answer "not implemented".

use std::sync::Arc;

use crate::{
    asset::{AssetCreationRequest, AssetResource},
    authorization::AuthorizationStatus,
    completion::{AuthorizationCompletion, ChangeCompletion},
};

/// In-memory implementations for tests and desktop development.
pub mod memory;

/// Read access to the OS-owned photo library authorization.
#[uniffi::export(with_foreign)]
pub trait AuthorizationOracle: Send + Sync {
    /// Current read/write authorization status.
    fn current_status(&self) -> AuthorizationStatus;

    /// Shows the system permission prompt.
    ///
    /// The implementation must call [`AuthorizationCompletion::complete`] with
    /// the user's decision once it is known.
    fn request_authorization(&self, completion: Arc<AuthorizationCompletion>);
}

/// The platform-managed photo library.
#[uniffi::export(with_foreign)]
pub trait PhotoLibrary: Send + Sync {
    /// Runs a single change transaction creating one asset from `request`.
    ///
    /// On commit the implementation reports the identifier the creation
    /// placeholder resolved to via [`ChangeCompletion::complete`].
    fn perform_creation(&self, request: AssetCreationRequest, completion: Arc<ChangeCompletion>);

    /// Resources of the asset with `identifier`, or `None` if no asset matches.
    fn fetch_resources(&self, identifier: String) -> Option<Vec<AssetResource>>;

    /// The subset of `identifiers` that still refer to an asset.
    fn existing_identifiers(&self, identifiers: Vec<String>) -> Vec<String>;

    /// Runs a single change transaction deleting the given assets.
    fn perform_deletion(&self, identifiers: Vec<String>, completion: Arc<ChangeCompletion>);
}

/// The OS file-metadata indexer.
#[uniffi::export(with_foreign)]
pub trait MediaIndexer: Send + Sync {
    /// Queues a rescan of `path`. Must not block until the scan finishes.
    fn scan_file(&self, path: String);
}

/// Static device information.
#[uniffi::export(with_foreign)]
pub trait DeviceInfo: Send + Sync {
    /// Platform API level, e.g. Android's `SDK_INT`.
    fn sdk_int(&self) -> i64;

    /// Absolute path of the legacy public DCIM directory, if any.
    fn legacy_dcim_directory(&self) -> Option<String>;
}

/// Provider of the platform capabilities available on this host.
#[uniffi::export(with_foreign)]
pub trait MediaPlatform: Send + Sync {
    /// Authorization oracle, if the host has a managed photo library.
    fn authorization(&self) -> Option<Arc<dyn AuthorizationOracle>>;

    /// The managed photo library, if any.
    fn photo_library(&self) -> Option<Arc<dyn PhotoLibrary>>;

    /// The media indexer, if any.
    fn media_indexer(&self) -> Option<Arc<dyn MediaIndexer>>;

    /// Device information, if available.
    fn device_info(&self) -> Option<Arc<dyn DeviceInfo>>;
}
