//! Requests and records exchanged with the photo library.

use crate::{
    command::{string_arg, string_list_arg, Arguments},
    defaults::keys,
    error::MediaBridgeError,
};

/// Kind of media stored in an asset resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video.
    Video,
}

/// Creation of one asset from a file, sent to the photo library inside a
/// single write transaction.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct AssetCreationRequest {
    /// Absolute path of the file to import.
    pub source_path: String,
    /// Filename recorded as the resource's original filename.
    pub original_filename: String,
    /// Kind of the resource.
    pub kind: MediaKind,
}

/// A resource backing an asset, as reported by the photo library.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct AssetResource {
    /// Filename the resource was imported with.
    pub original_filename: String,
    /// Kind of the resource.
    pub kind: MediaKind,
}

/// A validated save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SaveRequest {
    pub source_path: String,
    pub display_name: String,
    pub kind: MediaKind,
}

impl SaveRequest {
    /// Builds a request, rejecting a missing path or filename.
    pub fn new(
        source_path: Option<String>,
        display_name: Option<String>,
        kind: MediaKind,
    ) -> Result<Self, MediaBridgeError> {
        match (source_path, display_name) {
            (Some(source_path), Some(display_name)) => Ok(Self {
                source_path,
                display_name,
                kind,
            }),
            _ => Err(MediaBridgeError::invalid_arguments(
                "Missing path or filename",
            )),
        }
    }

    pub fn from_arguments(arguments: &Arguments, kind: MediaKind) -> Result<Self, MediaBridgeError> {
        Self::new(
            string_arg(arguments, keys::PATH),
            string_arg(arguments, keys::FILENAME),
            kind,
        )
    }

    pub fn into_creation(self) -> AssetCreationRequest {
        AssetCreationRequest {
            source_path: self.source_path,
            original_filename: self.display_name,
            kind: self.kind,
        }
    }
}

/// A validated, non-empty set of asset identifiers to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeleteRequest {
    identifiers: Vec<String>,
}

impl DeleteRequest {
    /// Builds a request. Duplicates collapse, first occurrence wins.
    pub fn new(identifiers: Option<Vec<String>>) -> Result<Self, MediaBridgeError> {
        let Some(identifiers) = identifiers else {
            return Err(MediaBridgeError::invalid_arguments("Missing assetIds"));
        };
        let mut unique: Vec<String> = Vec::with_capacity(identifiers.len());
        for id in identifiers {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        if unique.is_empty() {
            return Err(MediaBridgeError::invalid_arguments("Empty assetIds"));
        }
        Ok(Self {
            identifiers: unique,
        })
    }

    pub fn from_arguments(arguments: &Arguments) -> Result<Self, MediaBridgeError> {
        Self::new(string_list_arg(arguments, keys::ASSET_IDS))
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}
