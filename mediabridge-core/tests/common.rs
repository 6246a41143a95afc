//! Common test utilities shared across integration tests.

#![allow(dead_code, missing_docs)]

use std::collections::HashMap;
use std::sync::Arc;

use mediabridge_core::platform::memory::{MemoryAuthorization, MemoryPhotoLibrary, MemoryPlatform};
use mediabridge_core::{
    ArgumentValue, AuthorizationStatus, BridgeConfig, CommandOutcome, CommandValue, MediaBridge,
    MediaChannel,
};

pub fn args(pairs: &[(&str, ArgumentValue)]) -> HashMap<String, ArgumentValue> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

pub fn text(value: &str) -> ArgumentValue {
    ArgumentValue::Text(value.to_string())
}

pub fn ids(values: &[&str]) -> ArgumentValue {
    ArgumentValue::TextList(values.iter().map(ToString::to_string).collect())
}

/// An iOS-like host: photo library on the media saver channel.
pub struct SaverHost {
    pub platform: MemoryPlatform,
    pub bridge: MediaBridge,
}

impl SaverHost {
    pub fn new(authorization: MemoryAuthorization, library: MemoryPhotoLibrary) -> Self {
        let platform = MemoryPlatform::with_library(authorization, library);
        let bridge = MediaBridge::from_platform(
            BridgeConfig::for_channel(MediaChannel::MediaSaver),
            &platform,
        );
        Self { platform, bridge }
    }

    pub fn authorized() -> Self {
        Self::new(
            MemoryAuthorization::new(AuthorizationStatus::Authorized),
            MemoryPhotoLibrary::new(),
        )
    }

    pub fn library(&self) -> &Arc<MemoryPhotoLibrary> {
        self.platform.library.as_ref().expect("library")
    }

    pub fn authorization(&self) -> &Arc<MemoryAuthorization> {
        self.platform.authorization.as_ref().expect("authorization")
    }
}

pub fn success(value: CommandValue) -> CommandOutcome {
    CommandOutcome::Success { value }
}

pub fn failure_code(outcome: &CommandOutcome) -> Option<&str> {
    match outcome {
        CommandOutcome::Failure { code, .. } => Some(code),
        _ => None,
    }
}
