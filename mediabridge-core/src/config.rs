use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{
    defaults::{DEFAULT_APP_ID, MEDIA_SAVER_SUFFIX, MEDIA_SCAN_SUFFIX, UNIFIED_SUFFIX},
    error::ConfigError,
    Command,
};

/// The message channel a bridge is registered on.
///
/// Each host registers the commands it can serve on its own channel: the
/// Android host rescans files and reports device information, the iOS host
/// owns the photo library.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    uniffi::Enum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MediaChannel {
    /// `scanFile`, `getSdkInt`, `getLegacyDcim`.
    MediaScan,
    /// `saveImage`, `saveVideo`, `getOriginalFilename`, `deleteAssets`.
    MediaSaver,
    /// Every command.
    #[default]
    Unified,
}

impl MediaChannel {
    /// Channel name suffix appended to the application identifier.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::MediaScan => MEDIA_SCAN_SUFFIX,
            Self::MediaSaver => MEDIA_SAVER_SUFFIX,
            Self::Unified => UNIFIED_SUFFIX,
        }
    }

    /// Whether `command` is answered on this channel.
    #[must_use]
    pub const fn serves(self, command: Command) -> bool {
        match self {
            Self::Unified => true,
            Self::MediaScan => matches!(
                command,
                Command::ScanFile | Command::GetSdkInt | Command::GetLegacyDcim
            ),
            Self::MediaSaver => matches!(
                command,
                Command::SaveImage
                    | Command::SaveVideo
                    | Command::GetOriginalFilename
                    | Command::DeleteAssets
            ),
        }
    }
}

/// Configuration of a [`crate::MediaBridge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct BridgeConfig {
    /// Reverse-DNS identifier of the application, e.g. `com.atp.PhotoTagger`.
    pub app_id: String,
    /// Channel the bridge answers on.
    pub channel: MediaChannel,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.to_string(),
            channel: MediaChannel::default(),
        }
    }
}

impl BridgeConfig {
    /// Default configuration for `channel`.
    #[must_use]
    pub fn for_channel(channel: MediaChannel) -> Self {
        Self {
            channel,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for malformed JSON and
    /// [`ConfigError::EmptyAppId`] if `app_id` is blank.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if config.app_id.trim().is_empty() {
            return Err(ConfigError::EmptyAppId);
        }
        Ok(config)
    }

    /// Full channel name, e.g. `com.atp.PhotoTagger/ios_media_saver`.
    #[must_use]
    pub fn channel_name(&self) -> String {
        format!("{}/{}", self.app_id, self.channel.suffix())
    }
}

/// Parses a [`BridgeConfig`] from JSON.
///
/// # Errors
/// See [`BridgeConfig::from_json`].
#[uniffi::export]
pub fn bridge_config_from_json(json: &str) -> Result<BridgeConfig, ConfigError> {
    BridgeConfig::from_json(json)
}

/// Full channel name of `config`.
#[uniffi::export]
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn bridge_channel_name(config: BridgeConfig) -> String {
    config.channel_name()
}
