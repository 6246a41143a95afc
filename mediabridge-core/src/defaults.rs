/// Application identifier the channel names are namespaced under.
pub static DEFAULT_APP_ID: &str = "com.atp.PhotoTagger";

/// Channel suffix of the media scan channel (Android host).
pub static MEDIA_SCAN_SUFFIX: &str = "media_scan";

/// Channel suffix of the media saver channel (iOS host).
pub static MEDIA_SAVER_SUFFIX: &str = "ios_media_saver";

/// Channel suffix when a single channel serves every command.
pub static UNIFIED_SUFFIX: &str = "media";

/// Argument keys of the command bundle.
pub mod keys {
    pub static PATH: &str = "path";
    pub static FILENAME: &str = "filename";
    pub static ASSET_ID: &str = "assetId";
    pub static ASSET_IDS: &str = "assetIds";
}
