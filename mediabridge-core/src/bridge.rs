//! The command dispatcher exposed to the application layer.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    asset::{DeleteRequest, SaveRequest},
    authorization::AuthorizationGate,
    command::{
        arguments_from_json, string_arg, ArgumentValue, Arguments, Command, CommandOutcome,
        CommandValue,
    },
    config::BridgeConfig,
    defaults::keys,
    error::{MediaBridgeError, MediaBridgeResult},
    indexer::IndexRefresher,
    platform::{DeviceInfo, MediaPlatform},
    remover::AssetRemover,
    resolver::AssetResolver,
    writer::AssetWriter,
    MediaKind,
};

/// Native media bridge answering one message channel.
///
/// Every command produces exactly one [`CommandOutcome`]. The bridge keeps no
/// state between commands; authorization is read from the OS on every save
/// or delete.
#[derive(uniffi::Object)]
pub struct MediaBridge {
    config: BridgeConfig,
    writer: Option<AssetWriter>,
    remover: Option<AssetRemover>,
    resolver: Option<AssetResolver>,
    refresher: Option<IndexRefresher>,
    device: Option<Arc<dyn DeviceInfo>>,
}

impl std::fmt::Debug for MediaBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaBridge")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MediaBridge {
    /// Wires the bridge to the capabilities `platform` provides.
    #[must_use]
    pub fn from_platform(config: BridgeConfig, platform: &dyn MediaPlatform) -> Self {
        let library = platform.photo_library();
        let authorization = platform.authorization();

        let (writer, remover) = match (&library, &authorization) {
            (Some(library), Some(oracle)) => (
                Some(AssetWriter::new(
                    AuthorizationGate::new(oracle.clone()),
                    library.clone(),
                )),
                Some(AssetRemover::new(
                    AuthorizationGate::new(oracle.clone()),
                    library.clone(),
                )),
            ),
            _ => (None, None),
        };

        Self {
            config,
            writer,
            remover,
            resolver: library.map(AssetResolver::new),
            refresher: platform.media_indexer().map(IndexRefresher::new),
            device: platform.device_info(),
        }
    }

    /// Runs `command` against an argument bundle.
    pub async fn dispatch(&self, command: Command, arguments: &Arguments) -> CommandOutcome {
        if !self.config.channel.serves(command) {
            log::debug!(
                "{command} is not served on {}",
                self.config.channel_name()
            );
            return CommandOutcome::NotImplemented;
        }
        log::debug!("dispatching {command} on {}", self.config.channel_name());

        match self.run(command, arguments).await {
            Err(MediaBridgeError::Unavailable { message }) => {
                log::debug!("{command} not implemented here: {message}");
                CommandOutcome::NotImplemented
            }
            result => result.into(),
        }
    }

    async fn run(
        &self,
        command: Command,
        arguments: &Arguments,
    ) -> MediaBridgeResult<CommandValue> {
        match command {
            Command::ScanFile => self
                .refresher()?
                .rescan(string_arg(arguments, keys::PATH))
                .map(CommandValue::from),
            Command::SaveImage => self.save(arguments, MediaKind::Image).await,
            Command::SaveVideo => self.save(arguments, MediaKind::Video).await,
            Command::GetOriginalFilename => {
                let resolver = self.resolver()?;
                let asset_id = string_arg(arguments, keys::ASSET_ID)
                    .ok_or_else(|| MediaBridgeError::invalid_arguments("Missing assetId"))?;
                Ok(resolver.original_filename(&asset_id).into())
            }
            Command::DeleteAssets => {
                let remover = self.remover()?;
                let request = DeleteRequest::from_arguments(arguments)?;
                remover.delete(request).await.map(CommandValue::from)
            }
            Command::GetSdkInt => Ok(self.device()?.sdk_int().into()),
            Command::GetLegacyDcim => Ok(self.device()?.legacy_dcim_directory().into()),
        }
    }

    async fn save(
        &self,
        arguments: &Arguments,
        kind: MediaKind,
    ) -> MediaBridgeResult<CommandValue> {
        let writer = self.writer()?;
        let request = SaveRequest::from_arguments(arguments, kind)?;
        writer.save(request).await.map(CommandValue::from)
    }

    fn writer(&self) -> MediaBridgeResult<&AssetWriter> {
        self.writer.as_ref().ok_or_else(|| unavailable("photo library"))
    }

    fn remover(&self) -> MediaBridgeResult<&AssetRemover> {
        self.remover.as_ref().ok_or_else(|| unavailable("photo library"))
    }

    fn resolver(&self) -> MediaBridgeResult<&AssetResolver> {
        self.resolver.as_ref().ok_or_else(|| unavailable("photo library"))
    }

    fn refresher(&self) -> MediaBridgeResult<&IndexRefresher> {
        self.refresher.as_ref().ok_or_else(|| unavailable("media indexer"))
    }

    fn device(&self) -> MediaBridgeResult<&Arc<dyn DeviceInfo>> {
        self.device.as_ref().ok_or_else(|| unavailable("device info"))
    }
}

fn unavailable(capability: &str) -> MediaBridgeError {
    MediaBridgeError::Unavailable {
        message: format!("{capability} not provided by this host"),
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl MediaBridge {
    /// Creates a bridge from the host's platform capabilities.
    #[uniffi::constructor]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(config: BridgeConfig, platform: Arc<dyn MediaPlatform>) -> Self {
        Self::from_platform(config, platform.as_ref())
    }

    /// Full name of the channel this bridge answers on.
    #[must_use]
    pub fn channel_name(&self) -> String {
        self.config.channel_name()
    }

    /// Handles a command received from the transport.
    ///
    /// Unknown command names, and commands this host cannot serve, yield
    /// [`CommandOutcome::NotImplemented`].
    pub async fn invoke(
        &self,
        command: String,
        arguments: HashMap<String, ArgumentValue>,
    ) -> CommandOutcome {
        let Some(command) = Command::from_name(&command) else {
            log::debug!("unknown command {command}");
            return CommandOutcome::NotImplemented;
        };
        self.dispatch(command, &arguments).await
    }

    /// Like [`MediaBridge::invoke`] for transports that speak JSON.
    ///
    /// `arguments_json` must be a JSON object; the result is the JSON form of
    /// the [`CommandOutcome`].
    pub async fn invoke_json(&self, command: String, arguments_json: String) -> String {
        self.invoke(command, arguments_from_json(&arguments_json))
            .await
            .to_json()
    }

    /// Saves an image and returns the new asset's identifier.
    ///
    /// # Errors
    /// `NoPermission` if access is refused, `SaveFailed` if the library rejects
    /// the write, `Unavailable` if the host has no photo library.
    pub async fn save_image(&self, path: String, filename: String) -> MediaBridgeResult<String> {
        let request = SaveRequest::new(Some(path), Some(filename), MediaKind::Image)?;
        self.writer()?.save(request).await
    }

    /// Saves a video and returns the new asset's identifier.
    ///
    /// # Errors
    /// See [`MediaBridge::save_image`].
    pub async fn save_video(&self, path: String, filename: String) -> MediaBridgeResult<String> {
        let request = SaveRequest::new(Some(path), Some(filename), MediaKind::Video)?;
        self.writer()?.save(request).await
    }

    /// Original filename of an asset, `None` if the asset does not exist.
    ///
    /// # Errors
    /// `Unavailable` if the host has no photo library.
    pub fn original_filename(&self, asset_id: String) -> MediaBridgeResult<Option<String>> {
        Ok(self.resolver()?.original_filename(&asset_id))
    }

    /// Deletes assets. Unknown identifiers are ignored.
    ///
    /// # Errors
    /// `InvalidArguments` for an empty list, `NoPermission` if access is
    /// refused, `DeleteFailed` if the library rejects the deletion.
    pub async fn delete_assets(&self, asset_ids: Vec<String>) -> MediaBridgeResult<bool> {
        let request = DeleteRequest::new(Some(asset_ids))?;
        self.remover()?.delete(request).await
    }

    /// Requests a rescan of `path` by the OS media indexer.
    ///
    /// # Errors
    /// `Unavailable` if the host has no media indexer.
    pub fn scan_file(&self, path: String) -> MediaBridgeResult<bool> {
        self.refresher()?.rescan(Some(path))
    }

    /// Platform version number.
    ///
    /// # Errors
    /// `Unavailable` if the host provides no device information.
    pub fn sdk_int(&self) -> MediaBridgeResult<i64> {
        Ok(self.device()?.sdk_int())
    }

    /// Legacy public DCIM directory, if the platform has one.
    ///
    /// # Errors
    /// `Unavailable` if the host provides no device information.
    pub fn legacy_dcim(&self) -> MediaBridgeResult<Option<String>> {
        Ok(self.device()?.legacy_dcim_directory())
    }
}
