#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
//! Native media bridge for PhotoTagger.
//!
//! The application layer talks to this crate through a command surface
//! (`scanFile`, `saveImage`, `saveVideo`, `getOriginalFilename`,
//! `deleteAssets`, `getSdkInt`, `getLegacyDcim`). The platform's photo library,
//! permission prompt and media indexer are provided by the host app through
//! the foreign traits in [`platform`].
//!
//! ```rust,ignore
//! let bridge = MediaBridge::from_platform(BridgeConfig::default(), platform);
//! let outcome = bridge.invoke("saveImage".to_string(), arguments).await;
//! ```

mod error;
pub use error::*;

mod config;
pub use config::*;

mod command;
pub use command::*;

mod asset;
pub use asset::*;

mod authorization;
pub use authorization::*;

mod completion;
pub use completion::*;

mod bridge;
pub use bridge::*;

/// Platform capabilities implemented by the host application.
pub mod platform;

/// Forwarding of crate logs to a foreign logger.
pub mod logger;

// private modules
mod defaults;
mod indexer;
mod remover;
mod resolver;
mod writer;

uniffi::setup_scaffolding!("mediabridge_core");
