use std::sync::Arc;

use crate::{error::MediaBridgeError, platform::MediaIndexer};

/// Asks the OS indexer to pick up a file written outside the photo library.
pub(crate) struct IndexRefresher {
    indexer: Arc<dyn MediaIndexer>,
}

impl IndexRefresher {
    pub fn new(indexer: Arc<dyn MediaIndexer>) -> Self {
        Self { indexer }
    }

    /// `true` means the rescan was requested, not that it finished.
    pub fn rescan(&self, path: Option<String>) -> Result<bool, MediaBridgeError> {
        let path = path.ok_or_else(|| MediaBridgeError::InvalidPath {
            message: "path is null".to_string(),
        })?;
        log::debug!("requesting media rescan of {path}");
        self.indexer.scan_file(path);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::MemoryIndexer;

    #[test]
    fn test_rescan() {
        let indexer = Arc::new(MemoryIndexer::new());
        let refresher = IndexRefresher::new(indexer.clone());
        assert!(refresher.rescan(Some("/sdcard/DCIM/a.jpg".to_string())).unwrap());
        assert_eq!(indexer.scanned(), vec!["/sdcard/DCIM/a.jpg".to_string()]);
    }

    #[test]
    fn test_missing_path() {
        let indexer = Arc::new(MemoryIndexer::new());
        let refresher = IndexRefresher::new(indexer.clone());
        let err = refresher.rescan(None).unwrap_err();
        assert_eq!(err.code(), "INVALID_PATH");
        assert!(indexer.scanned().is_empty());
    }
}
