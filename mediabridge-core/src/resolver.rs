use std::sync::Arc;

use crate::platform::PhotoLibrary;

/// Looks up the original filename an asset was imported with.
pub(crate) struct AssetResolver {
    library: Arc<dyn PhotoLibrary>,
}

impl AssetResolver {
    pub fn new(library: Arc<dyn PhotoLibrary>) -> Self {
        Self { library }
    }

    /// Filename of the asset's first resource. Unknown assets and assets
    /// without resources yield `None`.
    pub fn original_filename(&self, identifier: &str) -> Option<String> {
        self.library
            .fetch_resources(identifier.to_string())?
            .into_iter()
            .next()
            .map(|resource| resource.original_filename)
    }
}
