use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use super::loader;
use super::model::ListingsDataset;

// ---------------------------------------------------------------------------
// Load-once dataset cache
// ---------------------------------------------------------------------------

/// Explicit load-once cache keyed by (path, row limit).
///
/// The first request for a key loads the file; later requests hand back
/// the same `Arc` handle. Datasets are immutable after load, so handles
/// can be shared freely between consumers.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<(PathBuf, Option<usize>), Arc<ListingsDataset>>,
}

impl DatasetCache {
    /// Fetch the dataset for `path`, loading it on the first request.
    /// Load failures are not cached; a retry re-reads the file.
    pub fn get_or_load(
        &mut self,
        path: &Path,
        max_rows: Option<usize>,
    ) -> Result<Arc<ListingsDataset>> {
        let key = (path.to_path_buf(), max_rows);
        if let Some(dataset) = self.entries.get(&key) {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(loader::load_file(path, max_rows)?);
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }
}
