use std::path::Path;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::cache::DatasetCache;
use crate::data::filter::{FilterCriteria, default_criteria, filtered_indices};
use crate::data::model::ListingsDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Load-once cache; datasets are shared out of it by handle.
    pub cache: DatasetCache,

    /// Currently displayed dataset (None until a file loads).
    pub dataset: Option<Arc<ListingsDataset>>,

    /// Current sidebar selections.
    pub criteria: FilterCriteria,

    /// Indices of listings passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Room type → colour, rebuilt per dataset.
    pub color_map: Option<ColorMap>,

    /// Whether the raw filtered rows table is shown.
    pub show_raw_data: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cache: DatasetCache::default(),
            dataset: None,
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            color_map: None,
            show_raw_data: false,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Load a listings CSV through the cache and install it. Load errors
    /// become a status message; the previous dataset stays visible.
    pub fn load_path(&mut self, path: &Path, max_rows: Option<usize>) {
        self.loading = true;
        match self.cache.get_or_load(path, max_rows) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} listings from {} ({} room types, {} neighbourhoods)",
                    dataset.len(),
                    path.display(),
                    dataset.room_types.len(),
                    dataset.neighbourhoods.len()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    /// Install a dataset: reset criteria to the widget defaults, rebuild
    /// the colour map, and recompute the filtered view.
    pub fn set_dataset(&mut self, dataset: Arc<ListingsDataset>) {
        self.criteria = default_criteria(&dataset);
        self.color_map = Some(ColorMap::new(&dataset.room_types));
        self.dataset = Some(dataset);
        self.refilter();
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => filtered_indices(ds, &self.criteria),
            None => Vec::new(),
        };
    }

    /// Select every room type.
    pub fn select_all_room_types(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria.room_types = ds.room_types.iter().cloned().collect();
        }
        self.refilter();
    }

    /// Deselect every room type.
    pub fn select_no_room_types(&mut self) {
        self.criteria.room_types.clear();
        self.refilter();
    }

    /// Select every neighbourhood.
    pub fn select_all_neighbourhoods(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria.neighbourhoods = ds.neighbourhoods.iter().cloned().collect();
        }
        self.refilter();
    }

    /// Deselect every neighbourhood.
    pub fn select_no_neighbourhoods(&mut self) {
        self.criteria.neighbourhoods.clear();
        self.refilter();
    }
}
