use std::collections::BTreeSet;

use super::model::ListingsDataset;

// ---------------------------------------------------------------------------
// Filter criteria: what the sidebar widgets currently select
// ---------------------------------------------------------------------------

/// How many distinct room types the default selection takes.
pub const DEFAULT_ROOM_TYPE_COUNT: usize = 2;
/// How many distinct neighbourhoods the default selection takes.
pub const DEFAULT_NEIGHBOURHOOD_COUNT: usize = 30;
/// Default minimum nightly price.
pub const DEFAULT_MIN_PRICE: f64 = 600.0;
/// Default maximum nightly price.
pub const DEFAULT_MAX_PRICE: f64 = 3000.0;

/// The conjunction of selections the user made in the sidebar.
///
/// An empty set means "nothing selected" and yields an empty result, not
/// "no constraint". An inverted price range (min > max) also yields an
/// empty result; it is not treated as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub room_types: BTreeSet<String>,
    pub neighbourhoods: BTreeSet<String>,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            room_types: BTreeSet::new(),
            neighbourhoods: BTreeSet::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

/// Initial criteria for a freshly loaded dataset: the first
/// [`DEFAULT_ROOM_TYPE_COUNT`] room types and first
/// [`DEFAULT_NEIGHBOURHOOD_COUNT`] neighbourhoods in encounter order,
/// and the default price bounds clamped into the observed price range.
pub fn default_criteria(dataset: &ListingsDataset) -> FilterCriteria {
    let clamp = |price: f64| {
        if dataset.is_empty() {
            price
        } else {
            price.clamp(dataset.price_min, dataset.price_max)
        }
    };

    FilterCriteria {
        room_types: dataset
            .room_types
            .iter()
            .take(DEFAULT_ROOM_TYPE_COUNT)
            .cloned()
            .collect(),
        neighbourhoods: dataset
            .neighbourhoods
            .iter()
            .take(DEFAULT_NEIGHBOURHOOD_COUNT)
            .cloned()
            .collect(),
        min_price: clamp(DEFAULT_MIN_PRICE),
        max_price: clamp(DEFAULT_MAX_PRICE),
    }
}

/// Return indices of listings that pass all three predicates:
/// selected room type, selected neighbourhood, and price within
/// `[min_price, max_price]` (inclusive on both bounds).
pub fn filtered_indices(dataset: &ListingsDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .listings
        .iter()
        .enumerate()
        .filter(|(_, l)| {
            criteria.room_types.contains(&l.room_type)
                && criteria.neighbourhoods.contains(&l.neighbourhood)
                && l.price >= criteria.min_price
                && l.price <= criteria.max_price
        })
        .map(|(i, _)| i)
        .collect()
}
