/// Data layer: core types, loading, caching, filtering, aggregation.
///
/// Architecture:
/// ```text
///  listings .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  lowercase headers, drop incomplete rows → ListingsDataset
///   └──────────┘
///        │            (load-once per (path, row limit) via cache)
///        ▼
///   ┌────────────────┐
///   │ ListingsDataset │  Vec<Listing>, distinct room types / neighbourhoods
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌───────────┐
///   │  filter   │ ───▶ │ aggregate │  visible indices → per-group counts
///   └──────────┘      └───────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
