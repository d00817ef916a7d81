use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Listing – one row of the dataset
// ---------------------------------------------------------------------------

/// A single Airbnb listing (one row of the source CSV).
///
/// Every field is mandatory: rows with a missing value in any retained
/// column are dropped at load time, so downstream code never sees a
/// partial listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub host_id: i64,
    pub host_name: String,
    pub neighbourhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub room_type: String,
    pub price: f64,
    pub minimum_nights: i64,
    pub number_of_reviews: i64,
    pub last_review: NaiveDate,
    pub reviews_per_month: f64,
    pub calculated_host_listings_count: i64,
    pub availability_365: i64,
}

// ---------------------------------------------------------------------------
// ListingsDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed column summaries.
///
/// Immutable after construction; the UI shares it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ListingsDataset {
    /// All listings (rows).
    pub listings: Vec<Listing>,
    /// Distinct room types in first-encounter order.
    pub room_types: Vec<String>,
    /// Distinct neighbourhoods in first-encounter order.
    pub neighbourhoods: Vec<String>,
    /// Lowest price among the loaded listings (0 when empty).
    pub price_min: f64,
    /// Highest price among the loaded listings (0 when empty).
    pub price_max: f64,
}

impl ListingsDataset {
    /// Build column summaries from the loaded listings.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let room_types = distinct_in_order(listings.iter().map(|l| l.room_type.as_str()));
        let neighbourhoods = distinct_in_order(listings.iter().map(|l| l.neighbourhood.as_str()));

        let (price_min, price_max) = if listings.is_empty() {
            (0.0, 0.0)
        } else {
            listings
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), l| {
                    (lo.min(l.price), hi.max(l.price))
                })
        };

        ListingsDataset {
            listings,
            room_types,
            neighbourhoods,
            price_min,
            price_max,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Distinct values in the order they first appear. The sidebar widgets
/// list options (and pick their defaults) in this order.
fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}
