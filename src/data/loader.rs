use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Listing, ListingsDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Columns that must be present (after lowercasing) for a file to load.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "name",
    "host_id",
    "host_name",
    "neighbourhood",
    "latitude",
    "longitude",
    "room_type",
    "price",
    "minimum_nights",
    "number_of_reviews",
    "last_review",
    "reviews_per_month",
    "calculated_host_listings_count",
    "availability_365",
];

/// The `last_review` column format, e.g. `2020-03-14`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors the loader detects itself (beyond I/O and CSV syntax).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}: '{value}' is not a %Y-%m-%d date")]
    InvalidDate { row: usize, value: String },
}

/// Load a listings dataset from a CSV file.
///
/// `max_rows` bounds the number of data rows *read* (before incomplete
/// rows are dropped), mirroring a head-of-file preview load.
pub fn load_file(path: &Path, max_rows: Option<usize>) -> Result<ListingsDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    from_reader(file, max_rows).with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One CSV row with every field optional. An empty cell deserializes to
/// `None`; a row with any `None` among the retained columns is dropped.
/// Columns not named here (`neighbourhood_group`) are discarded.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: Option<i64>,
    name: Option<String>,
    host_id: Option<i64>,
    host_name: Option<String>,
    neighbourhood: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    room_type: Option<String>,
    price: Option<f64>,
    minimum_nights: Option<i64>,
    number_of_reviews: Option<i64>,
    last_review: Option<String>,
    reviews_per_month: Option<f64>,
    calculated_host_listings_count: Option<i64>,
    availability_365: Option<i64>,
}

/// Parse a listings CSV from any reader.
///
/// Header names are lowercased first, so `NAME` and `name` are the same
/// column. Every column in [`REQUIRED_COLUMNS`] must be present or the
/// load fails with [`DatasetError::MissingColumn`] — no partial table is
/// returned.
pub fn from_reader<R: Read>(reader: R, max_rows: Option<usize>) -> Result<ListingsDataset> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers: csv::StringRecord = rdr
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *col) {
            return Err(DatasetError::MissingColumn(col.to_string()).into());
        }
    }
    rdr.set_headers(headers);

    let mut listings = Vec::new();
    for (row_no, result) in rdr.deserialize::<RawRecord>().enumerate() {
        if let Some(limit) = max_rows {
            if row_no >= limit {
                break;
            }
        }
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        if let Some(listing) = complete_row(raw, row_no)? {
            listings.push(listing);
        }
    }

    Ok(ListingsDataset::from_listings(listings))
}

/// Turn a raw row into a [`Listing`], or `None` when any retained field
/// is missing. Incomplete rows are dropped before the date is parsed; a
/// complete row whose `last_review` fails to parse is a load error, not
/// a missing value: the file is malformed.
fn complete_row(raw: RawRecord, row: usize) -> Result<Option<Listing>> {
    let last_review = raw.last_review.filter(|s| !s.is_empty());

    let (
        Some(id),
        Some(name),
        Some(host_id),
        Some(host_name),
        Some(neighbourhood),
        Some(latitude),
        Some(longitude),
        Some(room_type),
        Some(price),
        Some(minimum_nights),
        Some(number_of_reviews),
        Some(last_review),
        Some(reviews_per_month),
        Some(calculated_host_listings_count),
        Some(availability_365),
    ) = (
        raw.id,
        raw.name,
        raw.host_id,
        raw.host_name,
        raw.neighbourhood,
        raw.latitude,
        raw.longitude,
        raw.room_type,
        raw.price,
        raw.minimum_nights,
        raw.number_of_reviews,
        last_review,
        raw.reviews_per_month,
        raw.calculated_host_listings_count,
        raw.availability_365,
    )
    else {
        return Ok(None);
    };

    let last_review = NaiveDate::parse_from_str(&last_review, DATE_FORMAT).map_err(|_| {
        DatasetError::InvalidDate {
            row,
            value: last_review.clone(),
        }
    })?;

    Ok(Some(Listing {
        id,
        name,
        host_id,
        host_name,
        neighbourhood,
        latitude,
        longitude,
        room_type,
        price,
        minimum_nights,
        number_of_reviews,
        last_review,
        reviews_per_month,
        calculated_host_listings_count,
        availability_365,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Uppercase NAME checks header lowercasing; row 13 has no reviews
    // (empty last_review / reviews_per_month) and is dropped.
    const SAMPLE: &str = "\
id,NAME,host_id,host_name,neighbourhood_group,neighbourhood,latitude,longitude,room_type,price,minimum_nights,number_of_reviews,last_review,reviews_per_month,calculated_host_listings_count,availability_365
11,Beach flat,501,Amy,,Bondi,-33.8908,151.2743,Entire home/apt,250,2,48,2020-02-14,1.20,1,180
13,No reviews yet,503,Cat,,Bondi,-33.8915,151.2767,Entire home/apt,310,3,0,,,1,365
12,Harbour room,502,Ben,,Manly,-33.7969,151.2840,Private room,95,1,12,2019-11-30,0.45,2,300
";

    #[test]
    fn loads_complete_rows_and_drops_incomplete_ones() {
        let ds = from_reader(SAMPLE.as_bytes(), None).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.listings[0].name, "Beach flat");
        assert_eq!(ds.listings[1].name, "Harbour room");
        assert_eq!(ds.room_types, vec!["Entire home/apt", "Private room"]);
    }

    #[test]
    fn parses_last_review_as_a_date() {
        let ds = from_reader(SAMPLE.as_bytes(), None).unwrap();
        assert_eq!(
            ds.listings[0].last_review,
            NaiveDate::from_ymd_opt(2020, 2, 14).unwrap()
        );
    }

    #[test]
    fn missing_last_review_column_fails_the_load() {
        let csv = "\
id,name,host_id,host_name,neighbourhood,latitude,longitude,room_type,price,minimum_nights,number_of_reviews,reviews_per_month,calculated_host_listings_count,availability_365
11,Beach flat,501,Amy,Bondi,-33.8908,151.2743,Entire home/apt,250,2,48,1.20,1,180
";
        let err = from_reader(csv.as_bytes(), None).unwrap_err();
        match err.downcast_ref::<DatasetError>() {
            Some(DatasetError::MissingColumn(col)) => assert_eq!(col, "last_review"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_fails_the_load() {
        let csv = "\
id,name,host_id,host_name,neighbourhood,latitude,longitude,room_type,price,minimum_nights,number_of_reviews,last_review,reviews_per_month,calculated_host_listings_count,availability_365
11,Beach flat,501,Amy,Bondi,-33.8908,151.2743,Entire home/apt,250,2,48,14/02/2020,1.20,1,180
";
        let err = from_reader(csv.as_bytes(), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::InvalidDate { row: 0, .. })
        ));
    }

    #[test]
    fn max_rows_bounds_rows_read_before_dropping() {
        // Rows read: Beach flat, No reviews yet (dropped), Harbour room.
        let ds = from_reader(SAMPLE.as_bytes(), Some(3)).unwrap();
        assert_eq!(ds.len(), 2);

        let ds = from_reader(SAMPLE.as_bytes(), Some(2)).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.listings[0].name, "Beach flat");
    }

    #[test]
    fn incomplete_row_is_dropped_before_its_date_is_parsed() {
        let csv = "\
id,name,host_id,host_name,neighbourhood,latitude,longitude,room_type,price,minimum_nights,number_of_reviews,last_review,reviews_per_month,calculated_host_listings_count,availability_365
11,Beach flat,501,Amy,Bondi,-33.8908,151.2743,Entire home/apt,,2,48,not-a-date,1.20,1,180
";
        let ds = from_reader(csv.as_bytes(), None).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn empty_cell_in_any_retained_column_drops_the_row() {
        let csv = "\
id,name,host_id,host_name,neighbourhood,latitude,longitude,room_type,price,minimum_nights,number_of_reviews,last_review,reviews_per_month,calculated_host_listings_count,availability_365
11,,501,Amy,Bondi,-33.8908,151.2743,Entire home/apt,250,2,48,2020-02-14,1.20,1,180
12,Harbour room,502,Ben,Manly,-33.7969,151.2840,Private room,,1,12,2019-11-30,0.45,2,300
";
        let ds = from_reader(csv.as_bytes(), None).unwrap();
        assert!(ds.is_empty());
    }
}
