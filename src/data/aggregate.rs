use std::collections::BTreeMap;

use super::model::ListingsDataset;

// ---------------------------------------------------------------------------
// Group counts for the bar chart
// ---------------------------------------------------------------------------

/// Count of listings sharing one (neighbourhood, room type) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub neighbourhood: String,
    pub room_type: String,
    pub count: usize,
}

/// Count the given listings grouped by (neighbourhood, room type).
///
/// Output order carries no meaning; the chart orders neighbourhoods via
/// [`neighbourhoods_by_total`]. An empty selection yields an empty list.
pub fn count_by_group(dataset: &ListingsDataset, indices: &[usize]) -> Vec<GroupCount> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for &i in indices {
        let l = &dataset.listings[i];
        *counts
            .entry((l.neighbourhood.as_str(), l.room_type.as_str()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((neighbourhood, room_type), count)| GroupCount {
            neighbourhood: neighbourhood.to_string(),
            room_type: room_type.to_string(),
            count,
        })
        .collect()
}

/// Neighbourhood names ordered by descending total count, ties broken by
/// name so the chart layout is stable frame to frame.
pub fn neighbourhoods_by_total(groups: &[GroupCount]) -> Vec<String> {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for g in groups {
        *totals.entry(g.neighbourhood.as_str()).or_insert(0) += g.count;
    }

    let mut hoods: Vec<(&str, usize)> = totals.into_iter().collect();
    hoods.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    hoods.into_iter().map(|(name, _)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Listing;
    use chrono::NaiveDate;

    fn listing(id: i64, room_type: &str, neighbourhood: &str, price: f64) -> Listing {
        Listing {
            id,
            name: format!("Listing {id}"),
            host_id: 1,
            host_name: "Host".to_string(),
            neighbourhood: neighbourhood.to_string(),
            latitude: -33.87,
            longitude: 151.21,
            room_type: room_type.to_string(),
            price,
            minimum_nights: 1,
            number_of_reviews: 10,
            last_review: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            reviews_per_month: 1.2,
            calculated_host_listings_count: 1,
            availability_365: 200,
        }
    }

    fn sample_dataset() -> ListingsDataset {
        ListingsDataset::from_listings(vec![
            listing(1, "Entire home", "Bondi", 100.0),
            listing(2, "Entire home", "Bondi", 5000.0),
            listing(3, "Private room", "Manly", 80.0),
        ])
    }

    #[test]
    fn counts_each_neighbourhood_room_type_pair() {
        let ds = sample_dataset();
        let all: Vec<usize> = (0..ds.len()).collect();
        let mut groups = count_by_group(&ds, &all);
        groups.sort_by(|a, b| {
            (a.neighbourhood.as_str(), a.room_type.as_str())
                .cmp(&(b.neighbourhood.as_str(), b.room_type.as_str()))
        });

        assert_eq!(
            groups,
            vec![
                GroupCount {
                    neighbourhood: "Bondi".to_string(),
                    room_type: "Entire home".to_string(),
                    count: 2,
                },
                GroupCount {
                    neighbourhood: "Manly".to_string(),
                    room_type: "Private room".to_string(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn total_count_is_preserved() {
        let ds = sample_dataset();
        let all: Vec<usize> = (0..ds.len()).collect();
        let groups = count_by_group(&ds, &all);
        let total: usize = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, all.len());
    }

    #[test]
    fn empty_selection_yields_no_groups() {
        let ds = sample_dataset();
        assert!(count_by_group(&ds, &[]).is_empty());
        assert!(neighbourhoods_by_total(&[]).is_empty());
    }

    #[test]
    fn neighbourhoods_sort_by_descending_total_then_name() {
        let ds = ListingsDataset::from_listings(vec![
            listing(1, "Entire home", "Manly", 100.0),
            listing(2, "Private room", "Manly", 90.0),
            listing(3, "Entire home", "Bondi", 120.0),
            listing(4, "Entire home", "Newtown", 80.0),
            listing(5, "Private room", "Newtown", 85.0),
        ]);
        let all: Vec<usize> = (0..ds.len()).collect();
        let groups = count_by_group(&ds, &all);
        assert_eq!(neighbourhoods_by_total(&groups), vec!["Manly", "Newtown", "Bondi"]);
    }
}
