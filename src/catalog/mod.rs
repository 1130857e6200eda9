mod compare;
mod filter;

use chrono::NaiveDate;
use gtk4::glib;
use once_cell::sync::Lazy;

use crate::LOG_DOMAIN;
use crate::categories::Category;
use crate::types::{Distribution, lowercase_cache};

pub(crate) use compare::{
    CompareSet, CompareToggle, ComparisonTable, MAX_COMPARE, build_comparison_table,
};
pub(crate) use filter::filter_distributions;

struct RawDistribution {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    logo: &'static str,
    rank: u32,
    rating: f64,
    downloads: &'static str,
    last_update: (i32, u32, u32),
    category: &'static str,
    popularity: u8,
    website: &'static str,
    package_type: &'static [&'static str],
    architecture: &'static [&'static str],
    based_on: &'static str,
    release_model: &'static str,
    features: &'static [&'static str],
}

mod generated {
    use super::RawDistribution;

    include!(concat!(env!("OUT_DIR"), "/catalog_data.rs"));
}

static CATALOG: Lazy<Vec<Distribution>> = Lazy::new(|| {
    generated::RAW_DISTRIBUTIONS
        .iter()
        .filter_map(Distribution::from_raw)
        .collect()
});

/// The full record set in declaration order.
pub(crate) fn catalog() -> &'static [Distribution] {
    CATALOG.as_slice()
}

pub(crate) fn distribution_by_id(id: &str) -> Option<&'static Distribution> {
    generated::DISTRIBUTION_INDEX
        .get(id)
        .and_then(|index| CATALOG.get(*index))
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Distribution {
    fn from_raw(raw: &RawDistribution) -> Option<Self> {
        let Some(category) = Category::from_label(raw.category) else {
            glib::g_warning!(
                LOG_DOMAIN,
                "Skipping catalog entry {} with unknown category {}",
                raw.id,
                raw.category
            );
            return None;
        };

        let (year, month, day) = raw.last_update;
        let last_update = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
            glib::g_warning!(
                LOG_DOMAIN,
                "Catalog entry {} has an invalid date {}-{}-{}",
                raw.id,
                year,
                month,
                day
            );
            NaiveDate::default()
        });

        Some(Self {
            id: raw.id.to_string(),
            name: raw.name.to_string(),
            description: raw.description.to_string(),
            logo: raw.logo.to_string(),
            rank: raw.rank,
            rating: raw.rating,
            downloads: raw.downloads.to_string(),
            last_update,
            category,
            popularity: raw.popularity,
            website: raw.website.to_string(),
            package_type: labels(raw.package_type),
            architecture: labels(raw.architecture),
            based_on: raw.based_on.to_string(),
            release_model: raw.release_model.to_string(),
            features: labels(raw.features),
            name_lower: lowercase_cache(raw.name),
            description_lower: lowercase_cache(raw.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_and_ranks_are_unique() {
        let records = catalog();
        assert!(!records.is_empty(), "expected compiled catalog entries");

        let ids: HashSet<&str> = records.iter().map(|d| d.id.as_str()).collect();
        let ranks: HashSet<u32> = records.iter().map(|d| d.rank).collect();
        assert_eq!(ids.len(), records.len());
        assert_eq!(ranks.len(), records.len());
        assert!(records.iter().all(|d| d.rank > 0));
    }

    #[test]
    fn catalog_values_stay_in_range() {
        for record in catalog() {
            assert!((0.0..=5.0).contains(&record.rating), "{}", record.name);
            assert!(record.popularity <= 100, "{}", record.name);
            assert_ne!(record.last_update, NaiveDate::default(), "{}", record.name);
            assert_eq!(&*record.name_lower, record.name.to_lowercase());
        }
    }

    #[test]
    fn lookup_by_id_matches_declaration_order() {
        for record in catalog() {
            let found = distribution_by_id(&record.id).expect("indexed id");
            assert_eq!(found.name, record.name);
        }
        assert!(distribution_by_id("missing").is_none());
    }

    #[test]
    fn ubuntu_is_the_first_desktop_entry() {
        let ubuntu = &catalog()[0];
        assert_eq!(ubuntu.name, "Ubuntu");
        assert_eq!(ubuntu.category, Category::Desktop);
        assert_eq!(ubuntu.last_update, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }
}
