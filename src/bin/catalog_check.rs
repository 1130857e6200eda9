use std::collections::{BTreeMap, HashSet};
use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const CATEGORY_NAMES: [&str; 5] = ["Desktop", "Server", "Advanced", "Beginner", "Gaming"];

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://[A-Za-z0-9.-]+\.[A-Za-z]{2,}(/\S*)?$").expect("valid regex"));

static DOWNLOADS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?[KMB]?\+?$").expect("valid regex"));

#[derive(Deserialize)]
struct CatalogFile {
    distributions: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct CatalogEntry {
    id: String,
    name: String,
    description: String,
    rank: u32,
    rating: f64,
    downloads: String,
    last_update: String,
    category: String,
    popularity: u8,
    website: String,
    package_type: Vec<String>,
    architecture: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CategoryCount {
    category: String,
    distributions: usize,
}

#[derive(Debug, Serialize)]
struct CheckSummary {
    path: String,
    total: usize,
    warnings: Vec<String>,
    categories: Vec<CategoryCount>,
}

fn main() -> Result<()> {
    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/distributions.json"));

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog: CatalogFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;

    let warnings = check_catalog(&catalog.distributions, Local::now().date_naive())?;
    let summary = CheckSummary {
        path: path.display().to_string(),
        total: catalog.distributions.len(),
        warnings,
        categories: count_categories(&catalog.distributions),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Hard failures bail; soft issues are returned as warnings.
fn check_catalog(entries: &[CatalogEntry], today: NaiveDate) -> Result<Vec<String>> {
    if entries.is_empty() {
        bail!("catalog has no distributions");
    }

    let mut ids = HashSet::new();
    let mut ranks = HashSet::new();
    let mut names = HashSet::new();
    let mut warnings = Vec::new();

    for entry in entries {
        let id = entry.id.as_str();
        if id.trim().is_empty() {
            bail!("entry {:?} has an empty id", entry.name);
        }
        if !ids.insert(id) {
            bail!("duplicate id '{id}'");
        }
        if entry.rank == 0 || !ranks.insert(entry.rank) {
            bail!("'{id}' has an invalid or duplicate rank {}", entry.rank);
        }
        if !names.insert(entry.name.to_lowercase()) {
            bail!("duplicate name '{}'", entry.name);
        }
        if !CATEGORY_NAMES.contains(&entry.category.as_str()) {
            bail!("'{id}' uses unknown category '{}'", entry.category);
        }
        if !(0.0..=5.0).contains(&entry.rating) {
            bail!("'{id}' has rating {} outside 0-5", entry.rating);
        }
        if entry.popularity > 100 {
            bail!("'{id}' has popularity {} above 100", entry.popularity);
        }

        let updated = NaiveDate::parse_from_str(&entry.last_update, "%Y-%m-%d")
            .with_context(|| format!("'{id}' has malformed last_update '{}'", entry.last_update))?;
        if updated > today {
            warnings.push(format!("'{id}' was last updated in the future ({updated})"));
        }

        if !URL_REGEX.is_match(&entry.website) {
            warnings.push(format!("'{id}' website '{}' is not an https URL", entry.website));
        }
        if !DOWNLOADS_REGEX.is_match(&entry.downloads) {
            warnings.push(format!(
                "'{id}' downloads '{}' is not a compact count",
                entry.downloads
            ));
        }
        if entry.description.trim().is_empty() {
            warnings.push(format!("'{id}' has no description"));
        }
        if entry.package_type.is_empty() || entry.architecture.is_empty() {
            warnings.push(format!("'{id}' lists no package types or architectures"));
        }
        if entry.features.is_empty() {
            warnings.push(format!("'{id}' lists no features"));
        }
    }

    Ok(warnings)
}

fn count_categories(entries: &[CatalogEntry]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = CATEGORY_NAMES.iter().map(|name| (*name, 0)).collect();
    for entry in entries {
        if let Some(count) = counts.get_mut(entry.category.as_str()) {
            *count += 1;
        }
    }
    counts
        .into_iter()
        .map(|(category, distributions)| CategoryCount {
            category: category.to_string(),
            distributions,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, rank: u32) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: "A distribution.".to_string(),
            rank,
            rating: 4.5,
            downloads: "1.2M".to_string(),
            last_update: "2024-01-15".to_string(),
            category: "Desktop".to_string(),
            popularity: 80,
            website: "https://example.org".to_string(),
            package_type: vec!["DEB".to_string()],
            architecture: vec!["x86_64".to_string()],
            features: vec!["LTS".to_string()],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn clean_catalog_has_no_warnings() {
        let entries = vec![entry("one", 1), entry("two", 2)];
        let warnings = check_catalog(&entries, today()).expect("valid catalog");
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn duplicates_are_rejected() {
        let entries = vec![entry("one", 1), entry("one", 2)];
        assert!(check_catalog(&entries, today()).is_err());

        let entries = vec![entry("one", 1), entry("two", 1)];
        assert!(check_catalog(&entries, today()).is_err());
    }

    #[test]
    fn ranges_and_categories_are_enforced() {
        let mut bad = entry("one", 1);
        bad.rating = 5.5;
        assert!(check_catalog(&[bad], today()).is_err());

        let mut bad = entry("one", 1);
        bad.category = "Embedded".to_string();
        assert!(check_catalog(&[bad], today()).is_err());

        let mut bad = entry("one", 1);
        bad.last_update = "15/01/2024".to_string();
        assert!(check_catalog(&[bad], today()).is_err());
    }

    #[test]
    fn soft_issues_become_warnings() {
        let mut odd = entry("one", 1);
        odd.website = "http://example.org".to_string();
        odd.downloads = "lots".to_string();
        odd.last_update = "2025-01-01".to_string();
        let warnings = check_catalog(&[odd], today()).expect("only warnings");
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn categories_are_counted_in_order() {
        let mut server = entry("two", 2);
        server.category = "Server".to_string();
        let counts = count_categories(&[entry("one", 1), server]);
        let names: Vec<&str> = counts.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["Advanced", "Beginner", "Desktop", "Gaming", "Server"]);
        assert_eq!(counts[2].distributions, 1);
        assert_eq!(counts[4].distributions, 1);
    }

    #[test]
    fn bundled_catalog_passes() {
        let raw = include_str!("../../data/distributions.json");
        let catalog: CatalogFile = serde_json::from_str(raw).expect("bundled catalog parses");
        assert!(check_catalog(&catalog.distributions, Local::now().date_naive()).is_ok());
    }
}
