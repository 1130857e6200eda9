use chrono::NaiveDate;
use std::sync::Arc;

use crate::categories::Category;

#[derive(Clone, Debug)]
pub struct Distribution {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub rank: u32,
    pub rating: f64,
    pub downloads: String,
    pub last_update: NaiveDate,
    pub category: Category,
    pub popularity: u8,
    pub website: String,
    pub package_type: Vec<String>,
    pub architecture: Vec<String>,
    pub based_on: String,
    pub release_model: String,
    pub features: Vec<String>,
    pub name_lower: Arc<str>,
    pub description_lower: Arc<str>,
}

pub(crate) fn lowercase_cache(value: &str) -> Arc<str> {
    if value.is_empty() {
        Arc::<str>::from("")
    } else {
        Arc::<str>::from(value.to_lowercase())
    }
}

#[cfg(test)]
impl Distribution {
    pub(crate) fn sample(id: &str, name: &str, description: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            logo: String::new(),
            rank: id.parse().unwrap_or(1),
            rating: 4.0,
            downloads: "1M+".to_string(),
            last_update: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            category,
            popularity: 50,
            website: format!("https://example.org/{id}"),
            package_type: vec!["DEB".to_string()],
            architecture: vec!["x86_64".to_string()],
            based_on: "Independent".to_string(),
            release_model: "Rolling".to_string(),
            features: Vec::new(),
            name_lower: lowercase_cache(name),
            description_lower: lowercase_cache(description),
        }
    }
}
