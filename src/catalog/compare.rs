use crate::helpers::{format_popularity, format_rating, format_release_date};
use crate::types::Distribution;

pub(crate) const MAX_COMPARE: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CompareToggle {
    Added,
    Removed,
    /// The set already holds `MAX_COMPARE` members; nothing changed.
    Full,
}

/// Ordered set of record ids picked for comparison, capped at `MAX_COMPARE`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct CompareSet {
    ids: Vec<String>,
}

impl CompareSet {
    pub(crate) fn toggle(&mut self, id: &str) -> CompareToggle {
        if let Some(position) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(position);
            return CompareToggle::Removed;
        }

        if self.is_full() {
            return CompareToggle::Full;
        }

        self.ids.push(id.to_string());
        CompareToggle::Added
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub(crate) fn ids(&self) -> &[String] {
        &self.ids
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ComparisonRow {
    pub(crate) label: &'static str,
    pub(crate) values: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ComparisonTable {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<ComparisonRow>,
}

#[cfg(test)]
impl ComparisonTable {
    pub(crate) fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

type Cell = fn(&Distribution) -> String;

const COMPARISON_FIELDS: &[(&str, Cell)] = &[
    ("Rank", |d: &Distribution| format!("#{}", d.rank)),
    ("Rating", |d: &Distribution| format_rating(d.rating)),
    ("Downloads", |d: &Distribution| d.downloads.clone()),
    ("Last update", |d: &Distribution| format_release_date(d.last_update)),
    ("Category", |d: &Distribution| d.category.label().to_string()),
    ("Popularity", |d: &Distribution| format_popularity(d.popularity)),
    ("Package type", |d: &Distribution| d.package_type.join(", ")),
    ("Architecture", |d: &Distribution| d.architecture.join(", ")),
    ("Based on", |d: &Distribution| d.based_on.clone()),
    ("Release model", |d: &Distribution| d.release_model.clone()),
    ("Features", |d: &Distribution| d.features.join("\n")),
    ("Website", |d: &Distribution| d.website.clone()),
];

/// One column per compared record, in selection order.
pub(crate) fn build_comparison_table(records: &[&Distribution]) -> ComparisonTable {
    let columns = records.iter().map(|d| d.name.clone()).collect();
    let rows = COMPARISON_FIELDS
        .iter()
        .map(|(label, cell)| ComparisonRow {
            label: *label,
            values: records.iter().map(|d| cell(d)).collect(),
        })
        .collect();

    ComparisonTable { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;

    #[test]
    fn toggle_twice_restores_previous_set() {
        let mut set = CompareSet::default();
        set.toggle("1");
        let before = set.clone();

        assert_eq!(set.toggle("2"), CompareToggle::Added);
        assert_eq!(set.toggle("2"), CompareToggle::Removed);
        assert_eq!(set, before);
    }

    #[test]
    fn fourth_member_is_ignored() {
        let mut set = CompareSet::default();
        for id in ["1", "2", "3"] {
            assert_eq!(set.toggle(id), CompareToggle::Added);
        }
        assert!(set.is_full());

        assert_eq!(set.toggle("4"), CompareToggle::Full);
        assert_eq!(set.ids(), ["1", "2", "3"]);

        assert_eq!(set.toggle("1"), CompareToggle::Removed);
        assert_eq!(set.ids(), ["2", "3"]);
    }

    #[test]
    fn removal_keeps_insertion_order() {
        let mut set = CompareSet::default();
        for id in ["3", "1", "2"] {
            set.toggle(id);
        }
        set.toggle("1");
        set.toggle("4");
        assert_eq!(set.ids(), ["3", "2", "4"]);
        assert!(set.contains("4"));
        assert!(!set.contains("1"));
    }

    #[test]
    fn table_columns_follow_selection_order() {
        let ubuntu = Distribution::sample("1", "Ubuntu", "Desktop.", Category::Desktop);
        let mut debian = Distribution::sample("4", "Debian", "Server.", Category::Server);
        debian.architecture = vec!["x86_64".to_string(), "ARM64".to_string()];
        debian.features = vec!["Stable".to_string(), "Free".to_string()];

        let table = build_comparison_table(&[&debian, &ubuntu]);
        assert_eq!(table.columns, ["Debian", "Ubuntu"]);
        assert_eq!(table.rows.len(), COMPARISON_FIELDS.len());

        let rank = table.row("Rank").expect("rank row");
        assert_eq!(rank.values, ["#4", "#1"]);
        let category = table.row("Category").expect("category row");
        assert_eq!(category.values, ["Server", "Desktop"]);
        let arch = table.row("Architecture").expect("architecture row");
        assert_eq!(arch.values[0], "x86_64, ARM64");
        let features = table.row("Features").expect("features row");
        assert_eq!(features.values[0], "Stable\nFree");
        assert_eq!(features.values[1], "");
    }

    #[test]
    fn empty_selection_has_rows_without_values() {
        let table = build_comparison_table(&[]);
        assert!(table.columns.is_empty());
        assert!(table.rows.iter().all(|row| row.values.is_empty()));
    }
}
