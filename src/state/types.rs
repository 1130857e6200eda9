use std::rc::Rc;

use crate::catalog::{
    CompareSet, CompareToggle, ComparisonTable, build_comparison_table, filter_distributions,
};
use crate::categories::CategoryFilter;
use crate::types::Distribution;

/// What the overlay currently shows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum DetailTarget {
    Record(String),
    Comparison,
}

/// Outcome of a card activation, decided by the compare-mode flag at the time of the click.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CardAction {
    Compare(CompareToggle),
    OpenDetail,
    Ignored,
}

pub(crate) struct CatalogState {
    records: Rc<[Distribution]>,
    query: String,
    category_filter: CategoryFilter,
    detail_target: Option<DetailTarget>,
    compare_mode: bool,
    compare_set: CompareSet,
}

impl CatalogState {
    pub(crate) fn new(records: impl Into<Rc<[Distribution]>>) -> Self {
        Self {
            records: records.into(),
            query: String::new(),
            category_filter: CategoryFilter::All,
            detail_target: None,
            compare_mode: false,
            compare_set: CompareSet::default(),
        }
    }

    pub(crate) fn records(&self) -> &[Distribution] {
        &self.records
    }

    pub(crate) fn record(&self, id: &str) -> Option<&Distribution> {
        self.records.iter().find(|record| record.id == id)
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    pub(crate) fn detail_target(&self) -> Option<&DetailTarget> {
        self.detail_target.as_ref()
    }

    pub(crate) fn compare_mode(&self) -> bool {
        self.compare_mode
    }

    pub(crate) fn compare_set(&self) -> &CompareSet {
        &self.compare_set
    }

    pub(crate) fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub(crate) fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    pub(crate) fn visible_records(&self) -> Vec<&Distribution> {
        filter_distributions(&self.records, &self.query, self.category_filter)
    }

    pub(crate) fn toggle_compare_mode(&mut self) -> bool {
        self.compare_mode = !self.compare_mode;
        self.compare_mode
    }

    pub(crate) fn set_compare_mode(&mut self, enabled: bool) {
        self.compare_mode = enabled;
    }

    /// Returns `None` for ids that are not in the record set.
    pub(crate) fn toggle_compare(&mut self, id: &str) -> Option<CompareToggle> {
        self.record(id)?;
        Some(self.compare_set.toggle(id))
    }

    pub(crate) fn open_detail(&mut self, id: &str) -> bool {
        if self.record(id).is_none() {
            return false;
        }
        self.detail_target = Some(DetailTarget::Record(id.to_string()));
        true
    }

    pub(crate) fn close_detail(&mut self) {
        self.detail_target = None;
    }

    pub(crate) fn can_compare(&self) -> bool {
        self.compare_set.len() >= 2
    }

    pub(crate) fn open_comparison(&mut self) -> bool {
        if !self.can_compare() {
            return false;
        }
        self.detail_target = Some(DetailTarget::Comparison);
        true
    }

    pub(crate) fn clear_comparison(&mut self) {
        self.compare_set.clear();
        self.detail_target = None;
        self.compare_mode = false;
    }

    pub(crate) fn activate_card(&mut self, id: &str) -> CardAction {
        if self.compare_mode {
            match self.toggle_compare(id) {
                Some(outcome) => CardAction::Compare(outcome),
                None => CardAction::Ignored,
            }
        } else if self.open_detail(id) {
            CardAction::OpenDetail
        } else {
            CardAction::Ignored
        }
    }

    pub(crate) fn detail_record(&self) -> Option<&Distribution> {
        match self.detail_target.as_ref()? {
            DetailTarget::Record(id) => self.record(id),
            DetailTarget::Comparison => None,
        }
    }

    pub(crate) fn compared_records(&self) -> Vec<&Distribution> {
        self.compare_set
            .ids()
            .iter()
            .filter_map(|id| self.record(id))
            .collect()
    }

    pub(crate) fn comparison_table(&self) -> ComparisonTable {
        build_comparison_table(&self.compared_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::categories::Category;

    fn four_records() -> CatalogState {
        CatalogState::new(vec![
            Distribution::sample("1", "Ubuntu", "Friendly desktop.", Category::Desktop),
            Distribution::sample("2", "Debian", "Universal OS.", Category::Server),
            Distribution::sample("3", "Fedora", "Cutting edge.", Category::Desktop),
            Distribution::sample("4", "Arch Linux", "Simple and rolling.", Category::Advanced),
        ])
    }

    fn ids(records: &[&Distribution]) -> Vec<String> {
        records.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn defaults_show_everything() {
        let state = CatalogState::new(catalog().to_vec());
        assert_eq!(state.query(), "");
        assert_eq!(state.category_filter(), CategoryFilter::All);
        assert!(state.detail_target().is_none());
        assert!(!state.compare_mode());
        assert!(state.compare_set().is_empty());

        let visible = state.visible_records();
        assert_eq!(visible.len(), catalog().len());
        assert!(visible.iter().zip(catalog()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn query_and_category_drive_visible_records() {
        let mut state = four_records();
        state.set_query("ubuntu");
        assert_eq!(ids(&state.visible_records()), ["1"]);

        state.set_query("");
        state.set_category_filter(CategoryFilter::Only(Category::Desktop));
        assert_eq!(ids(&state.visible_records()), ["1", "3"]);

        state.set_category_filter(CategoryFilter::Only(Category::Gaming));
        assert!(state.visible_records().is_empty());
    }

    #[test]
    fn full_compare_set_ignores_new_members() {
        let mut state = four_records();
        for id in ["1", "2", "3"] {
            assert_eq!(state.toggle_compare(id), Some(CompareToggle::Added));
        }

        assert_eq!(state.toggle_compare("4"), Some(CompareToggle::Full));
        assert_eq!(state.compare_set().ids(), ["1", "2", "3"]);

        assert_eq!(state.toggle_compare("1"), Some(CompareToggle::Removed));
        assert_eq!(state.compare_set().ids(), ["2", "3"]);
    }

    #[test]
    fn toggling_unknown_id_changes_nothing() {
        let mut state = four_records();
        assert_eq!(state.toggle_compare("99"), None);
        assert!(state.compare_set().is_empty());
    }

    #[test]
    fn card_click_depends_on_compare_mode() {
        let mut state = four_records();

        assert_eq!(state.activate_card("1"), CardAction::OpenDetail);
        assert_eq!(
            state.detail_target(),
            Some(&DetailTarget::Record("1".to_string()))
        );
        assert!(state.compare_set().is_empty());
        state.close_detail();

        assert!(state.toggle_compare_mode());
        assert_eq!(
            state.activate_card("1"),
            CardAction::Compare(CompareToggle::Added)
        );
        assert!(state.compare_set().contains("1"));
        assert!(state.detail_target().is_none());

        assert_eq!(
            state.activate_card("1"),
            CardAction::Compare(CompareToggle::Removed)
        );
        assert!(state.compare_set().is_empty());
        assert_eq!(state.activate_card("99"), CardAction::Ignored);
    }

    #[test]
    fn leaving_compare_mode_keeps_the_selection() {
        let mut state = four_records();
        state.set_compare_mode(true);
        state.activate_card("2");
        assert!(!state.toggle_compare_mode());
        assert_eq!(state.compare_set().ids(), ["2"]);
    }

    #[test]
    fn comparison_needs_two_members() {
        let mut state = four_records();
        state.toggle_compare("1");
        assert!(!state.can_compare());
        assert!(!state.open_comparison());
        assert!(state.detail_target().is_none());

        state.toggle_compare("3");
        assert!(state.open_comparison());
        assert_eq!(state.detail_target(), Some(&DetailTarget::Comparison));
        assert!(state.detail_record().is_none());

        let table = state.comparison_table();
        assert_eq!(table.columns, ["Ubuntu", "Fedora"]);
    }

    #[test]
    fn clear_comparison_resets_everything() {
        let mut state = four_records();
        state.set_compare_mode(true);
        state.activate_card("1");
        state.activate_card("2");
        state.open_comparison();

        state.clear_comparison();
        assert!(state.compare_set().is_empty());
        assert!(state.detail_target().is_none());
        assert!(!state.compare_mode());

        let mut fresh = four_records();
        fresh.open_detail("4");
        fresh.clear_comparison();
        assert!(fresh.detail_target().is_none());
        assert!(!fresh.compare_mode());
    }

    #[test]
    fn detail_record_resolves_the_target() {
        let mut state = four_records();
        assert!(!state.open_detail("missing"));
        assert!(state.open_detail("3"));
        assert_eq!(state.detail_record().map(|d| d.name.as_str()), Some("Fedora"));

        state.close_detail();
        assert!(state.detail_record().is_none());
    }
}
