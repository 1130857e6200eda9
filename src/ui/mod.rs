pub(crate) mod app;
pub(crate) mod browse;
pub(crate) mod detail;
pub(crate) mod theme;

pub(crate) use app::{AppWidgets, build_ui};
pub(crate) use browse::{
    BrowseWidgets, apply_card_selection, build_distribution_card, build_page as build_browse_page,
};
pub(crate) use detail::{build_comparison_content, build_detail_content};
pub(crate) use theme::{apply_theme_css_class, build_theme_switcher};
