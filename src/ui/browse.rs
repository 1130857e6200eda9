use gtk::pango;
use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

use crate::catalog::MAX_COMPARE;
use crate::categories::{CategoryFilter, all_category_filters, icon_name_for_filter};
use crate::helpers::{
    badge_label, format_popularity, format_relative_date, format_release_date,
};
use crate::types::Distribution;

fn build_category_button(filter: CategoryFilter) -> gtk::ToggleButton {
    let button = gtk::ToggleButton::builder().build();
    button.add_css_class("pill");
    button.set_hexpand(false);
    button.set_margin_top(4);
    button.set_margin_bottom(4);

    let content = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(5)
        .halign(gtk::Align::Center)
        .build();

    let icon = gtk::Image::builder()
        .icon_name(icon_name_for_filter(filter))
        .pixel_size(16)
        .build();
    icon.add_css_class("dim-label");

    let text = gtk::Label::builder()
        .label(filter.label().to_uppercase())
        .halign(gtk::Align::Center)
        .build();
    text.add_css_class("distrohub-nav");

    content.append(&icon);
    content.append(&text);
    button.set_child(Some(&content));

    button
}

pub(crate) struct BrowseWidgets {
    pub(crate) search_entry: gtk::SearchEntry,
    pub(crate) category_buttons: Vec<(CategoryFilter, gtk::ToggleButton)>,
    pub(crate) compare_mode_button: gtk::ToggleButton,
    pub(crate) compare_revealer: gtk::Revealer,
    pub(crate) compare_status: gtk::Label,
    pub(crate) compare_button: gtk::Button,
    pub(crate) clear_compare_button: gtk::Button,
    pub(crate) results_label: gtk::Label,
    pub(crate) results_stack: gtk::Stack,
    pub(crate) grid: gtk::FlowBox,
}

pub(crate) fn build_page() -> (gtk::Box, BrowseWidgets) {
    let container = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(0)
        .build();
    container.set_vexpand(true);

    let hero = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(12)
        .halign(gtk::Align::Fill)
        .build();
    hero.add_css_class("distrohub-hero");

    let hero_title = gtk::Label::builder()
        .use_markup(true)
        .label("LINUX DISTRO\n<span foreground=\"#ef4444\">TRACKER</span>")
        .justify(gtk::Justification::Center)
        .halign(gtk::Align::Center)
        .build();
    hero_title.add_css_class("distrohub-hero-title");

    let hero_subtitle = gtk::Label::builder()
        .label("DISCOVER, COMPARE, AND TRACK THE LATEST LINUX DISTRIBUTIONS")
        .wrap(true)
        .wrap_mode(pango::WrapMode::WordChar)
        .justify(gtk::Justification::Center)
        .halign(gtk::Align::Center)
        .build();
    hero_subtitle.add_css_class("distrohub-nav");

    let search_entry = gtk::SearchEntry::builder()
        .placeholder_text("SEARCH DISTRIBUTIONS...")
        .hexpand(true)
        .build();
    search_entry.set_width_request(420);
    search_entry.set_halign(gtk::Align::Center);

    let categories_row = gtk::FlowBox::builder()
        .selection_mode(gtk::SelectionMode::None)
        .homogeneous(false)
        .column_spacing(12)
        .row_spacing(6)
        .max_children_per_line(6)
        .halign(gtk::Align::Center)
        .build();

    let mut category_buttons: Vec<(CategoryFilter, gtk::ToggleButton)> = Vec::new();
    for filter in all_category_filters() {
        let button = build_category_button(*filter);
        if let Some((_, leader)) = category_buttons.first() {
            button.set_group(Some(leader));
        }
        button.set_active(*filter == CategoryFilter::All);
        categories_row.insert(&button, -1);
        category_buttons.push((*filter, button));
    }

    let compare_mode_button = gtk::ToggleButton::builder()
        .label("COMPARE MODE")
        .tooltip_text(format!(
            "Click cards to pick up to {MAX_COMPARE} distributions to compare."
        ))
        .halign(gtk::Align::Center)
        .build();
    compare_mode_button.add_css_class("pill");

    let compare_status = gtk::Label::builder()
        .halign(gtk::Align::Start)
        .hexpand(true)
        .build();
    compare_status.add_css_class("dim-label");

    let compare_button = gtk::Button::builder()
        .label("Compare (0)")
        .sensitive(false)
        .build();
    compare_button.add_css_class("suggested-action");

    let clear_compare_button = gtk::Button::builder()
        .label("Clear comparison")
        .build();
    clear_compare_button.add_css_class("destructive-action");

    let compare_bar = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(6)
        .margin_start(24)
        .margin_end(24)
        .margin_top(6)
        .build();
    compare_bar.append(&compare_status);
    compare_bar.append(&compare_button);
    compare_bar.append(&clear_compare_button);

    let compare_revealer = gtk::Revealer::builder()
        .reveal_child(false)
        .transition_type(gtk::RevealerTransitionType::SlideDown)
        .child(&compare_bar)
        .build();

    hero.append(&hero_title);
    hero.append(&hero_subtitle);
    hero.append(&search_entry);
    hero.append(&categories_row);
    hero.append(&compare_mode_button);

    let results_heading = gtk::Label::builder()
        .label("TOP DISTRIBUTIONS")
        .halign(gtk::Align::Center)
        .build();
    results_heading.add_css_class("title-2");
    results_heading.add_css_class("distrohub-nav");

    let results_label = gtk::Label::builder().halign(gtk::Align::Center).build();
    results_label.add_css_class("dim-label");

    let grid = gtk::FlowBox::builder()
        .selection_mode(gtk::SelectionMode::None)
        .activate_on_single_click(true)
        .homogeneous(true)
        .min_children_per_line(1)
        .max_children_per_line(3)
        .column_spacing(24)
        .row_spacing(24)
        .valign(gtk::Align::Start)
        .build();

    let empty_page = adw::StatusPage::builder()
        .icon_name("system-search-symbolic")
        .title("NO RESULTS FOUND")
        .description("TRY ADJUSTING YOUR SEARCH OR FILTERS")
        .build();

    let results_stack = gtk::Stack::builder()
        .transition_type(gtk::StackTransitionType::Crossfade)
        .build();
    results_stack.add_named(&grid, Some("grid"));
    results_stack.add_named(&empty_page, Some("empty"));
    results_stack.set_visible_child_name("grid");

    let results_section = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(12)
        .margin_top(24)
        .margin_bottom(24)
        .margin_start(24)
        .margin_end(24)
        .build();
    results_section.append(&results_heading);
    results_section.append(&results_label);
    results_section.append(&results_stack);

    container.append(&hero);
    container.append(&compare_revealer);
    container.append(&build_stats_strip());
    container.append(&results_section);

    let widgets = BrowseWidgets {
        search_entry,
        category_buttons,
        compare_mode_button,
        compare_revealer,
        compare_status,
        compare_button,
        clear_compare_button,
        results_label,
        results_stack,
        grid,
    };

    (container, widgets)
}

fn build_stats_strip() -> gtk::Box {
    let strip = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(24)
        .homogeneous(true)
        .build();
    strip.add_css_class("distrohub-stats");

    for (value, caption) in [
        ("500+", "DISTRIBUTIONS"),
        ("1M+", "MONTHLY USERS"),
        ("50K+", "REVIEWS"),
        ("24/7", "TRACKING"),
    ] {
        let card = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(4)
            .build();
        card.add_css_class("distrohub-card");

        let value_label = gtk::Label::new(Some(value));
        value_label.add_css_class("title-1");
        let caption_label = gtk::Label::new(Some(caption));
        caption_label.add_css_class("caption");

        card.append(&value_label);
        card.append(&caption_label);
        strip.append(&card);
    }

    strip
}

fn build_metric(icon_name: &str, value: &str, tooltip: Option<&str>) -> gtk::Box {
    let metric = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(4)
        .hexpand(true)
        .build();
    let icon = gtk::Image::builder()
        .icon_name(icon_name)
        .pixel_size(16)
        .build();
    let label = gtk::Label::builder()
        .label(value)
        .single_line_mode(true)
        .ellipsize(pango::EllipsizeMode::End)
        .build();
    label.add_css_class("caption-heading");
    metric.append(&icon);
    metric.append(&label);
    metric.set_tooltip_text(tooltip);
    metric
}

/// Card for one record. The record id is stored as the child's widget name.
pub(crate) fn build_distribution_card(
    distribution: &Distribution,
    compare_mode: bool,
    selected: bool,
) -> gtk::FlowBoxChild {
    let card = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(12)
        .build();
    card.add_css_class("distrohub-card");

    let header = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(12)
        .build();

    let logo = gtk::Label::new(Some(&distribution.logo));
    logo.add_css_class("title-1");

    let title_box = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(4)
        .hexpand(true)
        .build();
    let name = gtk::Label::builder()
        .label(distribution.name.to_uppercase())
        .halign(gtk::Align::Start)
        .ellipsize(pango::EllipsizeMode::End)
        .build();
    name.add_css_class("heading");
    title_box.append(&name);
    title_box.append(&badge_label(&format!("RANK #{}", distribution.rank), false));

    let rating = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(4)
        .valign(gtk::Align::Start)
        .build();
    rating.append(
        &gtk::Image::builder()
            .icon_name("starred-symbolic")
            .pixel_size(16)
            .build(),
    );
    let rating_value = gtk::Label::new(Some(&format!("{:.1}", distribution.rating)));
    rating_value.add_css_class("heading");
    rating.append(&rating_value);

    header.append(&logo);
    header.append(&title_box);
    header.append(&rating);

    let description = gtk::Label::builder()
        .label(distribution.description.as_str())
        .wrap(true)
        .wrap_mode(pango::WrapMode::WordChar)
        .lines(2)
        .ellipsize(pango::EllipsizeMode::End)
        .xalign(0.0)
        .build();

    let metrics = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(12)
        .homogeneous(true)
        .build();
    let relative = format_relative_date(distribution.last_update);
    metrics.append(&build_metric(
        "folder-download-symbolic",
        &distribution.downloads,
        None,
    ));
    metrics.append(&build_metric(
        "x-office-calendar-symbolic",
        &format_release_date(distribution.last_update),
        Some(&format!("Updated {relative}")),
    ));
    metrics.append(&build_metric(
        "go-up-symbolic",
        &format_popularity(distribution.popularity),
        None,
    ));

    card.append(&header);
    card.append(&description);
    card.append(&metrics);
    card.append(&badge_label(distribution.category.label(), true));

    let child = gtk::FlowBoxChild::new();
    child.set_child(Some(&card));
    child.set_widget_name(&distribution.id);
    apply_card_selection(&child, compare_mode, selected);
    child
}

pub(crate) fn apply_card_selection(child: &gtk::FlowBoxChild, compare_mode: bool, selected: bool) {
    if let Some(card) = child.child() {
        if selected {
            card.add_css_class("compare-selected");
        } else {
            card.remove_css_class("compare-selected");
        }
    }

    let tooltip = match (compare_mode, selected) {
        (false, _) => "Open details",
        (true, true) => "Remove from comparison",
        (true, false) => "Add to comparison",
    };
    child.set_tooltip_text(Some(tooltip));
}
