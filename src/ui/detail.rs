use gtk::pango;
use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

use crate::catalog::ComparisonTable;
use crate::helpers::{
    badge_label, format_popularity, format_rating, format_relative_date, format_release_date,
    set_link_label,
};
use crate::types::Distribution;

pub(crate) struct DetailWidgets {
    pub(crate) close_button: gtk::Button,
    pub(crate) website_button: gtk::Button,
}

pub(crate) struct ComparisonWidgets {
    pub(crate) close_button: gtk::Button,
    pub(crate) clear_button: gtk::Button,
}

fn build_close_button(tooltip: &str) -> gtk::Button {
    let button = gtk::Button::builder()
        .icon_name("window-close-symbolic")
        .has_frame(false)
        .tooltip_text(tooltip)
        .valign(gtk::Align::Start)
        .build();
    button.add_css_class("flat");
    button.set_focus_on_click(false);
    button
}

fn section_title(text: &str) -> gtk::Label {
    let label = gtk::Label::builder()
        .label(text)
        .halign(gtk::Align::Start)
        .build();
    label.add_css_class("heading");
    label.add_css_class("distrohub-nav");
    label
}

fn detail_field(title: &str, value: &str) -> gtk::Box {
    let field = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(4)
        .hexpand(true)
        .build();
    let value_label = gtk::Label::builder()
        .label(value)
        .halign(gtk::Align::Start)
        .wrap(true)
        .wrap_mode(pango::WrapMode::WordChar)
        .selectable(true)
        .xalign(0.0)
        .build();
    field.append(&section_title(title));
    field.append(&value_label);
    field
}

fn field_pair(left: gtk::Box, right: gtk::Box) -> gtk::Box {
    let row = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(12)
        .homogeneous(true)
        .build();
    row.append(&left);
    row.append(&right);
    row
}

fn tag_row(values: &[String]) -> gtk::FlowBox {
    let flow = gtk::FlowBox::builder()
        .selection_mode(gtk::SelectionMode::None)
        .column_spacing(6)
        .row_spacing(6)
        .max_children_per_line(8)
        .build();
    for value in values {
        flow.insert(&badge_label(value, true), -1);
    }
    flow
}

pub(crate) fn build_detail_content(distribution: &Distribution) -> (gtk::Box, DetailWidgets) {
    let content = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(18)
        .margin_top(20)
        .margin_bottom(20)
        .margin_start(24)
        .margin_end(24)
        .build();
    content.add_css_class("distrohub-card");

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
        .wrap(true)
        .build();
    name.add_css_class("title-2");
    title_box.append(&name);
    title_box.append(&badge_label(&format!("RANK #{}", distribution.rank), false));

    let close_button = build_close_button("Close details");
    header.append(&logo);
    header.append(&title_box);
    header.append(&close_button);

    let updated = format!(
        "{} ({})",
        format_release_date(distribution.last_update),
        format_relative_date(distribution.last_update)
    );

    let website_link = gtk::Label::builder().halign(gtk::Align::Start).build();
    set_link_label(&website_link, Some(&distribution.website));

    let category_box = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(4)
        .build();
    category_box.append(&section_title("CATEGORY"));
    category_box.append(&badge_label(distribution.category.label(), true));

    let website_button = gtk::Button::builder()
        .label("VISIT WEBSITE")
        .hexpand(true)
        .build();
    website_button.add_css_class("suggested-action");
    website_button.set_tooltip_text(Some(&distribution.website));

    content.append(&header);
    content.append(&detail_field("DESCRIPTION", &distribution.description));
    content.append(&field_pair(
        detail_field("RATING", &format_rating(distribution.rating)),
        detail_field("DOWNLOADS", &distribution.downloads),
    ));
    content.append(&field_pair(
        detail_field("LAST UPDATE", &updated),
        detail_field("POPULARITY", &format_popularity(distribution.popularity)),
    ));
    content.append(&field_pair(
        detail_field("BASED ON", &distribution.based_on),
        detail_field("RELEASE MODEL", &distribution.release_model),
    ));
    content.append(&category_box);
    content.append(&section_title("PACKAGE TYPE"));
    content.append(&tag_row(&distribution.package_type));
    content.append(&section_title("ARCHITECTURE"));
    content.append(&tag_row(&distribution.architecture));
    if !distribution.features.is_empty() {
        content.append(&section_title("FEATURES"));
        content.append(&tag_row(&distribution.features));
    }
    content.append(&website_link);
    content.append(&website_button);

    (
        content,
        DetailWidgets {
            close_button,
            website_button,
        },
    )
}

fn grid_cell(text: &str, heading: bool) -> gtk::Label {
    let label = gtk::Label::builder()
        .label(text)
        .halign(gtk::Align::Start)
        .valign(gtk::Align::Start)
        .wrap(true)
        .wrap_mode(pango::WrapMode::WordChar)
        .xalign(0.0)
        .build();
    if heading {
        label.add_css_class("comparison-heading");
    }
    label
}

pub(crate) fn build_comparison_content(table: &ComparisonTable) -> (gtk::Box, ComparisonWidgets) {
    let content = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(18)
        .margin_top(20)
        .margin_bottom(20)
        .margin_start(24)
        .margin_end(24)
        .build();

    let header = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(12)
        .build();
    let title = gtk::Label::builder()
        .label("COMPARE DISTRIBUTIONS")
        .halign(gtk::Align::Start)
        .hexpand(true)
        .build();
    title.add_css_class("title-2");
    let close_button = build_close_button("Close comparison");
    header.append(&title);
    header.append(&close_button);

    let grid = gtk::Grid::builder()
        .column_spacing(12)
        .row_spacing(6)
        .column_homogeneous(false)
        .build();
    grid.add_css_class("comparison-grid");

    grid.attach(&grid_cell("", true), 0, 0, 1, 1);
    for (column, name) in table.columns.iter().enumerate() {
        grid.attach(&grid_cell(&name.to_uppercase(), true), column as i32 + 1, 0, 1, 1);
    }
    for (row, entry) in table.rows.iter().enumerate() {
        let row = row as i32 + 1;
        grid.attach(&grid_cell(&entry.label.to_uppercase(), true), 0, row, 1, 1);
        for (column, value) in entry.values.iter().enumerate() {
            grid.attach(&grid_cell(value, false), column as i32 + 1, row, 1, 1);
        }
    }

    let scroller = gtk::ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .min_content_height(360)
        .child(&grid)
        .build();
    scroller.set_policy(gtk::PolicyType::Automatic, gtk::PolicyType::Automatic);

    let clear_button = gtk::Button::builder()
        .label("Clear comparison")
        .halign(gtk::Align::End)
        .build();
    clear_button.add_css_class("destructive-action");

    content.append(&header);
    content.append(&scroller);
    content.append(&clear_button);

    (
        content,
        ComparisonWidgets {
            close_button,
            clear_button,
        },
    )
}
