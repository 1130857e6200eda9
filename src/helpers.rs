use chrono::{Local, NaiveDate};
use gtk::glib;
use gtk4 as gtk;
use gtk4::prelude::*;

pub(crate) fn clear_flowbox(flow: &gtk::FlowBox) {
    while let Some(child) = flow.first_child() {
        flow.remove(&child);
    }
}

pub(crate) fn set_toggle_button_state(button: &gtk::ToggleButton, active: bool) {
    if button.is_active() != active {
        button.set_active(active);
    }
}

pub(crate) fn format_release_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub(crate) fn format_rating(rating: f64) -> String {
    format!("{:.1}/5", rating)
}

pub(crate) fn format_popularity(popularity: u8) -> String {
    format!("{}%", popularity)
}

pub(crate) fn format_relative_date(date: NaiveDate) -> String {
    format_relative_date_from(date, Local::now().date_naive())
}

fn format_relative_date_from(date: NaiveDate, today: NaiveDate) -> String {
    let days = today.signed_duration_since(date).num_days();

    if days <= 0 {
        return "today".to_string();
    }

    if days < 7 {
        return format!("{} day{} ago", days, if days == 1 { "" } else { "s" });
    }

    let weeks = days / 7;
    if weeks < 5 {
        return format!("{} week{} ago", weeks, if weeks == 1 { "" } else { "s" });
    }

    let months = days / 30;
    if months < 12 {
        let months = months.max(1);
        return format!("{} month{} ago", months, if months == 1 { "" } else { "s" });
    }

    let years = days / 365;
    if years < 1 {
        return "about a year ago".to_string();
    }

    format!("{} year{} ago", years, if years == 1 { "" } else { "s" })
}

pub(crate) fn badge_label(text: &str, outline: bool) -> gtk::Label {
    let label = gtk::Label::builder()
        .label(text)
        .halign(gtk::Align::Start)
        .valign(gtk::Align::Center)
        .build();
    label.add_css_class("distrohub-badge");
    if outline {
        label.add_css_class("outline");
    }
    label
}

pub(crate) fn set_link_label(label: &gtk::Label, url: Option<&str>) {
    if let Some(url) = url {
        let display = glib::markup_escape_text(url);
        let href = glib::markup_escape_text(url);
        label.set_markup(&format!("<a href=\"{href}\">{display}</a>"));
        label.set_visible(true);
        label.set_tooltip_text(Some(url));
    } else {
        label.set_text("");
        label.set_visible(false);
        label.set_tooltip_text(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_display_values() {
        assert_eq!(format_release_date(date(2024, 1, 5)), "Jan 5, 2024");
        assert_eq!(format_rating(4.8), "4.8/5");
        assert_eq!(format_rating(5.0), "5.0/5");
        assert_eq!(format_popularity(95), "95%");
    }

    #[test]
    fn relative_dates() {
        let today = date(2024, 3, 1);
        assert_eq!(format_relative_date_from(date(2024, 3, 1), today), "today");
        assert_eq!(format_relative_date_from(date(2024, 3, 5), today), "today");
        assert_eq!(format_relative_date_from(date(2024, 2, 29), today), "1 day ago");
        assert_eq!(format_relative_date_from(date(2024, 2, 16), today), "2 weeks ago");
        assert_eq!(format_relative_date_from(date(2024, 1, 15), today), "1 month ago");
        assert_eq!(format_relative_date_from(date(2023, 10, 1), today), "5 months ago");
        assert_eq!(format_relative_date_from(date(2022, 2, 1), today), "2 years ago");
    }
}
