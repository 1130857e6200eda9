use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;

use crate::settings::ThemePreference;

pub(crate) fn apply_theme_css_class(window: &adw::ApplicationWindow, is_dark: bool) {
    window.remove_css_class("distrohub-window-light");
    window.remove_css_class("distrohub-window-dark");
    if is_dark {
        window.add_css_class("distrohub-window-dark");
    } else {
        window.add_css_class("distrohub-window-light");
    }
}

fn theme_label(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::System => "System",
        ThemePreference::Light => "Light",
        ThemePreference::Dark => "Dark",
    }
}

/// Radio group with one entry per colour scheme, preselected to `current`.
pub(crate) fn build_theme_switcher(
    current: ThemePreference,
) -> (gtk::Box, Vec<(ThemePreference, gtk::CheckButton)>) {
    let container = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(6)
        .build();

    let mut buttons: Vec<(ThemePreference, gtk::CheckButton)> = Vec::new();
    for preference in [
        ThemePreference::System,
        ThemePreference::Light,
        ThemePreference::Dark,
    ] {
        let button = gtk::CheckButton::with_label(theme_label(preference));
        if let Some((_, leader)) = buttons.first() {
            button.set_group(Some(leader));
        }
        button.set_active(preference == current);
        container.append(&button);
        buttons.push((preference, button));
    }

    (container, buttons)
}
