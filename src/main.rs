mod catalog;
mod categories;
mod helpers;
mod settings;
mod state;
mod types;
mod ui;

use adw::prelude::*;
use gtk4::gio;
use gtk4::glib;
use libadwaita as adw;

use crate::ui::build_ui;

const APP_ID: &str = "org.distrohub.DistroHub";
pub(crate) const LOG_DOMAIN: &str = "distrohub";

fn main() -> glib::ExitCode {
    adw::init().expect("Failed to initialize libadwaita");

    let app = adw::Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::FLAGS_NONE)
        .build();

    app.connect_activate(build_ui);

    app.run()
}
