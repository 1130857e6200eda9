use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use glib::{Variant, VariantTy};
use gtk::{gdk, gio, glib};

use crate::LOG_DOMAIN;
use crate::settings::{ThemePreference, load_app_settings, save_app_settings};
use crate::state::controller::AppController;
use crate::ui::{BrowseWidgets, apply_theme_css_class, build_browse_page, build_theme_switcher};

const STYLESHEET_RESOURCE: &str = "/org/distrohub/DistroHub/style.css";

pub(crate) struct AppWidgets {
    pub(crate) toast_overlay: adw::ToastOverlay,
    pub(crate) browse: BrowseWidgets,
}

fn load_stylesheet() {
    let Some(display) = gdk::Display::default() else {
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_resource(STYLESHEET_RESOURCE);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn build_brand_title() -> gtk::Label {
    let title = gtk::Label::builder()
        .use_markup(true)
        .label("DISTRO<span foreground=\"#ef4444\">HUB</span>")
        .valign(gtk::Align::Center)
        .build();
    title.add_css_class("distrohub-title");
    title.add_css_class("title-3");
    title
}

fn build_navigation() -> gtk::Box {
    let nav = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(24)
        .valign(gtk::Align::Center)
        .build();
    for entry in ["RANKINGS", "REVIEWS", "COMPARE", "NEWS"] {
        let label = gtk::Label::new(Some(entry));
        label.add_css_class("distrohub-nav");
        nav.append(&label);
    }
    nav
}

fn build_footer() -> gtk::Box {
    let footer = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(18)
        .build();
    footer.add_css_class("distrohub-footer");

    let columns = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(24)
        .homogeneous(true)
        .build();

    let sections: [(&str, &[&str]); 4] = [
        ("DISTROHUB", &["THE ULTIMATE LINUX DISTRIBUTION TRACKER"]),
        ("EXPLORE", &["RANKINGS", "REVIEWS", "COMPARE", "NEWS"]),
        ("CATEGORIES", &["DESKTOP", "SERVER", "ADVANCED", "BEGINNER"]),
        ("CONNECT", &["GITHUB", "MASTODON", "MATRIX", "RSS"]),
    ];
    for (heading, entries) in sections {
        let column = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(6)
            .build();
        let heading = gtk::Label::builder()
            .label(heading)
            .halign(gtk::Align::Start)
            .build();
        heading.add_css_class("heading");
        column.append(&heading);
        for entry in entries {
            let label = gtk::Label::builder()
                .label(*entry)
                .halign(gtk::Align::Start)
                .wrap(true)
                .build();
            label.add_css_class("caption");
            column.append(&label);
        }
        columns.append(&column);
    }

    let copyright = gtk::Label::new(Some("© DISTROHUB. ALL RIGHTS RESERVED."));
    copyright.add_css_class("caption");

    footer.append(&columns);
    footer.append(&gtk::Separator::new(gtk::Orientation::Horizontal));
    footer.append(&copyright);
    footer
}

pub(crate) fn build_ui(app: &adw::Application) {
    #[cfg(not(distrohub_skip_gresource))]
    {
        gio::resources_register_include!("distrohub.gresource")
            .expect("Failed to register embedded resources");
        load_stylesheet();
    }

    #[cfg(distrohub_skip_gresource)]
    {
        glib::g_info!(
            LOG_DOMAIN,
            "DistroHub running without embedded resources (SKIP_GRESOURCE=1)"
        );
    }

    let settings = Rc::new(RefCell::new(load_app_settings()));
    let (initial_width, initial_height, maximized) = {
        let settings = settings.borrow();
        (
            settings.window_width.unwrap_or(1180),
            settings.window_height.unwrap_or(820),
            settings.window_maximized,
        )
    };

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("DistroHub")
        .default_width(initial_width)
        .default_height(initial_height)
        .maximized(maximized)
        .build();
    window.add_css_class("distrohub-window");

    let toast_overlay = adw::ToastOverlay::new();
    window.set_content(Some(&toast_overlay));

    let root_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
    toast_overlay.set_child(Some(&root_box));

    let header_bar = adw::HeaderBar::new();
    header_bar.add_css_class("distrohub-headerbar");
    header_bar.set_title_widget(Some(&build_navigation()));
    header_bar.pack_start(&build_brand_title());
    root_box.append(&header_bar);

    let style_manager = adw::StyleManager::default();
    let stored_theme = settings.borrow().theme_preference;
    stored_theme.apply(&style_manager);
    apply_theme_css_class(&window, style_manager.is_dark());
    style_manager.connect_dark_notify(glib::clone!(
        #[weak]
        window,
        move |manager| {
            apply_theme_css_class(&window, manager.is_dark());
        },
    ));

    let theme_action = gio::SimpleAction::new_stateful(
        "theme",
        Some(VariantTy::STRING),
        &Variant::from(stored_theme.key()),
    );
    theme_action.connect_change_state(glib::clone!(
        #[weak]
        style_manager,
        #[strong]
        settings,
        move |action, value| {
            let Some(value) = value else {
                return;
            };
            if let Some(theme) = value.str() {
                action.set_state(value);
                let preference = ThemePreference::from_key(theme);
                preference.apply(&style_manager);
                let mut data = settings.borrow_mut();
                data.theme_preference = preference;
                if let Err(err) = save_app_settings(&data) {
                    glib::g_warning!(LOG_DOMAIN, "Failed to save settings: {:#}", err);
                }
            }
        },
    ));
    app.add_action(&theme_action);

    let about_action = gio::SimpleAction::new("about", None);
    app.add_action(&about_action);

    let menu_button = gtk::MenuButton::builder()
        .icon_name("open-menu-symbolic")
        .valign(gtk::Align::Center)
        .build();
    let popover = gtk::Popover::new();

    let popover_box = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(6)
        .margin_top(12)
        .margin_bottom(12)
        .margin_start(12)
        .margin_end(12)
        .build();

    let (theme_box, theme_buttons) = build_theme_switcher(stored_theme);
    for (preference, button) in theme_buttons {
        let action = theme_action.clone();
        button.connect_toggled(move |button| {
            if button.is_active() {
                action.activate(Some(&Variant::from(preference.key())));
            }
        });
    }

    let theme_list = gtk::ListBox::builder()
        .selection_mode(gtk::SelectionMode::None)
        .build();
    theme_list.add_css_class("boxed-list");
    let theme_row = adw::ActionRow::builder().title("Colour scheme").build();
    theme_row.add_suffix(&theme_box);
    theme_row.set_activatable(false);
    theme_list.append(&theme_row);
    popover_box.append(&theme_list);

    let menu_list = gtk::ListBox::builder()
        .selection_mode(gtk::SelectionMode::None)
        .build();
    menu_list.add_css_class("boxed-list");
    let about_row = adw::ActionRow::builder()
        .title("About DistroHub")
        .activatable(true)
        .build();
    about_row.set_action_name(Some("app.about"));
    menu_list.append(&about_row);
    popover_box.append(&menu_list);

    popover.set_child(Some(&popover_box));
    menu_button.set_popover(Some(&popover));
    header_bar.pack_end(&menu_button);

    let (browse_page, browse_widgets) = build_browse_page();

    let page_box = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(0)
        .build();
    page_box.append(&browse_page);
    page_box.append(&build_footer());

    let scroller = gtk::ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .child(&page_box)
        .build();
    scroller.set_policy(gtk::PolicyType::Never, gtk::PolicyType::Automatic);
    root_box.append(&scroller);

    let widgets = AppWidgets {
        toast_overlay: toast_overlay.clone(),
        browse: browse_widgets,
    };

    let controller = Rc::new(AppController::new(widgets, app.clone(), window.clone()));
    controller.setup_connections();
    controller.render();

    let compare_action = gio::SimpleAction::new("compare-mode", None);
    {
        let controller_weak = Rc::downgrade(&controller);
        compare_action.connect_activate(move |_, _| {
            if let Some(controller) = controller_weak.upgrade() {
                controller.on_compare_mode_shortcut();
            }
        });
    }
    app.add_action(&compare_action);
    app.set_accels_for_action("app.compare-mode", &["<Control>m"]);

    {
        let controller_weak = Rc::downgrade(&controller);
        let popover_clone = popover.clone();
        about_action.connect_activate(move |_, _| {
            popover_clone.popdown();
            if let Some(controller) = controller_weak.upgrade() {
                controller.show_about_dialog();
            }
        });
    }

    let settings_for_close = Rc::clone(&settings);
    // The window owns the controller for the lifetime of the application.
    let controller_for_close = Rc::clone(&controller);
    window.connect_close_request(move |win| {
        controller_for_close.close_overlay();
        let width = win.width();
        let height = win.height();
        {
            let mut data = settings_for_close.borrow_mut();
            data.window_maximized = win.is_maximized();
            if width > 0 && height > 0 && !win.is_maximized() {
                data.window_width = Some(width);
                data.window_height = Some(height);
            }
        }
        if let Err(err) = save_app_settings(&settings_for_close.borrow()) {
            glib::g_warning!(LOG_DOMAIN, "Failed to save settings: {:#}", err);
        }
        glib::Propagation::Proceed
    });

    window.present();
}
