use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::glib::Propagation;
use gtk::pango;

use crate::catalog::catalog;
use crate::state::types::{CatalogState, DetailTarget};
use crate::ui::AppWidgets;

pub(crate) struct AppController {
    pub(crate) widgets: AppWidgets,
    pub(crate) state: RefCell<CatalogState>,
    pub(crate) app: adw::Application,
    pub(crate) window: adw::ApplicationWindow,
    pub(crate) shown_ids: RefCell<Vec<String>>,
    pub(crate) overlay_window: RefCell<Option<gtk::Window>>,
    pub(crate) overlay_target: RefCell<Option<DetailTarget>>,
    pub(crate) about_dialog: RefCell<Option<gtk::Dialog>>,
}

impl AppController {
    pub(crate) fn new(
        widgets: AppWidgets,
        app: adw::Application,
        window: adw::ApplicationWindow,
    ) -> Self {
        Self {
            widgets,
            state: RefCell::new(CatalogState::new(catalog().to_vec())),
            app,
            window,
            shown_ids: RefCell::new(Vec::new()),
            overlay_window: RefCell::new(None),
            overlay_target: RefCell::new(None),
            about_dialog: RefCell::new(None),
        }
    }

    pub(crate) fn setup_connections(self: &Rc<Self>) {
        {
            let controller = Rc::downgrade(self);
            self.widgets
                .browse
                .search_entry
                .connect_search_changed(move |entry| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_query_changed(entry.text().to_string());
                    }
                });
        }

        for (filter, button) in &self.widgets.browse.category_buttons {
            let filter = *filter;
            let controller = Rc::downgrade(self);
            button.connect_toggled(move |btn| {
                if !btn.is_active() {
                    return;
                }
                if let Some(controller) = controller.upgrade() {
                    controller.on_category_selected(filter);
                }
            });
        }

        {
            let controller = Rc::downgrade(self);
            self.widgets
                .browse
                .compare_mode_button
                .connect_toggled(move |btn| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_compare_mode_toggled(btn.is_active());
                    }
                });
        }

        {
            let controller = Rc::downgrade(self);
            self.widgets
                .browse
                .grid
                .connect_child_activated(move |_, child| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_card_activated(child.widget_name().as_str());
                    }
                });
        }

        {
            let controller = Rc::downgrade(self);
            self.widgets.browse.compare_button.connect_clicked(move |_| {
                if let Some(controller) = controller.upgrade() {
                    controller.on_compare_requested();
                }
            });
        }

        {
            let controller = Rc::downgrade(self);
            self.widgets
                .browse
                .clear_compare_button
                .connect_clicked(move |_| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_clear_comparison();
                    }
                });
        }
    }

    /// Re-derives every visible widget from the current state.
    pub(crate) fn render(self: &Rc<Self>) {
        self.refresh_grid();
        self.update_compare_bar();
        self.sync_filter_buttons();
        self.sync_overlay();
    }

    pub(crate) fn show_toast(&self, message: &str) {
        let toast = adw::Toast::new(message);
        self.widgets.toast_overlay.add_toast(toast);
    }

    pub(crate) fn show_about_dialog(self: &Rc<Self>) {
        if let Some(existing) = self.about_dialog.borrow().as_ref() {
            existing.present();
            return;
        }

        let version = env!("CARGO_PKG_VERSION");
        let dialog = gtk::Dialog::builder()
            .transient_for(&self.window)
            .modal(true)
            .title("About DistroHub")
            .resizable(false)
            .build();
        dialog.set_application(Some(&self.app));

        let content = dialog.content_area();
        content.set_margin_start(24);
        content.set_margin_end(24);
        content.set_margin_top(20);
        content.set_margin_bottom(20);
        content.set_spacing(12);

        let title = gtk::Label::builder()
            .label("DistroHub")
            .halign(gtk::Align::Start)
            .build();
        title.add_css_class("title-3");

        let version_label = gtk::Label::builder()
            .label(format!("Version {}", version))
            .halign(gtk::Align::Start)
            .build();
        version_label.add_css_class("dim-label");

        let record_count = self.state.borrow().records().len();
        let description = gtk::Label::builder()
            .label(format!(
                "Search, filter and compare {} Linux distributions side by side.",
                record_count
            ))
            .wrap(true)
            .wrap_mode(pango::WrapMode::WordChar)
            .halign(gtk::Align::Start)
            .build();
        description.set_xalign(0.0);

        content.append(&title);
        content.append(&version_label);
        content.append(&description);

        dialog.add_button("Close", gtk::ResponseType::Close);
        dialog.connect_response(|dialog, _| dialog.close());

        {
            let controller = Rc::downgrade(self);
            dialog.connect_close_request(move |_| {
                if let Some(controller) = controller.upgrade() {
                    controller.about_dialog.replace(None);
                }
                Propagation::Proceed
            });
        }

        dialog.present();
        self.about_dialog.replace(Some(dialog));
    }
}
