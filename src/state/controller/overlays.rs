use std::rc::Rc;

use anyhow::Context;
use gtk4 as gtk;

use gtk::prelude::*;
use gtk::{gdk, gio, glib};

use crate::LOG_DOMAIN;
use crate::catalog::distribution_by_id;
use crate::state::controller::AppController;
use crate::state::types::DetailTarget;
use crate::ui::{build_comparison_content, build_detail_content};

fn open_website(url: &str) -> anyhow::Result<()> {
    gio::AppInfo::launch_default_for_uri(url, None::<&gio::AppLaunchContext>)
        .with_context(|| format!("failed to open {url}"))
}

impl AppController {
    /// Brings the overlay window in line with the state's detail target.
    pub(crate) fn sync_overlay(self: &Rc<Self>) {
        let target = self.state.borrow().detail_target().cloned();
        if *self.overlay_target.borrow() == target {
            return;
        }

        self.close_overlay();
        self.overlay_target.replace(target.clone());

        let Some(target) = target else {
            return;
        };

        let (title, content) = match &target {
            DetailTarget::Record(id) => {
                let state = self.state.borrow();
                let Some(record) = state.detail_record() else {
                    glib::g_warning!(LOG_DOMAIN, "No record with id {} to show", id);
                    return;
                };
                let (content, widgets) = build_detail_content(record);

                let controller = Rc::downgrade(self);
                widgets.close_button.connect_clicked(move |_| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_overlay_close_requested();
                    }
                });

                let controller = Rc::downgrade(self);
                let id = record.id.clone();
                widgets.website_button.connect_clicked(move |_| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_website_requested(&id);
                    }
                });

                (record.name.clone(), content)
            }
            DetailTarget::Comparison => {
                let table = self.state.borrow().comparison_table();
                let (content, widgets) = build_comparison_content(&table);

                let controller = Rc::downgrade(self);
                widgets.close_button.connect_clicked(move |_| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_overlay_close_requested();
                    }
                });

                let controller = Rc::downgrade(self);
                widgets.clear_button.connect_clicked(move |_| {
                    if let Some(controller) = controller.upgrade() {
                        controller.on_clear_comparison();
                    }
                });

                ("Compare distributions".to_string(), content)
            }
        };

        let scroller = gtk::ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .child(&content)
            .build();
        scroller.set_policy(gtk::PolicyType::Never, gtk::PolicyType::Automatic);

        let (width, height) = match target {
            DetailTarget::Record(_) => (640, 720),
            DetailTarget::Comparison => (960, 720),
        };

        let overlay = gtk::Window::builder()
            .transient_for(&self.window)
            .modal(true)
            .destroy_with_parent(true)
            .title(title)
            .default_width(width)
            .default_height(height)
            .child(&scroller)
            .build();
        overlay.add_css_class("distrohub-window");

        let keys = gtk::EventControllerKey::new();
        let overlay_weak = overlay.downgrade();
        keys.connect_key_pressed(move |_, key, _, _| {
            if key != gdk::Key::Escape {
                return glib::Propagation::Proceed;
            }
            if let Some(overlay) = overlay_weak.upgrade() {
                overlay.close();
            }
            glib::Propagation::Stop
        });
        overlay.add_controller(keys);

        // Only fires for user-initiated closes; programmatic teardown goes through `destroy`.
        let controller = Rc::downgrade(self);
        overlay.connect_close_request(move |_| {
            if let Some(controller) = controller.upgrade() {
                controller.overlay_window.replace(None);
                controller.overlay_target.replace(None);
                controller.state.borrow_mut().close_detail();
                controller.render();
            }
            glib::Propagation::Proceed
        });

        overlay.present();
        self.overlay_window.replace(Some(overlay));
    }

    /// Tears down an open overlay without touching the state.
    pub(crate) fn close_overlay(&self) {
        if let Some(existing) = self.overlay_window.take() {
            existing.destroy();
        }
        self.overlay_target.replace(None);
    }

    pub(crate) fn on_overlay_close_requested(self: &Rc<Self>) {
        self.state.borrow_mut().close_detail();
        self.render();
    }

    pub(crate) fn on_website_requested(&self, id: &str) {
        let Some(record) = distribution_by_id(id) else {
            glib::g_warning!(LOG_DOMAIN, "No website known for {}", id);
            return;
        };
        if let Err(err) = open_website(&record.website) {
            glib::g_warning!(LOG_DOMAIN, "{:#}", err);
            self.show_toast("Could not open the website");
        }
    }
}
