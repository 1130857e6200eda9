use std::rc::Rc;

use gtk4 as gtk;

use gtk::glib;
use gtk::prelude::*;

use crate::LOG_DOMAIN;
use crate::catalog::{CompareToggle, MAX_COMPARE};
use crate::categories::CategoryFilter;
use crate::helpers::{clear_flowbox, set_toggle_button_state};
use crate::state::controller::AppController;
use crate::state::types::CardAction;
use crate::ui::{apply_card_selection, build_distribution_card};

impl AppController {
    pub(crate) fn on_query_changed(self: &Rc<Self>, text: String) {
        {
            let mut state = self.state.borrow_mut();
            if state.query() == text {
                return;
            }
            state.set_query(text);
        }
        self.render();
    }

    pub(crate) fn on_category_selected(self: &Rc<Self>, filter: CategoryFilter) {
        {
            let mut state = self.state.borrow_mut();
            if state.category_filter() == filter {
                return;
            }
            state.set_category_filter(filter);
        }
        self.render();
    }

    pub(crate) fn on_compare_mode_toggled(self: &Rc<Self>, active: bool) {
        {
            let mut state = self.state.borrow_mut();
            if state.compare_mode() == active {
                return;
            }
            state.set_compare_mode(active);
        }
        self.render();
    }

    pub(crate) fn on_compare_mode_shortcut(self: &Rc<Self>) {
        let enabled = self.state.borrow_mut().toggle_compare_mode();
        glib::g_debug!(LOG_DOMAIN, "Compare mode {}", if enabled { "on" } else { "off" });
        self.render();
    }

    pub(crate) fn on_card_activated(self: &Rc<Self>, id: &str) {
        let action = self.state.borrow_mut().activate_card(id);
        match &action {
            CardAction::Compare(CompareToggle::Full) => {
                glib::g_debug!(
                    LOG_DOMAIN,
                    "Compare set already holds {} entries; ignoring {}",
                    MAX_COMPARE,
                    id
                );
                return;
            }
            CardAction::Compare(outcome) => {
                glib::g_debug!(LOG_DOMAIN, "Compare toggle for {}: {:?}", id, outcome);
            }
            CardAction::OpenDetail => {
                glib::g_debug!(LOG_DOMAIN, "Opening details for {}", id);
            }
            CardAction::Ignored => {
                glib::g_warning!(LOG_DOMAIN, "Card activated for unknown record {}", id);
                return;
            }
        }
        self.render();
    }

    pub(crate) fn on_compare_requested(self: &Rc<Self>) {
        if !self.state.borrow_mut().open_comparison() {
            return;
        }
        self.render();
    }

    pub(crate) fn on_clear_comparison(self: &Rc<Self>) {
        self.state.borrow_mut().clear_comparison();
        self.render();
    }

    pub(crate) fn refresh_grid(&self) {
        let state = self.state.borrow();
        let visible = state.visible_records();
        let compare_mode = state.compare_mode();
        let compare_set = state.compare_set();
        let ids: Vec<String> = visible.iter().map(|record| record.id.clone()).collect();

        let grid = &self.widgets.browse.grid;
        let unchanged = *self.shown_ids.borrow() == ids;
        if unchanged {
            // Restyle in place so an activated child is never removed mid-signal.
            let mut child = grid.first_child();
            while let Some(widget) = child {
                child = widget.next_sibling();
                if let Ok(card) = widget.downcast::<gtk::FlowBoxChild>() {
                    let selected = compare_set.contains(card.widget_name().as_str());
                    apply_card_selection(&card, compare_mode, selected);
                }
            }
        } else {
            clear_flowbox(grid);
            for record in &visible {
                let card =
                    build_distribution_card(record, compare_mode, compare_set.contains(&record.id));
                grid.insert(&card, -1);
            }
            self.shown_ids.replace(ids);
        }

        let stack = &self.widgets.browse.results_stack;
        if visible.is_empty() {
            stack.set_visible_child_name("empty");
        } else {
            stack.set_visible_child_name("grid");
        }
        self.widgets.browse.results_label.set_text(&format!(
            "Showing {} of {} distributions",
            visible.len(),
            state.records().len()
        ));
    }

    pub(crate) fn update_compare_bar(&self) {
        let state = self.state.borrow();
        let selected = state.compare_set().len();
        let browse = &self.widgets.browse;

        browse
            .compare_revealer
            .set_reveal_child(state.compare_mode() || selected > 0);
        browse
            .compare_status
            .set_text(&format!("{selected} of {MAX_COMPARE} selected"));
        browse
            .compare_button
            .set_label(&format!("Compare ({selected})"));
        browse.compare_button.set_sensitive(state.can_compare());
        browse
            .clear_compare_button
            .set_sensitive(!state.compare_set().is_empty());
    }

    pub(crate) fn sync_filter_buttons(&self) {
        // Setting a button fires `toggled`, which re-enters the controller; read state first.
        let (filter, compare_mode) = {
            let state = self.state.borrow();
            (state.category_filter(), state.compare_mode())
        };
        for (button_filter, button) in &self.widgets.browse.category_buttons {
            set_toggle_button_state(button, *button_filter == filter);
        }
        set_toggle_button_state(&self.widgets.browse.compare_mode_button, compare_mode);
    }
}
