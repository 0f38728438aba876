// src/gui/components/filter_panel.rs
//
// Left panel: language, the two region selectors, match count and the
// table-rows policy. Changes land in `state` and take effect next frame.

use eframe::egui::{self, Color32, RichText};

use crate::{
    config::{options::TableRows, state::AppState},
    filter::{FilterSelection, SecondaryChoices},
    i18n::{Locale, Msg, tr, trf},
    view::ViewModel,
};

pub fn draw(ui: &mut egui::Ui, state: &mut AppState, view: &ViewModel<'_>) {
    let loc = view.locale;

    // Language
    ui.label(format!("🌐 {}", tr(loc, Msg::Language)));
    let mut locale = state.options.view.locale;
    egui::ComboBox::from_id_salt("language")
        .selected_text(locale.display_name())
        .show_ui(ui, |ui| {
            for l in Locale::ALL {
                ui.selectable_value(&mut locale, l, l.display_name());
            }
        });
    if locale != state.options.view.locale {
        logd!("UI: Locale → {}", locale.code());
        state.options.view.locale = locale;
    }

    ui.separator();
    ui.heading(tr(loc, Msg::Filters));

    primary_selector(ui, state, view);
    ui.add_space(4.0);
    secondary_selector(ui, state, view);

    ui.add_space(8.0);
    ui.label(RichText::new(trf(loc, Msg::NumberSchools, &[view.region.matched])).strong());

    if view.is_truncated() {
        ui.colored_label(
            Color32::from_rgb(0xF0, 0xA0, 0x20),
            trf(loc, Msg::TooMany, &[view.region.matched]),
        );
    }

    ui.add_space(8.0);
    let mut all = state.options.view.table_rows == TableRows::AllMatches;
    if ui.checkbox(&mut all, tr(loc, Msg::AllMatches)).changed() {
        state.options.view.table_rows = if all { TableRows::AllMatches } else { TableRows::MapBound };
        state.reset_page();
        logd!("UI: Table rows → {:?}", state.options.view.table_rows);
    }
}

fn primary_selector(ui: &mut egui::Ui, state: &mut AppState, view: &ViewModel<'_>) {
    let loc = view.locale;
    ui.label(tr(loc, Msg::PrimaryRegion));

    let Some(current) = view.selection.primary else {
        // No region values at all: single disabled placeholder
        ui.add_enabled_ui(false, |ui| {
            egui::ComboBox::from_id_salt("primary_region")
                .selected_text("—")
                .show_ui(ui, |_| {});
        });
        return;
    };

    let mut picked: Option<&str> = None;
    egui::ComboBox::from_id_salt("primary_region")
        .selected_text(current)
        .show_ui(ui, |ui| {
            for &p in &view.choices.primary {
                if ui.selectable_label(p == current, p).clicked() {
                    picked = Some(p);
                }
            }
        });

    if let Some(p) = picked.filter(|p| *p != current) {
        logd!("UI: Primary region → {}", p);
        state.gui.selection = FilterSelection::new(Some(p), None);
        state.reset_page();
    }
}

fn secondary_selector(ui: &mut egui::Ui, state: &mut AppState, view: &ViewModel<'_>) {
    let loc = view.locale;
    ui.label(tr(loc, Msg::SecondaryRegion));

    let options = match &view.choices.secondary {
        SecondaryChoices::Options(options) => options,
        SecondaryChoices::Disabled => {
            ui.add_enabled_ui(false, |ui| {
                egui::ComboBox::from_id_salt("secondary_region")
                    .selected_text(tr(loc, Msg::SelectFirst))
                    .show_ui(ui, |_| {});
            });
            return;
        }
    };

    let current = view.selection.secondary;
    let mut picked: Option<Option<&str>> = None;
    egui::ComboBox::from_id_salt("secondary_region")
        .selected_text(current.unwrap_or(""))
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), " ").clicked() {
                picked = Some(None);
            }
            for &s in options {
                if ui.selectable_label(current == Some(s), s).clicked() {
                    picked = Some(Some(s));
                }
            }
        });

    if let Some(s) = picked.filter(|s| *s != current) {
        logd!("UI: Secondary region → {:?}", s);
        state.gui.selection = FilterSelection::new(view.selection.primary, s);
        state.reset_page();
    }
}
