// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::state::AppState,
    export::ExportKind,
    gui::actions,
    i18n::{Msg, tr},
    view::ViewModel,
};

pub fn draw(ui: &mut egui::Ui, state: &mut AppState, status: &mut String, view: &ViewModel<'_>) {
    let loc = view.locale;

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label(tr(loc, Msg::OutputDir));
        if ui
            .add(
                egui::TextEdit::singleline(&mut state.gui.out_dir_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(260.0),
            )
            .changed()
        {
            state.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", state.gui.out_dir_text);
        }
    });

    // --- Actions ---
    ui.horizontal(|ui| {
        let filtered_label = if view.is_narrowed() { Msg::DownloadFiltered } else { Msg::DownloadAll };

        let mut filtered = ui.button(tr(loc, filtered_label));
        if !view.is_narrowed() {
            filtered = filtered.on_hover_text(tr(loc, Msg::DownloadDisabledHelp));
        }
        if filtered.clicked() {
            actions::export(state, status, view, ExportKind::Filtered);
        }

        if ui.button(tr(loc, Msg::DownloadVisible)).clicked() {
            actions::export(state, status, view, ExportKind::Page);
        }

        if !status.is_empty() {
            ui.label(status.as_str());
        }
    });
}
