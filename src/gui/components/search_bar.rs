// src/gui/components/search_bar.rs

use eframe::egui::{self, RichText};

use crate::{
    config::state::AppState,
    i18n::{Msg, tr, trf},
    view::ViewModel,
};

pub fn draw(ui: &mut egui::Ui, state: &mut AppState, view: &ViewModel<'_>) {
    let loc = view.locale;

    ui.horizontal(|ui| {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut state.gui.search)
                .hint_text(tr(loc, Msg::SearchPlaceholder))
                .desired_width(420.0),
        );
        if resp.changed() {
            state.reset_page();
            logd!("UI: Search → {:?}", state.gui.search);
        }

        ui.label(RichText::new(trf(loc, Msg::TotalRecords, &[view.table_total])).strong());
    });

    if view.search_active {
        ui.label(
            RichText::new(trf(loc, Msg::FoundRecords, &[view.matched_count()]))
                .color(ui.visuals().hyperlink_color),
        );
    }
}
