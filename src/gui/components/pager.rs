// src/gui/components/pager.rs
//
// Rows-per-page selector and the page stepper. The stepper never leaves
// [1, total_pages]; `render` clamps again in case the data shrank.

use eframe::egui::{self, RichText};

use crate::{
    config::state::AppState,
    i18n::{Msg, tr, trf},
    search::PageSize,
    view::ViewModel,
};

pub fn draw(ui: &mut egui::Ui, state: &mut AppState, view: &ViewModel<'_>) {
    let loc = view.locale;
    let total = view.total_pages();

    ui.horizontal(|ui| {
        ui.label(tr(loc, Msg::RowsPerPage));
        let mut size = state.options.view.page_size;
        egui::ComboBox::from_id_salt("rows_per_page")
            .selected_text(size.get().to_string())
            .width(70.0)
            .show_ui(ui, |ui| {
                for p in PageSize::ALL {
                    ui.selectable_value(&mut size, p, p.get().to_string());
                }
            });
        if size != state.options.view.page_size {
            logd!("UI: Page size → {}", size.get());
            state.options.view.page_size = size;
            state.reset_page();
        }

        ui.separator();

        ui.label(tr(loc, Msg::Page));
        let mut page = view.page;
        if ui.add_enabled(page > 1, egui::Button::new("◀")).clicked() {
            page -= 1;
        }
        ui.add(egui::DragValue::new(&mut page).range(1..=total).speed(1));
        if ui.add_enabled(page < total, egui::Button::new("▶")).clicked() {
            page += 1;
        }
        ui.label(format!("/ {total}"));

        if page != view.page {
            state.gui.page = page.clamp(1, total);
        }
    });

    ui.label(
        RichText::new(trf(loc, Msg::ShowingRecords, &[view.showing(), view.matched_count()]))
            .small()
            .weak(),
    );
}
