// src/gui/components/data_table.rs
//
// Draws the current page. Purely a view: the only state it writes is the
// header-click sort, and the only side effect is copying a school code.

use eframe::egui::{self, Label, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::{consts::TABLE_HEIGHT, state::AppState},
    data::Record,
    i18n::{Msg, tr},
    search::{SortKey, sort_records},
    view::ViewModel,
};

const WIDTHS: [f32; 4] = [110.0, 130.0, 150.0, 260.0];

pub fn draw(ui: &mut egui::Ui, state: &mut AppState, view: &ViewModel<'_>) {
    let loc = view.locale;
    let headers = view.headers();
    let sort = state.gui.sort;

    let mut rows: Vec<&Record> = view.page_records().collect();
    if let Some(key) = sort {
        sort_records(&mut rows, key);
    }

    let mut clicked_col: Option<usize> = None;
    let mut copied: Option<&str> = None;

    let mut table = TableBuilder::new(ui)
        .id_salt("schools_table")
        .striped(true)
        .resizable(true)
        .min_scrolled_height(TABLE_HEIGHT)
        .max_scroll_height(TABLE_HEIGHT);
    for w in WIDTHS {
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }
    // Last column takes the remaining width
    table = table.column(Column::remainder().at_least(120.0).clip(true));

    table
        .header(24.0, |mut header| {
            for (ci, h) in headers.iter().enumerate() {
                header.col(|ui| {
                    let arrow = match sort {
                        Some(k) if k.column == ci && k.descending => " ⏷",
                        Some(k) if k.column == ci => " ⏶",
                        _ => "",
                    };
                    let resp = ui.add(
                        Label::new(RichText::new(format!("{h}{arrow}")).strong())
                            .sense(Sense::click())
                            .selectable(false),
                    );
                    if resp.clicked() {
                        clicked_col = Some(ci);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(&record) = rows.get(row.index()) else { return };
                for (ci, cell) in record.cells().into_iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if ci == 0 {
                            let resp = ui
                                .add(Label::new(cell).sense(Sense::click()))
                                .on_hover_text(tr(loc, Msg::ClickToCopy));
                            if resp.clicked() {
                                copied = Some(cell);
                            }
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });

    if let Some(ci) = clicked_col {
        state.gui.sort = SortKey::cycle(sort, ci);
        logd!("UI: Sort → {:?}", state.gui.sort);
    }
    if let Some(code) = copied {
        ui.ctx().copy_text(s!(code));
        logd!("UI: Copied code {}", code);
    }
}
