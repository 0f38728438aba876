// src/gui/components/header.rs
//
// Title block, load warning, map summary and table heading.

use eframe::egui::{self, Color32, RichText};

use crate::{
    i18n::{Msg::*, tr, trf},
    view::ViewModel,
};

const WARN: Color32 = Color32::from_rgb(0xF0, 0xA0, 0x20);

pub fn draw(ui: &mut egui::Ui, view: &ViewModel<'_>, load_error: Option<&str>) {
    let loc = view.locale;

    ui.heading(tr(loc, Title));
    ui.label(trf(loc, Subtitle, &[view.dataset_total()]));

    if let Some(err) = load_error {
        ui.colored_label(WARN, format!("{} ({err})", tr(loc, LoadFailed)));
    }

    ui.add_space(4.0);
    ui.label(RichText::new(tr(loc, MapView)).strong());
    ui.label(trf(loc, MapInfo, &[view.map_count()]));

    ui.add_space(4.0);
    ui.label(RichText::new(tr(loc, DataTable)).strong().size(16.0));
    ui.label(tr(loc, TableSubtitle));
}
