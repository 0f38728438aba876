// src/gui/app.rs
use std::{
    error::Error,
    path::{Path, PathBuf},
};

use eframe::egui;

use crate::{
    config::{consts::*, state::AppState},
    data::Dataset,
    store,
    view::{self, ViewModel},
};

use super::components;

pub fn run(options: eframe::NativeOptions, source: PathBuf) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(AppState::default(), &source)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once, read-only for the rest of the run
    pub dataset: Dataset,

    // load/parse failure shown as a banner; the app keeps running on an empty table
    pub load_error: Option<String>,

    // last export outcome
    pub status: String,

    // truncation already reported for this match count
    last_truncated: Option<usize>,
}

impl App {
    pub fn new(mut state: AppState, source: &Path) -> Self {
        let (dataset, load_error) = match store::load_dataset(source) {
            Ok(ds) => (ds, None),
            Err(e) => {
                loge!("Load: {}", e);
                (Dataset::empty(), Some(e.to_string()))
            }
        };

        state.gui.out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        logf!(
            "Init: rows={}, primary regions={}, locale={}",
            dataset.len(),
            dataset.primary_regions().len(),
            state.options.view.locale.code()
        );

        Self {
            state,
            dataset,
            load_error,
            status: s!(),
            last_truncated: None,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let App { state, dataset, load_error, status, last_truncated } = self;

        // Whole pipeline re-runs every frame; it only reads the dataset.
        let view = view::render(dataset, &state.request());
        state.gui.page = view.page;
        note_truncation(last_truncated, &view);

        egui::SidePanel::left("filters")
            .resizable(false)
            .min_width(240.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, state, &view);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::header::draw(ui, &view, load_error.as_deref());

            ui.separator();

            components::search_bar::draw(ui, state, &view);
            components::pager::draw(ui, state, &view);
            components::data_table::draw(ui, state, &view);

            ui.separator();

            components::export_bar::draw(ui, state, status, &view);

            ui.add_space(6.0);
            ui.small(SOURCE_NOTE);
        });
    }
}

/// Log the truncation warning once per distinct oversized selection.
fn note_truncation(last: &mut Option<usize>, view: &ViewModel<'_>) {
    let now = view.is_truncated().then_some(view.region.matched);
    if now != *last {
        if let Some(n) = now {
            logw!("View: {} rows match, map and table capped at {}", n, MAP_ROW_LIMIT);
        }
        *last = now;
    }
}
