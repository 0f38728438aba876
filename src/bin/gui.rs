// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::{Path, PathBuf};

use eframe::egui::{IconData, ViewportBuilder};
use slv_schools::{
    config::{consts::{LOG_FILE, SOURCE_PATH}, state::GuiState},
    gui, i18n,
    log::{self, LogTarget},
};

/// Map-pin style disc: blue ring, white centre.
fn app_icon() -> IconData {
    let size = 64u32;
    let c = (size as f32 - 1.0) / 2.0;
    let rgba = image::RgbaImage::from_fn(size, size, |x, y| {
        let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
        if d < 10.0 {
            image::Rgba([0xFF, 0xFF, 0xFF, 0xFF])
        } else if d < 30.0 {
            image::Rgba([0x1F, 0x5F, 0xBF, 0xFF])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    if let Err(e) = log::init(LogTarget::File(Path::new(LOG_FILE))) {
        eprintln!("Logging disabled: {e}");
    }

    if let Err(e) = i18n::validate() {
        eprintln!("Broken string table: {e}");
        std::process::exit(1);
    }

    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, PathBuf::from(SOURCE_PATH)) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
