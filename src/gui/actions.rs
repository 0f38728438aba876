// src/gui/actions.rs
use crate::{
    config::state::AppState,
    export::{self, ExportKind},
    i18n::{Msg, trf},
    view::ViewModel,
};

/// Write `kind` into the export directory and report the outcome in `status`.
pub fn export(state: &mut AppState, status: &mut String, view: &ViewModel<'_>, kind: ExportKind) {
    // normalize out dir first
    if state.gui.out_dir_dirty {
        state.options.export.set_dir(&state.gui.out_dir_text);
        logf!("Export: Out dir set → {}", state.options.export.out_dir().display());
        state.gui.out_dir_dirty = false;
    }

    // An empty view still exports its header row.
    let locale = view.locale;
    let rows = kind.row_count(view);
    logf!("Export: Begin kind={:?}, rows={}, page={}", kind, rows, view.page);

    *status = match export::write(state.options.export.out_dir(), kind, view) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("{} {}", trf(locale, Msg::ExportDone, &[rows]), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
}
