// src/cli.rs
//
// Headless front end: same pipeline as the GUI, prints the counts the GUI
// would show and writes the requested exports.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    config::{
        consts::{DEFAULT_OUT_DIR, SOURCE_PATH},
        options::{ExportOptions, TableRows},
    },
    data::Dataset,
    error::{Error, Result},
    export::{self, ExportKind},
    filter::{FilterSelection, SecondaryChoices},
    i18n::{self, Locale, Msg, tr, trf},
    log::{self, LogTarget},
    search::PageSize,
    store,
    view::{self, ViewRequest},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    Filtered,
    Page,
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "slv-schools", about = "Filter, search and export the El Salvador school registry")]
pub struct Args {
    /// Source table: .xlsx workbook (first sheet) or CSV
    #[arg(long, default_value = SOURCE_PATH)]
    pub source: PathBuf,

    /// UI language for headers and messages: en | es
    #[arg(long, default_value = "es")]
    pub locale: String,

    /// Primary region (departamento); defaults to the first one
    #[arg(long)]
    pub primary: Option<String>,

    /// Secondary region (municipio) inside --primary
    #[arg(long)]
    pub secondary: Option<String>,

    /// Case-insensitive text to look for in the displayed columns
    #[arg(long, default_value = "")]
    pub search: String,

    /// Rows per page: 50, 100, 200 or 500
    #[arg(long, default_value_t = 100)]
    pub page_size: usize,

    /// 1-based page number (clamped to the available pages)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Output directory for exports
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Which CSV(s) to write; nothing is written when omitted
    #[arg(long, value_enum)]
    pub export: Option<ExportArg>,

    /// Let the table and the filtered export use every match, not just the map-capped subset
    #[arg(long)]
    pub all_matches: bool,

    /// Print primary regions (or the secondary regions of --primary) and exit
    #[arg(long)]
    pub list_regions: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    if let Err(e) = log::init(LogTarget::Stderr) {
        eprintln!("Logging disabled: {e}");
    }
    i18n::validate()?;

    let ds = store::load_dataset(&args.source)?;
    run_with(&args, &ds)
}

/// Everything after argument parsing and loading; split out for tests.
pub fn run_with(args: &Args, ds: &Dataset) -> Result<()> {
    let locale = Locale::from_code(&args.locale)?;
    let req = ViewRequest {
        selection: FilterSelection::new(args.primary.as_deref(), args.secondary.as_deref()),
        search: args.search.clone(),
        page_size: PageSize::try_from(args.page_size)?,
        page: args.page,
        locale,
        table_rows: if args.all_matches { TableRows::AllMatches } else { TableRows::MapBound },
    };
    let view = view::render(ds, &req);

    // The GUI repairs stale selections; here a typo must not pick another region.
    if let Some(p) = args.primary.as_deref().filter(|p| !p.is_empty()) {
        if view.selection.primary != Some(p) {
            return Err(Error::UnknownRegion(s!(p)));
        }
    }
    if let Some(sec) = args.secondary.as_deref().filter(|s| !s.is_empty()) {
        if view.selection.secondary != Some(sec) {
            return Err(Error::UnknownRegion(s!(sec)));
        }
    }

    if args.list_regions {
        if args.primary.is_some() {
            if let SecondaryChoices::Options(options) = &view.choices.secondary {
                for s in options {
                    println!("{s}");
                }
            }
        } else {
            for p in &view.choices.primary {
                println!("{p}");
            }
        }
        return Ok(());
    }

    if let Some(p) = view.selection.primary {
        println!("{}: {}", tr(locale, Msg::PrimaryRegion), p);
    }
    if let Some(s) = view.selection.secondary {
        println!("{}: {}", tr(locale, Msg::SecondaryRegion), s);
    }
    println!("{}", trf(locale, Msg::NumberSchools, &[view.region.matched]));
    if view.is_truncated() {
        logw!("{}", trf(locale, Msg::TooMany, &[view.region.matched]));
    }
    println!("{}", trf(locale, Msg::TotalRecords, &[view.table_total]));
    if view.search_active {
        println!("{}", trf(locale, Msg::FoundRecords, &[view.matched_count()]));
    }
    println!(
        "{} {}/{} · {}",
        tr(locale, Msg::Page),
        view.page,
        view.total_pages(),
        trf(locale, Msg::ShowingRecords, &[view.showing(), view.matched_count()])
    );

    let kinds: &[ExportKind] = match args.export {
        None => &[],
        Some(ExportArg::Filtered) => &[ExportKind::Filtered],
        Some(ExportArg::Page) => &[ExportKind::Page],
        Some(ExportArg::Both) => &[ExportKind::Filtered, ExportKind::Page],
    };

    let out = ExportOptions::with_dir(&args.out);
    for &kind in kinds {
        let path = export::write(out.out_dir(), kind, &view)?;
        logf!("Export: {:?} rows={} → {}", kind, kind.row_count(&view), path.display());
        println!("Wrote {}", path.display());
    }
    Ok(())
}
