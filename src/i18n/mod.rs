// src/i18n/mod.rs
//! UI strings for the two supported locales.
//!
//! Every message is a variant of `Msg`, and each locale table is an
//! exhaustive `match`, so a key missing from one locale does not compile.
//! Templates may carry `{}` placeholders; they are filled in order by
//! `trf` with thousands-grouped counts. `validate` checks placeholder
//! arity at startup.

mod en;
mod es;

use num_format::{Locale as NumLocale, ToFormattedString};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    #[default]
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Name shown in the language selector (always in its own language).
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(Error::UnknownLocale(s!(other))),
        }
    }

    /// Number formatting rules for counts. es-SV groups with commas, same as en.
    pub fn number_locale(self) -> NumLocale {
        match self {
            Locale::En => NumLocale::en,
            Locale::Es => NumLocale::es_SV,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Msg {
    Title,
    Subtitle,
    Filters,
    Code,
    Address,
    PrimaryRegion,
    SecondaryRegion,
    SelectFirst,
    NumberSchools,
    MapView,
    MapInfo,
    TooMany,
    LoadFailed,
    DataTable,
    TableSubtitle,
    SearchPlaceholder,
    TotalRecords,
    FoundRecords,
    ShowingRecords,
    Page,
    RowsPerPage,
    AllMatches,
    DownloadAll,
    DownloadFiltered,
    DownloadVisible,
    DownloadDisabledHelp,
    OutputDir,
    ExportDone,
    Language,
    Name,
    ClickToCopy,
}

impl Msg {
    pub const ALL: [Msg; 31] = [
        Msg::Title,
        Msg::Subtitle,
        Msg::Filters,
        Msg::Code,
        Msg::Address,
        Msg::PrimaryRegion,
        Msg::SecondaryRegion,
        Msg::SelectFirst,
        Msg::NumberSchools,
        Msg::MapView,
        Msg::MapInfo,
        Msg::TooMany,
        Msg::LoadFailed,
        Msg::DataTable,
        Msg::TableSubtitle,
        Msg::SearchPlaceholder,
        Msg::TotalRecords,
        Msg::FoundRecords,
        Msg::ShowingRecords,
        Msg::Page,
        Msg::RowsPerPage,
        Msg::AllMatches,
        Msg::DownloadAll,
        Msg::DownloadFiltered,
        Msg::DownloadVisible,
        Msg::DownloadDisabledHelp,
        Msg::OutputDir,
        Msg::ExportDone,
        Msg::Language,
        Msg::Name,
        Msg::ClickToCopy,
    ];

    /// Number of `{}` placeholders the template takes.
    pub fn arity(self) -> usize {
        match self {
            Msg::Subtitle
            | Msg::NumberSchools
            | Msg::MapInfo
            | Msg::TooMany
            | Msg::TotalRecords
            | Msg::FoundRecords
            | Msg::ExportDone => 1,
            Msg::ShowingRecords => 2,
            _ => 0,
        }
    }

    /// Stable key name, used in diagnostics.
    pub fn key(self) -> &'static str {
        match self {
            Msg::Title => "title",
            Msg::Subtitle => "subtitle",
            Msg::Filters => "filters",
            Msg::Code => "escuela_codigo",
            Msg::Address => "domicilio",
            Msg::PrimaryRegion => "departamento",
            Msg::SecondaryRegion => "municipio",
            Msg::SelectFirst => "select_first",
            Msg::NumberSchools => "number_schools",
            Msg::MapView => "map_view",
            Msg::MapInfo => "map_info",
            Msg::TooMany => "too_many",
            Msg::LoadFailed => "load_failed",
            Msg::DataTable => "data_table",
            Msg::TableSubtitle => "table_subtitle",
            Msg::SearchPlaceholder => "search_placeholder",
            Msg::TotalRecords => "total_records",
            Msg::FoundRecords => "found_records",
            Msg::ShowingRecords => "showing_records",
            Msg::Page => "page",
            Msg::RowsPerPage => "rows_per_page",
            Msg::AllMatches => "all_matches",
            Msg::DownloadAll => "download_all",
            Msg::DownloadFiltered => "download_filtered",
            Msg::DownloadVisible => "download_visible",
            Msg::DownloadDisabledHelp => "download_disabled_help",
            Msg::OutputDir => "output_dir",
            Msg::ExportDone => "export_done",
            Msg::Language => "language",
            Msg::Name => "name",
            Msg::ClickToCopy => "click_to_copy",
        }
    }
}

/// Raw template for `msg` in `locale`.
pub fn tr(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::En => en::text(msg),
        Locale::Es => es::text(msg),
    }
}

/// Template with its placeholders filled, in order, by grouped counts.
/// Missing arguments leave the placeholder empty; extra ones are ignored.
pub fn trf(locale: Locale, msg: Msg, args: &[usize]) -> String {
    debug_assert_eq!(args.len(), msg.arity(), "wrong argument count for `{}`", msg.key());

    let template = tr(locale, msg);
    let mut out = String::with_capacity(template.len() + 8 * args.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(at) = rest.find("{}") {
        out.push_str(&rest[..at]);
        if let Some(&n) = args.next() {
            out.push_str(&format_count(locale, n));
        }
        rest = &rest[at + 2..];
    }
    out.push_str(rest);
    out
}

/// `1234567` → `1,234,567`
pub fn format_count(locale: Locale, n: usize) -> String {
    n.to_formatted_string(&locale.number_locale())
}

/// Check every template in every locale against `Msg::arity`.
pub fn validate() -> Result<()> {
    for locale in Locale::ALL {
        for msg in Msg::ALL {
            let found = tr(locale, msg).matches("{}").count();
            if found != msg.arity() {
                return Err(Error::Template {
                    key: msg.key(),
                    locale: locale.code(),
                    expected: msg.arity(),
                    found,
                });
            }
        }
    }
    Ok(())
}
