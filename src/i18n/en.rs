// src/i18n/en.rs
use super::Msg::{self, *};

pub(super) fn text(msg: Msg) -> &'static str {
    match msg {
        Title => "📍 Schools El Salvador - Interactive Search",
        Subtitle => "Explore {} school points with filtering and sorting.",
        Filters => "🎛️ Filters",
        Code => "School code",
        Address => "Address",
        PrimaryRegion => "State",
        SecondaryRegion => "Municipality",
        SelectFirst => "Select State first",
        NumberSchools => "🗺️ {} schools registered",
        MapView => "📍 Map View",
        MapInfo => "ℹ️ Displaying {} points. Click on a marker to view the code.",
        TooMany => "⚠️ {} schools. Consider filtering by Municipality for better performance.",
        LoadFailed => "⚠️ Could not read the school table",
        DataTable => "📊 Data Table",
        TableSubtitle => "Showing data based on filters. Use search and column sorting to explore.",
        SearchPlaceholder => "🔍 Search in table (name, locality, etc.)",
        TotalRecords => "Total: {} records",
        FoundRecords => "Found {} matching records",
        ShowingRecords => "Showing {} of {} records",
        Page => "Page",
        RowsPerPage => "Rows per page",
        AllMatches => "Table shows every match (no map limit)",
        DownloadAll => "💾 Download All Data",
        DownloadFiltered => "💾 Download Filtered",
        DownloadVisible => "💾 Download Current Page",
        DownloadDisabledHelp => "Use search to filter data first",
        OutputDir => "Output folder",
        ExportDone => "Saved {} records to",
        Language => "Language",
        Name => "School Name",
        ClickToCopy => "Click to copy code",
    }
}
