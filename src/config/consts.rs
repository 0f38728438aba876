// src/config/consts.rs

// Source table
pub const SOURCE_PATH: &str = "data/escuelas_slv.xlsx";

pub const CODE_FIELD: &str = "slv-id";
pub const PRIMARY_FIELD: &str = "slv-admin1";
pub const SECONDARY_FIELD: &str = "slv-admin2";
pub const NAME_FIELD: &str = "slv-nombre";
pub const ADDRESS_FIELD: &str = "slv-direccion";

/// Display order of the table and of every export.
pub const DISPLAY_FIELDS: [&str; 5] = [
    CODE_FIELD,
    PRIMARY_FIELD,
    SECONDARY_FIELD,
    NAME_FIELD,
    ADDRESS_FIELD,
];

pub const SOURCE_NOTE: &str = "Fuente/Source: Ministerio de educación de El Salvador (MINED) año 2024";

// Local store
pub const LOG_FILE: &str = ".store/debug.log";

// View
pub const MAP_ROW_LIMIT: usize = 10_000;
pub const TABLE_HEIGHT: f32 = 400.0;
pub const WINDOW_TITLE: &str = "El Salvador";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const FILTERED_FILE: &str = "filtered_schools.csv";
pub const PAGE_FILE_STEM: &str = "schools_page_";
