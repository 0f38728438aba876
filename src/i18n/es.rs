// src/i18n/es.rs
use super::Msg::{self, *};

pub(super) fn text(msg: Msg) -> &'static str {
    match msg {
        Title => "📍 Escuelas El Salvador - Consulta Interactiva",
        Subtitle => "Explora {} puntos de escuelas con filtrado y ordenamiento.",
        Filters => "🎛️ Filtros",
        Code => "Código de escuela",
        Address => "Domicilio",
        PrimaryRegion => "Departamento",
        SecondaryRegion => "Municipio",
        SelectFirst => "Selecciona Departamento primero",
        NumberSchools => "🗺️ {} escuelas registradas",
        MapView => "📍 Vista de Mapa",
        MapInfo => "ℹ️ Mostrando {} puntos. Haz clic en un marcador para ver el código.",
        TooMany => "⚠️ {} escuelas. Considera filtrar por Municipio para un mejor rendimiento.",
        LoadFailed => "⚠️ No se pudo leer la tabla de escuelas",
        DataTable => "📊 Tabla de Datos",
        TableSubtitle => "Mostrando datos basados en filtros. Usa búsqueda y ordenamiento de columnas.",
        SearchPlaceholder => "🔍 Buscar en tabla (nombre, localidad, etc.)",
        TotalRecords => "Total: {} registros",
        FoundRecords => "Se encontraron {} registros coincidentes",
        ShowingRecords => "Mostrando {} de {} registros",
        Page => "Página",
        RowsPerPage => "Filas por página",
        AllMatches => "La tabla muestra todas las coincidencias (sin límite de mapa)",
        DownloadAll => "💾 Descargar Todo",
        DownloadFiltered => "💾 Descargar Filtrado",
        DownloadVisible => "💾 Descargar Página Actual",
        DownloadDisabledHelp => "Usa búsqueda para filtrar datos primero",
        OutputDir => "Carpeta de salida",
        ExportDone => "Se guardaron {} registros en",
        Language => "Idioma",
        Name => "Nombre de Escuela",
        ClickToCopy => "Clic para copiar el código",
    }
}
