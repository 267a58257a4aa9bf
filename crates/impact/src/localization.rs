use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Locale
// =============================================================================

/// Active display language. Export filenames never depend on it.
#[derive(
    Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

/// A string table maps localization keys to their translated text for a single locale.
pub type StringTable = &'static [(&'static str, &'static str)];

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Spanish];

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    /// Human-readable name, in its own language.
    pub fn name(self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Spanish => "Español",
        }
    }

    /// Parse a locale code such as `es`, `ES` or `es-CL`.
    pub fn from_code(code: &str) -> Option<Self> {
        let language = code.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(language))
    }

    fn table(self) -> StringTable {
        match self {
            Locale::English => ENGLISH,
            Locale::Spanish => SPANISH,
        }
    }

    /// Look up a localization key, falling back to English when the active
    /// table lacks it.
    pub fn get(self, key: &str) -> Option<&'static str> {
        lookup(self.table(), key).or_else(|| lookup(ENGLISH, key))
    }

    /// Translate a key, or return the key itself if no table has it.
    pub fn t<'a>(self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Translate a key and substitute `{name}` placeholders.
    pub fn fill(self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }
}

fn lookup(table: StringTable, key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

// =============================================================================
// String tables
// =============================================================================

const ENGLISH: StringTable = &[
    ("app.title", "✨ Impact Visualizer - Project P11"),
    (
        "app.subtitle",
        "Microbial consortia for the restoration of degraded agricultural soils",
    ),
    (
        "app.intro",
        "Adjust the parameters to explore how the project's environmental and economic impact \
         projections change across scenarios of treated surface, organic carbon increment and \
         water reduction.",
    ),
    ("sidebar.header", "Simulation Parameters"),
    ("sidebar.reset", "Reset to defaults"),
    ("sidebar.language", "Language"),
    ("sidebar.version", "Visualizer version: {version}"),
    ("sidebar.built_with", "Built with Bevy and egui"),
    ("param.surface_ha", "Treated surface (ha)"),
    (
        "param.surface_ha.help",
        "Agricultural surface in hectares treated with the microbial consortia.",
    ),
    ("param.carbon_increment", "Organic carbon increment (t C/ha)"),
    (
        "param.carbon_increment.help",
        "Annual increase of soil organic carbon per hectare.",
    ),
    ("param.irrigation_baseline", "Baseline irrigation use (m³/ha)"),
    (
        "param.irrigation_baseline.help",
        "Irrigation water use per hectare without the project.",
    ),
    ("param.water_reduction_pct", "Expected water reduction (%)"),
    (
        "param.water_reduction_pct.help",
        "Reduction of irrigation water use achieved by the project.",
    ),
    ("param.production_volume", "Treated production volume (t/year)"),
    (
        "param.production_volume.help",
        "Annual agricultural production benefiting from the consortia.",
    ),
    (
        "param.fertilizer_substitution_pct",
        "Fertilizer substitution rate (%)",
    ),
    (
        "param.fertilizer_substitution_pct.help",
        "Share of synthetic fertilizer that the bio-input can replace.",
    ),
    ("param.bioinput_price", "Bio-input price (CLP/t)"),
    (
        "param.bioinput_price.help",
        "Estimated sale price of the bio-input per tonne.",
    ),
    ("results.header", "Projected Annual Results"),
    ("metric.co2_captured", "🌳 CO₂ Captured"),
    (
        "caption.co2_captured",
        "Carbon dioxide equivalent captured every year.",
    ),
    ("metric.water_saved", "💧 Water Saved"),
    ("caption.water_saved", "Irrigation water saved in agriculture."),
    ("metric.agrochemicals_avoided", "🧪 Agrochemicals Avoided"),
    (
        "caption.agrochemicals_avoided",
        "Synthetic agrochemicals whose use is avoided.",
    ),
    ("metric.revenue_generated", "💰 Revenue Generated"),
    (
        "caption.revenue_generated",
        "Additional revenue from bio-input sales.",
    ),
    ("metric.strategic_alliances", "🤝 Strategic Alliances"),
    (
        "caption.strategic_alliances",
        "Strategic alliances established by the project.",
    ),
    ("metric.rd_investment", "🔬 R&D Investment"),
    (
        "caption.rd_investment",
        "Committed research and development investment.",
    ),
    ("charts.header", "📊 Graphical Impact Analysis"),
    ("chart.baseline", "Baseline"),
    ("chart.projection", "Projection"),
    ("chart.title.co2_captured", "CO₂ Captured"),
    ("chart.title.water_saved", "Water Saved"),
    ("chart.title.revenue_generated", "Revenue Generated"),
    ("chart.axis.co2_captured", "tCO₂e/year"),
    ("chart.axis.water_saved", "m³/year"),
    ("chart.axis.revenue_generated", "CLP/year"),
    ("downloads.header", "Download Charts Individually"),
    ("downloads.button", "Download {file}"),
    ("downloads.combined", "Download all charts ({file})"),
    ("downloads.saved", "Saved {path}"),
    ("downloads.failed", "Could not export {file}: {error}"),
    ("about.header", "Additional Information"),
    (
        "about.status",
        "Progress and recommendations: the project is at an intermediate stage of development, \
         with significant progress in agronomic validation on tomato and citrus crops. A \
         measurement baseline has been established on degraded soils, allowing estimates of \
         soil organic carbon gains and improvements in soil physical and hydric structure.",
    ),
    (
        "footer.attribution",
        "Visualizer created by the Sustrend SpA team within the TT GREEN Foods project",
    ),
    ("footer.location", "Viña del Mar, Valparaíso, Chile"),
    ("logos.loading", "Loading logos..."),
    (
        "logos.failed",
        "Could not load the logos from their URLs. Please check the links: {error}",
    ),
];

const SPANISH: StringTable = &[
    ("app.title", "✨ Visualizador de Impactos - Proyecto P11"),
    (
        "app.subtitle",
        "Consorcios microbianos para la restauración de suelos agrícolas degradados",
    ),
    (
        "app.intro",
        "Ajusta los parámetros para explorar cómo las proyecciones de impacto ambiental y \
         económico del proyecto varían con diferentes escenarios de superficie tratada, \
         incremento de carbono orgánico y reducción de agua.",
    ),
    ("sidebar.header", "Parámetros de Simulación"),
    ("sidebar.reset", "Restablecer valores"),
    ("sidebar.language", "Idioma"),
    ("sidebar.version", "Versión del Visualizador: {version}"),
    ("sidebar.built_with", "Desarrollado con Bevy y egui"),
    ("param.surface_ha", "Superficie Tratada (ha)"),
    (
        "param.surface_ha.help",
        "Superficie agrícola en hectáreas tratada con los consorcios microbianos.",
    ),
    (
        "param.carbon_increment",
        "Incremento de Carbono Orgánico (ton C/ha)",
    ),
    (
        "param.carbon_increment.help",
        "Aumento anual de carbono orgánico en el suelo por hectárea.",
    ),
    ("param.irrigation_baseline", "Consumo Base de Riego (m³/ha)"),
    (
        "param.irrigation_baseline.help",
        "Consumo de agua para riego por hectárea sin el proyecto.",
    ),
    ("param.water_reduction_pct", "Reducción de Agua Esperada (%)"),
    (
        "param.water_reduction_pct.help",
        "Porcentaje de reducción en el consumo de agua de riego gracias al proyecto.",
    ),
    (
        "param.production_volume",
        "Volumen de Producción Tratada (ton/año)",
    ),
    (
        "param.production_volume.help",
        "Volumen anual de producción agrícola beneficiada por la aplicación de los consorcios.",
    ),
    (
        "param.fertilizer_substitution_pct",
        "Tasa de Sustitución de Fertilizantes (%)",
    ),
    (
        "param.fertilizer_substitution_pct.help",
        "Porcentaje de fertilizantes sintéticos que pueden ser sustituidos por el bioinsumo.",
    ),
    ("param.bioinput_price", "Precio Bioinsumo (CLP/ton)"),
    (
        "param.bioinput_price.help",
        "Precio de venta estimado del bioinsumo por tonelada.",
    ),
    ("results.header", "Resultados Proyectados Anuales"),
    ("metric.co2_captured", "🌳 CO₂ Capturado"),
    (
        "caption.co2_captured",
        "Cantidad de dióxido de carbono equivalente capturado anualmente.",
    ),
    ("metric.water_saved", "💧 Agua Ahorrada"),
    (
        "caption.water_saved",
        "Volumen de agua ahorrada en el riego agrícola.",
    ),
    ("metric.agrochemicals_avoided", "🧪 Agroquímicos Evitados"),
    (
        "caption.agrochemicals_avoided",
        "Cantidad de agroquímicos sintéticos cuyo uso se evita.",
    ),
    ("metric.revenue_generated", "💰 Ingresos Generados"),
    (
        "caption.revenue_generated",
        "Ingresos adicionales generados por la venta del bioinsumo.",
    ),
    ("metric.strategic_alliances", "🤝 Alianzas Estratégicas"),
    (
        "caption.strategic_alliances",
        "Número de alianzas estratégicas establecidas.",
    ),
    ("metric.rd_investment", "🔬 Inversión en I+D"),
    (
        "caption.rd_investment",
        "Inversión comprometida en investigación y desarrollo.",
    ),
    ("charts.header", "📊 Análisis Gráfico de Impactos"),
    ("chart.baseline", "Línea Base"),
    ("chart.projection", "Proyección"),
    ("chart.title.co2_captured", "CO₂ Capturado"),
    ("chart.title.water_saved", "Agua Ahorrada"),
    ("chart.title.revenue_generated", "Ingresos Generados"),
    ("chart.axis.co2_captured", "tCO₂e/año"),
    ("chart.axis.water_saved", "m³/año"),
    ("chart.axis.revenue_generated", "CLP/año"),
    ("downloads.header", "Descargar Gráficos Individualmente"),
    ("downloads.button", "Descargar {file}"),
    ("downloads.combined", "Descargar todos los gráficos ({file})"),
    ("downloads.saved", "Guardado {path}"),
    ("downloads.failed", "No se pudo exportar {file}: {error}"),
    ("about.header", "Información Adicional"),
    (
        "about.status",
        "Estado de avance y recomendaciones: el proyecto se encuentra en una etapa intermedia de \
         desarrollo, con avances significativos en la fase de validación agronómica en cultivos \
         de tomates y cítricos. Se ha logrado establecer una línea base de medición en suelos \
         degradados, permitiendo estimar incrementos en el contenido de carbono orgánico del \
         suelo y mejoras en su estructura física e hídrica.",
    ),
    (
        "footer.attribution",
        "Visualizador creado por el equipo Sustrend SpA en el marco del Proyecto TT GREEN Foods",
    ),
    ("footer.location", "Viña del Mar, Valparaíso, Chile"),
    ("logos.loading", "Cargando logos..."),
    (
        "logos.failed",
        "Error al cargar los logos desde las URLs. Por favor, verifica los enlaces: {error}",
    ),
];

// =============================================================================
// Tests
// =============================================================================
