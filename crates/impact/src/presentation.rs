//! Presentation adapter: turns a [`ComputedResult`] into display-ready metric
//! cards and the three baseline-vs-projection chart series.
//!
//! Every rendering surface (the live egui charts and the PNG exporter) reads
//! the same [`ChartSeries`], so labels, colors and axis bounds never diverge.

use crate::baselines::{IndicatorKind, IndicatorSet};
use crate::config::{
    AXIS_HEADROOM, PHYSICAL_AXIS_FLOOR, REVENUE_AXIS_FLOOR, VALUE_LABEL_LIFT,
};
use crate::formatting::{formats_for, FormatPolicy};
use crate::localization::Locale;
use crate::model::ComputedResult;
use crate::palette::{self, Rgb};

// =============================================================================
// Metric cards
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: String,
    /// Formatted value, unit suffix included where the policy adds one.
    pub value: String,
    pub unit: &'static str,
    pub caption: String,
}

fn indicator_card(
    indicators: &IndicatorSet,
    result: &ComputedResult,
    kind: IndicatorKind,
    locale: Locale,
) -> MetricCard {
    MetricCard {
        label: locale.t(&format!("metric.{}", kind.id())).to_string(),
        value: formats_for(kind).metric.format(result.value(kind)),
        unit: indicators.get(kind).unit,
        caption: locale.t(&format!("caption.{}", kind.id())).to_string(),
    }
}

fn fixed_figures(result: &ComputedResult, locale: Locale) -> [MetricCard; 2] {
    [
        MetricCard {
            label: locale.t("metric.strategic_alliances").to_string(),
            value: result.strategic_alliances.to_string(),
            unit: "",
            caption: locale.t("caption.strategic_alliances").to_string(),
        },
        MetricCard {
            label: locale.t("metric.rd_investment").to_string(),
            value: FormatPolicy::currency(0).format(result.rd_investment as f64),
            unit: "CLP",
            caption: locale.t("caption.rd_investment").to_string(),
        },
    ]
}

// =============================================================================
// Chart series
// =============================================================================

/// The three charted indicators, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Co2,
    Water,
    Revenue,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Co2, ChartKind::Water, ChartKind::Revenue];

    pub fn indicator(self) -> IndicatorKind {
        match self {
            ChartKind::Co2 => IndicatorKind::Co2Captured,
            ChartKind::Water => IndicatorKind::WaterSaved,
            ChartKind::Revenue => IndicatorKind::RevenueGenerated,
        }
    }

    /// Export filename. Stable across locales.
    pub fn filename(self) -> &'static str {
        match self {
            ChartKind::Co2 => "CO2_Capturado.png",
            ChartKind::Water => "Agua_Ahorrada.png",
            ChartKind::Revenue => "Ingresos_Generados.png",
        }
    }

    pub fn axis_floor(self) -> f64 {
        match self {
            ChartKind::Co2 | ChartKind::Water => PHYSICAL_AXIS_FLOOR,
            ChartKind::Revenue => REVENUE_AXIS_FLOOR,
        }
    }

    /// Fill colors for the baseline and projection bars.
    pub fn bar_colors(self) -> [Rgb; 2] {
        let slots = palette::CHART_SLOTS;
        match self {
            ChartKind::Co2 => [slots[0], slots[1]],
            ChartKind::Water => [slots[2], slots[3]],
            ChartKind::Revenue => [slots[1], slots[0]],
        }
    }

    pub fn axis_label_color(self) -> Rgb {
        match self {
            ChartKind::Water => palette::CHART_SLOTS[0],
            ChartKind::Co2 | ChartKind::Revenue => palette::CHART_SLOTS[3],
        }
    }
}

/// Upper bound of a chart's y-axis: 15% headroom over the tallest bar, never
/// below `floor`.
pub fn axis_upper_bound(baseline: f64, projection: f64, floor: f64) -> f64 {
    (baseline.max(projection) * AXIS_HEADROOM).max(floor)
}

/// Two-bar series for one charted indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub unit: &'static str,
    pub axis_label: String,
    /// Category labels, baseline first.
    pub labels: [String; 2],
    /// Bar heights: baseline value, then computed projection.
    pub values: [f64; 2],
    /// Text drawn above each bar.
    pub value_labels: [String; 2],
    pub y_max: f64,
    pub colors: [Rgb; 2],
    pub title_color: Rgb,
    pub axis_color: Rgb,
    pub text_color: Rgb,
    /// Y-axis tick label policy.
    pub tick_format: FormatPolicy,
    pub filename: &'static str,
}

impl ChartSeries {
    pub fn new(
        kind: ChartKind,
        indicators: &IndicatorSet,
        result: &ComputedResult,
        locale: Locale,
    ) -> Self {
        let indicator = kind.indicator();
        let formats = formats_for(indicator);
        let baseline = indicators.baseline(indicator);
        let projection = result.value(indicator);

        Self {
            kind,
            title: locale.t(&format!("chart.title.{}", indicator.id())).to_string(),
            unit: indicators.get(indicator).unit,
            axis_label: locale.t(&format!("chart.axis.{}", indicator.id())).to_string(),
            labels: [
                locale.t("chart.baseline").to_string(),
                locale.t("chart.projection").to_string(),
            ],
            values: [baseline, projection],
            value_labels: [
                formats.bar_label.format(baseline),
                formats.bar_label.format(projection),
            ],
            y_max: axis_upper_bound(baseline, projection, kind.axis_floor()),
            colors: kind.bar_colors(),
            title_color: palette::TITLE,
            axis_color: kind.axis_label_color(),
            text_color: palette::TEXT,
            tick_format: formats.axis_tick,
            filename: kind.filename(),
        }
    }

    pub fn baseline(&self) -> f64 {
        self.values[0]
    }

    pub fn projection(&self) -> f64 {
        self.values[1]
    }

    /// Data-space height at which the value label of bar `index` is anchored.
    pub fn label_anchor(&self, index: usize) -> f64 {
        let value = self.values[index];
        value + VALUE_LABEL_LIFT * value
    }

    pub fn tick_label(&self, value: f64) -> String {
        self.tick_format.format(value)
    }
}

// =============================================================================
// Presentation
// =============================================================================

/// Everything the dashboard shows for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// One card per indicator, in registry order.
    pub metrics: Vec<MetricCard>,
    /// Alliances and R&D investment.
    pub fixed_figures: [MetricCard; 2],
    /// CO₂, water and revenue charts, in panel order.
    pub charts: [ChartSeries; 3],
}

pub fn present(
    indicators: &IndicatorSet,
    result: &ComputedResult,
    locale: Locale,
) -> Presentation {
    Presentation {
        metrics: indicators
            .iter()
            .map(|indicator| indicator_card(indicators, result, indicator.kind, locale))
            .collect(),
        fixed_figures: fixed_figures(result, locale),
        charts: ChartKind::ALL.map(|kind| ChartSeries::new(kind, indicators, result, locale)),
    }
}

impl Presentation {
    pub fn chart(&self, kind: ChartKind) -> &ChartSeries {
        &self.charts[kind as usize]
    }
}
