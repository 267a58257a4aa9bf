//! Baseline registry: reference values for the no-project scenario.

use serde::{Deserialize, Serialize};

/// The four indicators tracked by the project sheet, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndicatorKind {
    Co2Captured,
    WaterSaved,
    AgrochemicalsAvoided,
    RevenueGenerated,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 4] = [
        IndicatorKind::Co2Captured,
        IndicatorKind::WaterSaved,
        IndicatorKind::AgrochemicalsAvoided,
        IndicatorKind::RevenueGenerated,
    ];

    /// Stable identifier, also used as the localization key prefix.
    pub fn id(self) -> &'static str {
        match self {
            IndicatorKind::Co2Captured => "co2_captured",
            IndicatorKind::WaterSaved => "water_saved",
            IndicatorKind::AgrochemicalsAvoided => "agrochemicals_avoided",
            IndicatorKind::RevenueGenerated => "revenue_generated",
        }
    }
}

/// One row of the baseline registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub kind: IndicatorKind,
    pub name: &'static str,
    pub unit: &'static str,
    pub baseline_value: f64,
}

/// Ordered, immutable set of the four indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSet {
    indicators: [Indicator; 4],
}

impl IndicatorSet {
    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.iter()
    }

    pub fn get(&self, kind: IndicatorKind) -> &Indicator {
        &self.indicators[kind as usize]
    }

    pub fn baseline(&self, kind: IndicatorKind) -> f64 {
        self.get(kind).baseline_value
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

/// Reference values from the P11 technical sheet.
pub const BASELINES: IndicatorSet = IndicatorSet {
    indicators: [
        Indicator {
            kind: IndicatorKind::Co2Captured,
            name: "CO₂ captured",
            unit: "tCO₂e/year",
            baseline_value: 70.0,
        },
        Indicator {
            kind: IndicatorKind::WaterSaved,
            name: "Water saved",
            unit: "m³/year",
            baseline_value: 7000.0,
        },
        Indicator {
            kind: IndicatorKind::AgrochemicalsAvoided,
            name: "Agrochemicals avoided",
            unit: "t/year",
            baseline_value: 3.0,
        },
        Indicator {
            kind: IndicatorKind::RevenueGenerated,
            name: "Revenue generated",
            unit: "CLP/year",
            baseline_value: 18_000_000.0,
        },
    ],
};

/// Return the baseline registry.
pub fn get_baselines() -> IndicatorSet {
    BASELINES
}
