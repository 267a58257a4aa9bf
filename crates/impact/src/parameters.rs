//! The seven simulation inputs and the slider table that bounds them.
//!
//! Clamping and step snapping live on [`ParameterRange`] and are applied by
//! whichever surface collects input (sliders, environment overrides). The
//! model itself never clamps.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Keys and ranges
// =============================================================================

/// Identifies one field of [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKey {
    SurfaceHa,
    CarbonIncrement,
    IrrigationBaseline,
    WaterReductionPct,
    ProductionVolume,
    FertilizerSubstitutionPct,
    BioinputPrice,
}

impl ParameterKey {
    /// All keys in slider order.
    pub const ALL: [ParameterKey; 7] = [
        ParameterKey::SurfaceHa,
        ParameterKey::CarbonIncrement,
        ParameterKey::IrrigationBaseline,
        ParameterKey::WaterReductionPct,
        ParameterKey::ProductionVolume,
        ParameterKey::FertilizerSubstitutionPct,
        ParameterKey::BioinputPrice,
    ];

    pub fn range(self) -> &'static ParameterRange {
        &PARAMETER_RANGES[self as usize]
    }
}

/// How a slider shows its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderDisplay {
    /// Plain number with a fixed number of decimals.
    Number { decimals: usize },
    /// Fraction shown as a percentage (0.2 -> "20%").
    Percent,
    /// Thousands-grouped currency amount.
    Currency,
}

/// Bounds, step, default and display metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub key: ParameterKey,
    /// Localization key of the slider label.
    pub label_key: &'static str,
    /// Localization key of the slider tooltip.
    pub help_key: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub display: SliderDisplay,
}

impl ParameterRange {
    /// Clamp `value` into `[min, max]`. NaN passes through unchanged.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Clamp and snap `value` onto the slider's step grid.
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.clamp(value);
        }
        let steps = ((self.clamp(value) - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Re-round to the step's precision so 0.1 + 10 * 0.01 lands on 0.2.
        let factor = 10f64.powi(self.step_decimals() as i32);
        self.clamp((snapped * factor).round() / factor)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of decimal places needed to represent the step exactly.
    pub fn step_decimals(&self) -> usize {
        let mut decimals = 0;
        let mut scaled = self.step;
        while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
            scaled *= 10.0;
            decimals += 1;
        }
        decimals
    }
}

/// Slider table, indexed by `ParameterKey as usize`.
pub const PARAMETER_RANGES: [ParameterRange; 7] = [
    ParameterRange {
        key: ParameterKey::SurfaceHa,
        label_key: "param.surface_ha",
        help_key: "param.surface_ha.help",
        min: 10.0,
        max: 200.0,
        step: 10.0,
        default: 35.0,
        display: SliderDisplay::Number { decimals: 0 },
    },
    ParameterRange {
        key: ParameterKey::CarbonIncrement,
        label_key: "param.carbon_increment",
        help_key: "param.carbon_increment.help",
        min: 0.5,
        max: 1.0,
        step: 0.1,
        default: 0.8,
        display: SliderDisplay::Number { decimals: 1 },
    },
    ParameterRange {
        key: ParameterKey::IrrigationBaseline,
        label_key: "param.irrigation_baseline",
        help_key: "param.irrigation_baseline.help",
        min: 3000.0,
        max: 6000.0,
        step: 500.0,
        default: 5000.0,
        display: SliderDisplay::Number { decimals: 0 },
    },
    ParameterRange {
        key: ParameterKey::WaterReductionPct,
        label_key: "param.water_reduction_pct",
        help_key: "param.water_reduction_pct.help",
        min: 0.1,
        max: 0.25,
        step: 0.01,
        default: 0.2,
        display: SliderDisplay::Percent,
    },
    ParameterRange {
        key: ParameterKey::ProductionVolume,
        label_key: "param.production_volume",
        help_key: "param.production_volume.help",
        min: 100.0,
        max: 500.0,
        step: 20.0,
        default: 300.0,
        display: SliderDisplay::Number { decimals: 0 },
    },
    ParameterRange {
        key: ParameterKey::FertilizerSubstitutionPct,
        label_key: "param.fertilizer_substitution_pct",
        help_key: "param.fertilizer_substitution_pct.help",
        min: 0.1,
        max: 0.3,
        step: 0.01,
        default: 0.2,
        display: SliderDisplay::Percent,
    },
    ParameterRange {
        key: ParameterKey::BioinputPrice,
        label_key: "param.bioinput_price",
        help_key: "param.bioinput_price.help",
        min: 2_000_000.0,
        max: 5_000_000.0,
        step: 100_000.0,
        default: 3_000_000.0,
        display: SliderDisplay::Currency,
    },
];

// =============================================================================
// ParameterSet
// =============================================================================

/// The current simulation inputs.
///
/// The UI owns mutation of this resource; every change triggers one full
/// recomputation of the evaluation. Fields missing from a deserialized
/// document fall back to their slider defaults.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Treated agricultural surface (ha).
    pub surface_ha: f64,
    /// Annual soil organic carbon increment (t C/ha).
    pub carbon_increment: f64,
    /// Irrigation water use without the project (m³/ha).
    pub irrigation_baseline: f64,
    /// Expected irrigation reduction as a fraction (0.2 = 20%).
    pub water_reduction_pct: f64,
    /// Annual production volume treated with the consortium (t/year).
    pub production_volume: f64,
    /// Fraction of synthetic fertilizer replaced by the bio-input.
    pub fertilizer_substitution_pct: f64,
    /// Bio-input sale price (CLP/t).
    pub bioinput_price: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::from_ranges(|range| range.default)
    }
}

impl ParameterSet {
    /// Build a set by evaluating `value_of` against every slider range.
    pub fn from_ranges(value_of: impl Fn(&ParameterRange) -> f64) -> Self {
        let mut params = Self {
            surface_ha: 0.0,
            carbon_increment: 0.0,
            irrigation_baseline: 0.0,
            water_reduction_pct: 0.0,
            production_volume: 0.0,
            fertilizer_substitution_pct: 0.0,
            bioinput_price: 0.0,
        };
        for range in &PARAMETER_RANGES {
            params.set(range.key, value_of(range));
        }
        params
    }

    /// Every field at its slider minimum.
    pub fn minimum() -> Self {
        Self::from_ranges(|range| range.min)
    }

    /// Every field at its slider maximum.
    pub fn maximum() -> Self {
        Self::from_ranges(|range| range.max)
    }

    pub fn get(&self, key: ParameterKey) -> f64 {
        match key {
            ParameterKey::SurfaceHa => self.surface_ha,
            ParameterKey::CarbonIncrement => self.carbon_increment,
            ParameterKey::IrrigationBaseline => self.irrigation_baseline,
            ParameterKey::WaterReductionPct => self.water_reduction_pct,
            ParameterKey::ProductionVolume => self.production_volume,
            ParameterKey::FertilizerSubstitutionPct => self.fertilizer_substitution_pct,
            ParameterKey::BioinputPrice => self.bioinput_price,
        }
    }

    /// Store `value` as-is. No clamping happens here.
    pub fn set(&mut self, key: ParameterKey, value: f64) {
        let slot = match key {
            ParameterKey::SurfaceHa => &mut self.surface_ha,
            ParameterKey::CarbonIncrement => &mut self.carbon_increment,
            ParameterKey::IrrigationBaseline => &mut self.irrigation_baseline,
            ParameterKey::WaterReductionPct => &mut self.water_reduction_pct,
            ParameterKey::ProductionVolume => &mut self.production_volume,
            ParameterKey::FertilizerSubstitutionPct => &mut self.fertilizer_substitution_pct,
            ParameterKey::BioinputPrice => &mut self.bioinput_price,
        };
        *slot = value;
    }

    /// A copy with every field clamped and snapped to its slider grid.
    pub fn snapped(&self) -> Self {
        Self::from_ranges(|range| range.snap(self.get(range.key)))
    }

    /// Keys whose value lies outside the slider interval (NaN included).
    pub fn out_of_range(&self) -> Vec<ParameterKey> {
        ParameterKey::ALL
            .into_iter()
            .filter(|key| !key.range().contains(self.get(*key)))
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
