//! Impact model: closed-form indicator formulas.
//!
//! Every function here is pure. Inputs are used as given, so out-of-range or
//! non-finite parameters flow through the arithmetic and stay visible in the
//! result instead of being clamped away.

use serde::Serialize;

use crate::baselines::IndicatorKind;
use crate::config::{CO2_PER_CARBON, RD_INVESTMENT_CLP, STRATEGIC_ALLIANCES};
use crate::parameters::ParameterSet;

/// Indicators derived from one [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComputedResult {
    /// tCO₂e/year.
    pub co2_captured: f64,
    /// m³/year.
    pub water_saved: f64,
    /// t/year.
    pub agrochemicals_avoided: f64,
    /// CLP/year.
    pub revenue_generated: f64,
    pub strategic_alliances: u32,
    /// CLP.
    pub rd_investment: u64,
}

impl ComputedResult {
    pub fn value(&self, kind: IndicatorKind) -> f64 {
        match kind {
            IndicatorKind::Co2Captured => self.co2_captured,
            IndicatorKind::WaterSaved => self.water_saved,
            IndicatorKind::AgrochemicalsAvoided => self.agrochemicals_avoided,
            IndicatorKind::RevenueGenerated => self.revenue_generated,
        }
    }

    /// True when all four computed indicators are finite numbers.
    pub fn is_finite(&self) -> bool {
        IndicatorKind::ALL
            .into_iter()
            .all(|kind| self.value(kind).is_finite())
    }
}

pub fn co2_captured(surface_ha: f64, carbon_increment: f64) -> f64 {
    surface_ha * carbon_increment * CO2_PER_CARBON
}

pub fn water_saved(surface_ha: f64, irrigation_baseline: f64, water_reduction_pct: f64) -> f64 {
    surface_ha * irrigation_baseline * water_reduction_pct
}

pub fn agrochemicals_avoided(production_volume: f64, fertilizer_substitution_pct: f64) -> f64 {
    production_volume * fertilizer_substitution_pct
}

pub fn revenue_generated(agrochemicals_avoided: f64, bioinput_price: f64) -> f64 {
    agrochemicals_avoided * bioinput_price
}

/// Evaluate all indicators for `params`.
pub fn compute(params: &ParameterSet) -> ComputedResult {
    let agrochemicals =
        agrochemicals_avoided(params.production_volume, params.fertilizer_substitution_pct);
    ComputedResult {
        co2_captured: co2_captured(params.surface_ha, params.carbon_increment),
        water_saved: water_saved(
            params.surface_ha,
            params.irrigation_baseline,
            params.water_reduction_pct,
        ),
        agrochemicals_avoided: agrochemicals,
        revenue_generated: revenue_generated(agrochemicals, params.bioinput_price),
        strategic_alliances: STRATEGIC_ALLIANCES,
        rd_investment: RD_INVESTMENT_CLP,
    }
}
