//! P11 impact core: baseline registry, indicator formulas, formatting and the
//! presentation contract shared by the dashboard and the PNG exporter.

use bevy::prelude::*;

pub mod baselines;
pub mod config;
pub mod formatting;
pub mod localization;
pub mod model;
pub mod palette;
pub mod parameters;
pub mod presentation;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub use baselines::{get_baselines, Indicator, IndicatorKind, IndicatorSet};
pub use localization::Locale;
pub use model::{compute, ComputedResult};
pub use parameters::{ParameterKey, ParameterRange, ParameterSet, PARAMETER_RANGES};
pub use presentation::{present, ChartKind, ChartSeries, MetricCard, Presentation};

// =============================================================================
// Evaluation
// =============================================================================

/// The latest evaluation of the current [`ParameterSet`].
///
/// Replaced wholesale whenever the parameters or the locale change; nothing
/// edits it in place.
#[derive(Resource, Debug, Clone)]
pub struct Evaluation {
    pub parameters: ParameterSet,
    pub result: ComputedResult,
    pub presentation: Presentation,
    /// Incremented on every recomputation.
    pub revision: u64,
}

impl Evaluation {
    pub fn new(parameters: &ParameterSet, locale: Locale, revision: u64) -> Self {
        let indicators = get_baselines();
        let result = compute(parameters);
        Self {
            parameters: *parameters,
            presentation: present(&indicators, &result, locale),
            result,
            revision,
        }
    }
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::new(&ParameterSet::default(), Locale::default(), 0)
    }
}

// =============================================================================
// Plugin
// =============================================================================

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImpactRecomputeSet;

pub struct ImpactPlugin;

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParameterSet>()
            .init_resource::<Locale>()
            .init_resource::<Evaluation>()
            .add_systems(
                Update,
                recompute_evaluation
                    .run_if(resource_changed::<ParameterSet>.or(resource_changed::<Locale>))
                    .in_set(ImpactRecomputeSet),
            );
    }
}

/// Rebuild the evaluation from the current parameters and locale.
pub fn recompute_evaluation(
    params: Res<ParameterSet>,
    locale: Res<Locale>,
    mut evaluation: ResMut<Evaluation>,
) {
    let next = Evaluation::new(&params, *locale, evaluation.revision + 1);
    let result = &next.result;

    debug!(
        "Impact evaluation #{}: co2={:.2} water={:.2} agro={:.2} revenue={:.0}",
        next.revision,
        result.co2_captured,
        result.water_saved,
        result.agrochemicals_avoided,
        result.revenue_generated
    );

    if !result.is_finite() {
        warn!(
            "Impact evaluation #{} produced non-finite values from {:?}",
            next.revision, next.parameters
        );
    }
    let out_of_range = params.out_of_range();
    if !out_of_range.is_empty() {
        debug!("Parameters outside slider ranges: {:?}", out_of_range);
    }

    *evaluation = next;
}
