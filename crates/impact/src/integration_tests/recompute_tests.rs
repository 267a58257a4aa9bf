//! Integration tests for change-driven recomputation of the [`Evaluation`].

use crate::test_harness::TestImpact;
use crate::{ChartKind, Evaluation, Locale, ParameterKey, ParameterSet};

/// The first update evaluates the default parameters exactly once.
#[test]
fn test_first_update_evaluates_defaults() {
    let harness = TestImpact::new();
    assert_eq!(harness.revision(), 1);
    let result = &harness.evaluation().result;
    assert!((result.co2_captured - 102.76).abs() < 1e-9);
    assert_eq!(result.water_saved, 35_000.0);
    assert_eq!(result.revenue_generated, 180_000_000.0);
}

/// Without input changes, further updates leave the evaluation alone.
#[test]
fn test_idle_updates_do_not_recompute() {
    let mut harness = TestImpact::new();
    harness.tick().tick().tick();
    assert_eq!(harness.revision(), 1);
}

/// A single slider change triggers exactly one recomputation.
#[test]
fn test_parameter_change_recomputes_once() {
    let mut harness = TestImpact::new();
    harness.set_param(ParameterKey::SurfaceHa, 100.0).tick();
    assert_eq!(harness.revision(), 2);
    assert_eq!(harness.evaluation().parameters.surface_ha, 100.0);
    assert!((harness.evaluation().result.co2_captured - 100.0 * 0.8 * 3.67).abs() < 1e-9);

    harness.tick();
    assert_eq!(harness.revision(), 2);
}

/// Metrics and chart series follow the recomputed result.
#[test]
fn test_presentation_tracks_result() {
    let mut harness = TestImpact::new();
    harness.set_param(ParameterKey::BioinputPrice, 5_000_000.0).tick();
    let evaluation = harness.evaluation();
    let revenue = evaluation.presentation.chart(ChartKind::Revenue);
    assert_eq!(revenue.projection(), 300_000_000.0);
    assert_eq!(revenue.value_labels[1], "CLP 300,000,000");
    assert_eq!(evaluation.presentation.metrics[3].value, "CLP 300,000,000.00");
}

/// Switching language re-renders text without touching the numbers.
#[test]
fn test_locale_change_recomputes_text() {
    let mut harness = TestImpact::new();
    let before = harness.evaluation().result;
    harness.set_locale(Locale::Spanish).tick();
    let evaluation = harness.evaluation();
    assert_eq!(evaluation.revision, 2);
    assert_eq!(evaluation.result, before);
    assert_eq!(
        evaluation.presentation.chart(ChartKind::Co2).title,
        "CO₂ Capturado"
    );
}

/// Out-of-range values are computed, not clamped or rejected.
#[test]
fn test_out_of_range_values_are_evaluated() {
    let mut harness = TestImpact::new();
    harness.set_param(ParameterKey::SurfaceHa, 1_000.0).tick();
    let result = &harness.evaluation().result;
    assert!((result.co2_captured - 1_000.0 * 0.8 * 3.67).abs() < 1e-6);
}

/// NaN inputs reach the evaluation instead of being swallowed.
#[test]
fn test_non_finite_inputs_reach_evaluation() {
    let mut harness = TestImpact::new();
    harness.set_param(ParameterKey::CarbonIncrement, f64::NAN).tick();
    let evaluation = harness.evaluation();
    assert!(evaluation.result.co2_captured.is_nan());
    assert!(!evaluation.result.is_finite());
    assert_eq!(evaluation.presentation.metrics[0].value, "NaN tCO₂e");
}

/// Replacing the whole resource (as the reset button does) recomputes.
#[test]
fn test_resource_replacement_recomputes() {
    let mut harness = TestImpact::new();
    harness.set_param(ParameterKey::SurfaceHa, 200.0).tick();
    harness
        .world_mut()
        .insert_resource(ParameterSet::default());
    harness.tick();
    assert_eq!(harness.revision(), 3);
    assert_eq!(harness.evaluation().parameters, ParameterSet::default());
    assert!(harness.world_mut().get_resource::<Evaluation>().is_some());
}
