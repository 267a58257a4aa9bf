/// CO₂-to-carbon molecular weight ratio (44/12, rounded as in the project sheet).
pub const CO2_PER_CARBON: f64 = 3.67;

/// Number of strategic alliances committed by the project. Independent of inputs.
pub const STRATEGIC_ALLIANCES: u32 = 4;

/// Committed R&D investment in CLP. Independent of inputs.
pub const RD_INVESTMENT_CLP: u64 = 150_000_000;

/// Headroom multiplier applied above the tallest bar of a chart.
pub const AXIS_HEADROOM: f64 = 1.15;

/// Minimum y-axis upper bound for physical-quantity charts (tCO₂e, m³).
pub const PHYSICAL_AXIS_FLOOR: f64 = 1.0;

/// Minimum y-axis upper bound for the revenue chart (CLP).
pub const REVENUE_AXIS_FLOOR: f64 = 1_000_000.0;

/// Value labels are anchored this fraction of the bar height above the bar top.
pub const VALUE_LABEL_LIFT: f64 = 0.05;

/// Fraction of a category slot covered by its bar.
pub const BAR_WIDTH: f64 = 0.6;

/// Currency code used as the prefix of every monetary string.
pub const CURRENCY_PREFIX: &str = "CLP";

/// Version string shown in the parameter side panel.
pub const VISUALIZER_VERSION: &str = "1.8";
