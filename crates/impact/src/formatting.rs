//! Number formatting policies.
//!
//! Each indicator gets one [`IndicatorFormats`] entry that decides how its
//! values read on metric cards, above chart bars and on the y-axis. Output is
//! locale-agnostic: `,` groups thousands and `.` separates decimals.

use crate::baselines::IndicatorKind;
use crate::config::CURRENCY_PREFIX;

/// How a single number is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPolicy {
    pub decimals: usize,
    /// Drop trailing fractional zeros (and a dangling `.`).
    pub trim_zeros: bool,
    /// Text placed before the number, separated by a space.
    pub prefix: Option<&'static str>,
    /// Text placed after the number, separated by a space.
    pub suffix: Option<&'static str>,
    pub thousands_separator: Option<char>,
}

impl FormatPolicy {
    /// Fixed decimals, no grouping.
    pub const fn fixed(decimals: usize) -> Self {
        Self {
            decimals,
            trim_zeros: false,
            prefix: None,
            suffix: None,
            thousands_separator: None,
        }
    }

    /// Rounded to `decimals`, trailing zeros dropped.
    pub const fn rounded(decimals: usize) -> Self {
        Self {
            decimals,
            trim_zeros: true,
            prefix: None,
            suffix: None,
            thousands_separator: None,
        }
    }

    /// `CLP 1,234.50` style.
    pub const fn currency(decimals: usize) -> Self {
        Self {
            decimals,
            trim_zeros: false,
            prefix: Some(CURRENCY_PREFIX),
            suffix: None,
            thousands_separator: Some(','),
        }
    }

    pub const fn with_suffix(self, suffix: &'static str) -> Self {
        Self {
            suffix: Some(suffix),
            ..self
        }
    }

    pub const fn grouped(self) -> Self {
        Self {
            thousands_separator: Some(','),
            ..self
        }
    }

    pub fn format(&self, value: f64) -> String {
        let number = if value.is_finite() {
            self.format_finite(value)
        } else {
            value.to_string()
        };
        let mut out = String::with_capacity(number.len() + 8);
        if let Some(prefix) = self.prefix {
            out.push_str(prefix);
            out.push(' ');
        }
        out.push_str(&number);
        if let Some(suffix) = self.suffix {
            out.push(' ');
            out.push_str(suffix);
        }
        out
    }

    fn format_finite(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (fixed.as_str(), ""),
        };
        let frac_part = if self.trim_zeros {
            frac_part.trim_end_matches('0')
        } else {
            frac_part
        };

        let mut out = String::new();
        // "-0.00" reads as "0.00".
        if value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            out.push('-');
        }
        match self.thousands_separator {
            Some(separator) => out.push_str(&group_thousands(int_part, separator)),
            None => out.push_str(int_part),
        }
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}

/// Insert `separator` every three digits from the right of an unsigned digit run.
pub fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// The formatting table entry for one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorFormats {
    /// Metric card value.
    pub metric: FormatPolicy,
    /// Label above a chart bar.
    pub bar_label: FormatPolicy,
    /// Y-axis tick label.
    pub axis_tick: FormatPolicy,
}

pub const fn formats_for(kind: IndicatorKind) -> IndicatorFormats {
    match kind {
        IndicatorKind::Co2Captured => IndicatorFormats {
            metric: FormatPolicy::fixed(2).with_suffix("tCO₂e"),
            bar_label: FormatPolicy::rounded(2),
            axis_tick: FormatPolicy::rounded(1).grouped(),
        },
        IndicatorKind::WaterSaved => IndicatorFormats {
            metric: FormatPolicy::fixed(2).with_suffix("m³"),
            bar_label: FormatPolicy::rounded(2),
            axis_tick: FormatPolicy::rounded(1).grouped(),
        },
        IndicatorKind::AgrochemicalsAvoided => IndicatorFormats {
            metric: FormatPolicy::fixed(2).with_suffix("ton"),
            bar_label: FormatPolicy::rounded(2),
            axis_tick: FormatPolicy::rounded(1).grouped(),
        },
        IndicatorKind::RevenueGenerated => IndicatorFormats {
            metric: FormatPolicy::currency(2),
            bar_label: FormatPolicy::currency(0),
            axis_tick: FormatPolicy::rounded(0).grouped(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0", ','), "0");
        assert_eq!(group_thousands("999", ','), "999");
        assert_eq!(group_thousands("1000", ','), "1,000");
        assert_eq!(group_thousands("180000000", ','), "180,000,000");
        assert_eq!(group_thousands("12345678", '.'), "12.345.678");
    }

    #[test]
    fn test_fixed_keeps_zeros() {
        assert_eq!(FormatPolicy::fixed(2).format(35_000.0), "35000.00");
        assert_eq!(FormatPolicy::fixed(2).format(102.76), "102.76");
    }

    #[test]
    fn test_rounded_trims_zeros() {
        let policy = FormatPolicy::rounded(2);
        assert_eq!(policy.format(70.0), "70");
        assert_eq!(policy.format(102.76), "102.76");
        assert_eq!(policy.format(102.7649), "102.76");
        assert_eq!(policy.format(35_000.0), "35000");
        assert_eq!(policy.format(0.5), "0.5");
    }

    #[test]
    fn test_currency_two_decimals() {
        assert_eq!(
            FormatPolicy::currency(2).format(180_000_000.0),
            "CLP 180,000,000.00"
        );
        assert_eq!(FormatPolicy::currency(2).format(12.5), "CLP 12.50");
    }

    #[test]
    fn test_currency_whole_units() {
        assert_eq!(
            FormatPolicy::currency(0).format(18_000_000.0),
            "CLP 18,000,000"
        );
        assert_eq!(FormatPolicy::currency(0).format(999.6), "CLP 1,000");
        assert_eq!(FormatPolicy::currency(0).format(0.0), "CLP 0");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(FormatPolicy::currency(0).format(-1_234_567.0), "CLP -1,234,567");
        assert_eq!(FormatPolicy::fixed(2).format(-0.001), "0.00");
        assert_eq!(FormatPolicy::rounded(2).format(-3.5), "-3.5");
    }

    #[test]
    fn test_suffix() {
        let policy = FormatPolicy::fixed(2).with_suffix("tCO₂e");
        assert_eq!(policy.format(102.76), "102.76 tCO₂e");
    }

    #[test]
    fn test_non_finite_values_are_shown() {
        assert_eq!(FormatPolicy::fixed(2).format(f64::NAN), "NaN");
        assert_eq!(FormatPolicy::currency(0).format(f64::INFINITY), "CLP inf");
    }

    #[test]
    fn test_indicator_table() {
        let revenue = formats_for(IndicatorKind::RevenueGenerated);
        assert_eq!(revenue.metric.format(180_000_000.0), "CLP 180,000,000.00");
        assert_eq!(revenue.bar_label.format(180_000_000.0), "CLP 180,000,000");
        assert_eq!(revenue.axis_tick.format(50_000_000.0), "50,000,000");

        let co2 = formats_for(IndicatorKind::Co2Captured);
        assert_eq!(co2.metric.format(102.76), "102.76 tCO₂e");
        assert_eq!(co2.bar_label.format(70.0), "70");

        let water = formats_for(IndicatorKind::WaterSaved);
        assert_eq!(water.metric.format(35_000.0), "35000.00 m³");
        assert_eq!(water.axis_tick.format(40_250.0), "40,250");
    }
}
