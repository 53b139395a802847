use std::fmt;

use iso_currency::Currency;

use crate::entities::Measure;

use super::utils::format_grouped;

const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
pub enum ScaleUnit {
    None,
    Million,
    Billion,
}

/// A magnitude divided down to its display unit.
#[derive(Debug, Clone, Copy, PartialEq, serde_derive::Serialize)]
pub struct ScaledValue {
    pub value: f64,
    pub unit: ScaleUnit,
}

impl ScaleUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            ScaleUnit::None => "",
            ScaleUnit::Million => "M",
            ScaleUnit::Billion => "B",
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            ScaleUnit::None => 1.0,
            ScaleUnit::Million => MILLION,
            ScaleUnit::Billion => BILLION,
        }
    }

    fn word(self) -> Option<&'static str> {
        match self {
            ScaleUnit::None => None,
            ScaleUnit::Million => Some("millions"),
            ScaleUnit::Billion => Some("billions"),
        }
    }

    /// Unit whose band contains `|value|`.
    pub fn for_magnitude(value: f64) -> Self {
        let magnitude = value.abs();
        if magnitude >= BILLION {
            ScaleUnit::Billion
        } else if magnitude >= MILLION {
            ScaleUnit::Million
        } else {
            ScaleUnit::None
        }
    }
}

/// Splits a raw amount into a scaled value and unit suffix: billions from 1e9,
/// millions from 1e6, otherwise unscaled. Thresholds apply to the absolute
/// value and the sign is kept, so `-2.5e6` becomes `(-2.5, "M")`.
///
/// Non-finite input is returned unscaled.
pub fn humanize(value: f64) -> ScaledValue {
    let unit = ScaleUnit::for_magnitude(value);
    ScaledValue {
        value: value / unit.divisor(),
        unit,
    }
}

impl ScaledValue {
    pub fn suffix(&self) -> &'static str {
        self.unit.suffix()
    }
}

impl fmt::Display for ScaledValue {
    /// '8.00B', '-2.50M', '12,345'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            ScaleUnit::None => f.write_str(&format_grouped(self.value)),
            unit => write!(f, "{:.2}{}", self.value, unit.suffix()),
        }
    }
}

/// Axis caption for a chart of `measure` whose ticks are expressed in `unit`,
/// e.g. 'CIF Value (₦, billions)'.
pub fn axis_label(measure: Measure, unit: ScaleUnit, currency: Currency) -> String {
    match unit.word() {
        Some(word) => format!("{} ({}, {})", measure.display_name(), currency.symbol(), word),
        None => format!("{} ({})", measure.display_name(), currency.symbol()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_into_bands() {
        assert_eq!(humanize(8e9), ScaledValue { value: 8.0, unit: ScaleUnit::Billion });
        assert_eq!(humanize(2.5e6), ScaledValue { value: 2.5, unit: ScaleUnit::Million });
        assert_eq!(humanize(999_999.0), ScaledValue { value: 999_999.0, unit: ScaleUnit::None });
        assert_eq!(humanize(1e6).unit, ScaleUnit::Million);
        assert_eq!(humanize(1e9).unit, ScaleUnit::Billion);
    }

    #[test]
    fn zero_and_negative_values() {
        assert_eq!(humanize(0.0), ScaledValue { value: 0.0, unit: ScaleUnit::None });
        assert_eq!(humanize(-2.5e6), ScaledValue { value: -2.5, unit: ScaleUnit::Million });
        assert_eq!(humanize(-3e9).suffix(), "B");
        assert_eq!(humanize(-12.0).value, -12.0);
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(humanize(f64::NAN).unit, ScaleUnit::None);
        assert_eq!(humanize(f64::INFINITY).unit, ScaleUnit::Billion);
    }

    #[test]
    fn larger_magnitudes_never_scale_smaller_within_a_band() {
        let samples = [
            0.0, 1.0, 999.0, 12_345.0, 999_999.0, 1e6, 1.5e6, 9.99e8, 1e9, 2e9, 8e9, 1.2e12,
        ];
        for pair in samples.windows(2) {
            let (a, b) = (humanize(pair[0]), humanize(pair[1]));
            if a.unit == b.unit {
                assert!(b.value >= a.value, "{:?} -> {:?}", a, b);
            }
            let (na, nb) = (humanize(-pair[0]), humanize(-pair[1]));
            if na.unit == nb.unit {
                assert!(nb.value.abs() >= na.value.abs());
            }
        }
    }

    #[test]
    fn display_uses_suffix_or_grouping() {
        assert_eq!(humanize(8e9).to_string(), "8.00B");
        assert_eq!(humanize(-2.5e6).to_string(), "-2.50M");
        assert_eq!(humanize(12_345.4).to_string(), "12,345");
    }
}
