//! Numeric normalization of raw forecast fields.
//!
//! NatStat stores both ELO win-expectancies and moneylines as percent-like
//! integers (sometimes as strings), so `6000` means an ELO win-expectancy of
//! 0.60 and `-200` means a -2.00 moneyline in the normalized domain all
//! downstream math operates in.

use serde_json::Value;
use tracing::warn;

/// Outcome of parsing one raw forecast field.
///
/// Keeps "absent upstream" and "present but garbage" distinct so a malformed
/// field can be logged without being confused with an ordinary gap in the
/// data. Both degrade to no value for downstream math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Field absent or null upstream.
    Missing,
    /// Field present but not interpretable as a finite number.
    Malformed,
    /// Parsed and scaled into the /100 domain.
    Scaled(f64),
}

impl FieldValue {
    /// The usable number, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            FieldValue::Scaled(v) => Some(v),
            FieldValue::Missing | FieldValue::Malformed => None,
        }
    }
}

/// Parse a raw ELO or moneyline field and scale it by 1/100.
///
/// A malformed field is logged and degrades to no value; it never aborts the
/// run. One bad field costs only its own record.
pub fn parse_scaled(raw: Option<&Value>) -> FieldValue {
    let raw = match raw {
        Some(v) => v,
        None => return FieldValue::Missing,
    };
    match raw {
        Value::Null => FieldValue::Missing,
        Value::Number(n) => match n.as_f64() {
            Some(v) if v.is_finite() => FieldValue::Scaled(v / 100.0),
            _ => {
                warn!("non-finite numeric forecast field: {raw}");
                FieldValue::Malformed
            }
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => FieldValue::Scaled(v / 100.0),
            _ => {
                warn!("unparseable forecast field: {s:?}");
                FieldValue::Malformed
            }
        },
        other => {
            warn!("non-numeric forecast field: {other}");
            FieldValue::Malformed
        }
    }
}

/// Implied win probability of a /100-normalized American moneyline.
///
/// Favorites (negative lines) map to `|ml| / (1 + |ml|)`, underdogs to
/// `1 / (1 + ml)`.
pub fn implied_probability(ml: f64) -> f64 {
    if ml < 0.0 {
        let v = ml.abs();
        v / (1.0 + v)
    } else {
        1.0 / (1.0 + ml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_parse_number_scales_by_hundred() {
        let raw = json!(6000);
        assert_eq!(parse_scaled(Some(&raw)), FieldValue::Scaled(60.0));
    }

    #[test]
    fn test_parse_string_number() {
        let raw = json!("-150");
        assert_eq!(parse_scaled(Some(&raw)), FieldValue::Scaled(-1.5));
    }

    #[test]
    fn test_parse_missing_and_null() {
        assert_eq!(parse_scaled(None), FieldValue::Missing);
        let raw = json!(null);
        assert_eq!(parse_scaled(Some(&raw)), FieldValue::Missing);
    }

    #[test]
    fn test_parse_garbage_is_malformed_not_fatal() {
        let raw = json!("postponed");
        assert_eq!(parse_scaled(Some(&raw)), FieldValue::Malformed);
        let raw = json!({"nested": true});
        assert_eq!(parse_scaled(Some(&raw)), FieldValue::Malformed);
        let raw = json!("NaN");
        assert_eq!(parse_scaled(Some(&raw)), FieldValue::Malformed);
    }

    #[test]
    fn test_parse_round_trip_recovers_magnitude() {
        let raw = json!(-237);
        match parse_scaled(Some(&raw)) {
            FieldValue::Scaled(v) => assert_relative_eq!(v * 100.0, -237.0, epsilon = 1e-9),
            other => panic!("expected scaled value, got {other:?}"),
        }
    }

    #[test]
    fn test_implied_probability_favorite() {
        // ml = -2.00 → 2 / 3
        assert_relative_eq!(implied_probability(-2.0), 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_implied_probability_underdog() {
        // ml = 1.80 → 1 / 2.8
        assert_relative_eq!(implied_probability(1.8), 1.0 / 2.8, epsilon = 1e-12);
    }

    #[test]
    fn test_implied_probability_in_open_unit_interval() {
        for ml in [-50.0, -3.0, -1.0, -0.5, 0.5, 1.0, 3.0, 50.0] {
            let p = implied_probability(ml);
            assert!(p > 0.0 && p < 1.0, "p({ml}) = {p} out of (0, 1)");
        }
    }

    #[test]
    fn test_implied_probability_decreases_over_positive_lines() {
        let mut prev = implied_probability(0.1);
        for ml in [0.5, 1.0, 2.0, 4.0, 8.0] {
            let p = implied_probability(ml);
            assert!(p < prev, "p({ml}) = {p} did not decrease");
            prev = p;
        }
    }
}
