//! Alert classification of raw feed values.
//!
//! Feeds emit numbers either as JSON numbers or as numeric strings, so the
//! value is parsed before it is compared with its [`Threshold`].

use serde_json::Value;
use spacewatch_types::{AlertState, Threshold};
use thiserror::Error;

use spacewatch_feeds::extract::display_value;

/// The value could not be read as a floating-point number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value {value:?} is not numeric")]
pub struct NotNumeric {
    pub value: String,
}

/// Parse a feed value as `f64`.
pub fn numeric(value: &Value) -> Result<f64, NotNumeric> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|v| v.is_finite()).ok_or_else(|| NotNumeric {
        value: display_value(value),
    })
}

/// Compare a feed value against its threshold.
pub fn classify(value: &Value, threshold: &Threshold) -> Result<AlertState, NotNumeric> {
    numeric(value).map(|v| threshold.classify(v))
}

/// Classify, treating an unparseable value as "cannot classify".
///
/// The raw value is still rendered; it just gets no alert/normal marker.
pub fn classify_or_skip(value: &Value, threshold: &Threshold) -> Option<AlertState> {
    match classify(value, threshold) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::debug!(metric = ?threshold.metric, error = %e, "cannot classify value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use spacewatch_types::{Metric, ThresholdSet, NOT_AVAILABLE};

    #[test]
    fn test_speed_higher_is_worse() {
        let t = ThresholdSet::default();
        assert_eq!(classify(&json!(700), &t.speed), Ok(AlertState::Alert));
        assert_eq!(classify(&json!(500), &t.speed), Ok(AlertState::Normal));
    }

    #[test]
    fn test_bz_lower_is_worse() {
        let t = ThresholdSet::default();
        assert_eq!(classify(&json!(-6), &t.bz), Ok(AlertState::Alert));
        assert_eq!(classify(&json!(-3), &t.bz), Ok(AlertState::Normal));
    }

    #[test]
    fn test_numeric_strings() {
        let t = ThresholdSet::default();
        assert_eq!(classify(&json!("612.4"), &t.speed), Ok(AlertState::Alert));
        assert_eq!(classify(&json!(" -8.25 "), &t.bz), Ok(AlertState::Alert));
        assert_eq!(classify(&json!("2.1e-6"), &t.xray), Ok(AlertState::Alert));
    }

    #[test]
    fn test_sentinel_is_not_numeric() {
        let t = ThresholdSet::default();
        let err = classify(&json!(NOT_AVAILABLE), t.get(Metric::Kp)).unwrap_err();
        assert_eq!(
            err,
            NotNumeric {
                value: NOT_AVAILABLE.to_string()
            }
        );
        assert_eq!(classify_or_skip(&json!(NOT_AVAILABLE), &t.kp), None);
    }

    #[test]
    fn test_non_scalar_values_are_not_numeric() {
        let t = ThresholdSet::default();
        assert!(classify(&json!(null), &t.kp).is_err());
        assert!(classify(&json!(true), &t.kp).is_err());
        assert!(classify(&json!("NaN"), &t.kp).is_err());
        assert!(classify(&json!("inf"), &t.kp).is_err());
    }

    #[test]
    fn test_classify_or_skip_passes_states_through() {
        let t = ThresholdSet::default();
        assert_eq!(classify_or_skip(&json!("6"), &t.kp), Some(AlertState::Alert));
        assert_eq!(classify_or_skip(&json!(2), &t.kp), Some(AlertState::Normal));
    }
}
