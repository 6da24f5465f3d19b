//! Alert thresholds and classification.

/// A quantity that has an alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Planetary K-index.
    Kp,
    /// Solar wind bulk speed, km/s.
    Speed,
    /// IMF Bz component (GSM), nT.
    Bz,
    /// 0.1-0.8 nm X-ray flux, W/m².
    Xray,
}

impl Metric {
    /// Direction in which readings of this metric get worse.
    pub fn polarity(&self) -> Polarity {
        match self {
            Metric::Bz => Polarity::LowerIsWorse,
            _ => Polarity::HigherIsWorse,
        }
    }
}

/// Direction of "worse" relative to a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Polarity {
    HigherIsWorse,
    LowerIsWorse,
}

/// Outcome of comparing a reading with its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertState {
    Normal,
    Alert,
}

impl AlertState {
    pub fn is_alert(&self) -> bool {
        matches!(self, AlertState::Alert)
    }
}

/// A fixed boundary for one metric.
///
/// The boundary itself counts as alerting for both polarities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Threshold {
    pub metric: Metric,
    pub value: f64,
    pub polarity: Polarity,
}

impl Threshold {
    /// Create a threshold using the metric's natural polarity.
    pub fn new(metric: Metric, value: f64) -> Self {
        Self {
            metric,
            value,
            polarity: metric.polarity(),
        }
    }

    /// Classify a numeric reading.
    pub fn classify(&self, reading: f64) -> AlertState {
        let alert = match self.polarity {
            Polarity::HigherIsWorse => reading >= self.value,
            Polarity::LowerIsWorse => reading <= self.value,
        };
        if alert {
            AlertState::Alert
        } else {
            AlertState::Normal
        }
    }
}

/// The four thresholds spacewatch alerts on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSet {
    pub kp: Threshold,
    pub speed: Threshold,
    pub bz: Threshold,
    pub xray: Threshold,
}

impl ThresholdSet {
    /// Default Kp boundary (G1 storm level).
    pub const KP: f64 = 5.0;
    /// Default solar wind speed boundary, km/s.
    pub const SPEED: f64 = 600.0;
    /// Default southward Bz boundary, nT.
    pub const BZ: f64 = -5.0;
    /// Default X-ray flux boundary (C-class), W/m².
    pub const XRAY: f64 = 1e-6;

    pub fn new(kp: f64, speed: f64, bz: f64, xray: f64) -> Self {
        Self {
            kp: Threshold::new(Metric::Kp, kp),
            speed: Threshold::new(Metric::Speed, speed),
            bz: Threshold::new(Metric::Bz, bz),
            xray: Threshold::new(Metric::Xray, xray),
        }
    }

    pub fn get(&self, metric: Metric) -> &Threshold {
        match metric {
            Metric::Kp => &self.kp,
            Metric::Speed => &self.speed,
            Metric::Bz => &self.bz,
            Metric::Xray => &self.xray,
        }
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self::new(Self::KP, Self::SPEED, Self::BZ, Self::XRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_is_worse() {
        let speed = Threshold::new(Metric::Speed, 600.0);
        assert_eq!(speed.classify(700.0), AlertState::Alert);
        assert_eq!(speed.classify(600.0), AlertState::Alert);
        assert_eq!(speed.classify(500.0), AlertState::Normal);
    }

    #[test]
    fn test_lower_is_worse() {
        let bz = Threshold::new(Metric::Bz, -5.0);
        assert_eq!(bz.polarity, Polarity::LowerIsWorse);
        assert_eq!(bz.classify(-6.0), AlertState::Alert);
        assert_eq!(bz.classify(-5.0), AlertState::Alert);
        assert_eq!(bz.classify(-3.0), AlertState::Normal);
    }

    #[test]
    fn test_default_set() {
        let set = ThresholdSet::default();
        assert_eq!(set.get(Metric::Kp).value, 5.0);
        assert_eq!(set.get(Metric::Speed).value, 600.0);
        assert_eq!(set.get(Metric::Bz).value, -5.0);
        assert_eq!(set.get(Metric::Xray).value, 1e-6);
        assert_eq!(set.kp.classify(6.0), AlertState::Alert);
        assert_eq!(set.xray.classify(5e-7), AlertState::Normal);
    }

    #[test]
    fn test_alert_ordering() {
        assert!(AlertState::Alert > AlertState::Normal);
        assert!(AlertState::Alert.is_alert());
        assert!(!AlertState::Normal.is_alert());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_polarity_serde_names() {
        let json = serde_json::to_string(&Polarity::LowerIsWorse).unwrap();
        assert_eq!(json, "\"lower-is-worse\"");
    }
}
