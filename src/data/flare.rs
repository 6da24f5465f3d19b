//! GOES solar flare classification from 0.1-0.8 nm X-ray flux.

use std::fmt;

/// Class letters with the lower flux bound of each band, in W/m².
const BANDS: &[(char, f64)] = &[
    ('X', 1e-4),
    ('M', 1e-5),
    ('C', 1e-6),
    ('B', 1e-7),
    ('A', 1e-8),
];

/// A flare class such as `C2.3` or `X1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlareClass {
    pub letter: char,
    /// Flux as a multiple of the band's lower bound, truncated to one decimal.
    pub magnitude: f64,
}

impl FlareClass {
    /// Classify a flux value. Returns `None` for non-positive flux.
    pub fn from_flux(flux: f64) -> Option<Self> {
        if !flux.is_finite() || flux <= 0.0 {
            return None;
        }

        // Below A1.0 still reports as class A
        let (letter, base) = BANDS
            .iter()
            .copied()
            .find(|(_, base)| flux >= *base)
            .unwrap_or(('A', 1e-8));

        // Epsilon absorbs float error so 3e-8 reads A3.0 rather than A2.9
        let magnitude = ((flux / base) * 10.0 + 1e-9).floor() / 10.0;

        Some(Self { letter, magnitude })
    }
}

impl fmt::Display for FlareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.1}", self.letter, self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(flux: f64) -> String {
        FlareClass::from_flux(flux).unwrap().to_string()
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(class(1e-6), "C1.0");
        assert_eq!(class(1e-4), "X1.0");
        assert_eq!(class(1e-5), "M1.0");
    }

    #[test]
    fn test_magnitudes() {
        assert_eq!(class(2.5e-5), "M2.5");
        assert_eq!(class(3e-8), "A3.0");
        assert_eq!(class(9.99e-7), "B9.9");
        assert_eq!(class(2.3e-3), "X23.0");
    }

    #[test]
    fn test_below_a_class() {
        assert_eq!(class(5e-9), "A0.5");
    }

    #[test]
    fn test_invalid_flux() {
        assert_eq!(FlareClass::from_flux(0.0), None);
        assert_eq!(FlareClass::from_flux(-1e-6), None);
        assert_eq!(FlareClass::from_flux(f64::NAN), None);
    }
}
