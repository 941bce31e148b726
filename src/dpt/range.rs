//! Range and scaling primitive
//!
//! Many DPTs transport a raw integer code whose application meaning is a
//! scaled physical quantity (raw 0..255 meaning 0..100 %, or 0..360 °).
//! [`Scaling`] holds the closed bounds in the *physical* unit and the
//! optional pair of conversion functions.
//!
//! ```text
//! encode: raw = round_half_up(to_raw(value))      value ∈ [lower, upper]
//! decode: value = to_physical(raw)
//! ```
//!
//! A scaling without conversion functions is the identity transform.

/// Closed physical range with optional raw/physical conversions
#[derive(Debug, Clone, Copy)]
pub struct Scaling {
    lower: f64,
    upper: f64,
    to_physical: Option<fn(f64) -> f64>,
    to_raw: Option<fn(f64) -> f64>,
}

impl Scaling {
    /// Identity scaling bounded by `[lower, upper]`
    pub const fn identity(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            to_physical: None,
            to_raw: None,
        }
    }

    /// Scaling with explicit conversion functions
    ///
    /// `to_physical` maps a raw code to the physical unit, `to_raw` is its inverse.
    pub const fn with_functions(
        lower: f64,
        upper: f64,
        to_physical: fn(f64) -> f64,
        to_raw: fn(f64) -> f64,
    ) -> Self {
        Self {
            lower,
            upper,
            to_physical: Some(to_physical),
            to_raw: Some(to_raw),
        }
    }

    /// Inclusive lower bound (physical unit)
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Inclusive upper bound (physical unit)
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// `lower <= value <= upper`
    ///
    /// NaN is never inside the range.
    #[inline]
    pub fn is_range_closed(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Convert a raw code to the physical unit
    #[inline]
    pub fn to_physical(&self, raw: i64) -> f64 {
        let raw = raw as f64;
        match self.to_physical {
            Some(f) => f(raw),
            None => raw,
        }
    }

    /// Convert a physical value to its raw code (rounded half-up)
    ///
    /// The caller is responsible for the range check.
    #[inline]
    pub fn to_raw(&self, value: f64) -> i64 {
        match self.to_raw {
            Some(f) => round_half_up(f(value)),
            None => round_half_up(value),
        }
    }
}

/// Round to the nearest integer, ties away from zero (2.5 → 3, -2.5 → -3).
///
/// Manual rounding keeps this usable without `std`.
#[inline]
pub fn round_half_up(value: f64) -> i64 {
    if value >= 0.0 {
        (value + 0.5) as i64
    } else {
        (value - 0.5) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_to_physical(raw: f64) -> f64 {
        raw * 100.0 / 255.0
    }

    fn percent_to_raw(value: f64) -> f64 {
        value * 255.0 / 100.0
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-0.5), -1);
        assert_eq!(round_half_up(-2.5), -3);
        assert_eq!(round_half_up(-2.49), -2);
    }

    #[test]
    fn test_range_closed() {
        let s = Scaling::identity(0.0, 100.0);
        assert!(s.is_range_closed(0.0));
        assert!(s.is_range_closed(100.0));
        assert!(!s.is_range_closed(-1.0));
        assert!(!s.is_range_closed(101.0));
        assert!(!s.is_range_closed(f64::NAN));
    }

    #[test]
    fn test_identity() {
        let s = Scaling::identity(-128.0, 127.0);
        assert_eq!(s.to_raw(-12.4), -12);
        assert_eq!(s.to_physical(-12), -12.0);
    }

    #[test]
    fn test_percent_scaling() {
        let s = Scaling::with_functions(0.0, 100.0, percent_to_physical, percent_to_raw);
        assert_eq!(s.to_raw(100.0), 255);
        assert_eq!(s.to_raw(50.0), 128); // 127.5 rounds up
        assert_eq!(s.to_raw(0.0), 0);
        assert_eq!(s.to_physical(255), 100.0);
        // raw -> physical -> raw is stable for every code
        for raw in 0..=255 {
            assert_eq!(s.to_raw(s.to_physical(raw)), raw);
        }
    }
}
