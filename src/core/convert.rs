//! Value ⇄ index conversion for a stepped numeric range.
//!
//! A slider discretises the closed interval `[lower, upper]` into ticks
//! `lower + i * step` for `i` in `[0, max_index]`.  The conversions here are
//! total once a [`SliderConfig`] has been constructed — malformed input is
//! rejected eagerly instead of surfacing as NaN indices at render time.

use thiserror::Error;

/// Construction-time contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("step must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("range lower bound {lower} exceeds upper bound {upper}")]
    InvertedRange { lower: f64, upper: f64 },
    #[error("tick pitch must be at least one column, got {0}")]
    InvalidPitch(f64),
}

/// Validated slider range + step.  Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    lower: f64,
    upper: f64,
    step: f64,
}

impl SliderConfig {
    /// Validate eagerly so every conversion below is a total function.
    pub fn new(lower: f64, upper: f64, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(ConfigError::InvertedRange { lower, upper });
        }
        Ok(Self { lower, upper, step })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Highest valid tick index: `floor((upper − lower) / step)`.
    ///
    /// When the span is not an exact multiple of `step`, the last tick falls
    /// short of `upper`.  That is accepted, not an error.
    pub fn max_index(&self) -> usize {
        ((self.upper - self.lower) / self.step).floor() as usize
    }

    /// Nearest tick index for `value`, clamped to `[0, max_index]`.
    ///
    /// Rounding primitive is [`f64::round`] — round-half-away-from-zero — so
    /// a value exactly between two ticks resolves to the tick further from
    /// the lower bound.  Out-of-range values clamp silently.
    pub fn index_from_value(&self, value: f64) -> usize {
        let raw = ((value - self.lower) / self.step).round();
        raw.clamp(0.0, self.max_index() as f64) as usize
    }

    /// Value at tick `index`.  Indices past `max_index` clamp to the last
    /// tick; index 0 always maps exactly to the lower bound.
    pub fn value_from_index(&self, index: usize) -> f64 {
        let index = index.min(self.max_index());
        self.lower + index as f64 * self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(lower: f64, upper: f64, step: f64) -> SliderConfig {
        SliderConfig::new(lower, upper, step).unwrap()
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            SliderConfig::new(0.0, 10.0, 0.0),
            Err(ConfigError::InvalidStep(0.0))
        );
        assert!(SliderConfig::new(0.0, 10.0, -1.0).is_err());
        assert!(SliderConfig::new(0.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            SliderConfig::new(5.0, 1.0, 1.0),
            Err(ConfigError::InvertedRange {
                lower: 5.0,
                upper: 1.0
            })
        );
    }

    #[test]
    fn degenerate_range_is_valid() {
        let c = config(3.0, 3.0, 1.0);
        assert_eq!(c.max_index(), 0);
        assert_eq!(c.index_from_value(3.0), 0);
        assert_eq!(c.value_from_index(0), 3.0);
    }

    #[test]
    fn max_index_exact_multiple() {
        assert_eq!(config(0.0, 10.0, 1.0).max_index(), 10);
        assert_eq!(config(-5.0, 5.0, 2.5).max_index(), 4);
    }

    #[test]
    fn max_index_non_multiple_clamps_last_tick() {
        // Span 10, step 3 → ticks at 0, 3, 6, 9; the last tick is below upper.
        let c = config(0.0, 10.0, 3.0);
        assert_eq!(c.max_index(), 3);
        assert_eq!(c.value_from_index(3), 9.0);
    }

    #[test]
    fn endpoints_map_to_endpoint_indices() {
        let c = config(0.0, 10.0, 1.0);
        assert_eq!(c.index_from_value(c.lower()), 0);
        assert_eq!(c.index_from_value(c.upper()), c.max_index());
    }

    #[test]
    fn nearest_rounding() {
        // 3.4 rounds down to index 3; .5 rounds away from zero to index 4.
        let c = config(0.0, 10.0, 1.0);
        assert_eq!(c.index_from_value(3.4), 3);
        assert_eq!(c.value_from_index(3), 3.0);
        assert_eq!(c.index_from_value(3.5), 4);
    }

    #[test]
    fn out_of_range_values_clamp() {
        let c = config(0.0, 10.0, 1.0);
        assert_eq!(c.index_from_value(-100.0), 0);
        assert_eq!(c.index_from_value(100.0), 10);
        assert_eq!(c.value_from_index(99), 10.0);
    }

    #[test]
    fn round_trip_over_whole_index_domain() {
        for c in [
            config(0.0, 10.0, 1.0),
            config(-2.0, 7.0, 0.25),
            config(0.0, 1.0, 0.1),
            config(10.0, 55.0, 7.0),
        ] {
            for i in 0..=c.max_index() {
                assert_eq!(c.index_from_value(c.value_from_index(i)), i);
            }
        }
    }

    #[test]
    fn nearest_index_error_bound() {
        let c = config(-2.0, 7.0, 0.25);
        let mut v = c.lower();
        while v <= c.upper() {
            let round_tripped = c.value_from_index(c.index_from_value(v));
            assert!((round_tripped - v).abs() <= c.step() / 2.0 + 1e-9);
            v += 0.013;
        }
    }
}
