// \file src/context.rs

//! A `Context` object is the set of parameters that define otherwise
//! ambiguous square root extractions.
//!
//! Bounded extraction needs to know how many significant digits to
//! produce and how to round the last one; both modes need to know how
//! each digit is searched for.

use crate::*;


/// Information regarding behavior of bounded square root extraction
///
/// ```
/// use sqrt_digits::{sqrt_digits_with_context, Context, RoundingMode};
///
/// let ctx = Context::default()
///     .with_precision(3)
///     .with_rounding_mode(RoundingMode::Down);
/// assert_eq!(sqrt_digits_with_context(2, &ctx).unwrap(), "1.41");
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// The maximum number of significant digits to produce
    ///
    /// Integral digits count toward this limit, but are never
    /// truncated when there are more of them than the limit.
    precision: u64,

    /// Method to round the last digit
    rounding_mode: RoundingMode,

    /// Method to find each digit of the root
    digit_search: DigitSearch,
}

impl Context {
    /// Create context with given precision and the default rounding mode
    pub fn new(precision: u64) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Copy context with new precision value
    pub fn with_precision(&self, precision: u64) -> Self {
        Self {
            precision,
            ..*self
        }
    }

    /// Copy context with new rounding mode
    pub fn with_rounding_mode(&self, mode: RoundingMode) -> Self {
        Self {
            rounding_mode: mode,
            ..*self
        }
    }

    /// Copy context with new digit search strategy
    pub fn with_digit_search(&self, search: DigitSearch) -> Self {
        Self {
            digit_search: search,
            ..*self
        }
    }

    /// Return maximum number of significant digits
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Return rounding mode
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Return digit search strategy
    pub fn digit_search(&self) -> DigitSearch {
        self.digit_search
    }

    /// Number of fractional digits allowed after `integral_len` integral digits
    pub(crate) fn fractional_digit_limit(&self, integral_len: usize) -> u64 {
        self.precision.saturating_sub(integral_len as u64)
    }
}

impl Default for Context {
    fn default() -> Context {
        Context {
            precision: DEFAULT_PRECISION,
            rounding_mode: RoundingMode::default(),
            digit_search: DigitSearch::default(),
        }
    }
}


#[cfg(test)]
mod test_context {
    use super::*;

    #[test]
    fn default_values() {
        let ctx = Context::default();
        assert_eq!(ctx.precision(), DEFAULT_PRECISION);
        assert_eq!(ctx.rounding_mode(), RoundingMode::HalfUp);
        assert_eq!(ctx.digit_search(), DigitSearch::Dichotomic);
    }

    #[test]
    fn builders_copy() {
        let ctx = Context::new(12);
        let down = ctx.with_rounding_mode(RoundingMode::Down);
        let linear = down.with_digit_search(DigitSearch::Linear);
        let wide = linear.with_precision(500);

        assert_eq!(ctx.rounding_mode(), RoundingMode::HalfUp);
        assert_eq!(down.precision(), 12);
        assert_eq!(down.rounding_mode(), RoundingMode::Down);
        assert_eq!(linear.digit_search(), DigitSearch::Linear);
        assert_eq!(wide.precision(), 500);
        assert_eq!(wide.rounding_mode(), RoundingMode::Down);
        assert_eq!(wide.digit_search(), DigitSearch::Linear);
    }

    #[test]
    fn fractional_limit_saturates() {
        let ctx = Context::new(3);
        assert_eq!(ctx.fractional_digit_limit(1), 2);
        assert_eq!(ctx.fractional_digit_limit(3), 0);
        assert_eq!(ctx.fractional_digit_limit(7), 0);
        assert_eq!(Context::new(0).fractional_digit_limit(1), 0);
    }
}
