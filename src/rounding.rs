//! Rounding structures and subroutines
//!
//! Every value rounded here is non-negative, so there are no separate
//! modes for rounding toward +∞ or -∞.

use crate::stdlib::Vec;

/// Determines how to calculate the last digit of the number
///
/// Default rounding mode is HalfUp
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Always round away from zero
    ///
    /// * 5.5 → 6.0
    /// * 2.5 → 3.0
    /// * 1.6 → 2.0
    /// * 1.1 → 2.0
    Up,

    /// Always round towards zero
    ///
    /// * 5.5 → 5.0
    /// * 2.5 → 2.0
    /// * 1.6 → 1.0
    /// * 1.1 → 1.0
    Down,

    /// Round to 'nearest neighbor', or up if ending decimal is 5
    ///
    /// * 5.5 → 6.0
    /// * 2.5 → 3.0
    /// * 1.6 → 2.0
    /// * 1.1 → 1.0
    #[default]
    HalfUp,

    /// Round to 'nearest neighbor', or down if ending decimal is 5
    ///
    /// * 5.5 → 5.0
    /// * 2.5 → 2.0
    /// * 1.6 → 2.0
    /// * 1.1 → 1.0
    HalfDown,

    /// Round to 'nearest neighbor', if equidistant, round towards
    /// nearest even digit
    ///
    /// * 5.5 → 6.0
    /// * 2.5 → 2.0
    /// * 1.6 → 2.0
    /// * 1.1 → 1.0
    ///
    HalfEven,
}


impl RoundingMode {
    /// Perform the rounding operation
    ///
    /// Parameters
    /// ----------
    /// * pair (u8, u8) - The two digits in question to be rounded.
    ///     i.e. to round 0.345 to two places, you would pass (4, 5).
    ///     As decimal digits, they must be less than ten!
    /// * trailing_zeros (bool) - True if all digits after the pair are zero.
    ///       This has an effect if the right hand digit is 0 or 5.
    ///
    /// Returns
    /// -------
    /// Returns the first number of the pair, rounded. This may be 10,
    /// in which case the caller must carry into the next digit.
    ///
    /// Examples
    /// --------
    /// - To round 2341, pass in `(4, 1), true` → get 4 or 5 depending on scheme
    /// - To round 0.1051 to two places: `(0, 5), false` → returns either 0 or 1
    ///
    pub fn round_pair(&self, pair: (u8, u8), trailing_zeros: bool) -> u8 {
        use self::RoundingMode::*;
        use crate::stdlib::cmp::Ordering::*;

        let (lhs, rhs) = pair;
        // if all zero after digit, never round
        if rhs == 0 && trailing_zeros {
            return lhs;
        }
        let up = lhs + 1;
        let down = lhs;
        match (*self, rhs.cmp(&5)) {
            (Up, _) => up,
            (Down, _) => down,
            (_,      Less) => down,
            (_,      Greater) => up,
            (_,        Equal) if !trailing_zeros => up,
            (HalfUp,   Equal) => up,
            (HalfDown, Equal) => down,
            (HalfEven, Equal) => if lhs % 2 == 0 { down } else { up },
        }
    }

    /// Round big-endian decimal digits at their last position
    ///
    /// `discarded` is the first digit dropped after `digits`, and
    /// `trailing_zeros` is true if every digit after it is zero.
    /// A carry propagates toward the most significant digit; if it
    /// overflows, a `1` is prepended and `true` is returned.
    ///
    pub(crate) fn round_decimal_digits(
        &self,
        digits: &mut Vec<u8>,
        discarded: u8,
        trailing_zeros: bool,
    ) -> bool {
        let last = match digits.last_mut() {
            Some(last) => last,
            None => return false,
        };

        let rounded = self.round_pair((*last, discarded), trailing_zeros);
        if rounded < 10 {
            *last = rounded;
            return false;
        }

        *last = 0;
        let n = digits.len();
        if increment_decimal_digits(&mut digits[..n - 1]) {
            return false;
        }

        digits.insert(0, 1);
        true
    }
}

/// Add one to big-endian decimal digits in place
///
/// Returns false if the carry ran off the most significant end, in
/// which case every digit is now zero.
///
fn increment_decimal_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return true;
        }
    }
    false
}


#[cfg(test)]
#[allow(non_snake_case)]
#[path = "rounding.tests.rs"]
mod tests;
