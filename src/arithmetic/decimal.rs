//! Algorithms for manipulating decimal digits
//!
//! Conversions between base-2<sup>32</sup> limbs and base-10 digits are
//! done with schoolbook arithmetic on vectors of decimal digits, where
//! the only "big" operations are by a small native divisor or factor.
//!
//! Note: Many bit-optimizations don't apply when doing decimal
//!       math, as high-order bits affect low-order decimals
//!

use crate::stdlib::Vec;

use num_integer::div_rem;

use crate::bigdigit::{DoubleLimb, Limb, RadixType, LIMB_BASE, RADIX_10_u8};
use super::add_digit_slices;


/// Remainder of big-endian decimal digits divided by `divisor`
///
/// Digits are consumed most significant first, applying the modulo
/// at each step so the accumulator never exceeds `10 * divisor`.
///
pub(crate) fn rem_decimal_digits(digits: &[u8], divisor: u64) -> u64 {
    debug_assert!(divisor != 0);
    debug_assert!(divisor <= u64::MAX / 10);

    digits.iter().fold(0, |rem, &d| (rem * 10 + d as u64) % divisor)
}

/// Quotient of big-endian decimal digits divided by `divisor`
///
/// Long division by a constant. Returned digits are big-endian with
/// no leading zeros, `[0]` if the quotient is zero.
///
pub(crate) fn div_decimal_digits(digits: &[u8], divisor: u64) -> Vec<u8> {
    debug_assert!(divisor != 0);
    debug_assert!(divisor <= u64::MAX / 10);

    let mut quotient = Vec::with_capacity(digits.len());
    let mut rem = 0u64;
    for &d in digits.iter() {
        let (q, r) = div_rem(rem * 10 + d as u64, divisor);
        rem = r;
        // skip leading zeros
        if q != 0 || !quotient.is_empty() {
            debug_assert!(q < 10);
            quotient.push(q as u8);
        }
    }

    if quotient.is_empty() {
        quotient.push(0);
    }
    quotient
}

/// Multiply little-endian decimal digits by `factor`, in place
pub(crate) fn mul_decimal_digits(digits: &mut Vec<u8>, factor: u64) {
    debug_assert!(factor <= u64::MAX / 10 / 2);

    let mut carry = 0u64;
    for d in digits.iter_mut() {
        let (hi, lo) = div_rem(*d as u64 * factor + carry, 10);
        *d = lo as u8;
        carry = hi;
    }

    while carry != 0 {
        let (hi, lo) = div_rem(carry, 10);
        digits.push(lo as u8);
        carry = hi;
    }

    super::trim_significant_zeros(digits);
}

/// Little-endian decimal digits of a native integer
pub(crate) fn u64_to_decimal_digits(mut n: u64) -> Vec<u8> {
    let mut digits = Vec::with_capacity(20);
    loop {
        let (hi, lo) = div_rem(n, 10);
        digits.push(lo as u8);
        n = hi;
        if n == 0 {
            return digits;
        }
    }
}

/// Convert little-endian limbs into little-endian decimal digits
///
/// Evaluates `Σ limb[i] * (2^32)^i` in decimal, Horner style: starting
/// at the most significant limb, the running sum is multiplied by the
/// limb base and the next limb's decimal digits are added.
///
pub(crate) fn limbs_to_decimal_digits(limbs: &[Limb]) -> Vec<u8> {
    let mut sum = vec![0u8];
    for &limb in limbs.iter().rev() {
        mul_decimal_digits(&mut sum, LIMB_BASE);
        let limb_digits = u64_to_decimal_digits(limb as DoubleLimb);
        sum = add_digit_slices::<RADIX_10_u8>(&sum, &limb_digits);
    }
    sum
}

/// Convert big-endian decimal digits into little-endian limbs
///
/// Each step peels off the lowest limb as `digits mod 2^32` and
/// replaces the digits with `digits div 2^32`, until the quotient is
/// zero.
///
pub(crate) fn decimal_digits_to_limbs(digits: &[u8]) -> Vec<Limb> {
    debug_assert!(RADIX_10_u8::validate_digits(digits));

    let mut limbs = Vec::with_capacity(digits.len() / 9 + 1);
    let mut number = div_decimal_digits(digits, 1);
    loop {
        limbs.push(rem_decimal_digits(&number, LIMB_BASE) as Limb);
        number = div_decimal_digits(&number, LIMB_BASE);
        if number == [0] {
            break;
        }
    }
    super::trim_significant_zeros(&mut limbs);
    limbs
}
