//!
//! Addition algorithms for BigDigit slices
//!

use crate::stdlib::Vec;

use num_traits::Zero;

use crate::bigdigit::RadixType;


/// Add two little-endian slices of bigdigits
///
/// Operands may be given in either order. The result has no
/// significant zeros (beyond the single-digit zero).
///
#[inline]
pub(crate) fn add_digit_slices<R: RadixType>(a: &[R::Base], b: &[R::Base]) -> Vec<R::Base> {
    // a is longer of the slices
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut result = Vec::with_capacity(a.len() + 1);
    extend_digit_slice_sum_into::<R>(a, b, &mut result);
    super::trim_significant_zeros(&mut result);
    return result;
}

/// Extend vector with sum of digits, `a` must not be shorter than `b`
#[inline]
fn extend_digit_slice_sum_into<R: RadixType>(a: &[R::Base], b: &[R::Base], v: &mut Vec<R::Base>) {
    debug_assert!(a.len() >= b.len());

    let mut a_digits = a.iter();
    let mut carry = R::Base::zero();
    for &b_digit in b.iter() {
        let a_digit = a_digits.next().copied().unwrap_or_else(Zero::zero);
        v.push(R::add_with_carry(a_digit, b_digit, &mut carry));
    }

    while !carry.is_zero() {
        match a_digits.next() {
            Some(&digit) => {
                v.push(R::add_carry(digit, &mut carry));
            }
            None => {
                // carry is not zero and a_digits has ended
                // so we push final carry and stop addition
                v.push(carry);
                return;
            }
        }
    }

    // at this point carry is zero so we just copy remaining
    v.extend(a_digits);
}


#[cfg(test)]
mod test {
    use super::*;
    include!("addition.tests.rs");
}
