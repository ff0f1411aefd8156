//!
//! Subtraction algorithms for BigDigit slices
//!

use crate::stdlib::Vec;

use crate::bigdigit::RadixType;


/// Subtract little-endian slice `b` from `a`
///
/// The difference must be non-negative; `a < b` is a bug in the
/// caller and panics.
///
pub(crate) fn sub_digit_slices<R: RadixType>(a: &[R::Base], b: &[R::Base]) -> Vec<R::Base> {
    assert!(a.len() >= b.len(), "subtraction underflow: subtrahend has more digits than minuend");

    let mut result = Vec::with_capacity(a.len());
    let mut borrow = false;

    let (a_lo, a_hi) = a.split_at(b.len());
    for (&x, &y) in a_lo.iter().zip(b.iter()) {
        result.push(R::sub_with_borrow(x, y, &mut borrow));
    }

    // propagate borrow into remaining digits of a
    let zero = num_traits::Zero::zero();
    for &x in a_hi.iter() {
        if borrow {
            result.push(R::sub_with_borrow(x, zero, &mut borrow));
        } else {
            result.push(x);
        }
    }

    assert!(!borrow, "subtraction underflow: subtrahend is larger than minuend");

    super::trim_significant_zeros(&mut result);
    result
}
