//! Multiplication algorithms for BigDigit slices
//!
//! Schoolbook O(n·m) multiplication. Karatsuba and friends would pay
//! off for large operands but are not implemented.

use crate::stdlib::Vec;

use num_traits::Zero;

use crate::bigdigit::RadixType;


/// Multiply two little-endian slices of bigdigits
#[inline]
pub(crate) fn mul_digit_slices<R: RadixType>(a: &[R::Base], b: &[R::Base]) -> Vec<R::Base> {
    let mut result = Vec::new();
    mul_digit_slices_into::<R>(a, b, &mut result);
    result
}

/// Store product of digits in `result`, replacing its contents
pub(crate) fn mul_digit_slices_into<R: RadixType>(
    a: &[R::Base],
    b: &[R::Base],
    result: &mut Vec<R::Base>,
) {
    result.clear();
    result.resize(a.len() + b.len(), Zero::zero());

    for (ib, &digit_b) in b.iter().enumerate() {
        if digit_b.is_zero() {
            continue;
        }

        let mut carry = R::Base::zero();
        for (ia, &digit_a) in a.iter().enumerate() {
            R::carrying_mul_add_inplace(digit_a, digit_b, &mut result[ia + ib], &mut carry);
        }

        // position ia+ib past the end of 'a' has not been written in this row
        result[a.len() + ib] = carry;
    }

    super::trim_significant_zeros(result);
}


#[cfg(test)]
mod test {
    use super::*;
    include!("multiplication.tests.rs");
}
