//! arithmetic routines
//!
//! Free functions over little-endian slices of bigdigits. Slices passed
//! in are expected to be canonical: no zeros at the most significant
//! end, except for the single-digit zero.
//!

use crate::stdlib::cmp::Ordering;
use crate::stdlib::Vec;

use num_traits::Zero;

use crate::bigdigit::RadixType;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;
pub(crate) mod decimal;
pub(crate) mod sqrt;

pub(crate) use self::addition::add_digit_slices;
pub(crate) use self::subtraction::sub_digit_slices;
pub(crate) use self::multiplication::mul_digit_slices;


/// Compare two canonical little-endian digit slices
///
/// More digits means larger value, otherwise digits are compared
/// starting from the most significant.
///
pub(crate) fn cmp_digit_slices<R: RadixType>(a: &[R::Base], b: &[R::Base]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }

    Ordering::Equal
}

/// Remove zeros at the most significant end of the vector
///
/// At least one digit is always kept, so an empty or all-zero vector
/// becomes the single-digit zero.
///
pub(crate) fn trim_significant_zeros<T: Zero + Copy>(v: &mut Vec<T>) {
    let len = v.iter().rposition(|d| !d.is_zero()).map(|i| i + 1).unwrap_or(0);
    v.truncate(len.max(1));
    if v.is_empty() {
        v.push(T::zero());
    }
}

/// True if the digits have no redundant most-significant zeros
pub(crate) fn is_canonical<T: Zero>(v: &[T]) -> bool {
    match v.split_last() {
        None => false,
        Some((last, rest)) => !last.is_zero() || rest.is_empty(),
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::{RADIX_10_u8, RADIX_u32};

    #[test]
    fn cmp_more_digits_is_greater() {
        let a = [0u32, 1];
        let b = [u32::MAX];
        assert_eq!(cmp_digit_slices::<RADIX_u32>(&a, &b), Ordering::Greater);
        assert_eq!(cmp_digit_slices::<RADIX_u32>(&b, &a), Ordering::Less);
    }

    #[test]
    fn cmp_from_most_significant() {
        // 321 vs 329
        let a = [1u8, 2, 3];
        let b = [9u8, 2, 3];
        assert_eq!(cmp_digit_slices::<RADIX_10_u8>(&a, &b), Ordering::Less);
        assert_eq!(cmp_digit_slices::<RADIX_10_u8>(&a, &a), Ordering::Equal);
    }

    #[test]
    fn trim_keeps_single_zero() {
        let mut v = vec![0u32, 0, 0];
        trim_significant_zeros(&mut v);
        assert_eq!(v, [0]);

        let mut v: Vec<u32> = Vec::new();
        trim_significant_zeros(&mut v);
        assert_eq!(v, [0]);
    }

    #[test]
    fn trim_removes_significant_zeros_only() {
        let mut v = vec![0u32, 7, 0, 0];
        trim_significant_zeros(&mut v);
        assert_eq!(v, [0, 7]);
        assert!(is_canonical(&v));
        assert!(!is_canonical(&[7u32, 0]));
        assert!(is_canonical(&[0u32]));
    }
}
