//! Implementation of comparison operations
//!
//! Equality is derived: canonical limbs make structural equality and
//! numeric equality the same thing. Ordering compares limb counts
//! first, then limbs from the most significant end.
//!

use crate::*;

use stdlib::cmp::Ordering;


impl Ord for BigUnsigned {
    #[inline]
    fn cmp(&self, other: &BigUnsigned) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigUnsigned {
    #[inline]
    fn partial_cmp(&self, other: &BigUnsigned) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


macro_rules! impl_cmp_with_primitive {
    ($t:ty) => {
        impl PartialEq<$t> for BigUnsigned {
            #[inline]
            fn eq(&self, rhs: &$t) -> bool {
                self.compare(&BigUnsigned::from(*rhs)) == Ordering::Equal
            }
        }

        impl PartialEq<BigUnsigned> for $t {
            #[inline]
            fn eq(&self, rhs: &BigUnsigned) -> bool {
                rhs == self
            }
        }

        impl PartialOrd<$t> for BigUnsigned {
            #[inline]
            fn partial_cmp(&self, rhs: &$t) -> Option<Ordering> {
                Some(self.compare(&BigUnsigned::from(*rhs)))
            }
        }

        impl PartialOrd<BigUnsigned> for $t {
            #[inline]
            fn partial_cmp(&self, rhs: &BigUnsigned) -> Option<Ordering> {
                rhs.partial_cmp(self).map(Ordering::reverse)
            }
        }
    };
}

impl_cmp_with_primitive!(u8);
impl_cmp_with_primitive!(u16);
impl_cmp_with_primitive!(u32);
impl_cmp_with_primitive!(u64);
impl_cmp_with_primitive!(u128);
impl_cmp_with_primitive!(usize);


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_test {
        ($name:ident: $a:literal < $b:literal) => {
            #[test]
            fn $name() {
                let a: BigUnsigned = $a.parse().unwrap();
                let b: BigUnsigned = $b.parse().unwrap();
                assert!(a < b);
                assert!(b > a);
                assert_eq!(a.compare(&b), Ordering::Less);
                assert_eq!(b.compare(&a), Ordering::Greater);
                assert_ne!(a, b);
            }
        };
        ($name:ident: $a:literal == $b:literal) => {
            #[test]
            fn $name() {
                let a: BigUnsigned = $a.parse().unwrap();
                let b: BigUnsigned = $b.parse().unwrap();
                assert_eq!(a, b);
                assert_eq!(a.compare(&b), Ordering::Equal);
                assert!(a <= b && a >= b);
            }
        };
    }

    impl_test!(case_0_1: "0" < "1");
    impl_test!(case_limb_boundary: "4294967295" < "4294967296");
    impl_test!(case_same_length_high_limb: "18446744073709551616" < "36893488147419103232");
    impl_test!(case_same_length_low_limb: "18446744073709551616" < "18446744073709551617");
    impl_test!(case_fewer_limbs_is_smaller: "18446744073709551615" < "18446744073709551616");
    impl_test!(case_leading_zeros: "000123" == "123");
    impl_test!(case_zero: "0" == "0000");

    #[test]
    fn compare_with_primitives() {
        let n = BigUnsigned::from(1u128 << 64);
        assert!(n > u64::MAX);
        assert!(u64::MAX < n);
        assert!(n == 1u128 << 64);
        assert!(1u128 << 64 == n);
        assert!(BigUnsigned::zero() == 0u8);
        assert!(BigUnsigned::from(7u8) < 8usize);
    }
}
