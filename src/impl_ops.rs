//! Implement math operations: Add, Sub, Mul
//!
//! All operations work on borrowed limbs and allocate a new value;
//! owned variants forward to the ref-ref implementations.

use crate::*;
use crate::stdlib::iter::{Product, Sum};
use crate::stdlib::ops::{Add, Mul, Sub};

use crate::arithmetic::{add_digit_slices, mul_digit_slices, sub_digit_slices};
use crate::bigdigit::RADIX_u32;


impl<'a, 'b> Add<&'b BigUnsigned> for &'a BigUnsigned {
    type Output = BigUnsigned;

    #[inline]
    fn add(self, rhs: &BigUnsigned) -> BigUnsigned {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }
        BigUnsigned {
            limbs: add_digit_slices::<RADIX_u32>(&self.limbs, &rhs.limbs),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigUnsigned, add);


/// Subtraction requires `self >= rhs`
///
/// # Panics
///
/// Panics if the difference would be negative. Use
/// [`CheckedSub`](num_traits::CheckedSub) when that is not known
/// ahead of time.
///
impl<'a, 'b> Sub<&'b BigUnsigned> for &'a BigUnsigned {
    type Output = BigUnsigned;

    #[inline]
    fn sub(self, rhs: &BigUnsigned) -> BigUnsigned {
        if rhs.is_zero() {
            return self.clone();
        }
        BigUnsigned {
            limbs: sub_digit_slices::<RADIX_u32>(&self.limbs, &rhs.limbs),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigUnsigned, sub);


impl<'a, 'b> Mul<&'b BigUnsigned> for &'a BigUnsigned {
    type Output = BigUnsigned;

    #[inline]
    fn mul(self, rhs: &BigUnsigned) -> BigUnsigned {
        if self.is_zero() || rhs.is_zero() {
            return BigUnsigned::zero();
        }

        // outer loop runs over the shorter operand
        let (long, short) = if self.limbs.len() >= rhs.limbs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        BigUnsigned {
            limbs: mul_digit_slices::<RADIX_u32>(&long.limbs, &short.limbs),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigUnsigned, mul);


macro_rules! impl_binop_for_primitive {
    (IMPL:OP $imp:ident::$method:ident, $t:ty) => {
        impl $imp<$t> for BigUnsigned {
            type Output = BigUnsigned;

            #[inline]
            fn $method(self, rhs: $t) -> BigUnsigned {
                $imp::$method(&self, &BigUnsigned::from(rhs))
            }
        }

        impl $imp<$t> for &BigUnsigned {
            type Output = BigUnsigned;

            #[inline]
            fn $method(self, rhs: $t) -> BigUnsigned {
                $imp::$method(self, &BigUnsigned::from(rhs))
            }
        }
    };
    ($t:ty) => {
        impl_binop_for_primitive!(IMPL:OP Add::add, $t);
        impl_binop_for_primitive!(IMPL:OP Sub::sub, $t);
        impl_binop_for_primitive!(IMPL:OP Mul::mul, $t);

        forward_communative_binop!(impl Add<BigUnsigned>::add for $t);
        forward_communative_binop!(impl Add<&BigUnsigned>::add for $t);
        forward_communative_binop!(impl Mul<BigUnsigned>::mul for $t);
        forward_communative_binop!(impl Mul<&BigUnsigned>::mul for $t);
    };
}

impl_binop_for_primitive!(u8);
impl_binop_for_primitive!(u16);
impl_binop_for_primitive!(u32);
impl_binop_for_primitive!(u64);
impl_binop_for_primitive!(u128);
impl_binop_for_primitive!(usize);


impl Sum for BigUnsigned {
    #[inline]
    fn sum<I: Iterator<Item = BigUnsigned>>(iter: I) -> BigUnsigned {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a BigUnsigned> for BigUnsigned {
    #[inline]
    fn sum<I: Iterator<Item = &'a BigUnsigned>>(iter: I) -> BigUnsigned {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl Product for BigUnsigned {
    #[inline]
    fn product<I: Iterator<Item = BigUnsigned>>(iter: I) -> BigUnsigned {
        iter.fold(One::one(), |a, b| a * b)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $a:literal + $b:literal = $c:literal ) => {
            paste! {
                #[test]
                fn [< add_ $name >]() {
                    let a: BigUnsigned = $a.parse().unwrap();
                    let b: BigUnsigned = $b.parse().unwrap();
                    let expected: BigUnsigned = $c.parse().unwrap();

                    assert_eq!(&a + &b, expected);
                    assert_eq!(&b + &a, expected);
                    assert_eq!(a.clone() + b.clone(), expected);
                    assert_eq!(a + &b, expected);
                }
            }
        };
        ( $name:ident: $a:literal - $b:literal = $c:literal ) => {
            paste! {
                #[test]
                fn [< sub_ $name >]() {
                    let a: BigUnsigned = $a.parse().unwrap();
                    let b: BigUnsigned = $b.parse().unwrap();
                    let expected: BigUnsigned = $c.parse().unwrap();

                    let diff = &a - &b;
                    assert_eq!(diff, expected);
                    assert!(diff.is_canonical());
                    assert_eq!(&diff + &b, a);
                }
            }
        };
        ( $name:ident: $a:literal * $b:literal = $c:literal ) => {
            paste! {
                #[test]
                fn [< mul_ $name >]() {
                    let a: BigUnsigned = $a.parse().unwrap();
                    let b: BigUnsigned = $b.parse().unwrap();
                    let expected: BigUnsigned = $c.parse().unwrap();

                    assert_eq!(&a * &b, expected);
                    assert_eq!(&b * &a, expected);
                    assert_eq!(a * b, expected);
                }
            }
        };
    }

    impl_case!(zero_zero: "0" + "0" = "0");
    impl_case!(n123456789012_twice: "123456789012" + "123456789012" = "246913578024");
    impl_case!(n12345678901234567890_n9876543211234567890: "12345678901234567890" + "9876543211234567890" = "22222222112469135780");
    impl_case!(carry_out_of_u64: "18446744073709551615" + "1" = "18446744073709551616");

    impl_case!(equal_to_zero: "123456789012" - "123456789012" = "0");
    impl_case!(n123456789012_n123456789000: "123456789012" - "123456789000" = "12");
    impl_case!(long_shrinks_to_one_limb: "42010168383160134110440665745547766649977556245" - "42010168383160134110440665745547766649977556200" = "45");
    impl_case!(multiple_carries:
        "6779575297923493247898029418281817537676227380624747815049013732411535947860165631075856579568246233910811591607874120563664388642279371457390259857568960958935772908009048011104104746617436179252684469483776429833549880669503680760948677500"
        - "6480740698407860230965967436087996657705204307058346549711354397809617377844044371400360906605610235675450542097411694335491913404906608688945818961664673951305585227822636095668822680668761521776633672599142812990432160139844957280499363525"
        = "298834599515633016932061982193820879971023073566401265337659334601918570016121259675495672962635998235361049510462426228172475237372762768444440895904287007630187680186411915435282065948674657476050796884633616843117720529658723480449313975");

    impl_case!(n246913578024_n123456789012: "246913578024" * "123456789012" = "30483157506306967872288");
    impl_case!(long_by_medium: "42010168383160134110440665745547766649977556245" * "1234567890987654321" = "51864404980834242630409449768792397904982098404496001028394784645");
    impl_case!(by_zero: "42010168383160134110440665745547766649977556245" * "0" = "0");
    impl_case!(by_one: "42010168383160134110440665745547766649977556245" * "1" = "42010168383160134110440665745547766649977556245");

    #[test]
    fn mul_by_primitive() {
        let n = BigUnsigned::from(123456789012u64);
        assert_eq!(&n * 2u8, BigUnsigned::from(246913578024u64));
        assert_eq!(2u8 * &n, BigUnsigned::from(246913578024u64));
        assert_eq!(n.clone() * 0u32, BigUnsigned::zero());
    }

    #[test]
    fn add_primitive() {
        let n = BigUnsigned::from(u64::MAX);
        assert_eq!(&n + 1u8, BigUnsigned::from(1u128 << 64));
        assert_eq!(1u8 + n, BigUnsigned::from(1u128 << 64));
    }

    #[test]
    fn sub_primitive() {
        let n = BigUnsigned::from(1u128 << 64);
        assert_eq!(n - 1u8, BigUnsigned::from(u64::MAX));
    }

    #[test]
    #[should_panic(expected = "subtraction underflow")]
    fn sub_underflow_panics() {
        let _ = BigUnsigned::from(1u8) - BigUnsigned::from(2u8);
    }

    #[test]
    fn sum_and_product() {
        let values: Vec<BigUnsigned> = (1u32..=20).map(BigUnsigned::from).collect();
        let total: BigUnsigned = values.iter().sum();
        assert_eq!(total, BigUnsigned::from(210u32));

        let factorial: BigUnsigned = values.into_iter().product();
        assert_eq!(factorial.to_string(), "2432902008176640000");
    }
}
