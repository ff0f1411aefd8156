use paste::paste;
use crate::bigdigit::{RADIX_10_u8, RADIX_u32};

mod sub_decimal_digits {
    use super::*;

    // digits are written least-significant first
    macro_rules! impl_case {
        ( $name:ident: [$($a:literal),*] - [$($b:literal),*] = [$($c:literal),*] ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a: &[u8] = &[$($a),*];
                    let b: &[u8] = &[$($b),*];
                    let expected: &[u8] = &[$($c),*];

                    assert_eq!(sub_digit_slices::<RADIX_10_u8>(a, b), expected);
                }
            }
        };
    }

    impl_case!(zero_zero: [0] - [0] = [0]);
    impl_case!(equal: [5, 4, 3] - [5, 4, 3] = [0]);
    impl_case!(borrow_chain: [0, 0, 0, 1] - [1] = [9, 9, 9]);
    impl_case!(no_borrow: [9, 7, 1] - [6, 5] = [3, 2, 1]);
    impl_case!(borrow_stops: [0, 0, 5, 8] - [5] = [5, 9, 4, 8]);
}

mod sub_limbs {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: [$($a:literal),*] - [$($b:literal),*] = [$($c:literal),*] ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a: &[u32] = &[$($a),*];
                    let b: &[u32] = &[$($b),*];
                    let expected: &[u32] = &[$($c),*];

                    assert_eq!(sub_digit_slices::<RADIX_u32>(a, b), expected);
                }
            }
        };
    }

    impl_case!(zero_zero: [0] - [0] = [0]);
    impl_case!(borrow_one: [0, 1] - [1] = [4294967295]);
    impl_case!(borrow_through: [0, 0, 8] - [1] = [4294967295, 4294967295, 7]);
    // 123456789012 - 123456789000 = 12
    impl_case!(to_single_limb: [3197704724, 28] - [3197704712, 28] = [12]);
}

#[test]
#[should_panic(expected = "subtraction underflow")]
fn sub_larger_panics() {
    sub_digit_slices::<RADIX_u32>(&[1], &[2]);
}

#[test]
#[should_panic(expected = "subtraction underflow")]
fn sub_longer_panics() {
    sub_digit_slices::<RADIX_u32>(&[1], &[0, 1]);
}
