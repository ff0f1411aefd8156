use paste::paste;
use crate::bigdigit::{RADIX_10_u8, RADIX_u32};

mod mul_decimal_digits {
    use super::*;

    // digits are written least-significant first
    macro_rules! impl_case {
        ( $name:ident: [$($a:literal),*] * [$($b:literal),*] = [$($c:literal),*] ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a: &[u8] = &[$($a),*];
                    let b: &[u8] = &[$($b),*];
                    let expected: &[u8] = &[$($c),*];

                    assert_eq!(mul_digit_slices::<RADIX_10_u8>(a, b), expected);
                    assert_eq!(mul_digit_slices::<RADIX_10_u8>(b, a), expected);
                }
            }
        };
    }

    impl_case!(zero_zero: [0] * [0] = [0]);
    impl_case!(zero_many: [0] * [9, 9, 9] = [0]);
    impl_case!(one_many: [1] * [3, 2, 1] = [3, 2, 1]);
    impl_case!(nines: [9, 9] * [9, 9] = [1, 0, 8, 9]);
    // 1234 * 56 = 69104
    impl_case!(n1234_56: [4, 3, 2, 1] * [6, 5] = [4, 0, 1, 9, 6]);
}

mod mul_limbs {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: [$($a:literal),*] * [$($b:literal),*] = [$($c:literal),*] ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a: &[u32] = &[$($a),*];
                    let b: &[u32] = &[$($b),*];
                    let expected: &[u32] = &[$($c),*];

                    assert_eq!(mul_digit_slices::<RADIX_u32>(a, b), expected);
                    assert_eq!(mul_digit_slices::<RADIX_u32>(b, a), expected);
                }
            }
        };
    }

    impl_case!(zero_zero: [0] * [0] = [0]);
    impl_case!(zero_max: [0] * [4294967295, 4294967295] = [0]);
    impl_case!(max_max: [4294967295] * [4294967295] = [1, 4294967294]);
    impl_case!(base_base: [0, 1] * [0, 1] = [0, 0, 1]);
    impl_case!(max2_max: [4294967295, 4294967295] * [4294967295] = [1, 4294967295, 4294967294]);
}

#[test]
fn mul_into_reuses_buffer() {
    let mut result = vec![7u32; 10];
    mul_digit_slices_into::<RADIX_u32>(&[2], &[3], &mut result);
    assert_eq!(result, [6]);
}
