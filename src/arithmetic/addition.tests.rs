use paste::paste;
use crate::bigdigit::{RADIX_10_u8, RADIX_u32};

mod add_decimal_digits {
    use super::*;

    // digits are written least-significant first
    macro_rules! impl_case {
        ( $name:ident: [$($a:literal),*] + [$($b:literal),*] = [$($c:literal),*] ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a: &[u8] = &[$($a),*];
                    let b: &[u8] = &[$($b),*];
                    let expected: &[u8] = &[$($c),*];

                    assert_eq!(add_digit_slices::<RADIX_10_u8>(a, b), expected);
                    assert_eq!(add_digit_slices::<RADIX_10_u8>(b, a), expected);
                }
            }
        };
    }

    impl_case!(zero_zero: [0] + [0] = [0]);
    impl_case!(one_zero: [1] + [0] = [1]);
    impl_case!(nine_one: [9] + [1] = [0, 1]);
    impl_case!(carry_chain: [9, 9, 9] + [1] = [0, 0, 0, 1]);
    impl_case!(no_carry: [3, 2, 1] + [6, 5] = [9, 7, 1]);
    impl_case!(carry_stops: [5, 9, 4, 8] + [5] = [0, 0, 5, 8]);
}

mod add_limbs {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: [$($a:literal),*] + [$($b:literal),*] = [$($c:literal),*] ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a: &[u32] = &[$($a),*];
                    let b: &[u32] = &[$($b),*];
                    let expected: &[u32] = &[$($c),*];

                    assert_eq!(add_digit_slices::<RADIX_u32>(a, b), expected);
                    assert_eq!(add_digit_slices::<RADIX_u32>(b, a), expected);
                }
            }
        };
    }

    impl_case!(zero_zero: [0] + [0] = [0]);
    impl_case!(max_one: [4294967295] + [1] = [0, 1]);
    impl_case!(max_max: [4294967295] + [4294967295] = [4294967294, 1]);
    impl_case!(carry_through: [4294967295, 4294967295, 7] + [1] = [0, 0, 8]);
    // 123456789012 + 123456789012 = 246913578024
    impl_case!(twice_123456789012: [3197704724, 28] + [3197704724, 28] = [2100442152, 57]);
}
