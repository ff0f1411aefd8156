// tests for the RoundingMode rounding routines

use super::*;

mod test_round_pair {
    use paste::paste;
    use super::*;

    macro_rules! impl_test {
        ( $($mode:ident),+ => $expected:literal) => {
            $(
                paste! {
                    #[test]
                    fn [< mode_ $mode >]() {
                        let (pair, trailing_zeros) = test_input();
                        let mode = self::RoundingMode::$mode;
                        let result = mode.round_pair(pair, trailing_zeros);
                        assert_eq!(result, $expected);
                    }
                }
            )*
        }
    }

    macro_rules! define_test_input {
        ( $lhs:literal . $rhs:literal $($t:tt)*) => {
            define_test_input!(pair=($lhs, $rhs), $($t)*);
        };
        ( pair=$pair:expr, ) => {
            define_test_input!(pair=$pair, trailing_zeros=true);
        };
        ( pair=$pair:expr, 000x ) => {
            define_test_input!(pair=$pair, trailing_zeros=false);
        };
        ( pair=$pair:expr, trailing_zeros=$trailing_zeros:literal ) => {
            fn test_input() -> ((u8, u8), bool) { ($pair, $trailing_zeros) }
        };
    }

    mod case_0_1 {
        use super::*;

        define_test_input!(0 . 1);

        impl_test!(Up => 1);
        impl_test!(Down, HalfUp, HalfDown, HalfEven => 0);
    }

    mod case_0_5 {
        use super::*;

        define_test_input!( 0 . 5 );

        impl_test!(Up, HalfUp => 1);
        impl_test!(Down, HalfDown, HalfEven => 0);
    }

    mod case_0_5_000x {
        use super::*;

        // ...000x indicates a non-zero trailing digit; affects behavior of rounding N.0 and N.5
        define_test_input!(0 . 5 000x);

        impl_test!(Up, HalfUp, HalfDown, HalfEven => 1);
        impl_test!(Down => 0);
    }

    mod case_0_7 {
        use super::*;

        define_test_input!(0 . 7);

        impl_test!(Up, HalfUp, HalfDown, HalfEven => 1);
        impl_test!(Down => 0);
    }

    mod case_4_3_000x {
        use super::*;

        define_test_input!(4 . 3 000x);

        impl_test!(Up => 5);
        impl_test!(Down, HalfUp, HalfDown, HalfEven => 4);
    }

    mod case_9_5_000x {
        use super::*;

        define_test_input!(9 . 5 000x);

        impl_test!(Up, HalfDown, HalfUp, HalfEven => 10);
        impl_test!(Down => 9);
    }

    mod case_9_5 {
        use super::*;

        define_test_input!(9 . 5);

        impl_test!(Up, HalfUp, HalfEven => 10);
        impl_test!(Down, HalfDown => 9);
    }

    mod case_8_5 {
        use super::*;

        define_test_input!(8 . 5);

        impl_test!(Up, HalfUp => 9);
        impl_test!(Down, HalfDown, HalfEven => 8);
    }

    mod case_6_5_000x {
        use super::*;

        define_test_input!(6 . 5 000x);

        impl_test!(Up, HalfUp, HalfDown, HalfEven => 7);
        impl_test!(Down => 6);
    }

    mod case_3_0 {
        use super::*;

        define_test_input!(3 . 0);

        impl_test!(Up, Down, HalfUp, HalfDown, HalfEven => 3);
    }

    mod case_3_0_000x {
        use super::*;

        define_test_input!(3 . 0 000x);

        impl_test!(Up => 4);
        impl_test!(Down, HalfUp, HalfDown, HalfEven => 3);
    }
}


mod test_round_decimal_digits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $mode:ident, $digits:expr, $discarded:literal $(, $sticky:ident)? => $expected:expr, $grew:literal) => {
            #[test]
            fn $name() {
                let mut digits = $digits.to_vec();
                let trailing_zeros = impl_case!(@trailing $($sticky)?);
                let grew = RoundingMode::$mode.round_decimal_digits(&mut digits, $discarded, trailing_zeros);
                assert_eq!(digits, $expected);
                assert_eq!(grew, $grew);
            }
        };
        (@trailing) => { true };
        (@trailing sticky) => { false };
    }

    impl_case!(case_no_change: HalfUp, [1u8, 4, 1], 4 => [1, 4, 1], false);
    impl_case!(case_last_digit_up: HalfUp, [1u8, 4, 1], 6 => [1, 4, 2], false);
    impl_case!(case_carry_into_integral: HalfUp, [9u8, 9], 9 => [1, 0, 0], true);
    impl_case!(case_carry_stops: HalfUp, [6u8, 4, 9, 9], 7 => [6, 5, 0, 0], false);
    impl_case!(case_single_nine: HalfUp, [9u8], 5 => [1, 0], true);
    impl_case!(case_half_down_exact_half: HalfDown, [2u8, 5], 5 => [2, 5], false);
    impl_case!(case_half_down_sticky: HalfDown, [2u8, 5], 5, sticky => [2, 6], false);
    impl_case!(case_half_even: HalfEven, [2u8, 5], 5 => [2, 6], false);
    impl_case!(case_down_never_carries: Down, [9u8, 9], 9, sticky => [9, 9], false);
    impl_case!(case_up_sticky_zero: Up, [9u8, 9], 0, sticky => [1, 0, 0], true);

    #[test]
    fn empty_digits_unchanged() {
        let mut digits = Vec::new();
        assert!(!RoundingMode::Up.round_decimal_digits(&mut digits, 9, false));
        assert!(digits.is_empty());
    }

    #[test]
    fn default_is_half_up() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
    }
}
