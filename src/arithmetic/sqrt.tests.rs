// tests for bounded square root extraction, included from sqrt.rs

macro_rules! impl_case {
    ($name:ident: $n:literal, $prec:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< case_ $name >]() {
                let root = sqrt_digits($n, $prec).unwrap();
                assert_eq!(root, $expected);
            }

            #[test]
            fn [< case_ $name _linear >]() {
                let ctx = Context::new($prec).with_digit_search(DigitSearch::Linear);
                let root = sqrt_digits_with_context($n, &ctx).unwrap();
                assert_eq!(root, $expected);
            }
        }
    };
}

impl_case!(zero_prec_0: 0, 0 => "0");
impl_case!(zero_prec_10: 0, 10 => "0");
impl_case!(one_prec_0: 1, 0 => "1");
impl_case!(four_prec_0: 4, 0 => "2");
impl_case!(sixteen: 16, 50 => "4");
impl_case!(two_prec_0: 2, 0 => "1");
impl_case!(two_prec_32: 2, 32 => "1.4142135623730950488016887242097");
impl_case!(two_prec_20: 2, 20 => "1.4142135623730950488");
impl_case!(two_prec_21_trims_zero: 2, 21 => "1.4142135623730950488");
impl_case!(two_prec_100: 2, 100 => "1.414213562373095048801688724209698078569671875376948073176679737990732478462107038850387534327641573");
impl_case!(n42_prec_100: 42, 100 => "6.480740698407860230965967436087996657705204307058346549711354397809617377844044371400360906605610236");
impl_case!(n99_prec_1: 99, 1 => "10");
impl_case!(n99_prec_2: 99, 2 => "9.9");
impl_case!(n9999_prec_3: 9999, 3 => "100");
impl_case!(n8_prec_1: 8, 1 => "3");
impl_case!(n15_prec_2: 15, 2 => "3.9");
impl_case!(n10_prec_5: 10, 5 => "3.1623");
impl_case!(n3_prec_10: 3, 10 => "1.732050808");
impl_case!(n1000000_prec_10: 1000000, 10 => "1000");
impl_case!(u128_half: 170141183460469231731687303715884105728u128, 45 => "13043817825332782212.3495718062525083688832763");

#[test]
fn large_perfect_square() {
    let root: BigUnsigned = "12345678901234567890".parse().unwrap();
    let n = root.square();
    assert_eq!(n.to_string(), "152415787532388367501905199875019052100");
    assert_eq!(sqrt_digits(&n, 5).unwrap(), "12345678901234567890");
}

#[test]
fn square_wider_than_u128() {
    // 2^128 = (2^64)^2
    let n = BigUnsigned::from(u128::MAX) + 1u8;
    assert_eq!(n, "340282366920938463463374607431768211456".parse::<BigUnsigned>().unwrap());
    assert_eq!(sqrt_digits(&n, 40).unwrap(), "18446744073709551616");

    let ctx = Context::new(40).with_digit_search(DigitSearch::Linear);
    assert_eq!(sqrt_digits_with_context(&n, &ctx).unwrap(), "18446744073709551616");
}

#[test]
fn fractional_zeros_round_away() {
    // root is 12345678901234567890.00000000000000000004...
    let n: BigUnsigned = "152415787532388367501905199875019052101".parse().unwrap();
    assert_eq!(sqrt_digits(n, 30).unwrap(), "12345678901234567890");
}

#[test]
fn integral_part_exceeds_precision() {
    // precision smaller than the integral digit count never truncates
    assert_eq!(sqrt_digits(123456789u32, 2).unwrap(), "11111");
    assert_eq!(sqrt_digits(123456789u32, 0).unwrap(), "11111");
}

#[test]
fn negative_input() {
    assert_eq!(sqrt_digits(-1, 10), Err(SqrtError::NegativeInput));
    assert_eq!(sqrt_digits(i64::MIN, 10), Err(SqrtError::NegativeInput));
    assert_eq!(sqrt_digits(BigInt::from(-42), 10), Err(SqrtError::NegativeInput));
}

#[test]
fn negative_zero_is_zero() {
    assert_eq!(sqrt_digits(-0, 10).unwrap(), "0");
    assert_eq!(sqrt_digits(BigInt::from(0), 10).unwrap(), "0");
}

#[test]
fn num_bigint_radicands() {
    assert_eq!(sqrt_digits(BigUint::from(42u8), 10).unwrap(), "6.480740698");
    assert_eq!(sqrt_digits(&BigInt::from(42), 10).unwrap(), "6.480740698");
}

#[test]
fn rounding_modes() {
    let ctx = Context::new(10);
    let down = ctx.with_rounding_mode(RoundingMode::Down);
    let up = ctx.with_rounding_mode(RoundingMode::Up);

    // sqrt(3) = 1.7320508075688...
    assert_eq!(sqrt_digits_with_context(3, &ctx).unwrap(), "1.732050808");
    assert_eq!(sqrt_digits_with_context(3, &down).unwrap(), "1.732050807");
    assert_eq!(sqrt_digits_with_context(3, &up).unwrap(), "1.732050808");

    // sqrt(2) = 1.4142135623...
    assert_eq!(sqrt_digits_with_context(2, &ctx).unwrap(), "1.414213562");
    assert_eq!(sqrt_digits_with_context(2, &up).unwrap(), "1.414213563");
    assert_eq!(sqrt_digits_with_context(2, &down).unwrap(), "1.414213562");
}

#[test]
fn up_rounds_on_sticky_remainder() {
    // sqrt(99) = 9.949..., one digit
    let up = Context::new(1).with_rounding_mode(RoundingMode::Up);
    let down = Context::new(1).with_rounding_mode(RoundingMode::Down);
    assert_eq!(sqrt_digits_with_context(99, &up).unwrap(), "10");
    assert_eq!(sqrt_digits_with_context(99, &down).unwrap(), "9");
}

#[test]
fn exact_root_ignores_rounding_mode() {
    let up = Context::new(3).with_rounding_mode(RoundingMode::Up);
    assert_eq!(sqrt_digits_with_context(152399025u32, &up).unwrap(), "12345");
}

#[test]
fn digit_pairs_from_the_right() {
    let n = BigUnsigned::from(152399025u32);
    assert_eq!(decimal_digit_pairs(&n), [1, 52, 39, 90, 25]);

    let n = BigUnsigned::from(4200u32);
    assert_eq!(decimal_digit_pairs(&n), [42, 0]);

    let n = BigUnsigned::from(7u32);
    assert_eq!(decimal_digit_pairs(&n), [7]);
}

#[test]
fn format_root_places_point() {
    assert_eq!(format_root(&[1, 4, 1], 1), "1.41");
    assert_eq!(format_root(&[1, 0, 0], 3), "100");
}
