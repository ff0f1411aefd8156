use paste::*;

/// big-endian digits of a string of ascii digits
fn digits_of(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

/// string of ascii digits from little-endian digits
fn string_of_le(digits: &[u8]) -> String {
    digits.iter().rev().map(|&d| (b'0' + d) as char).collect()
}

macro_rules! impl_case {
    ($s:literal % $n:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< case_ $s _ $n >]() {
                assert_eq!(rem_decimal_digits(&digits_of($s), $n), $expected);
            }
        }
    };
    ($s:literal / $n:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< case_ $s _ $n >]() {
                let quotient = div_decimal_digits(&digits_of($s), $n);
                assert_eq!(quotient, digits_of($expected));
            }
        }
    };
    ($s:literal * $n:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< case_ $s _ $n >]() {
                let mut digits = digits_of($s);
                digits.reverse();
                mul_decimal_digits(&mut digits, $n);
                assert_eq!(string_of_le(&digits), $expected);
            }
        }
    };
}


mod rem_decimal_digits {
    use super::*;

    impl_case!("0" % 4294967296 => 0);
    impl_case!("4294967295" % 4294967296 => 4294967295);
    impl_case!("4294967296" % 4294967296 => 0);
    impl_case!("123456789012" % 4294967296 => 3197704724);
    impl_case!("1000" % 7 => 6);
}

mod div_decimal_digits {
    use super::*;

    impl_case!("0" / 4294967296 => "0");
    impl_case!("4294967295" / 4294967296 => "0");
    impl_case!("4294967296" / 4294967296 => "1");
    impl_case!("123456789012" / 4294967296 => "28");
    impl_case!("000120" / 1 => "120");
    impl_case!("18446744073709551616" / 4294967296 => "4294967296");
}

mod mul_decimal_digits {
    use super::*;

    impl_case!("0" * 4294967296 => "0");
    impl_case!("1" * 4294967296 => "4294967296");
    impl_case!("99" * 100 => "9900");
    impl_case!("4294967296" * 4294967296 => "18446744073709551616");
    impl_case!("12" * 0 => "0");
}

#[test]
fn u64_digits() {
    assert_eq!(u64_to_decimal_digits(0), [0]);
    assert_eq!(u64_to_decimal_digits(1230), [0, 3, 2, 1]);
    assert_eq!(string_of_le(&u64_to_decimal_digits(u64::MAX)), "18446744073709551615");
}

#[test]
fn limbs_to_decimal() {
    assert_eq!(string_of_le(&limbs_to_decimal_digits(&[0])), "0");
    assert_eq!(string_of_le(&limbs_to_decimal_digits(&[3197704724, 28])), "123456789012");
    assert_eq!(string_of_le(&limbs_to_decimal_digits(&[0, 0, 1])), "18446744073709551616");
    assert_eq!(string_of_le(&limbs_to_decimal_digits(&[4294967295, 4294967295])), "18446744073709551615");
}

#[test]
fn decimal_to_limbs() {
    assert_eq!(decimal_digits_to_limbs(&digits_of("0")), [0]);
    assert_eq!(decimal_digits_to_limbs(&digits_of("0000")), [0]);
    assert_eq!(decimal_digits_to_limbs(&digits_of("123456789012")), [3197704724, 28]);
    assert_eq!(decimal_digits_to_limbs(&digits_of("18446744073709551616")), [0, 0, 1]);
    assert_eq!(decimal_digits_to_limbs(&digits_of("4294967296")), [0, 1]);
}
