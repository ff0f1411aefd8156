use crate::*;
use stdlib::str::FromStr;

impl FromStr for BigUnsigned {
    type Err = ParseBigUnsignedError;

    #[inline]
    fn from_str(s: &str) -> Result<BigUnsigned, ParseBigUnsignedError> {
        // implemented in parsing.rs
        BigUnsigned::from_decimal_str(s)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $limbs:expr) => {
            #[test]
            fn $name() {
                let n = BigUnsigned::from_str($input).unwrap();
                assert_eq!(n.limbs(), &$limbs);
            }
        };
    }

    impl_case!(case_0: "0" => [0]);
    impl_case!(case_000: "000" => [0]);
    impl_case!(case_7: "7" => [7]);
    impl_case!(case_00042: "00042" => [42]);
    impl_case!(case_4294967295: "4294967295" => [u32::MAX]);
    impl_case!(case_4294967296: "4294967296" => [0, 1]);
    impl_case!(case_123456789012: "123456789012" => [3197704724, 28]);
    impl_case!(case_18446744073709551616: "18446744073709551616" => [0, 0, 1]);
}
