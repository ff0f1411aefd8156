//! Routines for parsing decimal strings into BigUnsigned

use crate::stdlib::Vec;

use super::{BigUnsigned, ParseBigUnsignedError};
use crate::arithmetic::decimal::decimal_digits_to_limbs;


/// Parse a string made only of the digits `0`-`9`
///
/// The digits are validated and converted to their values, then
/// reduced to limbs by repeated division of the decimal string by
/// 2<sup>32</sup>.
///
pub(crate) fn parse_decimal_str(s: &str) -> Result<BigUnsigned, ParseBigUnsignedError> {
    if s.is_empty() {
        return Err(ParseBigUnsignedError::Empty);
    }

    let digits = validate_decimal_digits(s)?;
    let n = BigUnsigned {
        limbs: decimal_digits_to_limbs(&digits),
    };
    debug_assert!(n.is_canonical());
    Ok(n)
}

/// Convert ascii digits to big-endian digit values
fn validate_decimal_digits(s: &str) -> Result<Vec<u8>, ParseBigUnsignedError> {
    s.char_indices()
     .map(|(index, c)| {
         c.to_digit(10)
          .map(|d| d as u8)
          .ok_or(ParseBigUnsignedError::InvalidDigit { index, found: c })
     })
     .collect()
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_string() {
        assert_eq!(parse_decimal_str(""), Err(ParseBigUnsignedError::Empty));
    }

    #[test]
    fn rejects_first_bad_char() {
        assert_eq!(
            parse_decimal_str("12a4b"),
            Err(ParseBigUnsignedError::InvalidDigit { index: 2, found: 'a' })
        );
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // arabic-indic digit one
        let result = parse_decimal_str("1\u{0661}");
        assert_eq!(
            result,
            Err(ParseBigUnsignedError::InvalidDigit { index: 1, found: '\u{0661}' })
        );
    }

    #[test]
    fn validated_digits_are_values() {
        assert_eq!(validate_decimal_digits("0907").unwrap(), [0, 9, 0, 7]);
    }

    #[test]
    fn parse_multi_limb() {
        let n = parse_decimal_str("340282366920938463463374607431768211456").unwrap();
        assert_eq!(n.limbs(), &[0, 0, 0, 0, 1]);
        assert!(n.is_canonical());
    }
}
