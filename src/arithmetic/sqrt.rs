//! square root implementation
//!
//! Bounded extraction: the integral digits of the root, then
//! fractional digits up to the context's precision, rounded on the
//! last one.
//!

use crate::*;
use crate::stdlib::string::String;

use num_bigint::{BigInt, BigUint};


/// Values whose square root can be extracted
///
/// Implemented for the native integer types, [`BigUnsigned`] and the
/// num-bigint integers. Negative values fail with
/// [`SqrtError::NegativeInput`].
///
pub trait Radicand {
    /// Convert to a non-negative integer
    fn into_radicand(self) -> Result<BigUnsigned, SqrtError>;
}

macro_rules! impl_radicand_unsigned {
    ($($t:ty),*) => {
        $(
            impl Radicand for $t {
                #[inline]
                fn into_radicand(self) -> Result<BigUnsigned, SqrtError> {
                    Ok(BigUnsigned::from(self))
                }
            }
        )*
    };
}

macro_rules! impl_radicand_signed {
    ($($t:ty),*) => {
        $(
            impl Radicand for $t {
                #[inline]
                fn into_radicand(self) -> Result<BigUnsigned, SqrtError> {
                    u128::try_from(self)
                        .map(BigUnsigned::from)
                        .map_err(|_| SqrtError::NegativeInput)
                }
            }
        )*
    };
}

impl_radicand_unsigned!(u8, u16, u32, u64, u128, usize);
impl_radicand_signed!(i8, i16, i32, i64, i128, isize);

impl Radicand for BigUnsigned {
    #[inline]
    fn into_radicand(self) -> Result<BigUnsigned, SqrtError> {
        Ok(self)
    }
}

impl Radicand for &BigUnsigned {
    #[inline]
    fn into_radicand(self) -> Result<BigUnsigned, SqrtError> {
        Ok(self.clone())
    }
}

impl Radicand for BigUint {
    #[inline]
    fn into_radicand(self) -> Result<BigUnsigned, SqrtError> {
        Ok(BigUnsigned::from(self))
    }
}

impl Radicand for &BigInt {
    #[inline]
    fn into_radicand(self) -> Result<BigUnsigned, SqrtError> {
        self.to_biguint()
            .map(BigUnsigned::from)
            .ok_or(SqrtError::NegativeInput)
    }
}

impl Radicand for BigInt {
    #[inline]
    fn into_radicand(self) -> Result<BigUnsigned, SqrtError> {
        (&self).into_radicand()
    }
}


/// Split decimal digits into pairs, counting from the least significant
///
/// The first pair holds a single digit when the digit count is odd.
///
pub(crate) fn decimal_digit_pairs(n: &BigUnsigned) -> Vec<u8> {
    let digits = n.to_decimal_digits();
    let head = digits.len() % 2;

    let mut pairs = Vec::with_capacity(digits.len() / 2 + head);
    if head == 1 {
        pairs.push(digits[0]);
    }
    pairs.extend(digits[head..].chunks_exact(2).map(|pair| pair[0] * 10 + pair[1]));
    pairs
}

/// Render digits as a decimal string, point after `integral_len` digits
fn format_root(digits: &[u8], integral_len: usize) -> String {
    let mut result = String::with_capacity(digits.len() + 1);
    for (i, &d) in digits.iter().enumerate() {
        if i == integral_len {
            result.push('.');
        }
        result.push(char::from(b'0' + d));
    }
    result
}


/// Square root of `n` as a decimal string with at most `max_precision`
/// significant digits
///
/// The last digit is rounded half-up. Integral digits are never
/// dropped, so the result may have more than `max_precision` digits
/// when the root is large. Trailing fractional zeros are removed, and
/// so is the decimal point if nothing follows it.
///
/// ```
/// use sqrt_digits::sqrt_digits;
///
/// assert_eq!(sqrt_digits(2, 32).unwrap(), "1.4142135623730950488016887242097");
/// assert_eq!(sqrt_digits(99, 2).unwrap(), "9.9");
/// assert_eq!(sqrt_digits(99, 1).unwrap(), "10");
/// assert_eq!(sqrt_digits(16, 50).unwrap(), "4");
/// assert!(sqrt_digits(-4, 10).is_err());
/// ```
pub fn sqrt_digits<N: Radicand>(n: N, max_precision: u64) -> Result<String, SqrtError> {
    let ctx = Context::default().with_precision(max_precision);
    sqrt_digits_with_context(n, &ctx)
}

/// Square root of `n` using the precision, rounding mode and digit
/// search of the given context
pub fn sqrt_digits_with_context<N: Radicand>(n: N, ctx: &Context) -> Result<String, SqrtError> {
    let n = n.into_radicand()?;

    let span = tracing::debug_span!("sqrt_digits", precision = ctx.precision());
    let _guard = span.enter();

    if n.is_zero() || n.is_one() {
        return Ok(n.to_decimal_string());
    }

    let mut generator = SqrtDigitGenerator::with_search(ctx.digit_search());

    let mut digits: Vec<u8> = decimal_digit_pairs(&n)
        .into_iter()
        .map(|pair| generator.next_digit(pair))
        .collect();
    let mut integral_len = digits.len();

    if !generator.has_next_digit() {
        tracing::debug!(integral_len, "exact root");
        return Ok(format_root(&digits, integral_len));
    }

    let fractional_limit = ctx.fractional_digit_limit(integral_len);
    let mut fractional_len = 0;
    while fractional_len < fractional_limit && generator.has_next_digit() {
        digits.push(generator.next_digit(0));
        fractional_len += 1;
    }

    if generator.has_next_digit() {
        let discarded = generator.next_digit(0);
        let trailing_zeros = !generator.has_next_digit();
        let grew = ctx
            .rounding_mode()
            .round_decimal_digits(&mut digits, discarded, trailing_zeros);
        if grew {
            integral_len += 1;
        }
    }

    while digits.len() > integral_len && digits.last() == Some(&0) {
        digits.pop();
    }

    tracing::debug!(integral_len, fractional_len = digits.len() - integral_len, "rounded root");
    Ok(format_root(&digits, integral_len))
}
