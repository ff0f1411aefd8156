// Copyright 2026 The sqrt-digits Developers
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Square roots, one digit at a time
//!
//! This crate extracts the decimal digits of the square root of an
//! integer using the classical "long division" method: the radicand is
//! consumed two decimal digits at a time and each step yields exactly
//! one digit of the root.
//!
//! The arithmetic is done with [`BigUnsigned`], a non-negative integer of
//! unbounded size stored as base-2<sup>32</sup> limbs, so the number of
//! digits that can be produced is limited only by memory and patience.
//!
//! Two modes are provided:
//!
//! * bounded: [`sqrt_digits`] returns a decimal string with a requested
//!   number of significant digits, rounded on the last digit.
//! * unbounded: [`SqrtDigits`] is an iterator producing the digits of the
//!   root (truncated, never rounded) for as long as it is polled.
//!
//! # Example
//!
//! ```
//! use sqrt_digits::sqrt_digits;
//!
//! let root = sqrt_digits(42, 10).unwrap();
//! assert_eq!(root, "6.480740698");
//!
//! let digits: String = sqrt_digits::SqrtDigits::new(42u32).take(12).collect();
//! assert_eq!(digits, "6.4807406984");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde as serde_crate;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::Ordering;
use self::stdlib::fmt;
use self::stdlib::Vec;

pub use num_traits::{CheckedSub, One, ToPrimitive, Zero};


// const DEFAULT_PRECISION: u64 = ${RUST_SQRT_DIGITS_DEFAULT_PRECISION} or 100;
include!(concat!(env!("OUT_DIR"), "/default_precision.rs"));

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

mod bigdigit;
mod arithmetic;

// From<T>, ToPrimitive impls
mod impl_convert;
// Add<T>, Sub<T>, Mul<T>
mod impl_ops;
// PartialEq, Ord
mod impl_cmp;
// Implementations of num_traits
mod impl_num;
// Display, Debug
mod impl_fmt;
mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

mod parsing;
pub mod rounding;
pub use rounding::RoundingMode;

// Extraction parameters
mod context;
pub use context::Context;

mod generator;
pub use generator::{DigitSearch, SqrtDigitGenerator};

pub use arithmetic::sqrt::{sqrt_digits, sqrt_digits_with_context, Radicand};

mod stream;
pub use stream::{sqrt_digit_stream, SqrtDigits};
#[cfg(feature = "std")]
pub use stream::{stream_sqrt_digits, StreamError};

use bigdigit::Limb;


/// A non-negative integer of unbounded size
///
/// Stored as a vector of 32-bit limbs, least significant first, with
/// no zero limbs at the most significant end (zero is the single
/// limb `0`). Values are immutable: every arithmetic operation
/// returns a new `BigUnsigned`.
///
/// ```
/// use sqrt_digits::BigUnsigned;
///
/// let a: BigUnsigned = "246913578024".parse().unwrap();
/// let b = BigUnsigned::from(123456789012u64);
/// assert_eq!((&a * &b).to_string(), "30483157506306967872288");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigUnsigned {
    limbs: Vec<Limb>,
}

impl BigUnsigned {
    /// Construct from little-endian limbs, removing significant zeros
    ///
    /// An empty vector is zero.
    ///
    pub fn from_limbs(mut limbs: Vec<u32>) -> BigUnsigned {
        arithmetic::trim_significant_zeros(&mut limbs);
        BigUnsigned { limbs }
    }

    /// Construct from a string of decimal digits
    ///
    /// Only the characters `0`-`9` are accepted; no sign, no decimal
    /// point, no exponent. Leading zeros are permitted.
    ///
    /// ```
    /// use sqrt_digits::{BigUnsigned, ParseBigUnsignedError};
    ///
    /// let n = BigUnsigned::from_decimal_str("18446744073709551616").unwrap();
    /// assert_eq!(n.limbs(), &[0, 0, 1]);
    ///
    /// assert_eq!(BigUnsigned::from_decimal_str(""), Err(ParseBigUnsignedError::Empty));
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<BigUnsigned, ParseBigUnsignedError> {
        parsing::parse_decimal_str(s)
    }

    /// Construct from a string of digits in the given radix
    ///
    /// Only radix 10 is supported; any other radix fails with
    /// [`ParseBigUnsignedError::UnsupportedRadix`].
    ///
    #[inline]
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigUnsigned, ParseBigUnsignedError> {
        if radix != 10 {
            return Err(ParseBigUnsignedError::UnsupportedRadix(radix));
        }
        parsing::parse_decimal_str(s)
    }

    /// Construct from bytes of decimal digits
    ///
    /// Decodes using `str::from_utf8` and forwards to `from_str_radix`.
    ///
    #[inline]
    pub fn parse_bytes(buf: &[u8], radix: u32) -> Option<BigUnsigned> {
        stdlib::str::from_utf8(buf)
                    .ok()
                    .and_then(|s| BigUnsigned::from_str_radix(s, radix).ok())
    }

    /// Little-endian limbs of this value
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Number of limbs used to store this value
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Return big-endian decimal digits (values 0-9, not ascii)
    pub fn to_decimal_digits(&self) -> Vec<u8> {
        let mut digits = arithmetic::decimal::limbs_to_decimal_digits(&self.limbs);
        digits.reverse();
        digits
    }

    /// Number of decimal digits, 1 for zero
    pub fn decimal_digit_count(&self) -> usize {
        self.to_decimal_digits().len()
    }

    /// Compare with another value
    ///
    /// Identical to `Ord::cmp`, provided for readability when the
    /// three-way result is the point.
    ///
    pub fn compare(&self, other: &BigUnsigned) -> Ordering {
        arithmetic::cmp_digit_slices::<bigdigit::RADIX_u32>(&self.limbs, &other.limbs)
    }

    /// Compute self * self
    pub fn square(&self) -> BigUnsigned {
        self * self
    }

    pub(crate) fn is_canonical(&self) -> bool {
        arithmetic::is_canonical(&self.limbs)
    }
}

impl Default for BigUnsigned {
    #[inline]
    fn default() -> BigUnsigned {
        Zero::zero()
    }
}


/// Failure to construct a [`BigUnsigned`] from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBigUnsignedError {
    /// Input string had no digits
    Empty,
    /// Input contained something other than the digits `0`-`9`
    InvalidDigit {
        /// byte offset of the offending character
        index: usize,
        found: char,
    },
    /// Only radix 10 is supported when parsing
    UnsupportedRadix(u32),
}

impl fmt::Display for ParseBigUnsignedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigUnsignedError::*;

        match *self {
            Empty => f.write_str("Failed to parse empty string"),
            InvalidDigit { index, found } => {
                write!(f, "invalid digit {:?} at position {}", found, index)
            }
            UnsupportedRadix(radix) => {
                write!(f, "unsupported radix {}, only radix 10 is supported", radix)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigUnsignedError {}


/// Failure to compute a square root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqrtError {
    /// The square root of a negative number was requested
    NegativeInput,
}

impl fmt::Display for SqrtError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SqrtError::NegativeInput => f.write_str("square root of negative number"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SqrtError {}




#[cfg(all(test, property_tests))]
extern crate proptest;
