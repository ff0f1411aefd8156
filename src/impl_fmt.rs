//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;
use stdlib::string::String;


impl fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.to_decimal_string();
        f.pad_integral(true, "", &digits)
    }
}

impl fmt::Debug for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigUnsigned(\"{}\")", self)
    }
}

impl BigUnsigned {
    /// Decimal representation without leading zeros, "0" for zero
    pub fn to_decimal_string(&self) -> String {
        let digits = arithmetic::decimal::limbs_to_decimal_digits(&self.limbs);
        digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
    }
}
