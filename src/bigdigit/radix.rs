//! Radix definitions
//!
//! Empty structs used to make generic algorithms over kind of radix
//!
#![allow(non_camel_case_types)]

use crate::stdlib::fmt;

use num_traits::{AsPrimitive, One, Zero};


/// All the information needed to specify a radix, and methods operating on its digits
pub(crate) trait RadixType: Copy + Clone + Default + fmt::Debug {
    /// the inner type of values
    type Base
        : 'static
        + Copy
        + fmt::Debug
        + num_integer::Integer
        + num_traits::PrimInt
        + num_traits::FromPrimitive
        + Zero
        + One;

    /// double wide unsigned type (capable of storing product of two BigDigits)
    type BaseDouble
        : 'static
        + Copy
        + num_integer::Integer
        + num_traits::PrimInt
        + Zero
        + One
        + AsPrimitive<Self::Base>
        + From<u8>
        + From<Self::Base>;

    /// Value of the RADIX
    const RADIX: Self::BaseDouble;

    /// Check contents of iterable contains values less than the radix
    fn validate_digits<'a, I: IntoIterator<Item=&'a Self::Base>>(i: I) -> bool {
        i.into_iter().map(|&d| d.into()).all(|d: Self::BaseDouble| d < Self::RADIX)
    }

    /// Split a wide value into (high, low) digits
    fn split_wide_digit(n: Self::BaseDouble) -> (Self::Base, Self::Base) {
        let (hi, lo) = num_integer::div_rem(n, Self::RADIX);
        return (hi.as_(), lo.as_());
    }

    fn expanding_add(a: Self::Base, b: Self::Base) -> (Self::Base, Self::Base) {
        let a: Self::BaseDouble = a.into();
        let b: Self::BaseDouble = b.into();
        Self::split_wide_digit(a + b)
    }

    /// Return n + carry, storing overflow back in carry
    fn add_carry(n: Self::Base, carry: &mut Self::Base) -> Self::Base {
        let (hi, lo) = Self::expanding_add(n, *carry);
        *carry = hi;
        lo
    }

    /// Return a + b + carry, storing overflow back in carry
    fn add_with_carry(a: Self::Base, b: Self::Base, carry: &mut Self::Base) -> Self::Base {
        let a: Self::BaseDouble = a.into();
        let b: Self::BaseDouble = b.into();
        let c: Self::BaseDouble = (*carry).into();
        let (hi, lo) = Self::split_wide_digit(a + b + c);
        *carry = hi;
        lo
    }

    /// Return a - b - borrow, setting borrow if the difference underflowed
    fn sub_with_borrow(a: Self::Base, b: Self::Base, borrow: &mut bool) -> Self::Base {
        let a: Self::BaseDouble = a.into();
        let b: Self::BaseDouble = b.into();
        let b = if *borrow { b + One::one() } else { b };
        if a >= b {
            *borrow = false;
            (a - b).as_()
        } else {
            *borrow = true;
            (a + Self::RADIX - b).as_()
        }
    }

    /// Perform c += a * b + carry, returning overflow in carry
    fn carrying_mul_add_inplace(a: Self::Base, b: Self::Base, c: &mut Self::Base, carry: &mut Self::Base) {
        let a: Self::BaseDouble = a.into();
        let b: Self::BaseDouble = b.into();
        let (hi, lo) = Self::split_wide_digit(a * b + (*c).into() + (*carry).into());
        *c = lo;
        *carry = hi;
    }
}

/// Radix=*10* / storage=*u8*
#[derive(Copy,Clone,Debug,Default)]
pub struct RADIX_10_u8;

/// Radix = 2<sup>32</sup>
#[derive(Copy,Clone,Debug,Default)]
pub struct RADIX_u32;


impl RadixType for RADIX_u32 {
    type Base = u32;
    type BaseDouble = u64;

    const RADIX: Self::BaseDouble = 1u64 << 32;

    // all u32 are valid in this radix
    fn validate_digits<'a, I: IntoIterator<Item=&'a Self::Base>>(_: I) -> bool {
        true
    }

    fn split_wide_digit(n: u64) -> (u32, u32) {
        ((n >> 32) as u32, n as u32)
    }

    fn expanding_add(a: u32, b: u32) -> (u32, u32) {
        let (sum, overflow) = a.overflowing_add(b);
        (u32::from(overflow), sum)
    }

    fn sub_with_borrow(a: u32, b: u32, borrow: &mut bool) -> u32 {
        let (diff, o1) = a.overflowing_sub(b);
        let (diff, o2) = diff.overflowing_sub(u32::from(*borrow));
        *borrow = o1 || o2;
        diff
    }
}


impl RadixType for RADIX_10_u8 {
    type Base = u8;
    type BaseDouble = u8;

    const RADIX: Self::BaseDouble = 10;
}


#[cfg(test)]
#[path = "radix.tests.rs"]
mod tests;
