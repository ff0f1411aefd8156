//! Structs and traits describing radix-dependant bigdigits
//!
//! A bigdigit is one positional unit of a big number: a 32-bit limb
//! of a [`BigUnsigned`](crate::BigUnsigned), or a single decimal digit
//! of its base-10 rendering.
//!

pub(crate) mod radix;

pub(crate) use self::radix::{RadixType, RADIX_10_u8, RADIX_u32};

/// Storage type of one limb
pub(crate) type Limb = u32;

/// Double-wide limb, capable of storing the product of two limbs
pub(crate) type DoubleLimb = u64;

/// Number of bits in a limb
pub(crate) const LIMB_BITS: u32 = Limb::BITS;

/// The limb base, 2<sup>32</sup>
pub(crate) const LIMB_BASE: DoubleLimb = 1 << LIMB_BITS;
