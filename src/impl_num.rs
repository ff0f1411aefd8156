//! Code for num_traits

use num_traits::{CheckedSub, One, ToPrimitive, Zero};

use crate::*;
use crate::bigdigit::LIMB_BITS;


impl Zero for BigUnsigned {
    #[inline]
    fn zero() -> BigUnsigned {
        BigUnsigned { limbs: vec![0] }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.limbs == [0]
    }
}

impl One for BigUnsigned {
    #[inline]
    fn one() -> BigUnsigned {
        BigUnsigned { limbs: vec![1] }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.limbs == [1]
    }
}

impl CheckedSub for BigUnsigned {
    #[inline]
    fn checked_sub(&self, rhs: &BigUnsigned) -> Option<BigUnsigned> {
        match self.compare(rhs) {
            Ordering::Less => None,
            Ordering::Equal => Some(BigUnsigned::zero()),
            Ordering::Greater => Some(self - rhs),
        }
    }
}

impl ToPrimitive for BigUnsigned {
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|n| n.to_i64())
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|n| n.to_i128())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| n.to_u64())
    }

    fn to_u128(&self) -> Option<u128> {
        if self.limbs.len() > 4 {
            return None;
        }
        let n = self.limbs
                    .iter()
                    .rev()
                    .fold(0u128, |acc, &limb| (acc << LIMB_BITS) | limb as u128);
        Some(n)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_and_one() {
        assert!(BigUnsigned::zero().is_zero());
        assert!(!BigUnsigned::one().is_zero());
        assert!(BigUnsigned::one().is_one());
        assert!(BigUnsigned::default().is_zero());
        assert!(BigUnsigned::from_limbs(vec![0, 0]).is_zero());
    }

    #[test]
    fn from_str_radix_10() {
        let n = BigUnsigned::from_str_radix("4294967296", 10).unwrap();
        assert_eq!(n.limbs(), &[0, 1]);
    }

    #[test]
    fn from_str_radix_rejects_others() {
        assert_eq!(
            BigUnsigned::from_str_radix("ff", 16),
            Err(ParseBigUnsignedError::UnsupportedRadix(16))
        );
        assert_eq!(BigUnsigned::parse_bytes(b"101", 2), None);
        assert_eq!(BigUnsigned::parse_bytes(b"101", 10), Some(BigUnsigned::from(101u8)));
        assert_eq!(BigUnsigned::parse_bytes(b"\xff", 10), None);
    }

    #[test]
    fn checked_sub() {
        let a = BigUnsigned::from(10u8);
        let b = BigUnsigned::from(11u8);
        assert_eq!(a.checked_sub(&b), None);
        assert_eq!(b.checked_sub(&a), Some(BigUnsigned::one()));
        assert_eq!(a.checked_sub(&a), Some(BigUnsigned::zero()));
    }

    #[test]
    fn to_primitive() {
        let n = BigUnsigned::from(u64::MAX);
        assert_eq!(n.to_u64(), Some(u64::MAX));
        assert_eq!(n.to_i64(), None);
        assert_eq!(n.to_u128(), Some(u64::MAX as u128));

        let n = BigUnsigned::from(u128::MAX);
        assert_eq!(n.to_u64(), None);
        assert_eq!(n.to_u128(), Some(u128::MAX));
        assert_eq!(n.to_i128(), None);

        let n = &n + 1u8;
        assert_eq!(n.to_u128(), None);
    }
}
