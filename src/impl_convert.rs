//! Code for implementing From conversions into and out of BigUnsigned

use crate::*;
use crate::bigdigit::{Limb, LIMB_BITS};

use num_bigint::BigUint;


macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for BigUnsigned {
            fn from(n: $t) -> Self {
                let mut n = n as u128;
                let mut limbs = Vec::with_capacity(4);
                loop {
                    limbs.push(n as Limb);
                    n >>= LIMB_BITS;
                    if n == 0 {
                        break;
                    }
                }
                BigUnsigned { limbs }
            }
        }

        impl From<&$t> for BigUnsigned {
            fn from(n: &$t) -> Self {
                BigUnsigned::from(*n)
            }
        }
    };
}

impl_from_int_primitive!(u8);
impl_from_int_primitive!(u16);
impl_from_int_primitive!(u32);
impl_from_int_primitive!(u64);
impl_from_int_primitive!(u128);
impl_from_int_primitive!(usize);


impl From<BigUnsigned> for BigUint {
    fn from(n: BigUnsigned) -> Self {
        BigUint::new(n.limbs)
    }
}

impl From<&BigUnsigned> for BigUint {
    fn from(n: &BigUnsigned) -> Self {
        BigUint::from_slice(&n.limbs)
    }
}

impl From<BigUint> for BigUnsigned {
    fn from(n: BigUint) -> Self {
        BigUnsigned::from_limbs(n.to_u32_digits())
    }
}

impl From<&BigUint> for BigUnsigned {
    fn from(n: &BigUint) -> Self {
        BigUnsigned::from_limbs(n.to_u32_digits())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_u8() {
        assert_eq!(BigUnsigned::from(0u8).limbs(), &[0]);
        assert_eq!(BigUnsigned::from(&200u8).limbs(), &[200]);
    }

    #[test]
    fn from_u64_splits_limbs() {
        let n = BigUnsigned::from(123456789012u64);
        assert_eq!(n.limbs(), &[3197704724, 28]);
    }

    #[test]
    fn from_u128_max() {
        let n = BigUnsigned::from(u128::MAX);
        assert_eq!(n.limbs(), &[u32::MAX; 4]);
        assert_eq!(n.to_string(), "340282366920938463463374607431768211455");
    }

    #[test]
    fn from_u128_keeps_inner_zero_limbs() {
        let n = BigUnsigned::from(1u128 << 96);
        assert_eq!(n.limbs(), &[0, 0, 0, 1]);
        assert!(n.is_canonical());
    }

    #[test]
    fn to_and_from_biguint() {
        let n: BigUnsigned = "51864404980834242630409449768792397904982098404496001028394784645"
            .parse()
            .unwrap();
        let big = BigUint::from(&n);
        assert_eq!(big.to_string(), n.to_string());
        assert_eq!(BigUnsigned::from(big.clone()), n);
        assert_eq!(BigUnsigned::from(&big), n);
        assert_eq!(BigUint::from(n), big);
    }

    #[test]
    fn from_biguint_zero() {
        let n = BigUnsigned::from(BigUint::from(0u8));
        assert_eq!(n.limbs(), &[0]);
    }
}
