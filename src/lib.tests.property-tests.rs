// Property tests to be included by lib.rs (if enabled)

use num_bigint::BigUint;


fn big_from_limbs(limbs: Vec<u32>) -> BigUnsigned {
    BigUnsigned::from_limbs(limbs)
}

mod arithmetic {
    use super::*;

    proptest! {
        #[test]
        fn canonical_after_ops(a: Vec<u32>, b: Vec<u32>) {
            let a = big_from_limbs(a);
            let b = big_from_limbs(b);

            prop_assert!(a.is_canonical());
            prop_assert!((&a + &b).is_canonical());
            prop_assert!((&a * &b).is_canonical());
            if a >= b {
                prop_assert!((&a - &b).is_canonical());
            }
        }

        #[test]
        fn add_commutes(a: Vec<u32>, b: Vec<u32>) {
            let a = big_from_limbs(a);
            let b = big_from_limbs(b);
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a + BigUnsigned::zero(), a);
        }

        #[test]
        fn sub_inverts_add(a: Vec<u32>, b: Vec<u32>) {
            let a = big_from_limbs(a);
            let b = big_from_limbs(b);
            let sum = &a + &b;
            prop_assert_eq!(&sum - &b, a);
        }

        #[test]
        fn mul_identities(a: Vec<u32>) {
            let a = big_from_limbs(a);
            prop_assert_eq!(&a * BigUnsigned::one(), a.clone());
            prop_assert!((&a * BigUnsigned::zero()).is_zero());
        }

        #[test]
        fn ordering_antisymmetric(a: Vec<u32>, b: Vec<u32>) {
            let a = big_from_limbs(a);
            let b = big_from_limbs(b);
            prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        }
    }
}

mod against_biguint {
    use super::*;

    macro_rules! impl_test {
        ($op:tt, $name:ident) => {
            paste! { proptest! {
                #[test]
                fn [< $name _matches_biguint >](a: Vec<u32>, b: Vec<u32>) {
                    let x = big_from_limbs(a.clone());
                    let y = big_from_limbs(b.clone());
                    let expected = BigUint::new(a) $op BigUint::new(b);
                    prop_assert_eq!(BigUint::from(&x $op &y), expected);
                }
            } }
        };
    }

    impl_test!(+, add);
    impl_test!(*, mul);

    proptest! {
        #[test]
        fn cmp_matches_biguint(a: Vec<u32>, b: Vec<u32>) {
            let expected = BigUint::new(a.clone()).cmp(&BigUint::new(b.clone()));
            prop_assert_eq!(big_from_limbs(a).cmp(&big_from_limbs(b)), expected);
        }

        #[test]
        fn display_matches_biguint(a: Vec<u32>) {
            let expected = BigUint::new(a.clone()).to_string();
            let n = big_from_limbs(a);
            prop_assert_eq!(n.to_string(), expected.clone());
            prop_assert_eq!(expected.parse::<BigUnsigned>().unwrap(), n);
        }

        #[test]
        fn sub_matches_biguint(a: Vec<u32>, b: Vec<u32>) {
            let (x, y) = (BigUint::new(a.clone()), BigUint::new(b.clone()));
            let (a, b) = (big_from_limbs(a), big_from_limbs(b));
            if x >= y {
                prop_assert_eq!(BigUint::from(&a - &b), x - y);
            } else {
                prop_assert_eq!(BigUint::from(&b - &a), y - x);
            }
        }
    }
}

mod sqrt {
    use super::*;

    proptest! {
        #[test]
        fn searches_agree(n: u128, count in 1usize..40) {
            let linear: String = SqrtDigits::with_search(n, DigitSearch::Linear).take(count).collect();
            let dichotomic: String = SqrtDigits::with_search(n, DigitSearch::Dichotomic).take(count).collect();
            prop_assert_eq!(linear, dichotomic);
        }

        #[test]
        fn integral_part_is_isqrt(n: u64) {
            let root: String = SqrtDigits::new(n).take_while(|&c| c != '.').collect();
            let root: u64 = root.parse().unwrap();
            prop_assert!(root as u128 * root as u128 <= n as u128);
            prop_assert!((root as u128 + 1) * (root as u128 + 1) > n as u128);
        }

        #[test]
        fn perfect_squares_are_exact(r: u64, precision in 0u64..50) {
            let n = BigUnsigned::from(r).square();
            prop_assert_eq!(sqrt_digits(&n, precision).unwrap(), r.to_string());
        }

        #[test]
        fn bounded_has_limited_fraction(n: u32, precision in 0u64..60) {
            let root = sqrt_digits(n, precision).unwrap();
            if let Some(point) = root.find('.') {
                let fraction = &root[point + 1..];
                prop_assert!(!fraction.ends_with('0'));
                prop_assert!(point + fraction.len() <= precision.max(point as u64) as usize);
            }
        }
    }
}
