mod construction {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:expr => $limbs:expr) => {
            #[test]
            fn $name() {
                let n = BigUnsigned::from($input);
                assert_eq!(n.limbs(), &$limbs);
                assert!(n.is_canonical());
            }
        };
    }

    impl_case!(case_u8_0: 0u8 => [0]);
    impl_case!(case_u16_max: u16::MAX => [65535]);
    impl_case!(case_u32_max: u32::MAX => [u32::MAX]);
    impl_case!(case_u64_limb_base: 1u64 << 32 => [0, 1]);
    impl_case!(case_u64_max: u64::MAX => [u32::MAX, u32::MAX]);
    impl_case!(case_usize_7: 7usize => [7]);
    impl_case!(case_u128_2_pow_64: 1u128 << 64 => [0, 0, 1]);

    #[test]
    fn from_limbs_trims() {
        let n = BigUnsigned::from_limbs(vec![5, 0, 0]);
        assert_eq!(n.limbs(), &[5]);
        assert_eq!(n.limb_count(), 1);

        let n = BigUnsigned::from_limbs(vec![]);
        assert!(n.is_zero());
        assert_eq!(n.limbs(), &[0]);
    }

    #[test]
    fn from_limbs_matches_parse() {
        let n = BigUnsigned::from_limbs(vec![3197704724, 28]);
        assert_eq!(n, "123456789012".parse::<BigUnsigned>().unwrap());
    }
}


mod decimal_digits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal) => {
            paste! {
                #[test]
                fn [< round_trip_ $name >]() {
                    let n = BigUnsigned::from_decimal_str($input).unwrap();
                    assert_eq!(n.to_string(), $input);
                    assert_eq!(n.decimal_digit_count(), $input.len());

                    let digits: Vec<u8> = $input.bytes().map(|b| b - b'0').collect();
                    assert_eq!(n.to_decimal_digits(), digits);
                }
            }
        };
    }

    impl_case!(zero: "0");
    impl_case!(single: "7");
    impl_case!(limb_max: "4294967295");
    impl_case!(limb_base: "4294967296");
    impl_case!(twelve_digits: "123456789012");
    impl_case!(product: "30483157506306967872288");
    impl_case!(long: "51864404980834242630409449768792397904982098404496001028394784645");
    impl_case!(power_of_ten: "100000000000000000000000000000000000000000");

    #[test]
    fn leading_zeros_dropped() {
        let n = BigUnsigned::from_decimal_str("000000000000000000004294967296").unwrap();
        assert_eq!(n.to_string(), "4294967296");
        assert_eq!(n.limbs(), &[0, 1]);
    }
}


mod arithmetic_identities {
    use super::*;

    fn samples() -> Vec<BigUnsigned> {
        [
            "0",
            "1",
            "4294967295",
            "4294967296",
            "18446744073709551615",
            "123456789012",
            "42010168383160134110440665745547766649977556245",
            "6480740698407860230965967436087996657705204307058346549711354397809617377844044371400360906605610235",
        ]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
    }

    #[test]
    fn addition_commutes_and_has_identity() {
        let zero = BigUnsigned::zero();
        for a in samples().iter() {
            assert_eq!(a + &zero, *a);
            for b in samples().iter() {
                assert_eq!(a + b, b + a);
                assert!((a + b).is_canonical());
            }
        }
    }

    #[test]
    fn subtraction_inverts_addition() {
        for a in samples().iter() {
            for b in samples().iter() {
                let (big, small) = if a >= b { (a, b) } else { (b, a) };
                let diff = big - small;
                assert!(diff.is_canonical());
                assert_eq!(&diff + small, *big);
            }
        }
    }

    #[test]
    fn multiplication_identities() {
        let zero = BigUnsigned::zero();
        let one = BigUnsigned::one();
        for a in samples().iter() {
            assert_eq!(a * &one, *a);
            assert_eq!(a * &zero, zero);
            for b in samples().iter() {
                assert_eq!(a * b, b * a);
                assert!((a * b).is_canonical());
            }
        }
    }

    #[test]
    fn square_matches_mul() {
        for a in samples().iter() {
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn ordering_antisymmetric() {
        for a in samples().iter() {
            for b in samples().iter() {
                assert_eq!(a.compare(b), b.compare(a).reverse());
                assert_eq!(a.compare(b) == Ordering::Equal, a == b);
            }
        }
    }

    #[test]
    fn distributive() {
        let samples = samples();
        for a in samples.iter() {
            for b in samples.iter() {
                let c = &samples[6];
                assert_eq!(a * &(b + c), a * b + a * c);
            }
        }
    }
}


mod hashing {
    use super::*;
    use crate::stdlib::hash::{Hash, Hasher};

    fn hash<T: Hash>(obj: &T) -> u64 {
        let mut hasher = stdlib::DefaultHasher::new();
        obj.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_values_hash_equal() {
        let a: BigUnsigned = "0004294967296".parse().unwrap();
        let b = BigUnsigned::from(1u64 << 32);
        let c = BigUnsigned::from_limbs(vec![0, 1, 0, 0]);
        assert_eq!(hash(&a), hash(&b));
        assert_eq!(hash(&a), hash(&c));
    }

    #[test]
    fn different_values_hash_different() {
        let a = BigUnsigned::from(1u8);
        let b = BigUnsigned::from(1u64 << 32);
        assert_ne!(hash(&a), hash(&b));
    }
}


mod errors {
    use super::*;

    #[test]
    fn parse_error_messages() {
        let err = BigUnsigned::from_decimal_str("").unwrap_err();
        assert_eq!(format!("{}", err), "Failed to parse empty string");

        let err = BigUnsigned::from_decimal_str("12x").unwrap_err();
        assert_eq!(format!("{}", err), "invalid digit 'x' at position 2");

        let err = BigUnsigned::from_str_radix("12", 8).unwrap_err();
        assert_eq!(format!("{}", err), "unsupported radix 8, only radix 10 is supported");
    }

    #[test]
    fn sqrt_error_message() {
        assert_eq!(format!("{}", SqrtError::NegativeInput), "square root of negative number");
    }
}
