use super::*;

mod radix_u32 {
    use super::*;
    use super::RADIX_u32 as Radix;

    #[test]
    fn split_wide_digit_0() {
        let (hi, lo) = Radix::split_wide_digit(0);
        assert_eq!(hi, 0);
        assert_eq!(lo, 0);
    }

    #[test]
    fn split_wide_digit_max_sqrd() {
        let (hi, lo) = Radix::split_wide_digit(18446744065119617025);
        assert_eq!(hi, 4294967294);
        assert_eq!(lo, 1);
    }

    #[test]
    fn add_with_carry_overflow() {
        let mut carry = 55;
        let sum = Radix::add_carry(4294967280, &mut carry);
        assert_eq!(sum, 39);
        assert_eq!(carry, 1);
    }

    #[test]
    fn add_with_carry_three_terms() {
        let mut carry = 1;
        let sum = Radix::add_with_carry(4294967295, 4294967295, &mut carry);
        assert_eq!(sum, 4294967295);
        assert_eq!(carry, 1);
    }

    #[test]
    fn sub_with_borrow_no_underflow() {
        let mut borrow = false;
        let diff = Radix::sub_with_borrow(100, 58, &mut borrow);
        assert_eq!(diff, 42);
        assert!(!borrow);
    }

    #[test]
    fn sub_with_borrow_underflow() {
        let mut borrow = true;
        let diff = Radix::sub_with_borrow(0, 0, &mut borrow);
        assert_eq!(diff, 4294967295);
        assert!(borrow);
    }

    #[test]
    fn carrying_mul_add_max() {
        let mut c = 4294967295;
        let mut carry = 4294967295;
        Radix::carrying_mul_add_inplace(4294967295, 4294967295, &mut c, &mut carry);
        assert_eq!(c, 4294967295);
        assert_eq!(carry, 4294967295);
    }
}

mod radix_10_u8 {
    use super::*;
    use super::RADIX_10_u8 as Radix;

    #[test]
    fn validate() {
        assert!(Radix::validate_digits([0, 1, 9].iter()));
        assert!(!Radix::validate_digits([0, 10, 9].iter()));
    }

    #[test]
    fn add_with_carry() {
        let mut carry = 1;
        let sum = Radix::add_with_carry(9, 9, &mut carry);
        assert_eq!(sum, 9);
        assert_eq!(carry, 1);
    }

    #[test]
    fn sub_with_borrow_underflow() {
        let mut borrow = true;
        let diff = Radix::sub_with_borrow(3, 7, &mut borrow);
        assert_eq!(diff, 5);
        assert!(borrow);
    }

    #[test]
    fn carrying_mul_add() {
        let mut c = 9;
        let mut carry = 9;
        Radix::carrying_mul_add_inplace(9, 9, &mut c, &mut carry);
        assert_eq!(c, 9);
        assert_eq!(carry, 9);
    }
}
