//! Long division square root, one digit at a time
//!
//! The radicand is fed to [`SqrtDigitGenerator`] two decimal digits at
//! a time, most significant pair first, and each pair produces the next
//! digit of the root. After the radicand is used up, feeding pairs of
//! zeros produces the fractional digits.
//!
//! With `p` the root found so far and `c` the current remainder, the
//! next digit is the largest `x` with `(20p + x) * x <= c`.
//!

use crate::*;


/// Strategy used to find the next digit of the root
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Default)]
pub enum DigitSearch {
    /// Try 1, 2, 3, ... until the candidate is too large
    Linear,

    /// Walk a fixed binary decision tree rooted at 5
    ///
    /// Never needs more than four trial products.
    #[default]
    Dichotomic,
}

/// Next step in the dichotomic decision tree
#[derive(Clone, Copy, Debug)]
enum Step {
    /// Probe the node at this index
    Next(usize),
    /// Search is over, digit is known
    Done(u8),
}

/// Node of the dichotomic decision tree
#[derive(Clone, Copy, Debug)]
struct Probe {
    digit: u8,
    fits: Step,
    exceeds: Step,
}

use self::Step::{Done, Next};

/// Decision tree over digits 0-9, entry point is the first node
const DICHOTOMIC_TREE: [Probe; 9] = [
    Probe { digit: 5, fits: Next(1), exceeds: Next(2) },
    Probe { digit: 7, fits: Next(3), exceeds: Next(4) },
    Probe { digit: 2, fits: Next(5), exceeds: Next(6) },
    Probe { digit: 8, fits: Next(7), exceeds: Done(7) },
    Probe { digit: 6, fits: Done(6), exceeds: Done(5) },
    Probe { digit: 3, fits: Next(8), exceeds: Done(2) },
    Probe { digit: 1, fits: Done(1), exceeds: Done(0) },
    Probe { digit: 9, fits: Done(9), exceeds: Done(8) },
    Probe { digit: 4, fits: Done(4), exceeds: Done(3) },
];


impl DigitSearch {
    /// Find the largest digit `x` such that `(expanded + x) * x <= current_remainder`
    ///
    /// Returns the digit and the product `(expanded + x) * x`.
    ///
    /// The answer must be a single digit, i.e. the caller guarantees
    /// `(expanded + 10) * 10 > current_remainder`.
    ///
    pub fn find(&self, expanded: &BigUnsigned, current_remainder: &BigUnsigned) -> (u8, BigUnsigned) {
        match self {
            DigitSearch::Linear => find_linear(expanded, current_remainder),
            DigitSearch::Dichotomic => find_dichotomic(expanded, current_remainder),
        }
    }
}

#[inline]
fn trial_product(expanded: &BigUnsigned, x: u8) -> BigUnsigned {
    (expanded + x) * x
}

fn find_linear(expanded: &BigUnsigned, current_remainder: &BigUnsigned) -> (u8, BigUnsigned) {
    let mut digit = 0;
    let mut product = BigUnsigned::zero();

    for x in 1..=9 {
        let candidate = trial_product(expanded, x);
        if &candidate > current_remainder {
            break;
        }
        digit = x;
        product = candidate;
    }

    (digit, product)
}

fn find_dichotomic(expanded: &BigUnsigned, current_remainder: &BigUnsigned) -> (u8, BigUnsigned) {
    // product of the last digit that fit
    let mut best = BigUnsigned::zero();
    let mut node = DICHOTOMIC_TREE[0];

    loop {
        let candidate = trial_product(expanded, node.digit);
        let step = if &candidate <= current_remainder {
            best = candidate;
            node.fits
        } else {
            node.exceeds
        };

        match step {
            Next(idx) => node = DICHOTOMIC_TREE[idx],
            Done(digit) => return (digit, best),
        }
    }
}


/// State of a digit-by-digit square root extraction
///
/// ```
/// use sqrt_digits::SqrtDigitGenerator;
///
/// // sqrt(2) = 1.41421...
/// let mut gen = SqrtDigitGenerator::new();
/// let digits: Vec<u8> = [2, 0, 0, 0, 0].iter().map(|&pair| gen.next_digit(pair)).collect();
/// assert_eq!(digits, [1, 4, 1, 4, 2]);
/// assert!(gen.has_next_digit());
/// assert_eq!(gen.result().to_string(), "14142");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SqrtDigitGenerator {
    remainder: BigUnsigned,
    result: BigUnsigned,
    search: DigitSearch,
}

impl SqrtDigitGenerator {
    /// Create generator with zero remainder and result
    pub fn new() -> Self {
        Self::default()
    }

    /// Create generator using the given digit search
    pub fn with_search(search: DigitSearch) -> Self {
        Self {
            search,
            ..Self::default()
        }
    }

    /// Consume the next pair of radicand digits and produce a digit of the root
    ///
    /// # Panics
    ///
    /// Panics if `pair` is larger than 99.
    ///
    pub fn next_digit(&mut self, pair: u8) -> u8 {
        assert!(pair <= 99, "digit pair out of range: {}", pair);

        let current_remainder = &self.remainder * 100u8 + pair;
        let expanded = &self.result * 20u8;

        let (digit, product) = self.search.find(&expanded, &current_remainder);
        assert!(digit <= 9, "digit search produced {}", digit);

        self.result = &self.result * 10u8 + digit;
        self.remainder = current_remainder - product;

        tracing::trace!(pair, digit, "next digit");
        digit
    }

    /// True while the remainder is not zero
    ///
    /// Once the radicand has been consumed, a zero remainder means the
    /// root is exact and every further digit is zero.
    ///
    pub fn has_next_digit(&self) -> bool {
        !self.remainder.is_zero()
    }

    /// All digits produced so far, as an integer
    pub fn result(&self) -> &BigUnsigned {
        &self.result
    }

    /// Consumed radicand minus the square of the result
    pub fn remainder(&self) -> &BigUnsigned {
        &self.remainder
    }

    /// Return digit search strategy
    pub fn digit_search(&self) -> DigitSearch {
        self.search
    }
}
