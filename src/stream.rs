//! Unbounded square root extraction
//!
//! [`SqrtDigits`] yields the characters of the root lazily: integral
//! digits, a decimal point, then fractional digits for as long as it is
//! polled. Perfect squares end after their integral digits.
//!

use crate::*;
use crate::stdlib::iter::FusedIterator;
use crate::stdlib::vec;

use crate::arithmetic::sqrt::decimal_digit_pairs;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Integral,
    Fractional,
    Finished,
}

/// Iterator over the characters of a square root
///
/// Digits are truncated, never rounded: the first `k` characters are a
/// prefix of the exact root. This differs from [`sqrt_digits`], which
/// rounds its last digit, so a prefix of the stream may end one unit
/// lower than the bounded result of the same length.
///
/// ```
/// use sqrt_digits::{sqrt_digits, SqrtDigits};
///
/// // sqrt(99) = 9.9498...
/// let prefix: String = SqrtDigits::new(99u8).take(4).collect();
/// assert_eq!(prefix, "9.94");
/// assert_eq!(sqrt_digits(99, 2).unwrap(), "9.9");
/// assert_eq!(sqrt_digits(99, 3).unwrap(), "9.95");
///
/// let exact: String = SqrtDigits::new(144u8).collect();
/// assert_eq!(exact, "12");
/// ```
#[derive(Clone, Debug)]
pub struct SqrtDigits {
    generator: SqrtDigitGenerator,
    pairs: vec::IntoIter<u8>,
    phase: Phase,
}

impl SqrtDigits {
    /// Stream the root of `n` using the default digit search
    pub fn new<N: Into<BigUnsigned>>(n: N) -> Self {
        Self::with_search(n, DigitSearch::default())
    }

    /// Stream the root of `n` using the given digit search
    pub fn with_search<N: Into<BigUnsigned>>(n: N, search: DigitSearch) -> Self {
        let n = n.into();
        Self {
            generator: SqrtDigitGenerator::with_search(search),
            pairs: decimal_digit_pairs(&n).into_iter(),
            phase: Phase::Integral,
        }
    }

    /// State of the underlying extraction
    pub fn generator(&self) -> &SqrtDigitGenerator {
        &self.generator
    }
}

impl Iterator for SqrtDigits {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let digit = match self.phase {
            Phase::Integral => match self.pairs.next() {
                Some(pair) => self.generator.next_digit(pair),
                None if self.generator.has_next_digit() => {
                    self.phase = Phase::Fractional;
                    return Some('.');
                }
                None => {
                    self.phase = Phase::Finished;
                    return None;
                }
            },
            Phase::Fractional if self.generator.has_next_digit() => self.generator.next_digit(0),
            Phase::Fractional | Phase::Finished => {
                self.phase = Phase::Finished;
                return None;
            }
        };

        Some(char::from(b'0' + digit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Integral => (self.pairs.len(), None),
            Phase::Fractional => (0, None),
            Phase::Finished => (0, Some(0)),
        }
    }
}

impl FusedIterator for SqrtDigits {}


/// Stream the characters of the square root of `n`
///
/// Fails only if `n` is negative.
///
pub fn sqrt_digit_stream<N: Radicand>(n: N) -> Result<SqrtDigits, SqrtError> {
    n.into_radicand().map(SqrtDigits::new)
}


/// Failure while writing a square root to a sink
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum StreamError {
    /// The radicand was rejected
    Sqrt(SqrtError),
    /// Writing to the sink failed
    Io(std::io::Error),
}

#[cfg(feature = "std")]
impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StreamError::Sqrt(err) => write!(f, "cannot stream square root: {}", err),
            StreamError::Io(err) => write!(f, "failed writing square root digits: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Sqrt(err) => Some(err),
            StreamError::Io(err) => Some(err),
        }
    }
}

#[cfg(feature = "std")]
impl From<SqrtError> for StreamError {
    fn from(err: SqrtError) -> Self {
        StreamError::Sqrt(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Io(err)
    }
}

/// Write the square root of `n` to `sink`, one character at a time,
/// until `cancel` is set
///
/// The flag is checked before each character is computed; a digit in
/// progress is always finished and written. Perfect squares stop on
/// their own. Returns the number of characters written.
///
/// ```
/// use std::sync::atomic::AtomicBool;
/// use sqrt_digits::stream_sqrt_digits;
///
/// let cancel = AtomicBool::new(false);
/// let mut out = Vec::new();
/// let count = stream_sqrt_digits(1522756u32, &mut out, &cancel).unwrap();
/// assert_eq!(out, b"1234");
/// assert_eq!(count, 4);
/// ```
#[cfg(feature = "std")]
pub fn stream_sqrt_digits<N, W>(
    n: N,
    mut sink: W,
    cancel: &std::sync::atomic::AtomicBool,
) -> Result<u64, StreamError>
where
    N: Radicand,
    W: std::io::Write,
{
    use std::sync::atomic::Ordering::Relaxed;

    let mut digits = sqrt_digit_stream(n)?;

    let span = tracing::debug_span!("stream_sqrt_digits");
    let _guard = span.enter();

    let mut written = 0u64;
    let mut buf = [0u8; 4];
    loop {
        if cancel.load(Relaxed) {
            tracing::debug!(written, "square root stream cancelled");
            break;
        }
        match digits.next() {
            Some(c) => {
                sink.write_all(c.encode_utf8(&mut buf).as_bytes())?;
                written += 1;
            }
            None => {
                tracing::debug!(written, "square root stream exhausted");
                break;
            }
        }
    }

    sink.flush()?;
    Ok(written)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::String;

    /// Drop trailing zeros of a fractional part, and a bare point
    fn trim_fraction(s: &str) -> &str {
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s
        }
    }

    #[test]
    fn sqrt_2_prefix() {
        let digits: String = SqrtDigits::new(2u8).take(12).collect();
        assert_eq!(digits, "1.4142135623");
    }

    #[test]
    fn zero_and_one() {
        assert_eq!(SqrtDigits::new(0u8).collect::<String>(), "0");
        assert_eq!(SqrtDigits::new(1u8).collect::<String>(), "1");
    }

    #[test]
    fn perfect_square_finishes() {
        let mut digits = SqrtDigits::new(152399025u32);
        assert_eq!(digits.size_hint(), (5, None));
        assert_eq!(digits.by_ref().collect::<String>(), "12345");
        assert_eq!(digits.next(), None);
        assert_eq!(digits.size_hint(), (0, Some(0)));
        assert!(!digits.generator().has_next_digit());
    }

    #[test]
    fn negative_rejected() {
        assert_eq!(sqrt_digit_stream(-7).unwrap_err(), SqrtError::NegativeInput);
    }

    #[test]
    fn prefix_matches_truncated_bounded_result() {
        for &n in [2u32, 3, 42, 99, 9999, 123456789, 1000001].iter() {
            let stream: String = SqrtDigits::new(n).take(60).collect();
            let integral_len = stream.find('.').unwrap_or(stream.len());

            for len in (integral_len + 1)..stream.len() {
                let prefix = &stream[..len];
                let significant = (len - 1) as u64;
                let ctx = Context::new(significant).with_rounding_mode(RoundingMode::Down);
                let bounded = sqrt_digits_with_context(n, &ctx).unwrap();
                assert_eq!(trim_fraction(prefix), bounded, "n={} len={}", n, len);
            }
        }
    }

    #[test]
    fn searches_stream_the_same_digits() {
        let n: BigUnsigned = "51864404980834242630409449768792397904982098404496001028394784645"
            .parse()
            .unwrap();
        let linear: String = SqrtDigits::with_search(n.clone(), DigitSearch::Linear).take(80).collect();
        let dichotomic: String = SqrtDigits::with_search(n, DigitSearch::Dichotomic).take(80).collect();
        assert_eq!(linear, dichotomic);
    }

    #[cfg(feature = "std")]
    mod writer {
        use super::*;
        use std::io;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        /// Sink that raises the cancel flag after a fixed number of bytes
        struct CancelAfter<'a> {
            out: Vec<u8>,
            limit: usize,
            cancel: &'a AtomicBool,
        }

        impl io::Write for CancelAfter<'_> {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.out.extend_from_slice(buf);
                if self.out.len() >= self.limit {
                    self.cancel.store(true, Ordering::Relaxed);
                }
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        struct BrokenPipe;

        impl io::Write for BrokenPipe {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        #[test]
        fn cancel_between_digits() {
            let cancel = AtomicBool::new(false);
            let mut sink = CancelAfter { out: Vec::new(), limit: 50, cancel: &cancel };
            let count = stream_sqrt_digits(2, &mut sink, &cancel).unwrap();
            assert_eq!(count, 50);

            let expected: String = SqrtDigits::new(2u8).take(50).collect();
            assert_eq!(sink.out, expected.as_bytes());
        }

        #[test]
        fn already_cancelled_writes_nothing() {
            let cancel = AtomicBool::new(true);
            let mut out = Vec::new();
            assert_eq!(stream_sqrt_digits(2, &mut out, &cancel).unwrap(), 0);
            assert!(out.is_empty());
        }

        /// Sink that raises a flag on its first write
        struct Started {
            out: Vec<u8>,
            started: Arc<AtomicBool>,
        }

        impl io::Write for Started {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.started.store(true, Ordering::Relaxed);
                self.out.extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        #[test]
        fn cancel_from_other_thread() {
            let cancel = Arc::new(AtomicBool::new(false));
            let started = Arc::new(AtomicBool::new(false));
            let worker = {
                let cancel = Arc::clone(&cancel);
                let started = Arc::clone(&started);
                std::thread::spawn(move || {
                    let mut sink = Started { out: Vec::new(), started };
                    let count = stream_sqrt_digits(3, &mut sink, &cancel).unwrap();
                    (count, sink.out)
                })
            };

            while !started.load(Ordering::Relaxed) {
                std::thread::yield_now();
            }
            cancel.store(true, Ordering::Relaxed);

            let (count, out) = worker.join().unwrap();
            assert!(count >= 1);
            assert_eq!(count as usize, out.len());

            let expected: String = SqrtDigits::new(3u8).take(out.len()).collect();
            assert_eq!(out, expected.as_bytes());
        }

        #[test]
        fn sink_failure() {
            let cancel = AtomicBool::new(false);
            match stream_sqrt_digits(2, BrokenPipe, &cancel) {
                Err(StreamError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
                other => panic!("unexpected result {:?}", other),
            }
        }

        #[test]
        fn negative_input() {
            let cancel = AtomicBool::new(false);
            let err = stream_sqrt_digits(-2, io::sink(), &cancel).unwrap_err();
            assert!(matches!(err, StreamError::Sqrt(SqrtError::NegativeInput)));
            assert_eq!(err.to_string(), "cannot stream square root: square root of negative number");
        }
    }
}
