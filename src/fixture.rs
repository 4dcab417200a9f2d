//! Fixture records: a bit-width and a 256-bit value that fits within it.
//!
//! A [`Fixture`] is printed as a C-style initializer that can be pasted into an array literal:
//!
//! ```text
//! { 70, { 0x9e3779b97f4a7c15, 0x000000000000002a, 0x0000000000000000, 0x0000000000000000,  } },
//! ```
//!
//! The words are listed least significant first, so the first word holds bits `0..64` of the value.
//! The same format can be parsed back with [`str::parse`].

use crate::bits;

use std::fmt;
use std::io::{Error, ErrorKind};
use std::str::FromStr;

use rand::Rng;


//-----------------------------------------------------------------------------

/// Number of `u64` words in a fixture value.
pub const WORDS: usize = 4;

/// Maximum bit-width of a fixture value.
pub const MAX_WIDTH: usize = WORDS * bits::WORD_BITS;

//-----------------------------------------------------------------------------

/// A bit-width and a multi-word integer with no set bits at positions `>= width`.
///
/// # Examples
///
/// ```
/// use bitwidth_fixtures::fixture::Fixture;
///
/// let fixture = Fixture::new(70, [!0u64; 4]);
/// assert_eq!(fixture.width(), 70);
/// assert_eq!(fixture.words(), &[!0u64, 0x3F, 0, 0]);
/// assert!(fixture.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixture {
    width: usize,
    words: [u64; WORDS],
}

impl Fixture {
    /// Creates a fixture by masking `words` to the given bit-width.
    ///
    /// # Panics
    ///
    /// Panics if `width > MAX_WIDTH`.
    pub fn new(width: usize, words: [u64; WORDS]) -> Fixture {
        assert!(width <= MAX_WIDTH, "Fixture::new(): width {} is greater than {}", width, MAX_WIDTH);
        let mut words = words;
        bits::mask_words(&mut words, width);
        Fixture { width, words }
    }

    /// Generates a random fixture.
    ///
    /// The width is drawn uniformly from `0..=MAX_WIDTH`, and then all words are drawn uniformly before masking, starting from the least significant one.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Fixture {
        let width = rng.gen_range(0, MAX_WIDTH + 1);
        Self::random_with_width(width, rng)
    }

    /// Generates a random fixture with the given bit-width.
    ///
    /// Every word is drawn from `rng` even if masking clears it.
    ///
    /// # Panics
    ///
    /// Panics if `width > MAX_WIDTH`.
    pub fn random_with_width<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Fixture {
        let mut words = [0u64; WORDS];
        for word in words.iter_mut() {
            *word = rng.gen();
        }
        Self::new(width, words)
    }

    /// Returns the bit-width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the words, least significant first.
    #[inline]
    pub fn words(&self) -> &[u64; WORDS] {
        &self.words
    }

    /// Returns `true` if the width is at most [`MAX_WIDTH`] and no bit is set at position `>= width`.
    pub fn is_valid(&self) -> bool {
        self.width <= MAX_WIDTH && bits::value_bits(&self.words) <= self.width
    }
}

//-----------------------------------------------------------------------------

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {{ ", self.width)?;
        for word in self.words.iter() {
            write!(f, "0x{:016x}, ", word)?;
        }
        write!(f, " }} }},")
    }
}

// Separators in the textual form.
const PREFIX: &str = "{ ";
const SUFFIX: &str = ",  } },";
const WORDS_START: &str = ", { ";
const WORD_SEPARATOR: &str = ", ";
const HEX_PREFIX: &str = "0x";
const HEX_DIGITS: usize = 16;

fn invalid(message: String) -> Error {
    Error::new(ErrorKind::InvalidData, message)
}

fn parse_width(s: &str) -> Result<usize, Error> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("Invalid width: {:?}", s)));
    }
    let width = s.parse::<usize>().map_err(|e| invalid(format!("Invalid width {:?}: {}", s, e)))?;
    if width > MAX_WIDTH {
        return Err(invalid(format!("Width {} is greater than {}", width, MAX_WIDTH)));
    }
    Ok(width)
}

fn parse_word(s: &str) -> Result<u64, Error> {
    let digits = s.strip_prefix(HEX_PREFIX).ok_or_else(|| invalid(format!("Missing hex prefix: {:?}", s)))?;
    if digits.len() != HEX_DIGITS || !digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(invalid(format!("Expected {} lowercase hex digits: {:?}", HEX_DIGITS, s)));
    }
    u64::from_str_radix(digits, 16).map_err(|e| invalid(format!("Invalid word {:?}: {}", s, e)))
}

impl FromStr for Fixture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .ok_or_else(|| invalid(format!("Not a fixture record: {:?}", s)))?;
        let mut parts = body.splitn(2, WORDS_START);
        let width = parse_width(parts.next().unwrap_or(""))?;
        let word_list = parts.next().ok_or_else(|| invalid(format!("Missing words: {:?}", s)))?;

        let mut words = [0u64; WORDS];
        let mut count = 0;
        for token in word_list.split(WORD_SEPARATOR) {
            if count >= WORDS {
                return Err(invalid(format!("More than {} words: {:?}", WORDS, s)));
            }
            words[count] = parse_word(token)?;
            count += 1;
        }
        if count != WORDS {
            return Err(invalid(format!("Expected {} words, found {}", WORDS, count)));
        }

        let result = Fixture { width, words };
        if !result.is_valid() {
            return Err(invalid(format!("Value does not fit in {} bits", width)));
        }
        Ok(result)
    }
}

//-----------------------------------------------------------------------------
