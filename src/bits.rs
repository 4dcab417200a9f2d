//! Low-level functions for masking multi-word integers.
//!
//! A multi-word integer is stored as a slice of `u64` words with the least significant word first.
//! Word `i` holds bits `64 * i .. 64 * i + 64` of the value.
//! This is the order the words appear in the generated fixtures.

//-----------------------------------------------------------------------------

/// Number of bits in `u64`.
pub const WORD_BITS: usize = 64;

//-----------------------------------------------------------------------------

/// Returns an integer with the lowest `n` bits set.
///
/// # Examples
///
/// ```
/// use bitwidth_fixtures::bits;
///
/// assert_eq!(bits::low_set(0), 0);
/// assert_eq!(bits::low_set(13), 0x1FFF);
/// assert_eq!(bits::low_set(64), !0u64);
/// ```
///
/// # Panics
///
/// Panics if `n > 64`.
#[inline]
pub fn low_set(n: usize) -> u64 {
    assert!(n <= WORD_BITS, "low_set: cannot set {} bits in a 64-bit word", n);
    match n {
        WORD_BITS => !0u64,
        _ => (1u64 << n) - 1,
    }
}

/// Clears all bits at positions `>= width` in a multi-word integer.
///
/// The words are processed from the least significant one.
/// Each word consumes up to 64 bits of the width: a word with at least 64 bits remaining is kept as is, a word with fewer bits remaining keeps only its low bits, and every word after the width is exhausted becomes zero.
///
/// # Examples
///
/// ```
/// use bitwidth_fixtures::bits;
///
/// let mut words = [!0u64; 4];
/// bits::mask_words(&mut words, 70);
/// assert_eq!(words, [!0u64, 0x3F, 0, 0]);
/// ```
pub fn mask_words(words: &mut [u64], width: usize) {
    let mut remaining = width;
    for word in words.iter_mut() {
        if remaining < WORD_BITS {
            *word &= low_set(remaining);
        }
        remaining = remaining.saturating_sub(WORD_BITS);
    }
}

/// Returns the number of significant bits in a multi-word integer.
///
/// This is the position of the highest set bit plus one, or `0` if the value is zero.
///
/// # Examples
///
/// ```
/// use bitwidth_fixtures::bits;
///
/// assert_eq!(bits::value_bits(&[0, 0, 0, 0]), 0);
/// assert_eq!(bits::value_bits(&[0, 1, 0, 0]), 65);
/// assert_eq!(bits::value_bits(&[!0u64, 0x3F, 0, 0]), 70);
/// assert_eq!(bits::value_bits(&[0, 0x8000_0000_0000_0000]), 128);
/// ```
pub fn value_bits(words: &[u64]) -> usize {
    match words.iter().rposition(|&word| word != 0) {
        Some(index) => index * WORD_BITS + WORD_BITS - (words[index].leading_zeros() as usize),
        None => 0,
    }
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
