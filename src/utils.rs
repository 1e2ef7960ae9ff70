//! Bit/character conversion helpers shared by the storage and register code.

use crate::{LfsrError, Result};

/// Parse a single bit character.
///
/// # Examples
///
/// ```
/// use lfsr::utils::bit_from_char;
///
/// assert_eq!(bit_from_char('1'), Some(1));
/// assert_eq!(bit_from_char('0'), Some(0));
/// assert_eq!(bit_from_char('2'), None);
/// ```
#[inline]
pub fn bit_from_char(c: char) -> Option<u8> {
    match c {
        '0' => Some(0),
        '1' => Some(1),
        _ => None,
    }
}

/// Render a bit as '0' or '1'. Any non-zero value is treated as 1.
#[inline]
pub fn bit_to_char(bit: u8) -> char {
    if bit > 0 {
        '1'
    } else {
        '0'
    }
}

/// Parse a string of '0'/'1' characters into bit values.
///
/// Fails on the first character that is not a bit, reporting its index.
///
/// # Examples
///
/// ```
/// use lfsr::utils::parse_bitstring;
///
/// assert_eq!(parse_bitstring("1011").unwrap(), vec![1, 0, 1, 1]);
/// assert!(parse_bitstring("10a1").is_err());
/// ```
pub fn parse_bitstring(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .enumerate()
        .map(|(position, found)| {
            bit_from_char(found).ok_or(LfsrError::InvalidInput { position, found })
        })
        .collect()
}

/// Render a sequence of bit values as a '0'/'1' string.
pub fn bits_to_string<I>(bits: I) -> String
where
    I: IntoIterator<Item = u8>,
{
    bits.into_iter().map(bit_to_char).collect()
}
