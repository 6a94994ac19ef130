//! NOID encoding primitives.
//!
//! A NOID is a fixed-width positional encoding of a counter value over a
//! restricted alphabet. Encoding is a total bijection between
//! `[0, CAPACITY)` and the set of `WIDTH`-character strings over `ALPHABET`,
//! so a minter can recover the counter position of any identifier it (or a
//! previous minter for the same document) produced.

/// The NOID alphabet: digits then lowercase letters. Lowercase L is left out
/// because it reads like a one.
pub const ALPHABET: &[u8; 35] = b"0123456789abcdefghijkmnopqrstuvwxyz";

/// Number of symbols in an encoded NOID.
pub const WIDTH: usize = 4;

/// Number of distinct NOIDs: `ALPHABET.len()` to the power of `WIDTH`.
pub const CAPACITY: u32 = 1_500_625;

/// Encodes a counter value as a fixed-width NOID string.
///
/// The encoding is big-endian positional, so `encode(0)` is `"0000"` and
/// successive values differ in the rightmost symbol first.
///
/// # Panics
///
/// Panics if `index >= CAPACITY`. Callers are expected to check
/// `Minter::has_next` (or compare against [`CAPACITY`]) first; an
/// out-of-domain index is a contract violation, not a recoverable state.
pub fn encode(index: u32) -> String {
    assert!(index < CAPACITY, "NOID index {index} is out of range");

    let radix = ALPHABET.len() as u32;
    let mut symbols = [0u8; WIDTH];
    let mut rest = index;

    for slot in symbols.iter_mut().rev() {
        *slot = ALPHABET[(rest % radix) as usize];
        rest /= radix;
    }

    // The alphabet is pure ASCII
    String::from_utf8(symbols.to_vec()).expect("non-UTF8 alphabet")
}

/// Decodes a NOID string back to its counter value.
///
/// Returns `None` if the input is not exactly `WIDTH` symbols drawn from
/// [`ALPHABET`]. Seeding scans rely on this: an identifier that fails to
/// decode is simply not one of ours.
pub fn decode(encoded: &str) -> Option<u32> {
    if encoded.len() != WIDTH {
        return None;
    }

    let radix = ALPHABET.len() as u32;
    let mut index = 0u32;

    for byte in encoded.bytes() {
        let symbol = ALPHABET.iter().position(|c| *c == byte)? as u32;
        index = index * radix + symbol;
    }

    Some(index)
}
