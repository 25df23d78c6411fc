//! Base64 alphabet and reverse lookup table.
//!
//! Both tables are built at compile time and shared read-only by every
//! encode and decode call.

/// The alphabet as text, for error hints and listings.
pub const ALPHABET_STR: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The 64-symbol RFC 4648 alphabet, indexed by 6-bit value.
pub const ALPHABET: [u8; 64] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character appended when the input length is not a multiple of 3.
pub const PADDING: u8 = b'=';

/// Classification of a single input byte during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A real alphabet character carrying a 6-bit value (0..=63)
    Value(u8),
    /// The `=` padding character
    Padding,
    /// Anything outside the alphabet and padding
    Invalid,
}

#[cfg(test)]
impl Symbol {
    /// Returns true for alphabet characters and padding.
    fn is_meaningful(self) -> bool {
        !matches!(self, Symbol::Invalid)
    }
}

/// Reverse table covering ASCII (0..128). Bytes >= 128 are never valid.
pub static REVERSE: [Symbol; 128] = build_reverse();

const fn build_reverse() -> [Symbol; 128] {
    let mut table = [Symbol::Invalid; 128];

    let mut v = 0;
    while v < ALPHABET.len() {
        table[ALPHABET[v] as usize] = Symbol::Value(v as u8);
        v += 1;
    }
    table[PADDING as usize] = Symbol::Padding;

    table
}

/// Look up a byte in the reverse table.
#[inline]
pub fn classify(byte: u8) -> Symbol {
    match REVERSE.get(byte as usize) {
        Some(symbol) => *symbol,
        None => Symbol::Invalid,
    }
}

/// Map the low 6 bits of `value` to its alphabet character.
#[inline]
pub fn encode_sextet(value: u8) -> u8 {
    ALPHABET[(value & 0x3F) as usize]
}
