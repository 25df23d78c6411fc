use crate::core::alphabet::{PADDING, encode_sextet};
use crate::core::options::{EncodingOptions, encoded_len};

/// Encode bytes as Base64 text.
///
/// Never fails; empty input produces an empty string.
///
/// # Example
///
/// ```
/// use sextet::{EncodingOptions, encode};
///
/// assert_eq!(encode(b"Man", &EncodingOptions::default()), "TWFu");
/// assert_eq!(encode(b"M", &EncodingOptions::default()), "TQ==");
/// ```
pub fn encode(data: &[u8], options: &EncodingOptions) -> String {
    // Output is pure ASCII, so each byte is one char
    encode_to_vec(data, options)
        .into_iter()
        .map(char::from)
        .collect()
}

/// Encode bytes as Base64, returning the ASCII output as raw bytes.
pub fn encode_to_vec(data: &[u8], options: &EncodingOptions) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(encoded_len(data.len(), options));
    let columns = options.line_length.columns();
    let terminator = options.effective_terminator().as_bytes();
    let mut line_count = 0usize;

    let chunks = data.chunks_exact(3);
    let remainder = chunks.remainder();
    let total_groups = chunks.len() + usize::from(!remainder.is_empty());

    for (i, group) in chunks.enumerate() {
        let (b0, b1, b2) = (group[0], group[1], group[2]);
        out.extend_from_slice(&[
            encode_sextet(b0 >> 2),
            encode_sextet(((b0 & 0x3) << 4) | (b1 >> 4)),
            encode_sextet(((b1 & 0xF) << 2) | (b2 >> 6)),
            encode_sextet(b2 & 0x3F),
        ]);

        if columns != 0 {
            line_count += 4;
            if line_count == columns && i + 1 < total_groups {
                out.extend_from_slice(terminator);
                line_count = 0;
            }
        }
    }

    match *remainder {
        [b0] => out.extend_from_slice(&[
            encode_sextet(b0 >> 2),
            encode_sextet((b0 & 0x3) << 4),
            PADDING,
            PADDING,
        ]),
        [b0, b1] => out.extend_from_slice(&[
            encode_sextet(b0 >> 2),
            encode_sextet(((b0 & 0x3) << 4) | (b1 >> 4)),
            encode_sextet((b1 & 0xF) << 2),
            PADDING,
        ]),
        _ => {}
    }

    debug_assert_eq!(out.len(), encoded_len(data.len(), options));
    out
}
