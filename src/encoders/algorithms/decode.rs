use super::errors::DecodeError;
use crate::core::alphabet::{Symbol, classify};
use crate::core::options::{DecodingOptions, decoded_capacity};

/// Decode Base64 bytes.
///
/// Input is scanned byte by byte, so it need not be valid UTF-8. On
/// failure nothing is returned; the partially filled buffer is dropped.
///
/// In lenient mode (`ignore_unknown_characters`) bytes outside the
/// alphabet are skipped, and an unfinished final quartet is accepted:
/// bytes it already completed are kept, its leftover bits are discarded.
///
/// # Example
///
/// ```
/// use sextet::{DecodingOptions, decode};
///
/// assert_eq!(decode(b"TWFu", &DecodingOptions::default()).unwrap(), b"Man");
/// assert_eq!(decode(b"TW\nFu", &DecodingOptions::lenient()).unwrap(), b"Man");
/// assert!(decode(b"TWF", &DecodingOptions::default()).is_err());
/// ```
pub fn decode(input: &[u8], options: &DecodingOptions) -> Result<Vec<u8>, DecodeError> {
    let mut result = Vec::with_capacity(decoded_capacity(input.len()));

    let mut phase = 0u8;
    let mut accumulator = 0u8;
    let mut valid_count = 0usize;
    let mut padding_count = 0usize;

    for (position, &byte) in input.iter().enumerate() {
        let value = match classify(byte) {
            Symbol::Value(value) => value,
            Symbol::Padding => {
                padding_count += 1;
                continue;
            }
            Symbol::Invalid => {
                if options.ignore_unknown_characters {
                    continue;
                }
                return Err(DecodeError::invalid_character(byte, position));
            }
        };

        // Padding is only allowed as a suffix
        if padding_count > 0 {
            return Err(DecodeError::invalid_padding(position));
        }
        valid_count += 1;

        match phase {
            0 => accumulator = value << 2,
            1 => {
                result.push(accumulator | (value >> 4));
                accumulator = value << 4;
            }
            2 => {
                result.push(accumulator | (value >> 2));
                accumulator = value << 6;
            }
            _ => result.push(accumulator | value),
        }
        phase = (phase + 1) % 4;
    }

    let meaningful = valid_count + padding_count;
    if !options.ignore_unknown_characters && meaningful % 4 != 0 {
        return Err(DecodeError::invalid_length(meaningful));
    }

    Ok(result)
}

/// Decode a Base64 string.
///
/// The string's UTF-8 bytes are decoded, so any non-ASCII character is
/// an invalid byte.
pub fn decode_str(input: &str, options: &DecodingOptions) -> Result<Vec<u8>, DecodeError> {
    decode(input.as_bytes(), options)
}
