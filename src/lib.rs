//! # sextet
//!
//! RFC 4648 Base64 codec with optional line wrapping and a lenient
//! decode mode.
//!
//! Encoding never fails. Decoding either returns the complete buffer or a
//! [`DecodeError`]; partial output is never exposed.
//!
//! ```
//! use sextet::{DecodingOptions, EncodingOptions, LineTerminator, decode, encode};
//!
//! let text = encode(b"Hello World", &EncodingOptions::default());
//! assert_eq!(text, "SGVsbG8gV29ybGQ=");
//!
//! let wrapped = encode(&[0u8; 49], &EncodingOptions::wrap_64().with_terminator(LineTerminator::Lf));
//! assert!(wrapped.contains('\n'));
//!
//! let bytes = decode(wrapped.as_bytes(), &DecodingOptions::lenient()).unwrap();
//! assert_eq!(bytes, vec![0u8; 49]);
//! ```
//!
//! Both functions are pure and may be called from any number of threads;
//! the lookup tables are compile-time constants.

pub mod core;
mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{ALPHABET, PADDING, REVERSE, Symbol, classify};
pub use crate::core::config::Settings;
pub use crate::core::options::{
    DecodingOptions, EncodingOptions, LineLength, LineTerminator, decoded_capacity, encoded_len,
    estimate_encoded_capacity,
};
pub use encoders::algorithms::{DecodeError, DecodeErrorKind};
pub use encoders::{decode, decode_str, encode, encode_to_vec};

#[cfg(test)]
mod tests;
