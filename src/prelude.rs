//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use sextet::prelude::*;
//!
//! let encoded = encode(b"Man", &EncodingOptions::default());
//! let decoded = decode_str(&encoded, &DecodingOptions::default()).unwrap();
//! assert_eq!(decoded, b"Man");
//! ```

pub use crate::{
    DecodeError,
    DecodeErrorKind,
    DecodingOptions,
    // Options
    EncodingOptions,
    LineLength,
    LineTerminator,
    Settings,

    // Codec
    decode,
    decode_str,
    encode,
    encode_to_vec,
};
