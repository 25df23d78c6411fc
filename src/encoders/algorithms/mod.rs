pub mod decode;
pub mod encode;
pub mod errors;

// Re-export error types for public API
pub use errors::{DecodeError, DecodeErrorKind};
