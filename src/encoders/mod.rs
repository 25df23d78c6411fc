pub mod algorithms;

pub use algorithms::decode::{decode, decode_str};
pub use algorithms::encode::{encode, encode_to_vec};
