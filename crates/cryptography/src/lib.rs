//! Cryptographic hashing for Neo identifiers.

pub mod hash;

pub use hash::{sha256, Sha256Hasher};
