//! Implementation of `UInt256`, a 256-bit unsigned integer.

/// The length of `UInt256` values in bytes.
pub const UINT256_SIZE: usize = 32;

/// Represents a 256-bit unsigned integer.
///
/// Holds SHA-256 digests in the byte order the hash function produced them.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct UInt256([u8; UINT256_SIZE]);

impl_fixed_uint!(UInt256, UINT256_SIZE);
