//! Implementation of `UInt160`, a 160-bit unsigned integer.

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = 20;

/// Represents a 160-bit unsigned integer.
///
/// Used as the script hash identifying a deployed contract.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct UInt160([u8; UINT160_SIZE]);

impl_fixed_uint!(UInt160, UINT160_SIZE);
