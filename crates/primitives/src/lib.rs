//! # Neo Primitives
//!
//! Fixed-size hash types shared by every other crate in the workspace:
//! - `UInt160`: 160-bit value (contract script hashes)
//! - `UInt256`: 256-bit value (container hashes, notification hashes)
//!
//! Both keep their bytes in little-endian storage order, exactly as they are
//! written to the wire, and render as `0x`-prefixed big-endian hex.
//!
//! ## Example
//!
//! ```rust
//! use neo_primitives::{UInt160, UInt256};
//!
//! let hash = UInt256::zero();
//! assert!(hash.is_zero());
//!
//! let script_hash = UInt160::parse("0x0000000000000000000000000000000000000001").unwrap();
//! assert_eq!(script_hash.to_array()[0], 0x01);
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod uint160;
pub mod uint256;

pub use error::{PrimitiveError, PrimitiveResult};
pub use uint160::{UInt160, UINT160_SIZE};
pub use uint256::{UInt256, UINT256_SIZE};
