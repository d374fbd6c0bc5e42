//! # neo-notify
//!
//! Neo N3 contract notifications and the hash nodes use to identify them.
//!
//! The implementation lives in a handful of workspace crates:
//!
//! - [`neo_primitives`] - `UInt160` / `UInt256`
//! - [`neo_io`] - binary writer and reader
//! - [`neo_cryptography`] - SHA-256
//! - [`neo_vm`] - stack items, engine limits, reference counting
//! - [`neo_smart_contract`] - `NotifyEventArgs` and the binary serializer
//!
//! ## Quick Start
//!
//! ```rust
//! use neo_notify::prelude::*;
//!
//! neo_notify::logging::init_tracing("info");
//!
//! let args = NotifyEventArgs::new_with_optional_container(
//!     None,
//!     UInt160::zero(),
//!     "Transfer",
//!     Vec::new(),
//! );
//! assert_eq!(
//!     args.get_notification_hash().to_hex_string().len(),
//!     66
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod logging;

// Re-export the workspace crates
pub use neo_cryptography as crypto;
pub use neo_io as io;
pub use neo_primitives as primitives;
pub use neo_smart_contract as smart_contract;
pub use neo_vm as vm;

/// Common imports for working with notifications
pub mod prelude {
    pub use crate::primitives::{UInt160, UInt256};
    pub use crate::smart_contract::{
        BinarySerializer, ContractError, ContractResult, IInteroperable, IVerifiable,
        NotifyEventArgs, NOTIFICATION_MAX_ITEMS, NOTIFICATION_MAX_SIZE,
    };
    pub use crate::vm::{ExecutionEngineLimits, IReferenceCounter, ReferenceCounter, StackItem};
}
