//! # Neo smart contract notifications
//!
//! Models the notification a contract emits through `System.Runtime.Notify`
//! and the identity hash nodes use to refer to it.
//!
//! - [`NotifyEventArgs`]: the immutable notification record
//! - [`BinarySerializer`]: the Neo binary encoding of stack items, used to
//!   canonicalize the notification arguments
//! - [`IInteroperable`]: projection of a record into a VM [`StackItem`](neo_vm::StackItem)
//!
//! ```rust
//! use neo_primitives::UInt160;
//! use neo_smart_contract::NotifyEventArgs;
//! use neo_vm::StackItem;
//!
//! let args = NotifyEventArgs::new_with_optional_container(
//!     None,
//!     UInt160::zero(),
//!     "Transfer",
//!     vec![StackItem::from_int(100)],
//! );
//! let hash = args.get_notification_hash();
//! assert!(!hash.is_zero());
//! ```

pub mod binary_serializer;
pub mod error;
pub mod i_interoperable;
pub mod i_verifiable;
pub mod notify_event_args;

pub use binary_serializer::BinarySerializer;
pub use error::{ContractError, ContractResult};
pub use i_interoperable::IInteroperable;
pub use i_verifiable::IVerifiable;
pub use notify_event_args::{NotifyEventArgs, NOTIFICATION_MAX_ITEMS, NOTIFICATION_MAX_SIZE};
