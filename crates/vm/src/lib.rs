//! # Neo Virtual Machine value model
//!
//! The pieces of NeoVM that code living next to the execution engine needs in
//! order to exchange values with it:
//!
//! - **StackItem**: the nested value tree (scalars, byte buffers, arrays,
//!   structs, maps, and the opaque pointer/interop variants)
//! - **StackItemType**: the one-byte type tags used on the wire
//! - **ExecutionEngineLimits**: engine limits, loadable from TOML
//! - **IReferenceCounter**: the engine's reference accounting, as an injected
//!   capability, with a thread-safe default [`ReferenceCounter`]
//!
//! ## Example
//!
//! ```rust
//! use neo_vm::{StackItem, StackItemType};
//!
//! let item = StackItem::from_array(vec![StackItem::from_int(1), StackItem::from("hello")]);
//! assert_eq!(item.stack_item_type(), StackItemType::Array);
//! assert_eq!(item.as_array().unwrap().len(), 2);
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

/// VM error types and result handling
pub mod error;
/// Engine limits configuration
pub mod execution_engine_limits;
/// Reference accounting interface for compound items
pub mod reference_counter;
/// Polymorphic data types for VM values
pub mod stack_item;

pub use error::{VmError, VmResult};
pub use execution_engine_limits::ExecutionEngineLimits;
pub use reference_counter::{IReferenceCounter, ReferenceCounter};
pub use stack_item::{integer_to_bytes, InteropInterface, StackItem, StackItemType};
