//! Stack item module for the Neo Virtual Machine.

pub mod stack_item; // allow module inception for clarity of type name
pub mod stack_item_type;

pub use stack_item::{integer_to_bytes, InteropInterface, StackItem};
pub use stack_item_type::StackItemType;
