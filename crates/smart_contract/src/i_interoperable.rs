//! Conversion of native records into VM stack items.

use crate::error::{ContractError, ContractResult};
use crate::notify_event_args::NotifyEventArgs;
use neo_vm::{IReferenceCounter, StackItem};

/// Types that can be handed to a contract as a [`StackItem`].
pub trait IInteroperable: Sized {
    /// Rebuilds the value from a stack item.
    fn from_stack_item(item: StackItem) -> ContractResult<Self>;

    /// Projects the value into a stack item, registering every compound node
    /// it creates with `reference_counter`.
    fn to_stack_item(&self, reference_counter: &dyn IReferenceCounter) -> StackItem;
}

impl IInteroperable for NotifyEventArgs {
    fn from_stack_item(_item: StackItem) -> ContractResult<Self> {
        Err(ContractError::unsupported_operation(
            "NotifyEventArgs cannot be built from a stack item",
        ))
    }

    /// Returns `[script_hash, event_name, state]`.
    ///
    /// The state is deep-cloned, and cloning recurses once per nesting level,
    /// so a very deeply nested state can exhaust the stack here even though
    /// hashing the same state does not.
    fn to_stack_item(&self, reference_counter: &dyn IReferenceCounter) -> StackItem {
        let item = StackItem::from_array(vec![
            StackItem::from_byte_string(self.script_hash().to_bytes()),
            StackItem::from_byte_string(self.event_name_bytes().to_vec()),
            StackItem::from_array(self.state().to_vec()),
        ]);
        register_tree(&item, reference_counter);
        item
    }
}

fn register_tree(root: &StackItem, reference_counter: &dyn IReferenceCounter) {
    let mut pending = vec![root];
    while let Some(parent) = pending.pop() {
        reference_counter.add_zero_referred(parent);
        let mut link = |child: &StackItem| {
            reference_counter.add_reference(child, parent);
        };
        match parent {
            StackItem::Array(items) | StackItem::Struct(items) => {
                for child in items {
                    link(child);
                    if child.is_compound() {
                        pending.push(child);
                    }
                }
            }
            StackItem::Map(entries) => {
                for (key, value) in entries {
                    link(key);
                    link(value);
                    if key.is_compound() {
                        pending.push(key);
                    }
                    if value.is_compound() {
                        pending.push(value);
                    }
                }
            }
            _ => {}
        }
    }
}
