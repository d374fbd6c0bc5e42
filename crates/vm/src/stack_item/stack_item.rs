//! Stack item implementation for the Neo Virtual Machine.
//!
//! A `StackItem` owns its whole subtree, so cloning one takes a deep,
//! independent snapshot. Host engines that keep a shared, mutable object graph
//! convert into this form at the boundary.

use crate::error::{VmError, VmResult};
use crate::stack_item::stack_item_type::StackItemType;
use num_bigint::BigInt;
use num_traits::Zero;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A trait for interop interfaces that can be wrapped by a stack item.
pub trait InteropInterface: fmt::Debug + Send + Sync {
    /// Gets the type of the interop interface.
    fn interface_type(&self) -> &str;

    /// Allows downcasting to concrete types
    fn as_any(&self) -> &dyn Any;
}

/// Represents a value in the Neo VM.
#[derive(Debug, Clone)]
pub enum StackItem {
    /// Represents a null value.
    Null,

    /// Represents a boolean value.
    Boolean(bool),

    /// Represents an integer value.
    Integer(BigInt),

    /// Represents an immutable byte string.
    ByteString(Vec<u8>),

    /// Represents a mutable byte buffer.
    Buffer(Vec<u8>),

    /// Represents an array of stack items.
    Array(Vec<StackItem>),

    /// Represents a struct of stack items.
    Struct(Vec<StackItem>),

    /// Represents a map of stack items, in insertion order.
    Map(Vec<(StackItem, StackItem)>),

    /// Represents a pointer to a position in a script.
    Pointer(usize),

    /// Represents an interop interface.
    InteropInterface(Arc<dyn InteropInterface>),
}

impl StackItem {
    /// The singleton Null value.
    pub fn null() -> Self {
        StackItem::Null
    }

    /// Creates a boolean stack item.
    pub fn from_bool(value: bool) -> Self {
        StackItem::Boolean(value)
    }

    /// Creates an integer stack item.
    pub fn from_int<T: Into<BigInt>>(value: T) -> Self {
        StackItem::Integer(value.into())
    }

    /// Creates a byte string stack item.
    pub fn from_byte_string<T: Into<Vec<u8>>>(value: T) -> Self {
        StackItem::ByteString(value.into())
    }

    /// Creates a buffer stack item.
    pub fn from_buffer<T: Into<Vec<u8>>>(value: T) -> Self {
        StackItem::Buffer(value.into())
    }

    /// Creates an array stack item.
    pub fn from_array<T: Into<Vec<StackItem>>>(value: T) -> Self {
        StackItem::Array(value.into())
    }

    /// Creates a struct stack item.
    pub fn from_struct<T: Into<Vec<StackItem>>>(value: T) -> Self {
        StackItem::Struct(value.into())
    }

    /// Creates a map stack item.
    ///
    /// A key that appears again replaces the earlier value but keeps the
    /// earlier position, as assigning to an existing key does in the VM.
    pub fn from_map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StackItem, StackItem)>,
    {
        let mut map: Vec<(StackItem, StackItem)> = Vec::new();
        for (key, value) in entries {
            match map.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => map.push((key, value)),
            }
        }
        StackItem::Map(map)
    }

    /// Creates a pointer stack item.
    pub fn from_pointer(value: usize) -> Self {
        StackItem::Pointer(value)
    }

    /// Creates an interop interface stack item.
    pub fn from_interface<T: InteropInterface + 'static>(value: T) -> Self {
        StackItem::InteropInterface(Arc::new(value))
    }

    /// Returns the type of the stack item.
    pub fn stack_item_type(&self) -> StackItemType {
        match self {
            StackItem::Null => StackItemType::Any,
            StackItem::Boolean(_) => StackItemType::Boolean,
            StackItem::Integer(_) => StackItemType::Integer,
            StackItem::ByteString(_) => StackItemType::ByteString,
            StackItem::Buffer(_) => StackItemType::Buffer,
            StackItem::Array(_) => StackItemType::Array,
            StackItem::Struct(_) => StackItemType::Struct,
            StackItem::Map(_) => StackItemType::Map,
            StackItem::Pointer(_) => StackItemType::Pointer,
            StackItem::InteropInterface(_) => StackItemType::InteropInterface,
        }
    }

    /// Returns true if the stack item is null.
    pub fn is_null(&self) -> bool {
        matches!(self, StackItem::Null)
    }

    /// Returns true for arrays, structs and maps.
    pub fn is_compound(&self) -> bool {
        self.stack_item_type().is_compound()
    }

    /// Converts the stack item to a boolean.
    pub fn as_bool(&self) -> VmResult<bool> {
        match self {
            StackItem::Null => Ok(false),
            StackItem::Boolean(b) => Ok(*b),
            StackItem::Integer(i) => Ok(!i.is_zero()),
            StackItem::ByteString(b) | StackItem::Buffer(b) => Ok(b.iter().any(|&byte| byte != 0)),
            StackItem::Array(_)
            | StackItem::Struct(_)
            | StackItem::Map(_)
            | StackItem::Pointer(_)
            | StackItem::InteropInterface(_) => Ok(true),
        }
    }

    /// Converts the stack item to an integer.
    ///
    /// Byte strings are read as little-endian two's complement.
    pub fn as_int(&self) -> VmResult<BigInt> {
        match self {
            StackItem::Boolean(b) => Ok(BigInt::from(u8::from(*b))),
            StackItem::Integer(i) => Ok(i.clone()),
            StackItem::ByteString(b) | StackItem::Buffer(b) => Ok(BigInt::from_signed_bytes_le(b)),
            other => Err(VmError::invalid_type_simple(format!(
                "Cannot convert {:?} to Integer",
                other.stack_item_type()
            ))),
        }
    }

    /// Converts the stack item to a byte array.
    ///
    /// Integers use minimal little-endian two's complement; zero is empty.
    pub fn as_bytes(&self) -> VmResult<Vec<u8>> {
        match self {
            StackItem::Boolean(b) => Ok(vec![u8::from(*b)]),
            StackItem::Integer(i) => Ok(integer_to_bytes(i)),
            StackItem::ByteString(b) | StackItem::Buffer(b) => Ok(b.clone()),
            other => Err(VmError::invalid_type_simple(format!(
                "Cannot convert {:?} to ByteString",
                other.stack_item_type()
            ))),
        }
    }

    /// Borrows the elements of an array or struct.
    pub fn as_array(&self) -> VmResult<&[StackItem]> {
        match self {
            StackItem::Array(a) | StackItem::Struct(a) => Ok(a),
            _ => Err(VmError::invalid_type_simple("Cannot convert to Array")),
        }
    }

    /// Borrows the entries of a map.
    pub fn as_map(&self) -> VmResult<&[(StackItem, StackItem)]> {
        match self {
            StackItem::Map(m) => Ok(m),
            _ => Err(VmError::invalid_type_simple("Cannot convert to Map")),
        }
    }

    /// Gets the interop interface as its concrete type.
    pub fn as_interface<T: InteropInterface + 'static>(&self) -> VmResult<&T> {
        match self {
            StackItem::InteropInterface(i) => i.as_any().downcast_ref::<T>().ok_or_else(|| {
                VmError::invalid_type_simple(format!(
                    "Interop interface is {}, not the requested type",
                    i.interface_type()
                ))
            }),
            _ => Err(VmError::invalid_type_simple(
                "Cannot convert to InteropInterface",
            )),
        }
    }
}

/// Minimal little-endian two's complement bytes of `value`; zero is empty.
pub fn integer_to_bytes(value: &BigInt) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_signed_bytes_le()
    }
}

// Structural equality; interop handles compare by identity.
impl PartialEq for StackItem {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StackItem::Null, StackItem::Null) => true,
            (StackItem::Boolean(a), StackItem::Boolean(b)) => a == b,
            (StackItem::Integer(a), StackItem::Integer(b)) => a == b,
            (StackItem::ByteString(a), StackItem::ByteString(b)) => a == b,
            (StackItem::Buffer(a), StackItem::Buffer(b)) => a == b,
            (StackItem::Array(a), StackItem::Array(b)) => a == b,
            (StackItem::Struct(a), StackItem::Struct(b)) => a == b,
            (StackItem::Map(a), StackItem::Map(b)) => a == b,
            (StackItem::Pointer(a), StackItem::Pointer(b)) => a == b,
            (StackItem::InteropInterface(a), StackItem::InteropInterface(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for StackItem {
    fn from(value: bool) -> Self {
        StackItem::Boolean(value)
    }
}

impl From<i32> for StackItem {
    fn from(value: i32) -> Self {
        StackItem::Integer(value.into())
    }
}

impl From<i64> for StackItem {
    fn from(value: i64) -> Self {
        StackItem::Integer(value.into())
    }
}

impl From<BigInt> for StackItem {
    fn from(value: BigInt) -> Self {
        StackItem::Integer(value)
    }
}

impl From<&str> for StackItem {
    fn from(value: &str) -> Self {
        StackItem::ByteString(value.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for StackItem {
    fn from(value: Vec<u8>) -> Self {
        StackItem::ByteString(value)
    }
}

impl From<Vec<StackItem>> for StackItem {
    fn from(value: Vec<StackItem>) -> Self {
        StackItem::Array(value)
    }
}
