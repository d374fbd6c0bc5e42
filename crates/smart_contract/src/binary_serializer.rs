//! BinarySerializer - aligns with `Neo.SmartContract.BinarySerializer`.
//!
//! Layout of one item: the [`StackItemType`] tag byte, then
//! - `Boolean`: one byte, `0x00` or `0x01`
//! - `Integer`: var-bytes of the minimal little-endian two's complement (zero is empty)
//! - `ByteString`, `Buffer`: var-bytes
//! - `Array`, `Struct`: var-int element count, then the elements in order
//! - `Map`: var-int entry count, then key and value of each entry in order
//! - `Any` (null): nothing
//!
//! Both directions walk the tree with an explicit work stack, so input depth
//! never turns into call-stack depth.

use crate::error::{ContractError, ContractResult};
use neo_io::{BinaryWriter, MemoryReader};
use neo_vm::{integer_to_bytes, ExecutionEngineLimits, StackItem, StackItemType};
use num_bigint::BigInt;
use tracing::trace;

/// Binary serializer helpers for VM stack items.
pub struct BinarySerializer;

#[derive(Debug, Clone, Copy)]
struct ContainerDescriptor {
    item_type: StackItemType,
    element_count: usize,
}

#[derive(Debug)]
enum PendingItem {
    Value(StackItem),
    Container(ContainerDescriptor),
}

impl BinarySerializer {
    /// Largest integer, in bytes, the VM can hold.
    pub const MAX_INTEGER_SIZE: usize = 32;

    /// Largest map key, in bytes, the VM accepts.
    pub const MAX_KEY_SIZE: usize = 64;

    /// Serialize a stack item with VM limits.
    pub fn serialize(item: &StackItem, limits: &ExecutionEngineLimits) -> ContractResult<Vec<u8>> {
        Self::serialize_with_limits(
            item,
            limits.max_item_size as usize,
            limits.max_stack_size as usize,
        )
    }

    /// Serialize a stack item using explicit limits.
    ///
    /// `max_items` is spent one unit per visited item, containers and map keys
    /// included. Nothing is returned unless the whole tree fits.
    pub fn serialize_with_limits(
        item: &StackItem,
        max_size: usize,
        max_items: usize,
    ) -> ContractResult<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut writer = BinaryWriter::new(&mut buffer);
        let mut remaining = max_items;
        Self::write_items(&mut writer, vec![item], &mut remaining, max_size, max_items)?;
        Ok(buffer)
    }

    /// Serialize `items` exactly as `StackItem::Array(items)` would be,
    /// without building the array.
    pub fn serialize_array_with_limits(
        items: &[StackItem],
        max_size: usize,
        max_items: usize,
    ) -> ContractResult<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut writer = BinaryWriter::new(&mut buffer);
        let mut remaining = max_items;

        Self::take_item(&mut remaining, max_items)?;
        writer.write_u8(StackItemType::Array.to_u8());
        Self::write_container_header(&mut writer, items.len(), items.len(), remaining, max_items)?;
        Self::check_size(&writer, max_size)?;

        let pending = items.iter().rev().collect();
        Self::write_items(&mut writer, pending, &mut remaining, max_size, max_items)?;
        Ok(buffer)
    }

    fn write_items<'a>(
        writer: &mut BinaryWriter<'_>,
        mut unserialized: Vec<&'a StackItem>,
        remaining: &mut usize,
        max_size: usize,
        max_items: usize,
    ) -> ContractResult<()> {
        while let Some(current) = unserialized.pop() {
            Self::take_item(remaining, max_items)?;

            match current {
                StackItem::Null => {
                    writer.write_u8(StackItemType::Any.to_u8());
                }
                StackItem::Boolean(value) => {
                    writer.write_u8(StackItemType::Boolean.to_u8());
                    writer.write_bool(*value);
                }
                StackItem::Integer(value) => {
                    let bytes = Self::integer_bytes(value)?;
                    writer.write_u8(StackItemType::Integer.to_u8());
                    writer.write_var_bytes(&bytes);
                }
                StackItem::ByteString(bytes) => {
                    writer.write_u8(StackItemType::ByteString.to_u8());
                    writer.write_var_bytes(bytes);
                }
                StackItem::Buffer(bytes) => {
                    writer.write_u8(StackItemType::Buffer.to_u8());
                    writer.write_var_bytes(bytes);
                }
                StackItem::Array(items) | StackItem::Struct(items) => {
                    writer.write_u8(current.stack_item_type().to_u8());
                    Self::write_container_header(
                        writer,
                        items.len(),
                        items.len(),
                        *remaining,
                        max_items,
                    )?;
                    unserialized.extend(items.iter().rev());
                }
                StackItem::Map(entries) => {
                    writer.write_u8(StackItemType::Map.to_u8());
                    Self::write_container_header(
                        writer,
                        entries.len(),
                        entries.len().saturating_mul(2),
                        *remaining,
                        max_items,
                    )?;
                    for (key, value) in entries.iter().rev() {
                        Self::check_map_key(key)?;
                        unserialized.push(value);
                        unserialized.push(key);
                    }
                }
                StackItem::Pointer(_) | StackItem::InteropInterface(_) => {
                    return Err(ContractError::unsupported_type(current.stack_item_type()));
                }
            }

            Self::check_size(writer, max_size)?;
        }

        Ok(())
    }

    fn take_item(remaining: &mut usize, max_items: usize) -> ContractResult<()> {
        match remaining.checked_sub(1) {
            Some(left) => {
                *remaining = left;
                Ok(())
            }
            None => {
                trace!("serialization aborted: more than {} items", max_items);
                Err(ContractError::limit_exceeded(format!(
                    "more than {max_items} items"
                )))
            }
        }
    }

    // Children are rejected up front when they cannot all fit in the budget,
    // so a wide container never gets queued.
    fn write_container_header(
        writer: &mut BinaryWriter<'_>,
        count: usize,
        children: usize,
        remaining: usize,
        max_items: usize,
    ) -> ContractResult<()> {
        if children > remaining {
            trace!(
                "serialization aborted: container of {} children with {} items left",
                children,
                remaining
            );
            return Err(ContractError::limit_exceeded(format!(
                "more than {max_items} items"
            )));
        }
        writer.write_var_int(count as u64);
        Ok(())
    }

    fn check_size(writer: &BinaryWriter<'_>, max_size: usize) -> ContractResult<()> {
        if writer.len() > max_size {
            trace!("serialization aborted: output exceeds {} bytes", max_size);
            return Err(ContractError::limit_exceeded(format!(
                "serialized data exceeds {max_size} bytes"
            )));
        }
        Ok(())
    }

    fn integer_bytes(value: &BigInt) -> ContractResult<Vec<u8>> {
        let bytes = integer_to_bytes(value);
        if bytes.len() > Self::MAX_INTEGER_SIZE {
            return Err(ContractError::limit_exceeded(format!(
                "integer of {} bytes exceeds {}",
                bytes.len(),
                Self::MAX_INTEGER_SIZE
            )));
        }
        Ok(bytes)
    }

    fn check_map_key(key: &StackItem) -> ContractResult<()> {
        let key_type = key.stack_item_type();
        if !key_type.is_primitive() {
            return Err(ContractError::unsupported_type(key_type));
        }
        let size = match key {
            StackItem::Boolean(_) => 1,
            StackItem::Integer(value) => integer_to_bytes(value).len(),
            StackItem::ByteString(bytes) => bytes.len(),
            _ => 0,
        };
        if size > Self::MAX_KEY_SIZE {
            return Err(ContractError::limit_exceeded(format!(
                "map key of {size} bytes exceeds {}",
                Self::MAX_KEY_SIZE
            )));
        }
        Ok(())
    }

    /// Deserialize a [`StackItem`] from the provided buffer using VM limits.
    ///
    /// The whole buffer must be consumed.
    pub fn deserialize(data: &[u8], limits: &ExecutionEngineLimits) -> ContractResult<StackItem> {
        let mut reader = MemoryReader::new(data);
        let item = Self::deserialize_with_limits(
            &mut reader,
            limits.max_item_size as usize,
            limits.max_stack_size as usize,
        )?;
        if reader.remaining() > 0 {
            return Err(ContractError::deserialization(format!(
                "{} trailing bytes",
                reader.remaining()
            )));
        }
        Ok(item)
    }

    /// Deserialize using explicit limits (mirrors the C# overload).
    pub fn deserialize_with_limits(
        reader: &mut MemoryReader<'_>,
        max_size: usize,
        max_items: usize,
    ) -> ContractResult<StackItem> {
        let mut pending: Vec<PendingItem> = Vec::new();
        let mut undeserialized = 1usize;

        while undeserialized > 0 {
            undeserialized -= 1;

            let item_type_byte = reader.read_u8()?;
            let item_type = StackItemType::from_u8(item_type_byte).ok_or_else(|| {
                ContractError::deserialization(format!(
                    "Unknown stack item type: 0x{item_type_byte:02x}"
                ))
            })?;

            match item_type {
                StackItemType::Any => pending.push(PendingItem::Value(StackItem::Null)),
                StackItemType::Boolean => {
                    let value = reader.read_bool()?;
                    pending.push(PendingItem::Value(StackItem::Boolean(value)));
                }
                StackItemType::Integer => {
                    let bytes = reader.read_var_memory(Self::MAX_INTEGER_SIZE)?;
                    pending.push(PendingItem::Value(StackItem::Integer(
                        BigInt::from_signed_bytes_le(bytes),
                    )));
                }
                StackItemType::ByteString => {
                    let bytes = reader.read_var_memory(max_size)?;
                    pending.push(PendingItem::Value(StackItem::ByteString(bytes.to_vec())));
                }
                StackItemType::Buffer => {
                    let bytes = reader.read_var_memory(max_size)?;
                    pending.push(PendingItem::Value(StackItem::Buffer(bytes.to_vec())));
                }
                StackItemType::Array | StackItemType::Struct | StackItemType::Map => {
                    let count = reader.read_var_int(max_items as u64)? as usize;
                    let children = if item_type == StackItemType::Map {
                        count.checked_mul(2)
                    } else {
                        Some(count)
                    };
                    let used = pending.len().saturating_add(1).saturating_add(undeserialized);
                    let children = match children {
                        Some(children) if children <= max_items.saturating_sub(used) => children,
                        _ => {
                            return Err(ContractError::limit_exceeded(format!(
                                "more than {max_items} items"
                            )))
                        }
                    };
                    pending.push(PendingItem::Container(ContainerDescriptor {
                        item_type,
                        element_count: count,
                    }));
                    undeserialized += children;
                }
                StackItemType::Pointer | StackItemType::InteropInterface => {
                    return Err(ContractError::unsupported_type(item_type));
                }
            }

            if pending.len().saturating_add(undeserialized) > max_items {
                return Err(ContractError::limit_exceeded(format!(
                    "more than {max_items} items"
                )));
            }
        }

        let mut constructed: Vec<StackItem> = Vec::new();
        while let Some(item) = pending.pop() {
            let item = match item {
                PendingItem::Value(value) => value,
                PendingItem::Container(container) => {
                    Self::build_container(container, &mut constructed)?
                }
            };
            constructed.push(item);
        }

        constructed
            .pop()
            .ok_or_else(|| ContractError::deserialization("Empty serialization payload"))
    }

    fn build_container(
        container: ContainerDescriptor,
        constructed: &mut Vec<StackItem>,
    ) -> ContractResult<StackItem> {
        let mut take = || {
            constructed
                .pop()
                .ok_or_else(|| ContractError::deserialization("Invalid serialized container data"))
        };

        match container.item_type {
            StackItemType::Array | StackItemType::Struct => {
                let mut elements = Vec::with_capacity(container.element_count);
                for _ in 0..container.element_count {
                    elements.push(take()?);
                }
                Ok(if container.item_type == StackItemType::Array {
                    StackItem::Array(elements)
                } else {
                    StackItem::Struct(elements)
                })
            }
            StackItemType::Map => {
                let mut entries = Vec::with_capacity(container.element_count);
                for _ in 0..container.element_count {
                    let key = take()?;
                    let value = take()?;
                    Self::check_map_key(&key)
                        .map_err(|e| ContractError::deserialization(format!("Invalid map key: {e}")))?;
                    entries.push((key, value));
                }
                Ok(StackItem::from_map(entries))
            }
            other => Err(ContractError::deserialization(format!(
                "Invalid container descriptor: {other:?}"
            ))),
        }
    }
}
