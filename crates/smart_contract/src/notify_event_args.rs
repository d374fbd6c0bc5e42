//! NotifyEventArgs - the notification a contract raises through `System.Runtime.Notify`.

use crate::binary_serializer::BinarySerializer;
use crate::error::{ContractError, ContractResult};
use crate::i_interoperable::IInteroperable;
use crate::i_verifiable::IVerifiable;
use neo_cryptography::Sha256Hasher;
use neo_io::BinaryWriter;
use neo_primitives::{UInt160, UInt256};
use neo_vm::{ExecutionEngineLimits, StackItem};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Item budget when serializing the notification arguments for hashing.
/// The argument array itself counts as one item.
pub const NOTIFICATION_MAX_ITEMS: usize = 32;

/// Byte ceiling when serializing the notification arguments for hashing.
/// Fixed so every node computes the same hash regardless of its own limits.
pub const NOTIFICATION_MAX_SIZE: usize = ExecutionEngineLimits::DEFAULT.max_item_size as usize;

/// The EventArgs of ApplicationEngine.Notify
#[derive(Clone)]
pub struct NotifyEventArgs {
    /// The container that containing the executed script.
    /// `None` when the contract is invoked by the system (OnPersist/PostPersist).
    script_container: Option<Arc<dyn IVerifiable>>,

    /// The script hash of the contract that sends the log
    script_hash: UInt160,

    /// The name of the event, as raw bytes taken from the VM
    event_name: Vec<u8>,

    /// The arguments of the event
    state: Vec<StackItem>,
}

impl NotifyEventArgs {
    /// Initializes a new instance with a container
    pub fn new(
        container: Arc<dyn IVerifiable>,
        script_hash: UInt160,
        event_name: impl Into<Vec<u8>>,
        state: Vec<StackItem>,
    ) -> Self {
        Self::new_with_optional_container(Some(container), script_hash, event_name, state)
    }

    /// Initializes a new instance with an optional container (for system invocations)
    pub fn new_with_optional_container(
        container: Option<Arc<dyn IVerifiable>>,
        script_hash: UInt160,
        event_name: impl Into<Vec<u8>>,
        state: Vec<StackItem>,
    ) -> Self {
        Self {
            script_container: container,
            script_hash,
            event_name: event_name.into(),
            state,
        }
    }

    pub fn script_container(&self) -> Option<&Arc<dyn IVerifiable>> {
        self.script_container.as_ref()
    }

    pub fn script_hash(&self) -> &UInt160 {
        &self.script_hash
    }

    pub fn event_name_bytes(&self) -> &[u8] {
        &self.event_name
    }

    /// The event name, if it is valid UTF-8.
    pub fn event_name(&self) -> ContractResult<&str> {
        std::str::from_utf8(&self.event_name)
            .map_err(|e| ContractError::encoding(format!("event name is not valid UTF-8: {e}")))
    }

    pub fn state(&self) -> &[StackItem] {
        &self.state
    }

    /// Computes the notification hash, reporting why it cannot be computed.
    ///
    /// SHA-256 over the script hash bytes, the length-prefixed UTF-8 event
    /// name and the binary serialization of the argument array.
    pub fn try_notification_hash(&self) -> ContractResult<UInt256> {
        let mut buffer = Vec::with_capacity(UInt160::LENGTH + 1 + self.event_name.len() + 2);
        let mut writer = BinaryWriter::new(&mut buffer);
        writer.write_bytes(self.script_hash.as_bytes());
        writer
            .write_strict_utf8(&self.event_name)
            .map_err(|e| ContractError::encoding(e.to_string()))?;

        let state = BinarySerializer::serialize_array_with_limits(
            &self.state,
            NOTIFICATION_MAX_SIZE,
            NOTIFICATION_MAX_ITEMS,
        )?;

        let mut hasher = Sha256Hasher::new();
        hasher.update(&buffer).update(&state);
        Ok(hasher.finalize())
    }

    /// Gets the notification hash.
    ///
    /// Never fails: a notification whose name or arguments cannot be encoded
    /// gets [`UInt256::zero()`]. The arguments fail to encode when they need
    /// more than [`NOTIFICATION_MAX_ITEMS`] items (the argument array counts as
    /// one) or more than [`NOTIFICATION_MAX_SIZE`] serialized bytes, or when
    /// they contain a pointer, an interop handle or an invalid map key.
    pub fn get_notification_hash(&self) -> UInt256 {
        match self.try_notification_hash() {
            Ok(hash) => {
                trace!(script_hash = %self.script_hash, %hash, "notification hash computed");
                hash
            }
            Err(error) => {
                debug!(
                    script_hash = %self.script_hash,
                    event_name = %String::from_utf8_lossy(&self.event_name),
                    %error,
                    "notification hash unavailable, using zero hash"
                );
                UInt256::zero()
            }
        }
    }
}

impl fmt::Debug for NotifyEventArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyEventArgs")
            .field("script_hash", &self.script_hash)
            .field("event_name", &String::from_utf8_lossy(&self.event_name))
            .field("state_len", &self.state.len())
            .finish()
    }
}

impl TryFrom<StackItem> for NotifyEventArgs {
    type Error = ContractError;

    fn try_from(item: StackItem) -> Result<Self, Self::Error> {
        Self::from_stack_item(item)
    }
}
