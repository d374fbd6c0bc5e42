//! The container that carried the executed script.

use neo_primitives::UInt256;

/// A verifiable container (transaction, block) as seen by code running
/// inside an execution. Only its identity is exposed here.
pub trait IVerifiable: Send + Sync {
    /// The hash of the container.
    fn hash(&self) -> UInt256;
}
