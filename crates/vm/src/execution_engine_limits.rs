//! Limits applied by the execution engine.

use crate::error::{VmError, VmResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Restrictions on the VM, shared by the engine and by serializers that must
/// not build values the engine would refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionEngineLimits {
    /// The maximum number of bits that `SHL` and `SHR` can shift.
    pub max_shift: u32,

    /// The maximum number of items that can be contained in the VM's evaluation stacks and slots.
    pub max_stack_size: u32,

    /// The maximum size of an item in the VM.
    pub max_item_size: u32,

    /// The largest comparable size.
    pub max_comparable_size: u32,

    /// The maximum number of frames in the invocation stack of the VM.
    pub max_invocation_stack_size: u32,

    /// The maximum nesting depth of `try` blocks.
    pub max_try_nesting_depth: u32,

    /// Allow catching the exceptions thrown by the engine.
    pub catch_engine_exceptions: bool,
}

impl ExecutionEngineLimits {
    /// The default execution engine limits.
    pub const DEFAULT: Self = Self {
        max_shift: 256,
        max_stack_size: 2 * 1024,
        max_item_size: u16::MAX as u32 * 2,
        max_comparable_size: 65536,
        max_invocation_stack_size: 1024,
        max_try_nesting_depth: 16,
        catch_engine_exceptions: true,
    };

    /// Loads limits from TOML. Keys that are absent keep their defaults.
    ///
    /// ```toml
    /// max_stack_size = 4096
    /// max_item_size = 1048576
    /// ```
    pub fn from_toml_str(text: &str) -> VmResult<Self> {
        let limits: Self =
            toml::from_str(text).map_err(|e| VmError::configuration(e.to_string()))?;
        limits.validate()?;
        debug!("loaded execution engine limits: {:?}", limits);
        Ok(limits)
    }

    /// Rejects limits that would make every non-trivial value unrepresentable.
    pub fn validate(&self) -> VmResult<()> {
        if self.max_stack_size == 0 {
            return Err(VmError::configuration("max_stack_size must be positive"));
        }
        if self.max_item_size == 0 {
            return Err(VmError::configuration("max_item_size must be positive"));
        }
        if self.max_invocation_stack_size == 0 {
            return Err(VmError::configuration(
                "max_invocation_stack_size must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for ExecutionEngineLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
