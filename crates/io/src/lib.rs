//! Neo.IO - binary reading and writing helpers.
//!
//! Provides the little-endian primitives, Neo variable-length integers and the
//! .NET 7-bit length prefixes used by the serializers in the workspace.

mod binary_writer;
mod error;
mod memory_reader;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use memory_reader::MemoryReader;

/// Returns the number of bytes `value` occupies as a Neo var-int.
pub fn get_var_size(value: u64) -> usize {
    if value < 0xfd {
        1
    } else if value <= 0xffff {
        3
    } else if value <= 0xffff_ffff {
        5
    } else {
        9
    }
}
