//! Shared implementation of the fixed-width little-endian integer types.

/// Generates the common API of `UInt160` and `UInt256`.
///
/// The value is stored as raw bytes in little-endian order, which is also the
/// order used on the wire and when hashing. Textual forms are big-endian.
macro_rules! impl_fixed_uint {
    ($name:ident, $size:expr) => {
        impl $name {
            /// Number of bytes in this type (matches C# `Length`).
            pub const LENGTH: usize = $size;

            /// Creates a zero value.
            #[inline]
            #[must_use]
            pub const fn new() -> Self {
                Self([0u8; $size])
            }

            /// Returns the zero value.
            #[inline]
            #[must_use]
            pub const fn zero() -> Self {
                Self::new()
            }

            /// Checks whether every byte is zero.
            #[inline]
            #[must_use]
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }

            /// Creates a value from exactly `LENGTH` little-endian bytes.
            ///
            /// # Errors
            ///
            /// Returns `PrimitiveError::InvalidFormat` if the input length is wrong.
            pub fn from_bytes(value: &[u8]) -> $crate::PrimitiveResult<Self> {
                let bytes: [u8; $size] = value.try_into().map_err(|_| {
                    $crate::PrimitiveError::invalid_format(format!(
                        "Invalid length: {}, expected {}",
                        value.len(),
                        $size
                    ))
                })?;
                Ok(Self(bytes))
            }

            /// Returns the bytes in storage (little-endian) order.
            #[inline]
            #[must_use]
            pub const fn to_array(&self) -> [u8; $size] {
                self.0
            }

            /// Borrows the bytes in storage order.
            #[inline]
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            /// Returns the bytes as a `Vec<u8>`.
            #[inline]
            #[must_use]
            pub fn to_bytes(&self) -> Vec<u8> {
                self.0.to_vec()
            }

            /// Parses a big-endian hex string, with or without a `0x` prefix.
            ///
            /// # Errors
            ///
            /// Returns `PrimitiveError::InvalidFormat` if the string is not
            /// exactly `2 * LENGTH` hex digits.
            pub fn parse(s: &str) -> $crate::PrimitiveResult<Self> {
                let digits = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .unwrap_or(s);

                if digits.len() != $size * 2 {
                    return Err($crate::PrimitiveError::invalid_format(format!(
                        "Invalid hex length: {}",
                        digits.len()
                    )));
                }

                let mut bytes = hex::decode(digits)
                    .map_err(|e| $crate::PrimitiveError::invalid_format(e.to_string()))?;
                bytes.reverse();
                Self::from_bytes(&bytes)
            }

            /// Renders the value as `0x` followed by big-endian hex.
            #[must_use]
            pub fn to_hex_string(&self) -> String {
                let mut bytes = self.0;
                bytes.reverse();
                format!("0x{}", hex::encode(bytes))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::PrimitiveError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex_string())
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex_string())
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        // Most significant byte sits at the end of the storage array.
        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.iter().rev().cmp(other.0.iter().rev())
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(data: [u8; $size]) -> Self {
                Self(data)
            }
        }

        impl From<$name> for [u8; $size] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = $crate::PrimitiveError;

            fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
                Self::from_bytes(data)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&text).map_err(serde::de::Error::custom)
            }
        }
    };
}
