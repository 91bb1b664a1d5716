//! Byte order representation for value encoding and decoding
//!
//! Provides a type-safe enum for the two byte orders recognized by
//! [`Binary`](crate::Binary): big-endian and little-endian.

/// Byte order of a value's serialized form
///
/// # Terminology
/// - **Big-endian**: most significant byte first (network byte order)
/// - **Little-endian**: least significant byte first (Intel x86 native)
///
/// For the value `0x12345678`:
/// - `BigEndian`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian`: [0x78, 0x56, 0x34, 0x12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Big-endian (most significant byte first)
    ///
    /// Network byte order, used in most protocols.
    BigEndian,

    /// Little-endian (least significant byte first)
    ///
    /// Intel x86 native byte order.
    LittleEndian,
}

impl ByteOrder {
    /// Convert from common string spellings
    ///
    /// Supported representations (case-insensitive, `-` ignored):
    /// - "big", "be", "big_endian" → BigEndian
    /// - "little", "le", "little_endian" → LittleEndian
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.to_uppercase().replace('-', "");
        match normalized.as_str() {
            "BIG" | "BE" | "BIG_ENDIAN" | "BIGENDIAN" => Some(Self::BigEndian),
            "LITTLE" | "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => Some(Self::LittleEndian),
            _ => None,
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "big",
            Self::LittleEndian => "little",
        }
    }

    /// The opposite byte order
    pub fn swapped(&self) -> Self {
        match self {
            Self::BigEndian => Self::LittleEndian,
            Self::LittleEndian => Self::BigEndian,
        }
    }

    /// Check if this is big-endian
    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    /// Check if this is little-endian
    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::LittleEndian)
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Self::BigEndian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!(ByteOrder::from_str("big"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::from_str("BE"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::from_str("Big-Endian"), Some(ByteOrder::BigEndian));

        assert_eq!(ByteOrder::from_str("little"), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::from_str("le"), Some(ByteOrder::LittleEndian));
        assert_eq!(
            ByteOrder::from_str("LITTLE_ENDIAN"),
            Some(ByteOrder::LittleEndian)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(ByteOrder::from_str("middle"), None);
        assert_eq!(ByteOrder::from_str(""), None);
    }

    #[test]
    fn test_swapped() {
        assert_eq!(ByteOrder::BigEndian.swapped(), ByteOrder::LittleEndian);
        assert_eq!(ByteOrder::LittleEndian.swapped(), ByteOrder::BigEndian);
    }

    #[test]
    fn test_properties() {
        assert!(ByteOrder::BigEndian.is_big_endian());
        assert!(!ByteOrder::BigEndian.is_little_endian());
        assert!(ByteOrder::LittleEndian.is_little_endian());
    }

    #[test]
    fn test_default() {
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
    }
}
