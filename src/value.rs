//! Arbitrary-width binary value with a declared byte order
//!
//! The [`Binary`] type stores an unbounded unsigned magnitude together with
//! the byte order used when converting it to and from byte sequences. It is
//! the in-memory form of a protocol field: construct it from whichever
//! encoding the wire gives you, inspect or rewrite it, then serialize it
//! back out.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{Num, Zero};
use tracing::trace;

use crate::byte_order::ByteOrder;
use crate::error::{BinaryError, Result};

const CONSTRUCTION_HINT: &str =
    "value must be a positive integer, a byte sequence, a binary string, or a hexadecimal string";

/// Arbitrary-width unsigned binary value
///
/// The magnitude is never negative and carries no fixed width: the apparent
/// byte length is derived from the highest set bit, with zero occupying
/// zero bytes. The stored [`ByteOrder`] declares how the magnitude maps to
/// byte sequences in [`Binary::to_bytes`], [`Binary::load_bytes`],
/// [`Binary::byte_swap`], and [`Binary::byte_padding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    magnitude: BigUint,
    byte_order: ByteOrder,
}

// ============================================================================
// Construction
// ============================================================================

impl Binary {
    /// Create a value from a magnitude and byte order
    pub fn new(magnitude: BigUint, byte_order: ByteOrder) -> Self {
        Self {
            magnitude,
            byte_order,
        }
    }

    /// Create a big-endian value from a signed integer
    ///
    /// Fails with [`BinaryError::InvalidValue`] for negative input; the
    /// magnitude invariant rules out two's-complement reinterpretation.
    pub fn from_integer(value: i128) -> Result<Self> {
        if value < 0 {
            return Err(BinaryError::invalid_value("value must be a positive integer"));
        }
        Ok(Self {
            magnitude: BigUint::from(value as u128),
            byte_order: ByteOrder::default(),
        })
    }

    /// Decode a value from a byte sequence under the given byte order
    ///
    /// Big-endian reads the first byte as most significant; little-endian
    /// reads it as least significant. An empty slice decodes to zero.
    pub fn from_bytes(data: &[u8], byte_order: ByteOrder) -> Self {
        Self {
            magnitude: decode(data, byte_order),
            byte_order,
        }
    }

    /// Parse a prefixed digit string into a big-endian value
    ///
    /// Recognizes exactly two shapes: `0b` followed by binary digits and
    /// `0x` followed by hexadecimal digits. Any other shape fails with
    /// [`BinaryError::InvalidValue`]; malformed digits after a recognized
    /// prefix fail with [`BinaryError::ParseError`].
    pub fn parse(input: &str) -> Result<Self> {
        let magnitude = if let Some(digits) = input.strip_prefix("0b") {
            BigUint::from_str_radix(digits, 2)
                .map_err(|_| BinaryError::parse_error(input, 2))?
        } else if let Some(digits) = input.strip_prefix("0x") {
            BigUint::from_str_radix(digits, 16)
                .map_err(|_| BinaryError::parse_error(input, 16))?
        } else {
            return Err(BinaryError::invalid_value(CONSTRUCTION_HINT));
        };

        Ok(Self {
            magnitude,
            byte_order: ByteOrder::default(),
        })
    }

    /// Replace the byte order, builder-style
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Binary {
    /// The stored magnitude
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    pub(crate) fn magnitude_mut(&mut self) -> &mut BigUint {
        &mut self.magnitude
    }

    /// The stored byte order
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Update the stored byte order without touching the magnitude
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    /// Number of significant bits (0 for a zero magnitude)
    pub fn bit_len(&self) -> u64 {
        self.magnitude.bits()
    }

    /// Minimal byte length of the magnitude (0 for a zero magnitude)
    pub fn byte_len(&self) -> usize {
        ((self.magnitude.bits() + 7) / 8) as usize
    }
}

// ============================================================================
// Byte conversion
// ============================================================================

impl Binary {
    /// Serialize the magnitude into exactly `length` bytes (stored order)
    pub fn to_bytes(&self, length: usize) -> Result<Vec<u8>> {
        self.to_bytes_with(length, self.byte_order)
    }

    /// Serialize the magnitude into exactly `length` bytes
    ///
    /// Fails with [`BinaryError::EncodingOverflow`] when the magnitude does
    /// not fit, i.e. `magnitude >= 256^length`. Does not mutate the value.
    pub fn to_bytes_with(&self, length: usize, byte_order: ByteOrder) -> Result<Vec<u8>> {
        let required = self.byte_len();
        if required > length {
            return Err(BinaryError::EncodingOverflow { length, required });
        }

        let mut out = vec![0u8; length];
        if !self.magnitude.is_zero() {
            match byte_order {
                ByteOrder::BigEndian => {
                    let raw = self.magnitude.to_bytes_be();
                    out[length - raw.len()..].copy_from_slice(&raw);
                }
                ByteOrder::LittleEndian => {
                    let raw = self.magnitude.to_bytes_le();
                    out[..raw.len()].copy_from_slice(&raw);
                }
            }
        }
        Ok(out)
    }

    /// Replace the magnitude with bytes decoded under the stored order
    pub fn load_bytes(&mut self, data: &[u8]) {
        self.load_bytes_with(data, self.byte_order);
    }

    /// Replace the magnitude with bytes decoded under the given order
    ///
    /// The override affects decoding only; the stored byte order is left
    /// unchanged (use [`Binary::set_byte_order`] to change it).
    pub fn load_bytes_with(&mut self, data: &[u8], byte_order: ByteOrder) {
        self.magnitude = decode(data, byte_order);
        trace!("load_bytes: {} bytes ({})", data.len(), byte_order);
    }
}

// ============================================================================
// String encodings
// ============================================================================

impl Binary {
    /// Hexadecimal rendering of the magnitude, `0x` prefixed
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.magnitude)
    }

    /// Binary rendering of the magnitude, `0b` prefixed
    pub fn to_bin(&self) -> String {
        format!("{:#b}", self.magnitude)
    }

    /// Replace the magnitude from a (possibly `0x`-prefixed) hex string
    ///
    /// Fails with [`BinaryError::ParseError`] on malformed digits, leaving
    /// the value untouched.
    pub fn load_hex(&mut self, s: &str) -> Result<()> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        self.magnitude =
            BigUint::from_str_radix(digits, 16).map_err(|_| BinaryError::parse_error(s, 16))?;
        Ok(())
    }

    /// Replace the magnitude from a (possibly `0b`-prefixed) binary string
    ///
    /// Fails with [`BinaryError::ParseError`] on malformed digits, leaving
    /// the value untouched.
    pub fn load_bin(&mut self, s: &str) -> Result<()> {
        let digits = s
            .strip_prefix("0b")
            .or_else(|| s.strip_prefix("0B"))
            .unwrap_or(s);
        self.magnitude =
            BigUint::from_str_radix(digits, 2).map_err(|_| BinaryError::parse_error(s, 2))?;
        Ok(())
    }
}

// ============================================================================
// Byte order transformation and alignment
// ============================================================================

impl Binary {
    /// Reverse the minimal byte representation and flip the byte order
    ///
    /// The minimal representation is obtained under the stored order,
    /// reversed, and decoded under the order in effect at the start of the
    /// call; the stored order then flips big↔little. A zero magnitude swaps
    /// trivially (nothing to reverse, order still flips).
    ///
    /// Fails with [`BinaryError::OddByteLength`] when the minimal byte
    /// length is odd, mutating nothing.
    pub fn byte_swap(&mut self) -> Result<()> {
        let len = self.byte_len();
        if len % 2 != 0 {
            return Err(BinaryError::OddByteLength(len));
        }

        let mut bytes = self.to_bytes(len)?;
        bytes.reverse();
        self.magnitude = decode(&bytes, self.byte_order);
        self.byte_order = self.byte_order.swapped();
        trace!("byte_swap: {} bytes reversed, order now {}", len, self.byte_order);
        Ok(())
    }

    /// Pad the minimal byte representation to a multiple of `align` bytes
    ///
    /// Zero bytes are appended after the existing data in the stored byte
    /// order and the result re-decoded: under big-endian the appended bytes
    /// are low-order (the magnitude grows), under little-endian they are
    /// high-order (the magnitude is unchanged). Already-aligned values are
    /// left as-is; a zero magnitude (byte length 0) is aligned to every
    /// boundary.
    ///
    /// Fails with [`BinaryError::InvalidAlignment`] when `align` is 0.
    pub fn byte_padding(&mut self, align: usize) -> Result<()> {
        if align == 0 {
            return Err(BinaryError::InvalidAlignment);
        }

        let len = self.byte_len();
        let padding = (align - len % align) % align;
        if padding == 0 {
            return Ok(());
        }

        let mut bytes = self.to_bytes(len)?;
        bytes.resize(len + padding, 0);
        self.magnitude = decode(&bytes, self.byte_order);
        trace!("byte_padding: {} -> {} bytes (align {})", len, len + padding, align);
        Ok(())
    }
}

/// Decode a byte sequence into a magnitude under the given order
fn decode(data: &[u8], byte_order: ByteOrder) -> BigUint {
    match byte_order {
        ByteOrder::BigEndian => BigUint::from_bytes_be(data),
        ByteOrder::LittleEndian => BigUint::from_bytes_le(data),
    }
}

// ============================================================================
// Conversion traits
// ============================================================================

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Binary {
            /// Big-endian value from an unsigned integer
            fn from(value: $t) -> Self {
                Self {
                    magnitude: BigUint::from(value),
                    byte_order: ByteOrder::default(),
                }
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<BigUint> for Binary {
    fn from(magnitude: BigUint) -> Self {
        Self {
            magnitude,
            byte_order: ByteOrder::default(),
        }
    }
}

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for Binary {
            type Error = BinaryError;

            /// Big-endian value from a signed integer; negative input fails
            fn try_from(value: $t) -> Result<Self> {
                Self::from_integer(value as i128)
            }
        }
    )*};
}

impl_try_from_signed!(i8, i16, i32, i64, i128);

impl FromStr for Binary {
    type Err = BinaryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Binary {
    /// Formats the magnitude as its `0x`-prefixed hex form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.magnitude)
    }
}
