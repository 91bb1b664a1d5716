//! Binary value processing for protocol field manipulation
//!
//! Provides [`Binary`], an arbitrary-width unsigned value with a declared
//! byte order, plus bit extraction, logical/shift queries, and conversions
//! to and from bytes and prefixed digit strings. Common use cases:
//! - packet field assembly and inspection
//! - status flag manipulation
//! - register value decoding across endianness conventions
//!
//! # Design Principles
//!
//! - **Protocol-agnostic**: no Modbus/CAN/IEC104-specific logic
//! - **Type-safe**: [`ByteOrder`] and [`BitOp`] enums prevent string typos
//! - **Unbounded width**: values are arbitrary-precision, never silently truncated
//! - **Explicit failure**: every fallible operation reports a typed [`BinaryError`]
//!
//! # Example
//!
//! ```
//! use binfield::{Binary, ByteOrder};
//!
//! let mut reg = Binary::from_integer(0x1234)?;
//! assert_eq!(reg.to_bytes(2)?, vec![0x12, 0x34]);
//!
//! reg.byte_swap()?;
//! assert_eq!(reg.to_hex(), "0x3412");
//! assert_eq!(reg.byte_order(), ByteOrder::LittleEndian);
//! # Ok::<(), binfield::BinaryError>(())
//! ```

pub mod bits;
pub mod byte_order;
pub mod error;
pub mod value;

pub use bits::BitOp;
pub use byte_order::ByteOrder;
pub use error::{BinaryError, Result};
pub use value::Binary;
