//! # dynamic_bits
//!
//! A resizable container of bits packed eight to a byte. Every pushed `bool`
//! costs exactly one bit of storage; a value of any [`Pod`] type can be
//! pushed and later extracted from an arbitrary, not necessarily
//! byte-aligned, bit position.
//!
//! Completed bytes live in a growable buffer of [`ByteCell`]s. Bits appended
//! since the last byte filled up sit in a single incomplete *tail* cell,
//! together with a count of how many of them are meaningful, so single-bit
//! pushes and pops never shift existing storage.
//!
//! Bit position 0 of every byte is its most significant bit. The packed
//! layout is therefore identical on every platform.
//!
//! ```rust
//! use dynamic_bits::DynamicBitset;
//!
//! let mut bits = DynamicBitset::new();
//! bits.push(true);
//! bits.push(false);
//! bits.push(true);
//!
//! assert_eq!(bits.len(), 3);
//! assert!(bits.has_partial_tail());
//! assert_eq!(bits.cursor().collect::<Vec<_>>(), vec![true, false, true]);
//! ```
//!
//! ## Packing typed values
//!
//! ```rust
//! use dynamic_bits::DynamicBitset;
//!
//! let mut bits = DynamicBitset::new();
//! bits.push(true); // one bit of framing
//! bits.push_value(&0x1234_5678u32); // four bytes, shifted in bit by bit
//!
//! let mut cursor = bits.cursor_at(0, 1);
//! assert_eq!(cursor.extract::<u32>(), 0x1234_5678);
//! ```
//!
//! [`Pod`]: bytemuck::Pod

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod container;
pub mod cursor;
pub mod error;

pub use byte_cell::{BitRef, ByteCell};
pub use container::DynamicBitset;
pub use cursor::{BitPos, Cursor, CursorMut};
pub use error::BitsetError;
