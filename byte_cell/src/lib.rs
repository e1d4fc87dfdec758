//! # byte_cell
//!
//! The 8-bit building block for bit-packed containers: a [`ByteCell`] packs
//! eight individually addressable bits into one byte of storage, and a
//! [`BitRef`] is a borrowing, assignable view of exactly one of them.
//!
//! Bit position 0 is the most significant bit of the byte. That ordering is
//! part of the layout contract, so the raw bytes produced by packing are the
//! same on every platform.
//!
//! ```rust
//! use byte_cell::ByteCell;
//!
//! let mut cell = ByteCell::new(0);
//! cell.set(0, true); // most significant bit
//! assert_eq!(cell.to_raw(), 0b1000_0000);
//!
//! let mut bit = cell.bit_ref(7);
//! bit.set(true);
//! assert_eq!(cell.to_raw(), 0b1000_0001);
//! ```

#![no_std]

pub mod bit_ref;
pub mod cell;

pub use bit_ref::BitRef;
pub use cell::ByteCell;
