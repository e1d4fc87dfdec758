//! A borrowing, assignable view of a single bit.

use crate::ByteCell;

/// A reference to one bit inside a [`ByteCell`].
///
/// Reads and writes go through the borrowed cell, so every `BitRef`
/// constructed for the same position observes the same underlying bit, and a
/// write through one is visible to any reference made for that position
/// afterwards. The mutable borrow keeps the cell pinned in place for as long
/// as the reference lives.
///
/// # Examples
///
/// ```
/// use byte_cell::ByteCell;
///
/// let mut cell = ByteCell::new(0);
/// let mut bit = cell.bit_ref(3);
/// assert!(!bit.get());
///
/// bit.set(true);
/// assert_eq!(cell.to_raw(), 0b0001_0000);
/// ```
#[derive(Debug)]
pub struct BitRef<'a> {
    cell: &'a mut ByteCell,
    index: u8,
}

impl<'a> BitRef<'a> {
    /// Creates a reference to the bit of `cell` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ByteCell::BITS`.
    #[inline]
    pub fn new(cell: &'a mut ByteCell, index: u8) -> Self {
        assert!(index < ByteCell::BITS, "bit index {} out of range", index);
        BitRef { cell, index }
    }

    /// Returns the current value of the referenced bit.
    #[inline]
    pub fn get(&self) -> bool {
        self.cell.get(self.index)
    }

    /// Writes `value` to the referenced bit.
    #[inline]
    pub fn set(&mut self, value: bool) {
        self.cell.set(self.index, value);
    }

    /// Writes `value` and returns the bit that was there before.
    #[inline]
    pub fn replace(&mut self, value: bool) -> bool {
        let old = self.get();
        self.set(value);
        old
    }

    /// The bit position this reference addresses within its cell.
    #[inline]
    pub fn index(&self) -> u8 {
        self.index
    }
}

impl From<BitRef<'_>> for bool {
    #[inline]
    fn from(bit: BitRef<'_>) -> Self {
        bit.get()
    }
}
