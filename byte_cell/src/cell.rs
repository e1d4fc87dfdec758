//! An 8-bit cell with positional access to each bit.

use bytemuck_derive::{Pod, Zeroable};

use crate::BitRef;

/// Eight bits packed into a single byte, addressable by position.
///
/// Position 0 is the **most significant** bit and position 7 the least. A
/// cell compares equal to another exactly when their raw bytes are equal.
///
/// `ByteCell` is `#[repr(transparent)]` over `u8` and implements
/// [`bytemuck::Pod`], so slices of cells can be reinterpreted as plain byte
/// slices and back without copying.
///
/// # Examples
///
/// ```
/// use byte_cell::ByteCell;
///
/// let mut cell = ByteCell::new(0b1000_0000);
/// assert!(cell.get(0));
/// assert!(!cell.get(1));
///
/// cell.set(7, true);
/// assert_eq!(cell.to_raw(), 0b1000_0001);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
pub struct ByteCell(u8);

impl ByteCell {
    /// Number of addressable bit positions in a cell.
    pub const BITS: u8 = 8;

    /// Creates a cell from its raw byte value.
    #[inline]
    pub const fn new(raw: u8) -> Self {
        ByteCell(raw)
    }

    /// Returns the raw byte value.
    #[inline]
    pub const fn to_raw(self) -> u8 {
        self.0
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ByteCell::BITS`.
    #[inline]
    pub fn get(self, index: u8) -> bool {
        assert!(index < Self::BITS, "bit index {} out of range", index);
        let shift = Self::BITS - index - 1;
        (self.0 >> shift) & 1 != 0
    }

    /// Overwrites the bit at `index`, leaving all other bits unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ByteCell::BITS`.
    #[inline]
    pub fn set(&mut self, index: u8, value: bool) {
        assert!(index < Self::BITS, "bit index {} out of range", index);
        let shift = Self::BITS - index - 1;
        self.0 = (self.0 & !(1 << shift)) | ((value as u8) << shift);
    }

    /// Returns an assignable reference to the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ByteCell::BITS`.
    #[inline]
    pub fn bit_ref(&mut self, index: u8) -> BitRef<'_> {
        BitRef::new(self, index)
    }
}

impl From<u8> for ByteCell {
    #[inline]
    fn from(raw: u8) -> Self {
        ByteCell(raw)
    }
}

impl From<ByteCell> for u8 {
    #[inline]
    fn from(cell: ByteCell) -> Self {
        cell.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_zero_is_most_significant() {
        let mut cell = ByteCell::new(0);
        cell.set(0, true);
        assert_eq!(cell.to_raw(), 0b1000_0000);

        cell.set(7, true);
        assert_eq!(cell.to_raw(), 0b1000_0001);
    }

    #[test]
    fn get_reads_each_position() {
        let cell = ByteCell::new(0b1010_0110);
        let expected = [true, false, true, false, false, true, true, false];
        for (index, &bit) in expected.iter().enumerate() {
            assert_eq!(cell.get(index as u8), bit, "position {}", index);
        }
    }

    #[test]
    fn set_leaves_other_bits_alone() {
        let mut cell = ByteCell::new(0b1111_1111);
        cell.set(3, false);
        assert_eq!(cell.to_raw(), 0b1110_1111);

        cell.set(3, true);
        assert_eq!(cell.to_raw(), 0b1111_1111);
    }

    #[test]
    fn set_is_idempotent() {
        let mut cell = ByteCell::new(0b0101_0101);
        cell.set(1, true);
        let once = cell;
        cell.set(1, true);
        assert_eq!(cell, once);
    }

    #[test]
    fn raw_conversions_round_trip() {
        let cell = ByteCell::from(0xA5);
        assert_eq!(u8::from(cell), 0xA5);
        assert_eq!(ByteCell::new(cell.to_raw()), cell);
    }

    #[test]
    fn cells_cast_to_bytes() {
        let cells = [ByteCell::new(0x12), ByteCell::new(0x34)];
        let raw: &[u8] = bytemuck::cast_slice(&cells);
        assert_eq!(raw, &[0x12, 0x34]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_rejects_out_of_range_index() {
        let cell = ByteCell::new(0);
        let _ = cell.get(8);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_rejects_out_of_range_index() {
        let mut cell = ByteCell::new(0);
        cell.set(8, true);
    }
}
