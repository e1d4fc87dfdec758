//! Forward-only cursors over the logical bit sequence.
//!
//! A [`Cursor`] reads bits and whole values; a [`CursorMut`] can also write
//! through [`BitRef`]s. Both advance strictly forward and both carry a
//! [`BitPos`], the plain value type that names a bit position and defines
//! how positions compare.
//!
//! ```rust
//! use dynamic_bits::DynamicBitset;
//!
//! let mut bits = DynamicBitset::new();
//! bits.push(true);
//! bits.push_value(&0x4142u16);
//!
//! let mut cursor = bits.cursor();
//! assert!(cursor.read());
//! assert_eq!(cursor.extract::<u16>(), 0x4142);
//! assert!(cursor.is_at_end());
//! ```

use byte_cell::{BitRef, ByteCell};
use bytemuck::Pod;

use crate::container::{CELL_BITS, DynamicBitset};
use crate::error::BitsetError;

/// A bit position: which byte, and which bit inside that byte.
///
/// Positions order lexicographically, byte index first, which is exactly the
/// order a cursor visits them. The byte index may equal the number of full
/// bytes in a container, in which case the position points into the tail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BitPos {
    byte_index: usize,
    bit_index: u8,
}

impl BitPos {
    /// Creates a position from its byte and bit indices.
    ///
    /// # Panics
    ///
    /// Panics if `bit_index >= 8`; such a pair does not name a position.
    #[inline]
    pub fn new(byte_index: usize, bit_index: u8) -> Self {
        assert!(
            bit_index < ByteCell::BITS,
            "bit index {} out of range",
            bit_index
        );
        BitPos {
            byte_index,
            bit_index,
        }
    }

    /// The position of the `index`-th bit of a container.
    #[inline]
    pub fn from_bit_index(index: usize) -> Self {
        BitPos {
            byte_index: index / CELL_BITS,
            bit_index: (index % CELL_BITS) as u8,
        }
    }

    /// The flat bit index, `byte_index * 8 + bit_index`.
    #[inline]
    pub fn to_bit_index(self) -> usize {
        self.byte_index * CELL_BITS + usize::from(self.bit_index)
    }

    /// The byte this position points into.
    #[inline]
    pub fn byte_index(self) -> usize {
        self.byte_index
    }

    /// The bit within the byte, always below 8.
    #[inline]
    pub fn bit_index(self) -> u8 {
        self.bit_index
    }

    /// Whether the position sits on a byte boundary.
    #[inline]
    pub fn is_byte_aligned(self) -> bool {
        self.bit_index == 0
    }

    /// Steps to the next bit, wrapping into the following byte.
    #[inline]
    pub fn advance(&mut self) {
        self.bit_index += 1;
        if self.bit_index == ByteCell::BITS {
            self.bit_index = 0;
            self.byte_index += 1;
        }
    }
}

/// A read-only forward cursor. Yields value snapshots, never references.
///
/// `Cursor` is also an [`Iterator`] over the remaining bits, so it works
/// with `for` loops, `collect`, and adapters. Reading past the last bit
/// through [`read`] panics; the iterator simply ends.
///
/// The cursor is `Copy`: saving one before an extraction is the cheap way to
/// back up.
///
/// [`read`]: Cursor::read
///
/// # Examples
///
/// ```
/// use dynamic_bits::DynamicBitset;
///
/// let bits: DynamicBitset = [true, false, true].into_iter().collect();
/// let ones = bits.cursor().filter(|&bit| bit).count();
/// assert_eq!(ones, 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a DynamicBitset,
    pos: BitPos,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub(crate) fn new(source: &'a DynamicBitset, pos: BitPos) -> Self {
        Cursor { source, pos }
    }

    /// The position of the bit the next read would return.
    #[inline]
    pub fn position(&self) -> BitPos {
        self.pos
    }

    /// Bits left between the cursor and the end of the container.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.pos.to_bit_index())
    }

    /// Returns `true` once every bit has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads the bit under the cursor and advances past it.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is at the end.
    pub fn read(&mut self) -> bool {
        let bit = self.source.get(self.pos.byte_index, self.pos.bit_index);
        self.pos.advance();
        bit
    }

    /// Reads the next eight bits as one [`ByteCell`] and advances past them.
    ///
    /// A byte-aligned cursor inside the full-byte region copies the cell
    /// straight out of storage and steps one whole byte forward; anywhere
    /// else the byte is reassembled bit by bit, most significant first. Both
    /// paths yield the same cell for the same logical content.
    ///
    /// # Panics
    ///
    /// Panics when fewer than eight bits remain.
    pub fn extract_byte(&mut self) -> ByteCell {
        assert!(
            self.remaining() >= CELL_BITS,
            "cannot extract a byte, only {} bits remain",
            self.remaining()
        );
        if self.pos.is_byte_aligned() && self.pos.byte_index < self.source.full_byte_len() {
            let cell = self.source.as_raw_slice()[self.pos.byte_index];
            self.pos = BitPos::new(self.pos.byte_index + 1, 0);
            return cell;
        }
        let mut cell = ByteCell::default();
        for index in 0..ByteCell::BITS {
            cell.set(index, self.read());
        }
        cell
    }

    /// Fills `destination` with consecutive bytes read from the cursor.
    ///
    /// # Panics
    ///
    /// Panics when fewer than `destination.len() * 8` bits remain. The
    /// check happens before any bit is consumed.
    pub fn extract_bytes(&mut self, destination: &mut [u8]) {
        assert!(
            destination.len() * CELL_BITS <= self.remaining(),
            "cannot extract {} bytes, only {} bits remain",
            destination.len(),
            self.remaining()
        );
        for slot in destination {
            *slot = self.extract_byte().to_raw();
        }
    }

    /// Reads the next `size_of::<T>()` bytes as a `T` and advances past
    /// them.
    ///
    /// Bytes come out in the same native memory order [`push_value`] wrote
    /// them, so extracting at the position of an earlier push reproduces the
    /// pushed value exactly.
    ///
    /// [`push_value`]: DynamicBitset::push_value
    ///
    /// # Panics
    ///
    /// Panics when fewer than `size_of::<T>() * 8` bits remain.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bits::DynamicBitset;
    ///
    /// let mut bits = DynamicBitset::new();
    /// bits.push_value(&7.5f32);
    ///
    /// let mut cursor = bits.cursor();
    /// assert_eq!(cursor.extract::<f32>(), 7.5);
    /// ```
    pub fn extract<T: Pod>(&mut self) -> T {
        let mut value = T::zeroed();
        self.extract_bytes(bytemuck::bytes_of_mut(&mut value));
        value
    }

    /// Fallible [`extract_byte`]: leaves the cursor in place and returns
    /// [`BitsetError::InsufficientBits`] when fewer than eight bits remain.
    ///
    /// [`extract_byte`]: Cursor::extract_byte
    pub fn try_extract_byte(&mut self) -> Result<ByteCell, BitsetError> {
        self.check_remaining(CELL_BITS)?;
        Ok(self.extract_byte())
    }

    /// Fallible [`extract_bytes`].
    ///
    /// [`extract_bytes`]: Cursor::extract_bytes
    pub fn try_extract_bytes(&mut self, destination: &mut [u8]) -> Result<(), BitsetError> {
        self.check_remaining(destination.len() * CELL_BITS)?;
        self.extract_bytes(destination);
        Ok(())
    }

    /// Fallible [`extract`].
    ///
    /// [`extract`]: Cursor::extract
    pub fn try_extract<T: Pod>(&mut self) -> Result<T, BitsetError> {
        self.check_remaining(size_of::<T>() * CELL_BITS)?;
        Ok(self.extract())
    }

    fn check_remaining(&self, requested: usize) -> Result<(), BitsetError> {
        let available = self.remaining();
        if requested > available {
            return Err(BitsetError::InsufficientBits {
                requested,
                available,
            });
        }
        Ok(())
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_at_end() {
            None
        } else {
            Some(self.read())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Cursor<'a> {}

impl<'a> core::iter::FusedIterator for Cursor<'a> {}

/// A mutable forward cursor. Yields [`BitRef`]s into live storage.
///
/// The cursor holds the container borrowed mutably, so the container cannot
/// grow, shrink, or move while the cursor (or any reference it handed out)
/// is alive. It deliberately does not implement [`Iterator`]: each
/// [`next_ref`] borrows from the cursor itself, which keeps two references
/// to the same byte from coexisting.
///
/// [`next_ref`]: CursorMut::next_ref
///
/// # Examples
///
/// ```
/// use dynamic_bits::DynamicBitset;
///
/// let mut bits: DynamicBitset = [false, false, true].into_iter().collect();
///
/// let mut cursor = bits.cursor_mut();
/// while let Some(mut bit) = cursor.next_ref() {
///     let flipped = !bit.get();
///     bit.set(flipped);
/// }
///
/// assert_eq!(bits.cursor().collect::<Vec<_>>(), vec![true, true, false]);
/// ```
#[derive(Debug)]
pub struct CursorMut<'a> {
    source: &'a mut DynamicBitset,
    pos: BitPos,
}

impl<'a> CursorMut<'a> {
    #[inline]
    pub(crate) fn new(source: &'a mut DynamicBitset, pos: BitPos) -> Self {
        CursorMut { source, pos }
    }

    /// The position of the bit the next read would return.
    #[inline]
    pub fn position(&self) -> BitPos {
        self.pos
    }

    /// Bits left between the cursor and the end of the container.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.pos.to_bit_index())
    }

    /// Returns `true` once every bit has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads the bit under the cursor and advances past it.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is at the end.
    pub fn read(&mut self) -> bool {
        let bit = self.source.get(self.pos.byte_index, self.pos.bit_index);
        self.pos.advance();
        bit
    }

    /// Returns a reference to the bit under the cursor without advancing.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is at the end.
    pub fn bit_ref(&mut self) -> BitRef<'_> {
        self.source.bit_ref(self.pos.byte_index, self.pos.bit_index)
    }

    /// Returns a reference to the bit under the cursor and advances past
    /// it, or `None` at the end.
    ///
    /// The reference stays usable after the advance; it borrows the bit's
    /// byte, not the cursor's position.
    pub fn next_ref(&mut self) -> Option<BitRef<'_>> {
        if self.is_at_end() {
            return None;
        }
        let pos = self.pos;
        self.pos.advance();
        Some(self.source.bit_ref(pos.byte_index, pos.bit_index))
    }

    /// Writes the bit under the cursor and advances past it.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is at the end.
    pub fn set(&mut self, value: bool) {
        self.source
            .bit_ref(self.pos.byte_index, self.pos.bit_index)
            .set(value);
        self.pos.advance();
    }

    /// A read-only cursor at the current position, for extraction.
    ///
    /// ```
    /// use dynamic_bits::DynamicBitset;
    ///
    /// let mut bits = DynamicBitset::new();
    /// bits.push_value(&42u8);
    ///
    /// let mut cursor = bits.cursor_mut();
    /// assert_eq!(cursor.as_cursor().extract::<u8>(), 42);
    /// ```
    pub fn as_cursor(&self) -> Cursor<'_> {
        Cursor::new(self.source, self.pos)
    }
}
