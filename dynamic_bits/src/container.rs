//! Resizable bit-packed container with an incomplete trailing byte.
//!
//! # Examples
//!
//! ## Single bits
//!
//! ```rust
//! use dynamic_bits::DynamicBitset;
//!
//! let mut bits = DynamicBitset::new();
//! bits.push(true);
//! bits.push(false);
//!
//! assert_eq!(bits.len(), 2);
//! assert_eq!(bits.get(0, 0), true);
//! assert_eq!(bits.get(0, 1), false);
//! assert_eq!(bits.pop(), Some(false));
//! ```
//!
//! ## Whole values
//!
//! ```rust
//! use dynamic_bits::DynamicBitset;
//!
//! let mut bits = DynamicBitset::new();
//! bits.push_value(&0xBEEFu16);
//!
//! assert_eq!(bits.len(), 16);
//! assert_eq!(bits.extract::<u16>(0, 0), 0xBEEF);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use byte_cell::{BitRef, ByteCell};
use bytemuck::Pod;

use crate::cursor::{BitPos, Cursor, CursorMut};
use crate::error::BitsetError;

pub(crate) const CELL_BITS: usize = ByteCell::BITS as usize;

/// The at-most-one incomplete byte at the end of the container.
///
/// `len` counts how many of the cell's leading bits are meaningful and stays
/// in `0..8` between operations. Bits at positions `len..` are stale: pops
/// and byte completions leave old values behind rather than clearing them,
/// and nothing in the public API can observe those positions.
#[derive(Clone, Copy, Debug, Default)]
struct Tail {
    cell: ByteCell,
    len: u8,
}

impl Tail {
    #[inline]
    fn is_full(&self) -> bool {
        self.len == ByteCell::BITS
    }

    /// Raw-byte mask covering the meaningful bit positions.
    #[inline]
    fn mask(&self) -> u8 {
        debug_assert!(self.len < ByteCell::BITS);
        !(u8::MAX >> self.len)
    }
}

/// A resizable sequence of bits, packed eight to a byte.
///
/// Completed bytes live in a `Vec<ByteCell>`; bits appended since the last
/// byte filled up sit in a single tail cell alongside a count of how many of
/// them are meaningful. Pushing the eighth tail bit moves the cell into the
/// byte buffer, and popping past a byte boundary pulls the last full byte
/// back out, so single-bit operations never shift existing storage.
///
/// A bit is addressed by the pair *(byte index, bit index)*, where bit
/// index 0 is the most significant bit of its byte. The pair is valid when
/// the byte index points at a full byte and the bit index is below 8, or
/// when the byte index equals [`full_byte_len`] and the bit index is below
/// [`tail_len`].
///
/// Equality compares logical content only: stale bits beyond the tail length
/// never influence `==`.
///
/// [`full_byte_len`]: DynamicBitset::full_byte_len
/// [`tail_len`]: DynamicBitset::tail_len
///
/// # Examples
///
/// ```
/// use dynamic_bits::DynamicBitset;
///
/// let mut bits = DynamicBitset::new();
/// for _ in 0..9 {
///     bits.push(true);
/// }
///
/// assert_eq!(bits.len(), 9);
/// assert_eq!(bits.full_byte_len(), 1);
/// assert_eq!(bits.tail_len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DynamicBitset {
    bytes: Vec<ByteCell>,
    tail: Tail,
}

impl DynamicBitset {
    /// Creates an empty container.
    #[inline]
    pub fn new() -> Self {
        DynamicBitset {
            bytes: Vec::new(),
            tail: Tail::default(),
        }
    }

    /// Creates an empty container with room for at least `bits` bits before
    /// the byte buffer reallocates.
    pub fn with_capacity(bits: usize) -> Self {
        DynamicBitset {
            bytes: Vec::with_capacity(bits.div_ceil(CELL_BITS)),
            tail: Tail::default(),
        }
    }

    /// Creates a container holding exactly the given bytes, with no partial
    /// tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bits::DynamicBitset;
    ///
    /// let bits = DynamicBitset::from_bytes(&[0b1000_0001]);
    /// assert_eq!(bits.len(), 8);
    /// assert!(bits.get(0, 0));
    /// assert!(bits.get(0, 7));
    /// assert!(!bits.has_partial_tail());
    /// ```
    pub fn from_bytes(raw: &[u8]) -> Self {
        DynamicBitset {
            bytes: bytemuck::cast_slice::<u8, ByteCell>(raw).to_vec(),
            tail: Tail::default(),
        }
    }

    /// Reassembles a container from the parts exposed by [`as_raw_slice`],
    /// [`tail_cell`] and [`tail_len`].
    ///
    /// Returns [`BitsetError::InvalidTailLen`] if `tail_len` is 8 or more; a
    /// full tail byte belongs in `bytes`.
    ///
    /// [`as_raw_slice`]: DynamicBitset::as_raw_slice
    /// [`tail_cell`]: DynamicBitset::tail_cell
    /// [`tail_len`]: DynamicBitset::tail_len
    pub fn from_raw_parts(
        bytes: Vec<ByteCell>,
        tail: ByteCell,
        tail_len: u8,
    ) -> Result<Self, BitsetError> {
        if tail_len >= ByteCell::BITS {
            return Err(BitsetError::InvalidTailLen(tail_len));
        }
        Ok(DynamicBitset {
            bytes,
            tail: Tail {
                cell: tail,
                len: tail_len,
            },
        })
    }

    /// Number of bits in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() * CELL_BITS + usize::from(self.tail.len)
    }

    /// Returns `true` when the container holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty() && self.tail.len == 0
    }

    /// Number of completed bytes, not counting the tail.
    #[inline]
    pub fn full_byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Number of meaningful bits in the tail, always below 8.
    #[inline]
    pub fn tail_len(&self) -> u8 {
        self.tail.len
    }

    /// Returns `true` when the last byte is only partially filled.
    #[inline]
    pub fn has_partial_tail(&self) -> bool {
        self.tail.len > 0
    }

    /// The completed bytes as a contiguous slice. The tail is not included.
    #[inline]
    pub fn as_raw_slice(&self) -> &[ByteCell] {
        &self.bytes
    }

    /// The tail cell with its stale bits cleared, so only the leading
    /// [`tail_len`] positions can be set.
    ///
    /// [`tail_len`]: DynamicBitset::tail_len
    #[inline]
    pub fn tail_cell(&self) -> ByteCell {
        ByteCell::new(self.tail.cell.to_raw() & self.tail.mask())
    }

    /// Position one past the last bit. Equal to the starting position when
    /// the container is empty.
    #[inline]
    pub fn end_position(&self) -> BitPos {
        BitPos::new(self.bytes.len(), self.tail.len)
    }

    #[inline]
    fn in_bounds(&self, byte_index: usize, bit_index: u8) -> bool {
        (byte_index < self.bytes.len() && bit_index < ByteCell::BITS)
            || (byte_index == self.bytes.len() && bit_index < self.tail.len)
    }

    #[inline]
    fn cell_at(&self, byte_index: usize) -> ByteCell {
        debug_assert!(byte_index <= self.bytes.len());
        if byte_index < self.bytes.len() {
            self.bytes[byte_index]
        } else {
            self.tail.cell
        }
    }

    /// Returns the bit at *(byte_index, bit_index)*.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bits::DynamicBitset;
    ///
    /// let mut bits = DynamicBitset::new();
    /// bits.push(true);
    /// bits.push(false);
    /// assert!(bits.get(0, 0));
    /// assert!(!bits.get(0, 1));
    /// ```
    pub fn get(&self, byte_index: usize, bit_index: u8) -> bool {
        assert!(
            self.in_bounds(byte_index, bit_index),
            "bit position ({}, {}) out of bounds",
            byte_index,
            bit_index
        );
        self.cell_at(byte_index).get(bit_index)
    }

    /// Returns the bit at *(byte_index, bit_index)*, or `None` when the
    /// position is out of bounds.
    pub fn try_get(&self, byte_index: usize, bit_index: u8) -> Option<bool> {
        if !self.in_bounds(byte_index, bit_index) {
            return None;
        }
        Some(self.cell_at(byte_index).get(bit_index))
    }

    /// Returns an assignable reference to the bit at *(byte_index,
    /// bit_index)*.
    ///
    /// The reference borrows the container, so pushes and pops are ruled out
    /// while it lives and the underlying byte cannot move.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bits::DynamicBitset;
    ///
    /// let mut bits = DynamicBitset::new();
    /// bits.push(false);
    /// bits.bit_ref(0, 0).set(true);
    /// assert!(bits.get(0, 0));
    /// ```
    pub fn bit_ref(&mut self, byte_index: usize, bit_index: u8) -> BitRef<'_> {
        assert!(
            self.in_bounds(byte_index, bit_index),
            "bit position ({}, {}) out of bounds",
            byte_index,
            bit_index
        );
        let full = self.bytes.len();
        let cell = if byte_index < full {
            &mut self.bytes[byte_index]
        } else {
            &mut self.tail.cell
        };
        cell.bit_ref(bit_index)
    }

    /// Appends one bit.
    ///
    /// Seven of every eight pushes touch only the tail cell; the eighth
    /// moves the completed cell into the byte buffer.
    pub fn push(&mut self, bit: bool) {
        self.tail.cell.set(self.tail.len, bit);
        self.tail.len += 1;
        if self.tail.is_full() {
            self.bytes.push(self.tail.cell);
            self.tail.len = 0;
        }
    }

    /// Appends all eight bits of `cell`, most significant first.
    ///
    /// When the container has a partial tail the bits land shifted across a
    /// byte boundary; the logical sequence is the same either way.
    pub fn push_byte(&mut self, cell: ByteCell) {
        for index in 0..ByteCell::BITS {
            self.push(cell.get(index));
        }
    }

    /// Appends the native-endian bytes of `value`, each one most significant
    /// bit first.
    ///
    /// Extracting at the position this push started from reproduces the
    /// value exactly, whether or not the position was byte-aligned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bits::DynamicBitset;
    ///
    /// let mut bits = DynamicBitset::new();
    /// bits.push_value(&0x1234_5678u32);
    /// assert_eq!(bits.len(), 32);
    /// assert_eq!(bits.extract::<u32>(0, 0), 0x1234_5678);
    /// ```
    pub fn push_value<T: Pod>(&mut self, value: &T) {
        for &raw in bytemuck::bytes_of(value) {
            self.push_byte(ByteCell::new(raw));
        }
    }

    /// Removes and returns the last bit, or `None` when the container is
    /// empty.
    ///
    /// Popping the last bit of a full byte moves that byte back into the
    /// tail with seven meaningful bits. The vacated positions keep their old
    /// values until a later push overwrites them.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bits::DynamicBitset;
    ///
    /// let mut bits = DynamicBitset::new();
    /// bits.push(true);
    /// bits.push(false);
    /// assert_eq!(bits.pop(), Some(false));
    /// assert_eq!(bits.pop(), Some(true));
    /// assert_eq!(bits.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<bool> {
        if self.tail.len > 0 {
            self.tail.len -= 1;
            return Some(self.tail.cell.get(self.tail.len));
        }
        let cell = self.bytes.pop()?;
        self.tail = Tail {
            cell,
            len: ByteCell::BITS - 1,
        };
        Some(cell.get(ByteCell::BITS - 1))
    }

    /// Removes every bit. Allocated capacity is kept for reuse.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.tail.len = 0;
    }

    /// A read-only cursor at the first bit.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self, BitPos::default())
    }

    /// A read-only cursor at *(byte_index, bit_index)*.
    ///
    /// # Panics
    ///
    /// Panics if the position is past [`end_position`].
    ///
    /// [`end_position`]: DynamicBitset::end_position
    pub fn cursor_at(&self, byte_index: usize, bit_index: u8) -> Cursor<'_> {
        let pos = BitPos::new(byte_index, bit_index);
        assert!(
            pos <= self.end_position(),
            "cursor position ({}, {}) past the end",
            byte_index,
            bit_index
        );
        Cursor::new(self, pos)
    }

    /// A mutable cursor at the first bit.
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_> {
        CursorMut::new(self, BitPos::default())
    }

    /// A mutable cursor at *(byte_index, bit_index)*.
    ///
    /// # Panics
    ///
    /// Panics if the position is past [`end_position`].
    ///
    /// [`end_position`]: DynamicBitset::end_position
    pub fn cursor_at_mut(&mut self, byte_index: usize, bit_index: u8) -> CursorMut<'_> {
        let pos = BitPos::new(byte_index, bit_index);
        assert!(
            pos <= self.end_position(),
            "cursor position ({}, {}) past the end",
            byte_index,
            bit_index
        );
        CursorMut::new(self, pos)
    }

    /// Iterates over all bits in order. Equivalent to [`cursor`].
    ///
    /// [`cursor`]: DynamicBitset::cursor
    #[inline]
    pub fn iter(&self) -> Cursor<'_> {
        self.cursor()
    }

    /// Reads a `T` from the bits starting at *(byte_index, bit_index)*.
    ///
    /// The starting position does not need to be byte-aligned.
    ///
    /// # Panics
    ///
    /// Panics if the position is past the end or fewer than
    /// `size_of::<T>() * 8` bits follow it.
    pub fn extract<T: Pod>(&self, byte_index: usize, bit_index: u8) -> T {
        self.cursor_at(byte_index, bit_index).extract()
    }

    /// Fills `destination` with bytes read from the bits starting at
    /// *(byte_index, bit_index)*.
    ///
    /// # Panics
    ///
    /// Panics if the position is past the end or fewer than
    /// `destination.len() * 8` bits follow it.
    pub fn extract_bytes(&self, byte_index: usize, bit_index: u8, destination: &mut [u8]) {
        self.cursor_at(byte_index, bit_index).extract_bytes(destination);
    }

    /// Fallible [`extract`]: returns [`BitsetError::InsufficientBits`]
    /// instead of panicking when the bits starting at *(byte_index,
    /// bit_index)* cannot cover a `T`.
    ///
    /// [`extract`]: DynamicBitset::extract
    pub fn try_extract<T: Pod>(
        &self,
        byte_index: usize,
        bit_index: u8,
    ) -> Result<T, BitsetError> {
        Cursor::new(self, BitPos::new(byte_index, bit_index)).try_extract()
    }

    /// Fallible [`extract_bytes`].
    ///
    /// [`extract_bytes`]: DynamicBitset::extract_bytes
    pub fn try_extract_bytes(
        &self,
        byte_index: usize,
        bit_index: u8,
        destination: &mut [u8],
    ) -> Result<(), BitsetError> {
        Cursor::new(self, BitPos::new(byte_index, bit_index)).try_extract_bytes(destination)
    }
}

impl Default for DynamicBitset {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DynamicBitset {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
            && self.tail.len == other.tail.len
            && self.tail_cell() == other.tail_cell()
    }
}

impl Eq for DynamicBitset {}

impl Extend<bool> for DynamicBitset {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl FromIterator<bool> for DynamicBitset {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = DynamicBitset::new();
        bits.extend(iter);
        bits
    }
}

impl<'a> IntoIterator for &'a DynamicBitset {
    type Item = bool;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}
