//! Bit-flag primitives shared by the status, channel and date-time codecs.
//!
//! ## Bit Indexing
//!
//! A flag record of `N` bytes is an indexed bit vector of `8 * N` bits.
//! Index `i` addresses bit `7 - i % 8` of byte `i / 8`, i.e. indexing is
//! MSB-first within every byte:
//!
//! ```text
//! byte 0: i=0 i=1 i=2 i=3 i=4 i=5 i=6 i=7     (MSB .. LSB)
//! byte 1: i=8 ...                      i=15
//! ```
//!
//! KNX documents status bits as `b0..bn` counted from the least significant
//! bit of the last byte; [`Flags::is_bit_set`] uses that numbering and is what
//! the channel families build on (channel `n` is bit `b(n-1)`).

use core::fmt;

use crate::error::{KnxError, Result};

/// Sentinel rendered by [`ChannelList`] when no channel is active.
pub const NO_CHANNEL_ACTIVE: &str = "none";

/// Fixed-width bit-flag record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flags<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> Flags<N> {
    /// Number of addressable bits
    pub const WIDTH: usize = 8 * N;

    /// Create a record from its raw bytes
    #[inline]
    pub const fn new(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Record with every bit cleared
    #[inline]
    pub const fn empty() -> Self {
        Self { bytes: [0; N] }
    }

    /// Raw bytes of the record
    #[inline]
    pub const fn bytes(&self) -> [u8; N] {
        self.bytes
    }

    /// Read the bit at MSB-first `index`
    ///
    /// # Errors
    ///
    /// Returns an index-out-of-bounds error if `index >= 8 * N`.
    pub fn is_set(&self, index: usize) -> Result<bool> {
        let byte = self.byte_of(index)?;
        Ok(byte & (0x80 >> (index % 8)) != 0)
    }

    /// Return a copy with the bit at MSB-first `index` set to `value`
    pub fn with(mut self, index: usize, value: bool) -> Result<Self> {
        self.byte_of(index)?;
        let mask = 0x80 >> (index % 8);
        if value {
            self.bytes[index / 8] |= mask;
        } else {
            self.bytes[index / 8] &= !mask;
        }
        Ok(self)
    }

    /// Read bit `b<bit>`, counted from the least significant bit of the last byte
    pub fn is_bit_set(&self, bit: usize) -> Result<bool> {
        if bit >= Self::WIDTH {
            return Err(KnxError::index_out_of_bounds(bit, Self::WIDTH));
        }
        self.is_set(Self::WIDTH - 1 - bit)
    }

    /// Return a copy with bit `b<bit>` (LSB numbering) set to `value`
    pub fn with_bit(self, bit: usize, value: bool) -> Result<Self> {
        if bit >= Self::WIDTH {
            return Err(KnxError::index_out_of_bounds(bit, Self::WIDTH));
        }
        self.with(Self::WIDTH - 1 - bit, value)
    }

    /// Check if no bit is set
    pub fn is_empty(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Iterate over the active bits in LSB numbering, ascending
    pub fn active_bits(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::WIDTH).filter(move |&bit| {
            let index = Self::WIDTH - 1 - bit;
            self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
        })
    }

    /// Render the active channels as a 1-based, comma separated list
    pub fn channels(&self) -> ChannelList<'_, N> {
        ChannelList { flags: self }
    }

    fn byte_of(&self, index: usize) -> Result<u8> {
        self.bytes
            .get(index / 8)
            .copied()
            .filter(|_| index < Self::WIDTH)
            .ok_or_else(|| KnxError::index_out_of_bounds(index, Self::WIDTH))
    }
}

impl<const N: usize> Default for Flags<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> From<[u8; N]> for Flags<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self::new(bytes)
    }
}

/// Display adapter listing the active channels (`"1, 2, 3, 8"`)
///
/// Channel `n` corresponds to bit `b(n-1)`. An empty record renders as
/// [`NO_CHANNEL_ACTIVE`].
#[derive(Debug, Clone, Copy)]
pub struct ChannelList<'a, const N: usize> {
    flags: &'a Flags<N>,
}

impl<const N: usize> fmt::Display for ChannelList<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.is_empty() {
            return f.write_str(NO_CHANNEL_ACTIVE);
        }
        for (i, bit) in self.flags.active_bits().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", bit + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_set_msb_first() {
        let flags = Flags::new([0x80]);
        assert!(flags.is_set(0).unwrap());
        for i in 1..8 {
            assert!(!flags.is_set(i).unwrap());
        }
    }

    #[test]
    fn test_is_set_matches_raw_bits() {
        let raw = [0xA5u8, 0x3C];
        let flags = Flags::new(raw);
        for i in 0..16 {
            let expected = (raw[i / 8] >> (7 - i % 8)) & 1 == 1;
            assert_eq!(flags.is_set(i).unwrap(), expected, "index {i}");
        }
    }

    #[test]
    fn test_is_set_out_of_bounds() {
        let flags = Flags::new([0xFF]);
        let err = flags.is_set(8).unwrap_err();
        assert!(err.is_index_out_of_bounds());

        let flags = Flags::new([0xFF, 0xFF]);
        assert!(flags.is_set(15).unwrap());
        assert!(flags.is_set(16).unwrap_err().is_index_out_of_bounds());
        assert!(flags.is_set(usize::MAX).unwrap_err().is_index_out_of_bounds());
    }

    #[test]
    fn test_lsb_numbering() {
        let flags = Flags::new([0x01, 0x80]);
        assert!(flags.is_bit_set(7).unwrap()); // MSB of the last byte
        assert!(flags.is_bit_set(8).unwrap()); // LSB of the first byte
        assert!(!flags.is_bit_set(0).unwrap());
        assert!(flags.is_bit_set(16).unwrap_err().is_index_out_of_bounds());
    }

    #[test]
    fn test_with_sets_and_clears() {
        let flags = Flags::<2>::empty().with(0, true).unwrap().with(15, true).unwrap();
        assert_eq!(flags.bytes(), [0x80, 0x01]);
        let flags = flags.with(0, false).unwrap();
        assert_eq!(flags.bytes(), [0x00, 0x01]);
        assert!(flags.with(16, true).is_err());

        let flags = Flags::<1>::empty().with_bit(0, true).unwrap();
        assert_eq!(flags.bytes(), [0x01]);
    }

    #[test]
    fn test_channel_list_rendering() {
        let flags = Flags::new([0x87]);
        assert_eq!(format!("{}", flags.channels()), "1, 2, 3, 8");

        let flags = Flags::new([0x00]);
        assert_eq!(format!("{}", flags.channels()), NO_CHANNEL_ACTIVE);

        let flags = Flags::new([0x80, 0x01]);
        assert_eq!(format!("{}", flags.channels()), "1, 16");
    }

    #[test]
    fn test_active_bits() {
        let flags = Flags::new([0x05]);
        let bits: Vec<usize> = flags.active_bits().collect();
        assert_eq!(bits, vec![0, 2]);
    }
}
