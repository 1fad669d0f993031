//! Bit-level packing and unpacking, MSB-first
//!
//! `BitPacker` assembles variable-length codes into a zero-padded byte
//! buffer and reports how many padding bits were added; `BitUnpacker` plays
//! the bytes back minus exactly that many trailing bits.

use crate::error::HzipError;
use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

/// Accumulates bits into bytes, most-significant bit first.
pub struct BitPacker {
    writer: BitWriter<Vec<u8>, BigEndian>,
    bit_len: u64,
}

impl BitPacker {
    pub fn new() -> Self {
        Self {
            writer: BitWriter::endian(Vec::new(), BigEndian),
            bit_len: 0,
        }
    }

    pub fn push(&mut self, bit: bool) -> Result<(), HzipError> {
        self.writer.write_bit(bit)?;
        self.bit_len += 1;
        Ok(())
    }

    pub fn push_code(&mut self, code: &[bool]) -> Result<(), HzipError> {
        for &bit in code {
            self.push(bit)?;
        }
        Ok(())
    }

    /// Total bits pushed so far, before any padding.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Zero-pad to a byte boundary and return the packed bytes together with
    /// the padding count. A bit length that is already a multiple of 8 gets
    /// no padding and a recorded count of 0.
    pub fn finish(mut self) -> Result<(Vec<u8>, u8), HzipError> {
        let padding = ((8 - self.bit_len % 8) % 8) as u8;
        self.writer.byte_align()?;
        Ok((self.writer.into_writer(), padding))
    }
}

impl Default for BitPacker {
    fn default() -> Self {
        Self::new()
    }
}

/// Replays packed bytes as individual bits, stopping short of the trailing
/// padding bits.
pub struct BitUnpacker<'a> {
    reader: BitReader<&'a [u8], BigEndian>,
    remaining: u64,
}

impl<'a> BitUnpacker<'a> {
    pub fn new(payload: &'a [u8], padding: u8) -> Result<Self, HzipError> {
        let total_bits = payload.len() as u64 * 8;
        if padding > 7 || u64::from(padding) > total_bits {
            return Err(HzipError::InvalidPadding(padding));
        }
        Ok(Self {
            reader: BitReader::endian(payload, BigEndian),
            remaining: total_bits - u64::from(padding),
        })
    }

    /// Bits left to read.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// The next data bit, or `None` once only padding is left.
    pub fn next_bit(&mut self) -> Result<Option<bool>, HzipError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let bit = self.reader.read_bit()?;
        self.remaining -= 1;
        Ok(Some(bit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(unpacker: &mut BitUnpacker<'_>) -> Vec<bool> {
        let mut bits = Vec::new();
        while let Some(bit) = unpacker.next_bit().unwrap() {
            bits.push(bit);
        }
        bits
    }

    #[test]
    fn test_pack_msb_first() {
        let mut packer = BitPacker::new();
        packer
            .push_code(&[true, false, true, false, true, false, true, false])
            .unwrap();
        let (bytes, padding) = packer.finish().unwrap();
        assert_eq!(bytes, vec![0b1010_1010]);
        assert_eq!(padding, 0);
    }

    #[test]
    fn test_partial_byte_is_zero_padded() {
        let mut packer = BitPacker::new();
        packer.push_code(&[true, true, true]).unwrap();
        let (bytes, padding) = packer.finish().unwrap();
        assert_eq!(bytes, vec![0b1110_0000]);
        assert_eq!(padding, 5);
    }

    #[test]
    fn test_empty_packer() {
        let (bytes, padding) = BitPacker::new().finish().unwrap();
        assert!(bytes.is_empty());
        assert_eq!(padding, 0);
    }

    #[test]
    fn test_unpack_strips_padding() {
        let mut unpacker = BitUnpacker::new(&[0b1110_0000], 5).unwrap();
        assert_eq!(unpacker.remaining(), 3);
        assert_eq!(drain(&mut unpacker), vec![true, true, true]);
        assert_eq!(unpacker.next_bit().unwrap(), None);
    }

    #[test]
    fn test_pack_unpack_roundtrip() {
        let bits: Vec<bool> = (0..23).map(|i| i % 3 == 0).collect();
        let mut packer = BitPacker::new();
        packer.push_code(&bits).unwrap();
        let (bytes, padding) = packer.finish().unwrap();
        let mut unpacker = BitUnpacker::new(&bytes, padding).unwrap();
        assert_eq!(drain(&mut unpacker), bits);
    }

    #[test]
    fn test_rejects_padding_out_of_range() {
        assert!(matches!(
            BitUnpacker::new(&[0u8], 8),
            Err(HzipError::InvalidPadding(8))
        ));
    }

    #[test]
    fn test_rejects_padding_beyond_payload() {
        assert!(matches!(
            BitUnpacker::new(&[], 3),
            Err(HzipError::InvalidPadding(3))
        ));
    }
}
