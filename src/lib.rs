//! hzip: lossless Huffman byte-stream compression.
//!
//! Replaces frequent byte values with short bit codes and rare values with
//! longer ones, derived from a prefix-free tree built over the input's
//! byte-frequency distribution. The result is wrapped in a self-describing
//! `HZIP` container carrying the serialized tree, the padding count, and the
//! packed payload, so the original bytes can be reconstructed from the
//! container alone.
//!
//! The pipeline, leaves first:
//! - [`freq::FrequencyTable`] counts byte occurrences
//! - [`tree::HuffmanTree`] merges them into a prefix tree and handles the
//!   compact wire encoding of its shape
//! - [`code::CodeTable`] derives per-byte bit codes from the tree
//! - [`bits::BitPacker`] / [`bits::BitUnpacker`] move between bit codes and
//!   padded bytes
//! - [`container::Container`] is the binary envelope tying it all together

pub mod bits;
pub mod code;
pub mod config;
pub mod container;
pub mod error;
pub mod freq;
pub mod tree;

use crate::bits::{BitPacker, BitUnpacker};
use crate::code::CodeTable;
use crate::config::CompressionConfig;
use crate::container::Container;
use crate::error::HzipError;
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;

/// The compressor engine. Every call builds its own frequency table, tree,
/// and code table; nothing is shared or cached between calls.
pub struct Compressor {
    config: CompressionConfig,
}

impl Compressor {
    /// Create a compressor with the given configuration.
    pub fn new(config: CompressionConfig) -> Self {
        Self { config }
    }

    /// Compress `data` into HZIP container bytes.
    ///
    /// Empty input is rejected with [`HzipError::EmptyInput`]; input larger
    /// than the configured maximum with [`HzipError::InputTooLarge`].
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>, HzipError> {
        if data.is_empty() {
            return Err(HzipError::EmptyInput);
        }
        if data.len() > self.config.max_input_size {
            return Err(HzipError::InputTooLarge {
                size: data.len(),
                max: self.config.max_input_size,
            });
        }

        let freq = FrequencyTable::build(data);
        let tree = HuffmanTree::from_frequencies(&freq);
        let codes = CodeTable::from_tree(&tree);

        let mut packer = BitPacker::new();
        for &byte in data {
            let code = codes.code(byte).ok_or(HzipError::UnknownSymbol(byte))?;
            packer.push_code(code)?;
        }
        tracing::trace!(
            distinct_symbols = freq.distinct_symbols(),
            encoded_bits = packer.bit_len(),
            "input encoded"
        );
        let (payload, padding) = packer.finish()?;

        let container = Container {
            tree_bytes: tree.serialize(),
            padding,
            payload,
        };
        let encoded = container.encode();
        tracing::debug!(
            original_size = data.len(),
            compressed_size = encoded.len(),
            ratio = encoded.len() as f64 / data.len() as f64,
            "compressed"
        );
        Ok(encoded)
    }

    /// Decompress HZIP container bytes back into the original input.
    pub fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, HzipError> {
        let container = Container::decode(bytes)?;
        let tree = HuffmanTree::deserialize(&container.tree_bytes)?;
        let mut bits = BitUnpacker::new(&container.payload, container.padding)?;
        let output = tree.decode_payload(&mut bits)?;
        tracing::debug!(
            compressed_size = bytes.len(),
            original_size = output.len(),
            "decompressed"
        );
        Ok(output)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new(CompressionConfig::default())
    }
}

/// Compress `data` with the default configuration.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, HzipError> {
    Compressor::default().compress(data)
}

/// Decompress HZIP container bytes with the default configuration.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, HzipError> {
    Compressor::default().decompress(bytes)
}
