//! HZIP container format
//!
//! Layout (integers little-endian):
//! ```text
//! offset 0  magic      4 bytes   b"HZIP"
//! offset 4  tree_size  u32       byte length of the serialized tree
//! offset 8  padding    u8        trailing zero bits in the payload, 0-7
//! offset 9  tree_bytes tree_size serialized Huffman tree
//! then      payload    rest      packed Huffman-coded bits
//! ```

use crate::error::HzipError;
use serde::{Deserialize, Serialize};

pub const MAGIC: [u8; 4] = *b"HZIP";

/// Fixed-size prefix: magic, tree_size, padding.
pub const HEADER_LEN: usize = 9;

/// The binary envelope tying the serialized tree to its packed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub tree_bytes: Vec<u8>,
    pub padding: u8,
    pub payload: Vec<u8>,
}

impl Container {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.tree_bytes.len() + self.payload.len());
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&(self.tree_bytes.len() as u32).to_le_bytes());
        out.push(self.padding);
        out.extend_from_slice(&self.tree_bytes);
        out.extend_from_slice(&self.payload);
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, HzipError> {
        match bytes.get(..4) {
            Some(magic) if magic != MAGIC => {
                return Err(HzipError::FormatMismatch {
                    found: [magic[0], magic[1], magic[2], magic[3]],
                })
            }
            Some(_) => {}
            None => {
                return Err(HzipError::TruncatedContainer {
                    expected: HEADER_LEN,
                    available: bytes.len(),
                })
            }
        }
        if bytes.len() < HEADER_LEN {
            return Err(HzipError::TruncatedContainer {
                expected: HEADER_LEN,
                available: bytes.len(),
            });
        }

        let tree_size =
            u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
        let padding = bytes[8];
        if padding > 7 {
            return Err(HzipError::InvalidPadding(padding));
        }

        let tree_end = HEADER_LEN
            .checked_add(tree_size)
            .ok_or(HzipError::TruncatedContainer {
                expected: usize::MAX,
                available: bytes.len(),
            })?;
        if bytes.len() < tree_end {
            return Err(HzipError::TruncatedContainer {
                expected: tree_end,
                available: bytes.len(),
            });
        }

        Ok(Self {
            tree_bytes: bytes[HEADER_LEN..tree_end].to_vec(),
            padding,
            payload: bytes[tree_end..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Container {
        Container {
            tree_bytes: vec![0x00, 0x01, b'a', 0x01, b'b'],
            padding: 3,
            payload: vec![0xDE, 0xAD],
        }
    }

    #[test]
    fn test_encode_layout() {
        let encoded = sample().encode();
        assert_eq!(&encoded[..4], b"HZIP");
        assert_eq!(u32::from_le_bytes([encoded[4], encoded[5], encoded[6], encoded[7]]), 5);
        assert_eq!(encoded[8], 3);
        assert_eq!(&encoded[9..14], &[0x00, 0x01, b'a', 0x01, b'b']);
        assert_eq!(&encoded[14..], &[0xDE, 0xAD]);
    }

    #[test]
    fn test_decode_roundtrip() {
        let container = sample();
        assert_eq!(Container::decode(&container.encode()).unwrap(), container);
    }

    #[test]
    fn test_rejects_wrong_magic() {
        let mut encoded = sample().encode();
        encoded[0] = b'X';
        assert!(matches!(
            Container::decode(&encoded),
            Err(HzipError::FormatMismatch { found }) if found == *b"XZIP"
        ));
    }

    #[test]
    fn test_rejects_short_header() {
        assert!(matches!(
            Container::decode(b"HZ"),
            Err(HzipError::TruncatedContainer { .. })
        ));
        assert!(matches!(
            Container::decode(b"HZIP\x01\x00"),
            Err(HzipError::TruncatedContainer { .. })
        ));
    }

    #[test]
    fn test_rejects_tree_size_past_end() {
        let mut encoded = sample().encode();
        encoded[4] = 0xFF; // declared tree length far beyond the buffer
        assert!(matches!(
            Container::decode(&encoded),
            Err(HzipError::TruncatedContainer { .. })
        ));
    }

    #[test]
    fn test_rejects_padding_out_of_range() {
        let mut encoded = sample().encode();
        encoded[8] = 8;
        assert!(matches!(
            Container::decode(&encoded),
            Err(HzipError::InvalidPadding(8))
        ));
    }

    #[test]
    fn test_empty_payload_is_valid() {
        let container = Container {
            tree_bytes: vec![0x02],
            padding: 0,
            payload: Vec::new(),
        };
        assert_eq!(Container::decode(&container.encode()).unwrap(), container);
    }
}
