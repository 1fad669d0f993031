//! Huffman tree construction, wire encoding, and payload decoding
//!
//! The tree is built with a greedy minimum-merge over a binary heap and
//! serialized into a compact pre-order byte form: `0x00` opens an internal
//! node (left subtree then right subtree follow), `0x01` is a leaf followed
//! by its byte value, `0x02` marks an absent node.

use crate::bits::BitUnpacker;
use crate::error::HzipError;
use crate::freq::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

const TAG_INTERNAL: u8 = 0x00;
const TAG_LEAF: u8 = 0x01;
const TAG_ABSENT: u8 = 0x02;

/// Deepest nesting a well-formed tree can have: one level per alphabet
/// symbol, 256 symbols. Deserialization rejects anything deeper.
const MAX_TREE_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        byte: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
}

/// Heap entry ordered for minimum extraction; ties break by insertion
/// sequence (leaves in ascending byte order, merged nodes in creation order).
struct HeapEntry {
    weight: u64,
    seq: u32,
    node: Node,
}

impl Eq for HeapEntry {}
impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap, we want minimum extraction
        other
            .weight
            .cmp(&self.weight)
            .then(other.seq.cmp(&self.seq))
    }
}

/// A prefix tree over byte values. `root` is `None` for an empty alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub root: Option<Node>,
}

impl HuffmanTree {
    /// Build a tree from a frequency table by repeatedly merging the two
    /// lowest-weight nodes. The first node popped becomes the left child.
    pub fn from_frequencies(freq: &FrequencyTable) -> Self {
        let mut heap = BinaryHeap::new();
        let mut seq = 0u32;
        for (byte, weight) in freq.iter() {
            heap.push(HeapEntry {
                weight,
                seq,
                node: Node::Leaf { byte, weight },
            });
            seq += 1;
        }

        if heap.is_empty() {
            return Self { root: None };
        }

        // A single distinct byte still needs a 1-bit code, so wrap the lone
        // leaf in an internal root and leave the right branch absent.
        if heap.len() == 1 {
            let only = heap.pop().unwrap();
            return Self {
                root: Some(Node::Internal {
                    weight: only.weight,
                    left: Some(Box::new(only.node)),
                    right: None,
                }),
            };
        }

        while heap.len() > 1 {
            let left = heap.pop().unwrap();
            let right = heap.pop().unwrap();
            let weight = left.weight + right.weight;
            heap.push(HeapEntry {
                weight,
                seq,
                node: Node::Internal {
                    weight,
                    left: Some(Box::new(left.node)),
                    right: Some(Box::new(right.node)),
                },
            });
            seq += 1;
        }

        Self {
            root: heap.pop().map(|entry| entry.node),
        }
    }

    /// Encode the tree shape and leaf values into the pre-order byte form.
    /// Weights are not written; decoding does not need them.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut stack: Vec<Option<&Node>> = vec![self.root.as_ref()];
        while let Some(slot) = stack.pop() {
            match slot {
                None => out.push(TAG_ABSENT),
                Some(Node::Leaf { byte, .. }) => {
                    out.push(TAG_LEAF);
                    out.push(*byte);
                }
                Some(Node::Internal { left, right, .. }) => {
                    out.push(TAG_INTERNAL);
                    stack.push(right.as_deref());
                    stack.push(left.as_deref());
                }
            }
        }
        out
    }

    /// Rebuild a tree from its serialized form. Reconstructed nodes carry
    /// weight 0; only shape and leaf values matter for decoding.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, HzipError> {
        let mut pos = 0;
        let root = parse_node(bytes, &mut pos, 0)?;
        if pos != bytes.len() {
            return Err(HzipError::CorruptTree(format!(
                "{} trailing bytes after tree",
                bytes.len() - pos
            )));
        }
        Ok(Self { root })
    }

    /// Walk the tree over the unpacked bit stream: 0 steps left, 1 steps
    /// right, each leaf emits its byte and restarts the walk at the root.
    pub fn decode_payload(&self, bits: &mut BitUnpacker<'_>) -> Result<Vec<u8>, HzipError> {
        let root = match &self.root {
            Some(node) => node,
            None if bits.remaining() == 0 => return Ok(Vec::new()),
            None => {
                return Err(HzipError::CorruptTree(
                    "payload present but tree is empty".into(),
                ))
            }
        };

        let mut out = Vec::with_capacity(bits.remaining() as usize / 8 + 1);
        let mut current = root;
        while let Some(bit) = bits.next_bit()? {
            let child = match current {
                Node::Internal { left, right, .. } => {
                    if bit {
                        right
                    } else {
                        left
                    }
                }
                Node::Leaf { .. } => {
                    return Err(HzipError::CorruptTree(
                        "code walk started at a leaf root".into(),
                    ))
                }
            };
            current = child.as_deref().ok_or_else(|| {
                HzipError::CorruptTree("code walk entered an absent branch".into())
            })?;
            if let Node::Leaf { byte, .. } = current {
                out.push(*byte);
                current = root;
            }
        }
        Ok(out)
    }
}

fn parse_node(bytes: &[u8], pos: &mut usize, depth: usize) -> Result<Option<Node>, HzipError> {
    if depth > MAX_TREE_DEPTH {
        return Err(HzipError::CorruptTree(
            "nesting exceeds alphabet depth".into(),
        ));
    }
    let tag = *bytes
        .get(*pos)
        .ok_or_else(|| HzipError::CorruptTree("unexpected end of tree data".into()))?;
    *pos += 1;
    match tag {
        TAG_ABSENT => Ok(None),
        TAG_LEAF => {
            let byte = *bytes
                .get(*pos)
                .ok_or_else(|| HzipError::CorruptTree("leaf marker without value".into()))?;
            *pos += 1;
            Ok(Some(Node::Leaf { byte, weight: 0 }))
        }
        TAG_INTERNAL => {
            let left = parse_node(bytes, pos, depth + 1)?;
            let right = parse_node(bytes, pos, depth + 1)?;
            if left.is_none() && right.is_none() {
                return Err(HzipError::CorruptTree(
                    "internal node with no children".into(),
                ));
            }
            Ok(Some(Node::Internal {
                weight: 0,
                left: left.map(Box::new),
                right: right.map(Box::new),
            }))
        }
        other => Err(HzipError::CorruptTree(format!(
            "unknown node marker 0x{other:02x}"
        ))),
    }
}
