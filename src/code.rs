//! Per-byte code derivation from a Huffman tree

use crate::tree::{HuffmanTree, Node};
use std::collections::HashMap;

/// Mapping from byte value to its prefix-free bit code.
///
/// Codes follow the canonical traversal convention: a left edge appends 0
/// (`false`), a right edge appends 1 (`true`). Prefix-freeness follows from
/// every code ending at a distinct leaf.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: HashMap<u8, Vec<bool>>,
}

impl CodeTable {
    /// Derive one code per leaf via an iterative depth-first traversal.
    /// An empty tree yields an empty table.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::new();
        let mut stack: Vec<(&Node, Vec<bool>)> = match &tree.root {
            Some(root) => vec![(root, Vec::new())],
            None => Vec::new(),
        };

        while let Some((node, prefix)) = stack.pop() {
            match node {
                Node::Leaf { byte, .. } => {
                    // a lone leaf still needs a non-empty code
                    let code = if prefix.is_empty() { vec![false] } else { prefix };
                    codes.insert(*byte, code);
                }
                Node::Internal { left, right, .. } => {
                    if let Some(right) = right.as_deref() {
                        let mut path = prefix.clone();
                        path.push(true);
                        stack.push((right, path));
                    }
                    if let Some(left) = left.as_deref() {
                        let mut path = prefix;
                        path.push(false);
                        stack.push((left, path));
                    }
                }
            }
        }

        Self { codes }
    }

    /// The code for `byte`, if the byte occurred in the source alphabet.
    pub fn code(&self, byte: u8) -> Option<&[bool]> {
        self.codes.get(&byte).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> {
        self.codes.iter().map(|(&b, code)| (b, code.as_slice()))
    }
}
