//! Preorder flag encoding of the code tree.
//!
//! Each node is one flag byte, `'0'` for an internal node or `'1'` for a
//! leaf followed by its symbol byte. Children follow their parent, left
//! subtree first.

use crate::error::{Error, Result};
use crate::tree::{ByteNode, HuffmanTree};

pub const INTERNAL: u8 = b'0';
pub const LEAF: u8 = b'1';

// 256 leaves can sit at most 255 levels below the root
const MAX_DEPTH: usize = 255;

pub fn write_tree(tree: &HuffmanTree, out: &mut Vec<u8>) {
    write_node(tree.root(), out);
}

fn write_node(node: &ByteNode, out: &mut Vec<u8>) {
    match node {
        ByteNode::Leaf { symbol, .. } => {
            out.push(LEAF);
            out.push(*symbol);
        }
        ByteNode::Internal { left, right, .. } => {
            out.push(INTERNAL);
            write_node(left, out);
            write_node(right, out);
        }
    }
}

/// Reads one tree from the front of `input`, advancing it past the tree.
///
/// The read is driven by the flags alone. All weights in the result are 0.
pub fn read_tree(input: &mut &[u8]) -> Result<HuffmanTree> {
    let mut seen = [false; 256];
    let root = read_node(input, 0, &mut seen)?;
    Ok(HuffmanTree::from_root(root))
}

fn read_node(input: &mut &[u8], depth: usize, seen: &mut [bool; 256]) -> Result<ByteNode> {
    if depth > MAX_DEPTH {
        return Err(Error::corrupt(format!("tree nests deeper than {MAX_DEPTH} levels")));
    }

    match next_byte(input, "tree truncated before a node flag")? {
        INTERNAL => {
            let left = read_node(input, depth + 1, seen)?;
            let right = read_node(input, depth + 1, seen)?;
            Ok(ByteNode::merge(left, right))
        }
        LEAF => {
            let symbol = next_byte(input, "tree truncated before a leaf symbol")?;
            if std::mem::replace(&mut seen[symbol as usize], true) {
                return Err(Error::corrupt(format!("symbol {symbol:#04x} appears in two leaves")));
            }
            Ok(ByteNode::leaf(symbol, 0))
        }
        flag => Err(Error::corrupt(format!("unknown node flag {flag:#04x}"))),
    }
}

fn next_byte(input: &mut &[u8], what: &str) -> Result<u8> {
    let (&byte, rest) = input.split_first().ok_or_else(|| Error::corrupt(what))?;
    *input = rest;
    Ok(byte)
}
