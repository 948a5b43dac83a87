use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::frequency::Frequencies;

/// A node of the code tree. Children are owned by their parent.
///
/// Trees read back from a compressed stream carry no frequency data, so
/// their weights are all zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<ByteNode>,
        right: Box<ByteNode>,
    },
}

impl ByteNode {
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        ByteNode::Leaf { symbol, weight }
    }

    pub fn merge(left: ByteNode, right: ByteNode) -> Self {
        ByteNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match *self {
            ByteNode::Leaf { weight, .. } | ByteNode::Internal { weight, .. } => weight,
        }
    }

    pub fn symbol(&self) -> Option<u8> {
        match *self {
            ByteNode::Leaf { symbol, .. } => Some(symbol),
            ByteNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ByteNode::Leaf { .. })
    }

    /// The child a bit steps into: `false` is left, `true` is right.
    pub fn child(&self, bit: bool) -> Option<&ByteNode> {
        match self {
            ByteNode::Leaf { .. } => None,
            ByteNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            ByteNode::Leaf { .. } => 1,
            ByteNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            ByteNode::Leaf { .. } => 0,
            ByteNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry. Ordered by (weight, seq) and reversed so that `BinaryHeap`
/// pops the lightest, oldest node first.
struct Queued {
    weight: u64,
    seq: usize,
    node: ByteNode,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: ByteNode,
}

impl HuffmanTree {
    /// Builds the code tree for the given counts, or `None` when nothing was
    /// counted.
    ///
    /// Leaves enter the queue in ascending symbol order and every merged
    /// node takes the next sequence number, so equal weights always resolve
    /// the same way. The first node popped becomes the left child.
    pub fn build(freqs: &Frequencies) -> Option<Self> {
        let mut heap: BinaryHeap<Queued> = freqs
            .iter()
            .enumerate()
            .map(|(seq, (symbol, count))| Queued {
                weight: count,
                seq,
                node: ByteNode::leaf(symbol, count),
            })
            .collect();
        let mut next_seq = heap.len();

        loop {
            let left = heap.pop()?;
            let Some(right) = heap.pop() else {
                let tree = HuffmanTree { root: left.node };
                log::trace!("huffman tree: {:?}", tree);
                return Some(tree);
            };

            let node = ByteNode::merge(left.node, right.node);
            heap.push(Queued {
                weight: node.weight(),
                seq: next_seq,
                node,
            });
            next_seq += 1;
        }
    }

    pub(crate) fn from_root(root: ByteNode) -> Self {
        HuffmanTree { root }
    }

    pub fn root(&self) -> &ByteNode {
        &self.root
    }

    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path; 0 for a lone leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
