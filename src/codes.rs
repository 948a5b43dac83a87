use bitvec::prelude::*;

use crate::tree::{ByteNode, HuffmanTree};

pub type Code = BitVec<u8, Lsb0>;

/// Symbol to root-to-leaf path (false = left, true = right), first step
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable {
            codes: std::array::from_fn(|_| None),
        };

        match tree.root() {
            // an empty code cannot be written, so a lone leaf gets "0"
            ByteNode::Leaf { symbol, .. } => {
                table.codes[*symbol as usize] = Some(bitvec![u8, Lsb0; 0]);
            }
            root => {
                let mut path = Code::new();
                table.assign(root, &mut path);
            }
        }
        table
    }

    fn assign(&mut self, node: &ByteNode, path: &mut Code) {
        match node {
            ByteNode::Leaf { symbol, .. } => {
                let slot = &mut self.codes[*symbol as usize];
                debug_assert!(slot.is_none(), "symbol {symbol} in two leaves");
                *slot = Some(path.clone());
            }
            ByteNode::Internal { left, right, .. } => {
                path.push(false);
                self.assign(left, path);
                path.pop();
                path.push(true);
                self.assign(right, path);
                path.pop();
            }
        }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitSlice<u8, Lsb0>> {
        self.codes[symbol as usize].as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Lsb0>)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_deref().map(|code| (symbol as u8, code)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::Frequencies;

    fn table_of(data: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::build(&Frequencies::of(data)).unwrap())
    }

    fn bits(s: &str) -> Code {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn aaab_codes() {
        let table = table_of(b"aaab");
        assert_eq!(table.get(b'a').unwrap(), bits("1").as_bitslice());
        assert_eq!(table.get(b'b').unwrap(), bits("0").as_bitslice());
        assert!(table.get(b'c').is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn lone_symbol_gets_one_bit() {
        let table = table_of(&[7; 100]);
        assert_eq!(table.get(7).unwrap(), bits("0").as_bitslice());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn codes_are_prefix_free() {
        let data = b"abracadabra alakazam, hocus pocus \x00\xff\x7f";
        let table = table_of(data);
        let codes: Vec<_> = table.iter().collect();
        assert_eq!(codes.len(), Frequencies::of(data).distinct());

        for (a, code_a) in &codes {
            assert!(!code_a.is_empty());
            for (b, code_b) in &codes {
                if a != b {
                    assert!(!code_b.starts_with(*code_a), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let mut data = vec![b'x'; 1000];
        data.extend_from_slice(b"abcdefg");
        let table = table_of(&data);
        let x = table.get(b'x').unwrap().len();
        assert!(table.iter().all(|(_, code)| code.len() >= x));
    }
}
