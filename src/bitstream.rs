//! Bit-level encoding against a [`CodeTable`] and decoding by walking a
//! [`HuffmanTree`].
//!
//! Logical bit `n` lives in packed byte `n / 8` at bit `n % 8`, counting
//! from the least significant bit.

use bitvec::prelude::*;

use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::tree::{ByteNode, HuffmanTree};

pub type Bits = BitVec<u8, Lsb0>;

pub fn encode(data: &[u8], table: &CodeTable) -> Result<Bits> {
    let mut bits = Bits::new();
    for &byte in data {
        let code = table.get(byte).ok_or(Error::UnknownSymbol(byte))?;
        bits.extend_from_bitslice(code);
    }
    Ok(bits)
}

pub fn decode(tree: &HuffmanTree, bits: &BitSlice<u8, Lsb0>) -> Result<Vec<u8>> {
    let root = tree.root();

    // a lone leaf has a 1-bit code, so every bit is one symbol
    if let ByteNode::Leaf { symbol, .. } = *root {
        return Ok(vec![symbol; bits.len()]);
    }

    let mut out = Vec::new();
    let mut cursor = root;
    for bit in bits.iter().by_vals() {
        cursor = cursor
            .child(bit)
            .ok_or_else(|| Error::corrupt("decoder stepped past a leaf"))?;
        if let ByteNode::Leaf { symbol, .. } = *cursor {
            out.push(symbol);
            cursor = root;
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(Error::corrupt("payload ends in the middle of a code"));
    }
    Ok(out)
}

/// Packs bits into bytes, zeroing the padding in the last byte.
pub fn pack(mut bits: Bits) -> Vec<u8> {
    bits.set_uninitialized(false);
    bits.into_vec()
}

/// Views the first `bit_len` bits of `bytes`, which must be exactly the
/// bytes needed to hold them.
pub fn unpack(bytes: &[u8], bit_len: usize) -> Result<&BitSlice<u8, Lsb0>> {
    let expected = bit_len / 8 + usize::from(bit_len % 8 != 0);
    if bytes.len() != expected {
        return Err(Error::corrupt(format!(
            "payload of {bit_len} bits needs {expected} bytes, found {}",
            bytes.len()
        )));
    }
    Ok(&bytes.view_bits::<Lsb0>()[..bit_len])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::Frequencies;

    fn setup(data: &[u8]) -> (HuffmanTree, CodeTable) {
        let tree = HuffmanTree::build(&Frequencies::of(data)).unwrap();
        let table = CodeTable::from_tree(&tree);
        (tree, table)
    }

    #[test]
    fn aaab_packs_first_bit_into_lsb() {
        let (tree, table) = setup(b"aaab");
        let bits = encode(b"aaab", &table).unwrap();
        assert_eq!(bits, bitvec![u8, Lsb0; 1, 1, 1, 0]);

        let packed = pack(bits);
        assert_eq!(packed, vec![0b0000_0111]);

        let view = unpack(&packed, 4).unwrap();
        assert_eq!(decode(&tree, view).unwrap(), b"aaab");
    }

    #[test]
    fn pad_bits_are_not_decoded() {
        // b is "0", so unmasked zero padding would decode as extra b's
        let (tree, table) = setup(b"aaab");
        let packed = pack(encode(b"ab", &table).unwrap());
        let all = packed.view_bits::<Lsb0>();
        assert_eq!(decode(&tree, all).unwrap(), b"abbbbbbb");
        assert_eq!(decode(&tree, unpack(&packed, 2).unwrap()).unwrap(), b"ab");
    }

    #[test]
    fn lone_leaf_emits_one_symbol_per_bit() {
        let (tree, table) = setup(b"qqqqq");
        let bits = encode(b"qqq", &table).unwrap();
        assert_eq!(bits.len(), 3);
        assert_eq!(decode(&tree, &bits).unwrap(), b"qqq");
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let (_, table) = setup(b"abc");
        assert!(matches!(
            encode(b"abz", &table),
            Err(Error::UnknownSymbol(b'z'))
        ));
    }

    #[test]
    fn truncated_code_is_corrupt() {
        let data = b"abcdefgh";
        let (tree, table) = setup(data);
        let mut bits = encode(data, &table).unwrap();
        bits.pop();
        assert!(matches!(decode(&tree, &bits), Err(Error::CorruptStream(_))));
    }

    #[test]
    fn unpack_rejects_wrong_byte_count() {
        assert!(unpack(&[0xff, 0xff], 4).is_err());
        assert!(unpack(&[0xff], 9).is_err());
        assert_eq!(unpack(&[0xff, 0x01], 9).unwrap().len(), 9);
        assert!(unpack(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn unpack_huge_bit_len_is_corrupt() {
        assert!(matches!(unpack(&[0x01], usize::MAX), Err(Error::CorruptStream(_))));
        assert!(matches!(unpack(&[], usize::MAX - 3), Err(Error::CorruptStream(_))));
    }
}
