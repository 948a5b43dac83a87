//! # huffpack
//!
//! Static Huffman compression for byte streams. A compressed file holds the
//! code tree followed by the bit-packed payload, so it can be decoded on
//! its own.
//!
//! ```rust
//! let data = b"abracadabra";
//! let packed = huffpack::compress(data)?;
//! assert_eq!(huffpack::decompress(&packed)?, data);
//! # Ok::<(), huffpack::Error>(())
//! ```

pub mod bitstream;
pub mod cli;
pub mod codec;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod serialize;
pub mod tree;

pub use codec::{
    compress, compress_file, compress_stream, compress_with_stats, decompress, decompress_file,
    decompress_stream, CompressionStats,
};
pub use codes::CodeTable;
pub use error::{Error, Result};
pub use frequency::Frequencies;
pub use tree::{ByteNode, HuffmanTree};
