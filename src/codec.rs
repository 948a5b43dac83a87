use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bitstream;
use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::frequency::Frequencies;
use crate::serialize;
use crate::tree::HuffmanTree;

/// Written between the tree and the payload so that padding in the last
/// payload byte is never decoded.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
struct PayloadHeader {
    bit_len: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressionStats {
    pub original_len: usize,
    pub compressed_len: usize,
    pub distinct_symbols: usize,
    pub bit_len: u64,
}

impl CompressionStats {
    /// Compressed size over original size; 1.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            1.0
        } else {
            self.compressed_len as f64 / self.original_len as f64
        }
    }
}

pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    compress_with_stats(bytes).map(|(out, _)| out)
}

pub fn compress_with_stats(bytes: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
    let freqs = Frequencies::of(bytes);
    log::trace!("byte frequency: {:?}", freqs);

    let Some(tree) = HuffmanTree::build(&freqs) else {
        return Ok((Vec::new(), CompressionStats::default()));
    };
    let table = CodeTable::from_tree(&tree);
    let bits = bitstream::encode(bytes, &table)?;
    let header = PayloadHeader {
        bit_len: bits.len() as u64,
    };
    log::debug!(
        "{} distinct symbols, tree depth {}, {} payload bits",
        table.len(),
        tree.depth(),
        header.bit_len
    );

    let mut out = Vec::new();
    serialize::write_tree(&tree, &mut out);
    bincode::serialize_into(&mut out, &header)?;
    out.extend_from_slice(&bitstream::pack(bits));

    let stats = CompressionStats {
        original_len: bytes.len(),
        compressed_len: out.len(),
        distinct_symbols: table.len(),
        bit_len: header.bit_len,
    };
    Ok((out, stats))
}

pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let mut rest = bytes;
    let tree = serialize::read_tree(&mut rest)?;
    let header: PayloadHeader = bincode::deserialize_from(&mut rest).map_err(|e| match *e {
        bincode::ErrorKind::Io(_) => Error::corrupt("stream ends inside the payload header"),
        _ => Error::Header(e),
    })?;
    let bit_len = usize::try_from(header.bit_len)
        .map_err(|_| Error::corrupt(format!("payload length {} overflows", header.bit_len)))?;
    log::debug!(
        "tree of {} leaves, {} payload bits in {} bytes",
        tree.leaf_count(),
        bit_len,
        rest.len()
    );

    let bits = bitstream::unpack(rest, bit_len)?;
    bitstream::decode(&tree, bits)
}

pub fn compress_stream<R: Read, W: Write>(mut source: R, sink: W) -> Result<CompressionStats> {
    let mut buffer = Vec::new();
    source.read_to_end(&mut buffer)?;

    let (out, stats) = compress_with_stats(&buffer)?;
    write_all(sink, &out)?;
    Ok(stats)
}

/// Returns the number of bytes written to `sink`.
pub fn decompress_stream<R: Read, W: Write>(mut source: R, sink: W) -> Result<usize> {
    let mut buffer = Vec::new();
    source.read_to_end(&mut buffer)?;

    let out = decompress(&buffer)?;
    write_all(sink, &out)?;
    Ok(out.len())
}

fn write_all<W: Write>(mut sink: W, bytes: &[u8]) -> Result<()> {
    sink.write_all(bytes)?;
    sink.flush()?;
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut in_file = BufReader::new(File::open(path)?);
    let mut buffer = Vec::new();
    in_file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

// dst is only created once the whole result is in memory, so a failed
// decode or dst == src never clobbers anything
fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    write_all(BufWriter::new(File::create(path)?), bytes)
}

pub fn compress_file(src: &Path, dst: &Path) -> Result<CompressionStats> {
    let (out, stats) = compress_with_stats(&read_file(src)?)?;
    write_file(dst, &out)?;
    log::info!(
        "{} -> {}: {} -> {} bytes ({:.1}%)",
        src.display(),
        dst.display(),
        stats.original_len,
        stats.compressed_len,
        stats.ratio() * 100.0
    );
    Ok(stats)
}

pub fn decompress_file(src: &Path, dst: &Path) -> Result<usize> {
    let out = decompress(&read_file(src)?)?;
    write_file(dst, &out)?;
    let written = out.len();
    log::info!("{} -> {}: {} bytes", src.display(), dst.display(), written);
    Ok(written)
}
