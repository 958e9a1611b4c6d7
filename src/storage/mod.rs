//! Repository persistence for Concord.
//!
//! The whole tree is serialized with bincode and framed by a small header:
//! four magic bytes, a little-endian format version, and a CRC32 of the
//! payload. The checksum catches truncated or bit-rotted repository files
//! before bincode ever sees them.
//!
//! A missing repository file is not an error: [`load_repository`] returns
//! an empty tree so a first run starts cleanly. A corrupt file *is* an
//! error; the CLI layer decides whether to abort or warn and start empty.
//!
//! # Examples
//!
//! ```
//! use concord::index::record::WordRecord;
//! use concord::storage::{deserialize_tree, serialize_tree};
//! use concord::tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! tree.insert(WordRecord::new("the"));
//!
//! let bytes = serialize_tree(&tree).unwrap();
//! let restored: BinarySearchTree<WordRecord> = deserialize_tree(&bytes).unwrap();
//! assert_eq!(restored.len(), 1);
//! ```

use std::fs;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConcordError, Result};
use crate::tree::BinarySearchTree;

/// Magic bytes identifying a Concord repository file.
pub const REPOSITORY_MAGIC: &[u8; 4] = b"CCRD";

/// Current repository format version.
pub const FORMAT_VERSION: u32 = 1;

/// Magic + version + checksum.
const HEADER_LEN: usize = 12;

/// Serialize a tree into framed repository bytes.
pub fn serialize_tree<E: Serialize>(tree: &BinarySearchTree<E>) -> Result<Vec<u8>> {
    let payload = bincode::serialize(tree)
        .map_err(|e| ConcordError::storage(format!("failed to encode tree: {e}")))?;

    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
    buf.extend_from_slice(REPOSITORY_MAGIC);
    buf.write_u32::<LittleEndian>(FORMAT_VERSION)?;
    buf.write_u32::<LittleEndian>(crc32fast::hash(&payload))?;
    buf.extend_from_slice(&payload);
    Ok(buf)
}

/// Reconstruct a tree from framed repository bytes.
///
/// Fails with [`ConcordError::Storage`] on short input, unknown magic, an
/// unsupported format version, a checksum mismatch, or an undecodable
/// payload. The reconstructed tree is traversal-equivalent to the one that
/// was serialized: the node graph round-trips shape and all.
pub fn deserialize_tree<E: DeserializeOwned>(bytes: &[u8]) -> Result<BinarySearchTree<E>> {
    if bytes.len() < HEADER_LEN {
        return Err(ConcordError::storage(format!(
            "repository too short: {} bytes",
            bytes.len()
        )));
    }
    if bytes[..4] != REPOSITORY_MAGIC[..] {
        return Err(ConcordError::storage("not a concord repository (bad magic)"));
    }

    let mut rest = &bytes[4..];
    let version = rest.read_u32::<LittleEndian>()?;
    if version != FORMAT_VERSION {
        return Err(ConcordError::storage(format!(
            "unsupported repository format version {version} (expected {FORMAT_VERSION})"
        )));
    }

    let checksum = rest.read_u32::<LittleEndian>()?;
    if crc32fast::hash(rest) != checksum {
        return Err(ConcordError::storage("repository checksum mismatch"));
    }

    bincode::deserialize(rest)
        .map_err(|e| ConcordError::storage(format!("failed to decode tree: {e}")))
}

/// Write `tree` to the repository file at `path`.
pub fn save_repository<E: Serialize>(path: &Path, tree: &BinarySearchTree<E>) -> Result<()> {
    let bytes = serialize_tree(tree)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Load the repository file at `path`, or an empty tree when the file does
/// not exist yet.
pub fn load_repository<E: DeserializeOwned>(path: &Path) -> Result<BinarySearchTree<E>> {
    if !path.exists() {
        return Ok(BinarySearchTree::new());
    }
    let bytes = fs::read(path)?;
    deserialize_tree(&bytes)
}
