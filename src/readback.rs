//! Read artifacts back the way the FPGA loader does: as big-endian 32-bit words.

use crate::error::ReadbackError;
use crate::memory::MemoryType;
use crate::writer::artifact_path;
use camino::Utf8Path;

/// Split a byte stream into big-endian `u32` words.
pub fn to_words(bytes: &[u8]) -> Option<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}

fn read(path: &Utf8Path) -> Result<Vec<u8>, ReadbackError> {
    std::fs::read(path).map_err(|source| ReadbackError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Read a file as 32-bit big-endian words.
pub fn read_words(path: &Utf8Path) -> Result<Vec<u32>, ReadbackError> {
    let bytes = read(path)?;
    to_words(&bytes).ok_or_else(|| ReadbackError::Misaligned {
        path: path.to_owned(),
        len: bytes.len(),
    })
}

/// Read the artifact for `memory_type` from `dir`, checking its exact length.
pub fn verify(dir: &Utf8Path, memory_type: MemoryType) -> Result<Vec<u32>, ReadbackError> {
    let path = artifact_path(dir, memory_type);
    let expected = memory_type.definition().byte_len();
    let bytes = read(&path)?;
    if bytes.len() != expected {
        return Err(ReadbackError::LengthMismatch {
            path,
            expected,
            actual: bytes.len(),
        });
    }
    to_words(&bytes).ok_or(ReadbackError::Misaligned {
        path,
        len: bytes.len(),
    })
}
