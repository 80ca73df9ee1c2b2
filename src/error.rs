//! Error types for packing, writing and reading back memory artifacts.

use crate::memory::{ElementWidth, MemoryType};
use camino::Utf8PathBuf;
use thiserror::Error;

/// An element value that does not fit its memory width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Value is negative or at least `2^bits`.
    #[error("Value {value} out of range for {width} (0..={max})", max = .width.max_value())]
    OutOfRange {
        value: i128,
        width: ElementWidth,
    },

    /// Same as [`PackError::OutOfRange`], raised while packing an array.
    #[error("Element {index}: value {value} out of range for {width} (0..={max})", max = .width.max_value())]
    ElementOutOfRange {
        index: usize,
        value: i128,
        width: ElementWidth,
    },

    /// Decoding input is not a whole number of elements.
    #[error("{len} bytes is not a multiple of the {width} element size")]
    TrailingBytes { len: usize, width: ElementWidth },
}

/// Failure writing one memory artifact. Size mismatches and missing input are
/// not errors; see [`crate::writer::SkipReason`].
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("{memory_type}: {source}")]
    Pack {
        memory_type: MemoryType,
        #[source]
        source: PackError,
    },

    #[error("{memory_type}: failed to write {path}: {source}")]
    Io {
        memory_type: MemoryType,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    pub fn memory_type(&self) -> MemoryType {
        match self {
            WriteError::Pack { memory_type, .. } | WriteError::Io { memory_type, .. } => *memory_type,
        }
    }
}

/// Failure reading an artifact back.
#[derive(Debug, Error)]
pub enum ReadbackError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: length {len} is not a multiple of 4 bytes")]
    Misaligned { path: Utf8PathBuf, len: usize },

    #[error("{path}: expected {expected} bytes, found {actual}")]
    LengthMismatch {
        path: Utf8PathBuf,
        expected: usize,
        actual: usize,
    },
}
