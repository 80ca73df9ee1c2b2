//! Validate one memory array and write its artifact.
//!
//! The array length is checked against the definition and the whole array is
//! packed in memory before the output directory is touched. The artifact is
//! written to a temporary file in the same directory and renamed over
//! `<name>.bin`, so a failed write never leaves a partial or altered file.

use crate::error::WriteError;
use crate::memory::MemoryType;
use crate::packer::{self, Element};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use tracing::{debug, info, warn};

/// Why a memory type was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// No array was supplied.
    NoInput,
    /// The array length differs from the fixed element count.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoInput => f.write_str("no array provided"),
            SkipReason::SizeMismatch { expected, actual } => {
                write!(f, "array has {actual} elements, expected {expected}")
            }
        }
    }
}

/// Result of a successful [`write`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteOutcome {
    Written { path: Utf8PathBuf, byte_count: usize },
    Skipped(SkipReason),
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }
}

/// Path of the artifact for `memory_type` inside `out_dir`.
pub fn artifact_path(out_dir: &Utf8Path, memory_type: MemoryType) -> Utf8PathBuf {
    out_dir.join(memory_type.definition().file_name())
}

/// Write `values` for `memory_type` into `out_dir`.
///
/// `None` and wrong-sized arrays are skipped without touching the filesystem.
/// Out-of-range values and I/O failures are errors; in both cases any existing
/// artifact is left unchanged.
pub fn write(
    out_dir: &Utf8Path,
    memory_type: MemoryType,
    values: Option<&[Element]>,
) -> Result<WriteOutcome, WriteError> {
    let def = memory_type.definition();

    let Some(values) = values else {
        debug!(memory = def.name, "No array provided, skipping");
        return Ok(WriteOutcome::Skipped(SkipReason::NoInput));
    };

    if values.len() != def.element_count {
        warn!(
            memory = def.name,
            expected = def.element_count,
            actual = values.len(),
            "Input array is not the right size, skipping"
        );
        return Ok(WriteOutcome::Skipped(SkipReason::SizeMismatch {
            expected: def.element_count,
            actual: values.len(),
        }));
    }

    let stream = packer::encode_array(values, def.width)
        .map_err(|source| WriteError::Pack { memory_type, source })?;
    debug_assert_eq!(stream.len(), def.byte_len());

    let path = artifact_path(out_dir, memory_type);
    replace_file(out_dir, &path, &stream).map_err(|source| WriteError::Io {
        memory_type,
        path: path.clone(),
        source,
    })?;

    info!(memory = def.name, path = %path, bytes = stream.len(), "File written");
    Ok(WriteOutcome::Written {
        path,
        byte_count: stream.len(),
    })
}

fn replace_file(dir: &Utf8Path, path: &Utf8Path, data: &[u8]) -> std::io::Result<()> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".fpgabin-").suffix(".tmp");
    // tempfile creates 0600 by default
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let mut tmp = builder.tempfile_in(dir.as_std_path())?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path.as_std_path()).map_err(|e| e.error)?;
    Ok(())
}
