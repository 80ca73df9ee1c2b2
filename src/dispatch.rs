//! Write every memory type in one call.
//!
//! Each type is handled independently: a skip or failure for one type never
//! stops or rolls back the others.

use crate::error::WriteError;
use crate::memory::MemoryType;
use crate::packer::Element;
use crate::writer::{self, WriteOutcome};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Optional input arrays, one per memory type.
///
/// Deserializes from JSON objects keyed by the snake-case type names. The
/// legacy upload keywords (`REG_MEM`, `SEQ_MEM`, `PRG_MEM`, `HSK_SEL_MEM`,
/// `VOLT_MEM`) are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryArrays {
    #[serde(default, alias = "REG_MEM", skip_serializing_if = "Option::is_none")]
    pub register: Option<Vec<Element>>,
    #[serde(default, alias = "SEQ_MEM", skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Vec<Element>>,
    #[serde(default, alias = "PRG_MEM", skip_serializing_if = "Option::is_none")]
    pub program: Option<Vec<Element>>,
    #[serde(default, alias = "HSK_SEL_MEM", skip_serializing_if = "Option::is_none")]
    pub housekeeping: Option<Vec<Element>>,
    #[serde(default, alias = "VOLT_MEM", skip_serializing_if = "Option::is_none")]
    pub clock_level_voltage: Option<Vec<Element>>,
}

impl MemoryArrays {
    pub fn get(&self, memory_type: MemoryType) -> Option<&[Element]> {
        match memory_type {
            MemoryType::Register => self.register.as_deref(),
            MemoryType::Sequence => self.sequence.as_deref(),
            MemoryType::Program => self.program.as_deref(),
            MemoryType::Housekeeping => self.housekeeping.as_deref(),
            MemoryType::ClockLevelVoltage => self.clock_level_voltage.as_deref(),
        }
    }

    pub fn set(&mut self, memory_type: MemoryType, values: Vec<Element>) -> &mut Self {
        let slot = match memory_type {
            MemoryType::Register => &mut self.register,
            MemoryType::Sequence => &mut self.sequence,
            MemoryType::Program => &mut self.program,
            MemoryType::Housekeeping => &mut self.housekeeping,
            MemoryType::ClockLevelVoltage => &mut self.clock_level_voltage,
        };
        *slot = Some(values);
        self
    }

    /// Load arrays from a JSON file.
    pub fn from_json_file(path: &Utf8Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path))
    }
}

/// One entry per memory type, in [`MemoryType::ALL`] order.
#[derive(Debug)]
pub struct UploadReport {
    pub entries: Vec<(MemoryType, Result<WriteOutcome, WriteError>)>,
}

impl UploadReport {
    pub fn get(&self, memory_type: MemoryType) -> Option<&Result<WriteOutcome, WriteError>> {
        self.entries
            .iter()
            .find(|(t, _)| *t == memory_type)
            .map(|(_, r)| r)
    }

    /// Paths of all artifacts written.
    pub fn written(&self) -> Vec<&Utf8PathBuf> {
        self.entries
            .iter()
            .filter_map(|(_, r)| match r {
                Ok(WriteOutcome::Written { path, .. }) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&WriteError> {
        self.entries
            .iter()
            .filter_map(|(_, r)| r.as_ref().err())
            .collect()
    }

    /// `true` unless some type failed. Skips do not count as failures.
    pub fn is_success(&self) -> bool {
        self.entries.iter().all(|(_, r)| r.is_ok())
    }
}

/// Write the artifact for every memory type present in `arrays` into `out_dir`.
pub fn upload(out_dir: &Utf8Path, arrays: &MemoryArrays) -> UploadReport {
    let entries = MemoryType::ALL
        .into_iter()
        .map(|memory_type| {
            info!("Writing {} binary...", memory_type);
            let result = writer::write(out_dir, memory_type, arrays.get(memory_type));
            if let Err(e) = &result {
                error!("{}", e);
            }
            (memory_type, result)
        })
        .collect();
    UploadReport { entries }
}
