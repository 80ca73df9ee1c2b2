//! Memory type definitions.
//!
//! Each FPGA memory region is a flat, fixed-length array of unsigned integers
//! of a single width. The five regions and their layouts are fixed:
//!
//! | Type | Artifact | Width | Count |
//! |------|----------|-------|-------|
//! | [`MemoryType::Register`] | `RegMem.bin` | 16 bit | 16 |
//! | [`MemoryType::Sequence`] | `SeqMem.bin` | 64 bit | 1024 |
//! | [`MemoryType::Program`] | `PrgMem.bin` | 64 bit | 512 |
//! | [`MemoryType::Housekeeping`] | `HSKMem.bin` | 8 bit | 512 |
//! | [`MemoryType::ClockLevelVoltage`] | `CLVMem.bin` | 16 bit | 128 |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of one element in a memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementWidth {
    U8,
    U16,
    U64,
}

impl ElementWidth {
    pub const fn bits(self) -> u32 {
        match self {
            ElementWidth::U8 => 8,
            ElementWidth::U16 => 16,
            ElementWidth::U64 => 64,
        }
    }

    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Largest value representable at this width.
    pub const fn max_value(self) -> u64 {
        match self {
            ElementWidth::U8 => u8::MAX as u64,
            ElementWidth::U16 => u16::MAX as u64,
            ElementWidth::U64 => u64::MAX,
        }
    }

    /// Look up a width by bit count (8, 16 or 64).
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(ElementWidth::U8),
            16 => Some(ElementWidth::U16),
            64 => Some(ElementWidth::U64),
            _ => None,
        }
    }
}

impl fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

/// Layout of one memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryTypeDefinition {
    /// Identifier, also the artifact base filename.
    pub name: &'static str,
    pub width: ElementWidth,
    /// Exact number of elements the region holds.
    pub element_count: usize,
    /// Always `false`: every region stores unsigned values.
    pub signed: bool,
}

impl MemoryTypeDefinition {
    pub const fn element_bits(&self) -> u32 {
        self.width.bits()
    }

    /// Artifact filename, e.g. `RegMem.bin`.
    pub fn file_name(&self) -> String {
        format!("{}.bin", self.name)
    }

    /// Size of a written artifact in bytes.
    pub const fn byte_len(&self) -> usize {
        self.element_count * self.width.bytes()
    }
}

pub const REGISTER: MemoryTypeDefinition = MemoryTypeDefinition {
    name: "RegMem",
    width: ElementWidth::U16,
    element_count: 16,
    signed: false,
};

pub const SEQUENCE: MemoryTypeDefinition = MemoryTypeDefinition {
    name: "SeqMem",
    width: ElementWidth::U64,
    element_count: 1024,
    signed: false,
};

pub const PROGRAM: MemoryTypeDefinition = MemoryTypeDefinition {
    name: "PrgMem",
    width: ElementWidth::U64,
    element_count: 512,
    signed: false,
};

pub const HOUSEKEEPING: MemoryTypeDefinition = MemoryTypeDefinition {
    name: "HSKMem",
    width: ElementWidth::U8,
    element_count: 512,
    signed: false,
};

pub const CLOCK_LEVEL_VOLTAGE: MemoryTypeDefinition = MemoryTypeDefinition {
    name: "CLVMem",
    width: ElementWidth::U16,
    element_count: 128,
    signed: false,
};

/// The five FPGA memory regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    /// Register memory: housekeeping and sequence control values.
    Register,
    /// Sequence memory: programs that control the CCD clocks.
    Sequence,
    /// Program memory: programs that control the sequencer.
    Program,
    /// Housekeeping memory: housekeeping sample selection.
    Housekeeping,
    /// Clock level voltage memory: DAC values for the FPE clock levels.
    ClockLevelVoltage,
}

impl MemoryType {
    /// All memory types, in dispatch order.
    pub const ALL: [MemoryType; 5] = [
        MemoryType::Register,
        MemoryType::Sequence,
        MemoryType::Program,
        MemoryType::Housekeeping,
        MemoryType::ClockLevelVoltage,
    ];

    pub const fn definition(self) -> &'static MemoryTypeDefinition {
        match self {
            MemoryType::Register => &REGISTER,
            MemoryType::Sequence => &SEQUENCE,
            MemoryType::Program => &PROGRAM,
            MemoryType::Housekeeping => &HOUSEKEEPING,
            MemoryType::ClockLevelVoltage => &CLOCK_LEVEL_VOLTAGE,
        }
    }

    pub const fn name(self) -> &'static str {
        self.definition().name
    }

    /// Find the memory type whose artifact is named `name` (with or without `.bin`).
    pub fn from_artifact_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".bin").unwrap_or(name);
        Self::ALL.into_iter().find(|t| t.name() == stem)
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown memory type: {0}")]
pub struct UnknownMemoryType(pub String);

impl FromStr for MemoryType {
    type Err = UnknownMemoryType;

    /// Accepts the artifact name (`RegMem`) or the snake-case type name (`register`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(t) = Self::from_artifact_name(s) {
            return Ok(t);
        }
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "register" | "reg" => Ok(MemoryType::Register),
            "sequence" | "seq" => Ok(MemoryType::Sequence),
            "program" | "prg" => Ok(MemoryType::Program),
            "housekeeping" | "hsk" => Ok(MemoryType::Housekeeping),
            "clock_level_voltage" | "clv" => Ok(MemoryType::ClockLevelVoltage),
            _ => Err(UnknownMemoryType(s.to_string())),
        }
    }
}
