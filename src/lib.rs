//! FPGA memory binary generator.
//!
//! This crate packs fixed-size arrays of unsigned integers into the flat
//! big-endian binaries (`RegMem.bin`, `SeqMem.bin`, `PrgMem.bin`,
//! `HSKMem.bin`, `CLVMem.bin`) that the FPGA loader reads.
//!
//! The binary `fpgabin` reads arrays from a JSON file and writes the binaries.

pub mod dispatch;
pub mod error;
pub mod memory;
pub mod packer;
pub mod readback;
pub mod writer;

pub use dispatch::{MemoryArrays, UploadReport, upload};
pub use error::{PackError, ReadbackError, WriteError};
pub use memory::{ElementWidth, MemoryType, MemoryTypeDefinition};
pub use writer::{SkipReason, WriteOutcome};
