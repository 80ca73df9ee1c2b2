use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use fpgabin::memory::MemoryType;
use fpgabin::{MemoryArrays, WriteOutcome, packer, readback};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Create big-endian memory binaries for FPGA upload", long_about = None)]
struct Cli {
    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one binary per memory array found in a JSON file
    Write {
        /// JSON object with optional `register`, `sequence`, `program`,
        /// `housekeeping` and `clock_level_voltage` arrays
        #[arg(value_name = "INPUT_JSON")]
        input: Utf8PathBuf,
        /// Directory the binaries are written to
        #[arg(short, long, default_value = ".")]
        out_dir: Utf8PathBuf,
        /// Print the per-type report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a binary as 32-bit big-endian words, as read by the FPGA
    Dump {
        #[arg(value_name = "FILE")]
        file: Utf8PathBuf,
        /// Print 32-bit words (the default)
        #[arg(short, long, conflicts_with = "memory_type")]
        words: bool,
        /// Decode elements using this memory type's width instead of printing words
        #[arg(short = 't', long = "type")]
        memory_type: Option<MemoryType>,
    },
    /// List the memory types
    Types,
}

fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    match cli.command {
        Command::Write { input, out_dir, json } => {
            let arrays = MemoryArrays::from_json_file(&input)?;
            let report = fpgabin::upload(&out_dir, &arrays);
            if json {
                let entries: Vec<_> = report
                    .entries
                    .iter()
                    .map(|(t, r)| match r {
                        Ok(outcome) => serde_json::json!({ "memory": t, "outcome": outcome }),
                        Err(e) => serde_json::json!({ "memory": t, "error": e.to_string() }),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for (t, r) in &report.entries {
                    match r {
                        Ok(WriteOutcome::Written { path, byte_count }) => {
                            println!("{:<8} written  {} ({} bytes)", t.name(), path, byte_count)
                        }
                        Ok(WriteOutcome::Skipped(reason)) => {
                            println!("{:<8} skipped  {}", t.name(), reason)
                        }
                        Err(e) => println!("{:<8} FAILED   {}", t.name(), e),
                    }
                }
            }
            if !report.is_success() {
                bail!("{} memory type(s) failed", report.failures().len());
            }
        }
        Command::Dump { file, memory_type, .. } => match memory_type {
            Some(t) => {
                let bytes = std::fs::read(&file).with_context(|| format!("Failed to read {}", file))?;
                for (i, v) in packer::decode_array(&bytes, t.definition().width)?.iter().enumerate() {
                    println!("{:5}  {}", i, v);
                }
            }
            None => {
                for (i, w) in readback::read_words(&file)?.iter().enumerate() {
                    println!("{:5}  0x{:08x}  {}", i, w, w);
                }
            }
        },
        Command::Types => {
            println!("{:<20} {:<8} {:>6} {:>6} {:>6}", "TYPE", "FILE", "WIDTH", "COUNT", "BYTES");
            for t in MemoryType::ALL {
                let d = t.definition();
                println!(
                    "{:<20} {:<8} {:>6} {:>6} {:>6}",
                    format!("{:?}", t),
                    d.name,
                    d.width.to_string(),
                    d.element_count,
                    d.byte_len()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dump_flags() {
        let cli = Cli::try_parse_from(["fpgabin", "dump", "RegMem.bin", "--words"]).unwrap();
        assert!(matches!(cli.command, Command::Dump { words: true, memory_type: None, .. }));

        let cli = Cli::try_parse_from(["fpgabin", "dump", "HSKMem.bin", "-t", "HSKMem"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Dump { words: false, memory_type: Some(MemoryType::Housekeeping), .. }
        ));

        assert!(Cli::try_parse_from(["fpgabin", "dump", "x.bin", "--words", "--type", "reg"]).is_err());
    }
}
