//! rvdump - a RISC-V (RV32IMC) ELF-to-text disassembler
//!
//! Usage:
//!   rvdump <input> <output>
//!
//! Reads a 32-bit little-endian ELF file and writes a report with a
//! disassembled `.text` listing and a formatted `.symtab` dump. Any
//! failure prints a single-line diagnostic and exits with status 1.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use rvdump_formats::Elf32;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod report;

#[derive(Parser)]
#[command(name = "rvdump")]
#[command(about = "RISC-V (RV32IMC) ELF-to-text disassembler", long_about = None)]
struct Cli {
    /// Path to the ELF32 input file
    input: PathBuf,

    /// Path of the report file to write
    output: PathBuf,
}

fn run(cli: &Cli) -> Result<()> {
    let data = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let elf = Elf32::parse(&data)?;

    let file = fs::File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut out = BufWriter::new(file);
    report::write_report(&mut out, &elf)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Collapse clap's multi-line usage text to the one-line
            // diagnostic contract.
            let reason = err.to_string();
            let first = reason.lines().next().unwrap_or("invalid arguments");
            eprintln!("Error: {}", first.strip_prefix("error: ").unwrap_or(first));
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
