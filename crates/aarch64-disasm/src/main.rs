use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::fmt::Write as _;
use std::path::Path;

use aarch64_rs::disasm::fmt_instruction;
use aarch64_rs::{decode_iter, DecodeFlags, Instruction, Mnemonic};

mod model;
use model::{load_raw_bin, read_u32, segment_slice};

#[derive(Parser, Debug)]
#[command(author, version, about = "AArch64 disassembler CLI", long_about = None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u64)]
    base: u64,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_u64(s: &str) -> Result<u64> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u64::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u64>()?)
    }
}

fn render_line(insn: &Instruction, raw: u32, show_bytes: bool) -> String {
    let mut line = format!("{:#010x}: ", insn.address);
    if show_bytes {
        for b in raw.to_le_bytes() {
            let _ = write!(line, "{b:02x} ");
        }
        line.push_str("  ");
    }
    if insn.mnemonic == Mnemonic::Invalid {
        let _ = write!(line, ".word {raw:#010x}");
    } else {
        line.push_str(&fmt_instruction(insn));
    }
    line
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let img = load_raw_bin(Path::new(&cli.input), cli.base, cli.skip, cli.len)?;

    match cli.cmd {
        Command::Sections => {
            println!(
                "{:<10} {:<12} {:<12} {:<6} {:<6}",
                "name", "start", "end", "perms", "kind"
            );
            for s in &img.segments {
                let start = s.base;
                let end = s.base + (s.bytes.len() as u64);
                println!(
                    "{:<10} {start:#010x} {end:#010x} {:<6} {:<6}",
                    s.name, s.perms, s.kind
                );
            }
        }
        Command::Range {
            start,
            end,
            show_bytes,
            format,
            out,
        } => {
            let start = parse_u64(&start)?;
            let end = parse_u64(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");
            anyhow::ensure!((end - start) % 4 == 0, "range length must be a multiple of 4");
            let Some(slice) = segment_slice(&img, start, end) else {
                anyhow::bail!("range {start:#x}..{end:#x} is not fully mapped");
            };

            // Keep going over undefined words and report collaborator
            // encodings as inert records, so the listing never stops short.
            let flags = DecodeFlags::REMAP_ALIASES | DecodeFlags::CONTINUE_ON_ERROR;
            let mut insns = Vec::with_capacity(slice.len() / 4);
            for item in decode_iter(slice, start, flags)? {
                insns.push(item?);
            }

            let buf = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&insns)?,
                OutputFormat::Text => {
                    let mut buf = String::new();
                    for insn in &insns {
                        let raw = read_u32(&img, insn.address).unwrap_or(0);
                        let _ = writeln!(buf, "{}", render_line(insn, raw, show_bytes));
                    }
                    buf
                }
            };
            if let Some(path) = out {
                std::fs::write(path, buf)?;
            } else {
                print!("{buf}");
            }
        }
    }

    Ok(())
}
