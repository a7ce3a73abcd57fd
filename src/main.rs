use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use chunkmill::{DEFAULT_CHUNK_SIZE, SplitMode, split_text, unit_count};

/// Split long text into fixed-size chunks by character or word count
#[derive(Parser)]
#[command(name = "chunkmill", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Maximum units per chunk
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
    size: usize,

    /// Unit counted when sizing chunks
    #[arg(short, long, value_enum, default_value_t = ModeArg::Character)]
    mode: ModeArg,

    /// Emit the outcome as JSON instead of labeled chunks
    #[arg(long)]
    json: bool,

    /// Print input statistics instead of chunk bodies
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Character,
    Word,
}

impl From<ModeArg> for SplitMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Character => SplitMode::Character,
            ModeArg::Word => SplitMode::Word,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let text = read_input(cli.file.as_deref())?;
    let mode = SplitMode::from(cli.mode);

    let outcome = split_text(&text, mode, cli.size);

    if cli.stats {
        println!(
            "Characters: {}",
            unit_count(&text, SplitMode::Character)
        );
        println!("Words:      {}", unit_count(&text, SplitMode::Word));
        println!("Chunks:     {}", outcome.len());
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let total = outcome.len();
    for (index, chunk) in outcome.chunks.iter().enumerate() {
        println!(
            "=== Chunk {} of {} ({} {}) ===",
            index + 1,
            total,
            unit_count(chunk, mode),
            mode.unit_kind()
        );
        println!("{}", chunk);
        println!();
    }

    // Keep the notice off stdout so piped chunk data stays clean
    if let Some(truncation) = &outcome.truncation {
        eprintln!("{}", truncation.notice());
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
