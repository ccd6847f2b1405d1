//! nzp CLI - neural-predicted lossless compression.
//!
//! A command-line front end for the `nzp` crate: compress and decompress
//! files through a tiny LSTM feeding a range coder, and inspect NZP
//! containers.

use clap::{Parser, Subcommand};
use nzp::{compress_file, decompress_file, describe_error, load_model};
use nzp_core::error::NzpError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nzp")]
#[command(author, version, about = "Neural-predicted lossless compression")]
#[command(long_about = "
nzp compresses and decompresses files using a tiny LSTM statistical model
feeding a byte-aligned range coder.

Examples:
  nzp compress -m model.bin input.txt
  nzp compress -m model.bin input.txt -o input.nzp
  nzp decompress -m model.bin input.nzp
  nzp inspect input.nzp
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into an NZP container
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output path (defaults to `<input>.nzp`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Tiny LSTM weight file
        #[arg(short, long)]
        model: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress an NZP container
    #[command(alias = "d")]
    Decompress {
        /// NZP container to decompress
        input: PathBuf,

        /// Output path (defaults to `<input>` with `.nzp` stripped, or
        /// `<input>.out` if it has no `.nzp` extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Tiny LSTM weight file (must match the one used to compress)
        #[arg(short, long)]
        model: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print an NZP container's header fields
    #[command(alias = "i")]
    Inspect {
        /// NZP container to inspect
        input: PathBuf,
    },
}

fn default_compress_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".nzp");
    PathBuf::from(name)
}

fn default_decompress_output(input: &Path) -> PathBuf {
    match input.to_str() {
        Some(s) if s.ends_with(".nzp") => PathBuf::from(&s[..s.len() - 4]),
        _ => {
            let mut name = input.as_os_str().to_owned();
            name.push(".out");
            PathBuf::from(name)
        }
    }
}

fn run_compress(
    input: PathBuf,
    output: Option<PathBuf>,
    model_path: PathBuf,
    verbose: bool,
) -> Result<(), NzpError> {
    let output = output.unwrap_or_else(|| default_compress_output(&input));

    if verbose {
        println!("Loading model: {}", model_path.display());
    }
    let model = load_model(&model_path)?;

    if verbose {
        println!("Compressing {} -> {}", input.display(), output.display());
    }
    compress_file(&input, &output, &model)?;

    if verbose {
        println!("OK");
    }
    Ok(())
}

fn run_decompress(
    input: PathBuf,
    output: Option<PathBuf>,
    model_path: PathBuf,
    verbose: bool,
) -> Result<(), NzpError> {
    let output = output.unwrap_or_else(|| default_decompress_output(&input));

    if verbose {
        println!("Loading model: {}", model_path.display());
    }
    let model = load_model(&model_path)?;

    if verbose {
        println!("Decompressing {} -> {}", input.display(), output.display());
    }
    decompress_file(&input, &output, &model)?;

    if verbose {
        println!("OK");
    }
    Ok(())
}

fn run_inspect(input: PathBuf) -> Result<(), NzpError> {
    let mut file = std::fs::File::open(&input)?;
    let (header, payload) = nzp_container::read(&mut file)?;

    println!("Magic:          {:#010x}", nzp_container::MAGIC);
    println!("Format version: {}", nzp_container::FORMAT_VERSION);
    println!("Model ID:       {}", header.model_id);
    println!("Model Hash:     {:#018x}", header.model_hash);
    println!("Original size:  {}", header.original_size);
    println!("CRC32:          {:#010x}", header.checksum);
    println!("Payload bytes:  {}", payload.len());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            model,
            verbose,
        } => run_compress(input, output, model, verbose),
        Commands::Decompress {
            input,
            output,
            model,
            verbose,
        } => run_decompress(input, output, model, verbose),
        Commands::Inspect { input } => run_inspect(input),
    };

    if let Err(err) = result {
        eprintln!("Error ({}): {}", describe_error(&err), err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
