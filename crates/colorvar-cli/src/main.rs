//! Command-line front end for colorvar.
//!
//! Reads stylesheet text from a file (or stdin), runs the conversion and
//! prints the declaration block followed by the rewritten stylesheet. The
//! conversion itself cannot fail; the only error paths here are I/O.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colorvar::convert;

#[derive(Parser, Debug)]
#[command(
    name = "colorvar",
    version,
    about = "Extract color literals from a stylesheet into preprocessor variables"
)]
struct Cli {
    /// Stylesheet file to convert. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Target preprocessor: less, scss or sass. Anything else gets
    /// $ variables.
    #[arg(short, long, default_value = "scss")]
    preprocessor: String,

    /// Base name for generated variables; the sigil is added if missing.
    #[arg(short = 'x', long, default_value = "color")]
    prefix: String,

    /// Print only the variable declaration block.
    #[arg(long)]
    declarations_only: bool,
}

fn read_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = read_source(cli.input.as_deref())?;
    let conversion = convert(&source, &cli.preprocessor, &cli.prefix);

    if cli.declarations_only {
        println!("{}", conversion.declarations);
    } else {
        println!("{}", conversion.merged());
    }

    Ok(())
}
