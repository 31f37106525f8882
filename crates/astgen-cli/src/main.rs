//! astgen CLI entry point.

use std::path::PathBuf;
use std::process;

use astgen::{DEFAULT_OUTPUT, Grammar, expression_grammar};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astgen")]
#[command(about = "Generate expression-tree definitions")]
struct Cli {
    /// Output file (must not exist yet)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Grammar TOML file (defaults to the built-in expression grammar)
    #[arg(short, long)]
    grammar: Option<PathBuf>,

    /// Emit `pub` on the trait, structs and fields
    #[arg(long = "pub")]
    public: bool,

    /// Write to stdout instead of a file
    #[arg(long)]
    stdout: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so --stdout output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("astgen=info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut grammar = match &cli.grammar {
        Some(path) => {
            debug!(path = %path.display(), "loading grammar");
            Grammar::from_file(path)?
        }
        None => expression_grammar(),
    };
    grammar.public |= cli.public;

    if cli.stdout {
        print!("{}", astgen::generate(&grammar));
        return Ok(());
    }

    astgen::generate_to_file(&grammar, &cli.out)?;
    info!(
        variants = grammar.variant.len(),
        "generated {}",
        cli.out.display()
    );
    Ok(())
}
