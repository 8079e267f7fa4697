use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crapi_gen::cmds;

#[derive(Parser)]
#[command(name = "unpack-extend")]
#[command(about = "Generate unpack_extend.h from the Chromium API table", long_about = None)]
#[command(version)]
struct Cli {
    /// API table: legacy APIspec.txt or its YAML form (.yaml/.yml)
    #[arg(
        short = 'a',
        long = "api",
        value_name = "FILE",
        default_value = "../glapi_parser/APIspec.txt"
    )]
    api: PathBuf,

    /// Directory holding the <category>_special lists (legacy format only)
    #[arg(
        short = 's',
        long = "specials-dir",
        value_name = "DIR",
        default_value = "."
    )]
    specials_dir: PathBuf,

    /// File whose contents replace the default copyright banner
    #[arg(short = 'b', long = "banner", value_name = "FILE")]
    banner: Option<PathBuf>,

    /// Write the header here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/* Logs go to stderr; stdout carries the generated header */
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cmds::codegen::run(cli.api, cli.specials_dir, cli.banner, cli.output)?;

    Ok(())
}
