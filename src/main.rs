//! xcs2svg CLI
//!
//! Usage:
//!   xcs2svg [OPTIONS] <INPUT>
//!
//! Options:
//!   -o, --out-dir <DIR>        Directory for per-canvas SVG files
//!   -m, --main-canvas <N>      Canvas written as the main output
//!       --main-output <FILE>   Path of the main output
//!       --no-main              Skip the main output
//!   -c, --config <FILE>        Configuration file (TOML format)
//!   -v, --verbose              Debug logging
//!   -h, --help                 Print help

use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};

use xcs2svg::{run, ConvertConfig};

#[derive(Parser)]
#[command(name = "xcs2svg")]
#[command(about = "Convert laser-cutter project files to SVG")]
struct Cli {
    /// Project file to convert
    input: PathBuf,

    /// Directory for per-canvas SVG files
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Canvas written as the main output
    #[arg(short, long)]
    main_canvas: Option<usize>,

    /// Path of the main output (default: <input stem>.svg in the output directory)
    #[arg(long)]
    main_output: Option<PathBuf>,

    /// Skip the main output
    #[arg(long, conflicts_with_all = ["main_canvas", "main_output"])]
    no_main: bool,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = match &cli.config {
        Some(path) => match ConvertConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ConvertConfig::default(),
    };
    let config = apply_overrides(config, &cli);

    match run(&cli.input, &config) {
        Ok(report) => {
            if let Some(main) = &report.main_output {
                info!("Main output: {}", main.display());
            }
            if !report.diagnostics.is_empty() {
                info!("{} display(s) skipped", report.diagnostics.len());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn apply_overrides(mut config: ConvertConfig, cli: &Cli) -> ConvertConfig {
    if let Some(dir) = &cli.out_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(index) = cli.main_canvas {
        config = config.with_main_canvas(Some(index));
    }
    if let Some(path) = &cli.main_output {
        config = config.with_main_file(path);
    }
    if cli.no_main {
        config = config.with_main_canvas(None);
    }
    config
}
