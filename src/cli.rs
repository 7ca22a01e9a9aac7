// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "gpu-scene")]
#[command(about = "Builds GPU-ready geometry records from a scene description", long_about = None)]
pub struct Cli {
    /// Scene description file (JSON). Uses the built-in demo scene when omitted.
    pub scene: Option<PathBuf>,

    /// Rotate every mesh object by this many degrees about Y after the
    /// initial build, exercising the in-place re-placement path.
    #[arg(long = "spin")]
    pub spin: Option<f32>,

    /// Suppress per-lane record statistics.
    #[arg(long = "quiet", default_value = "false")]
    pub quiet: bool,
}
