//! CLI entry point for the wallpaper generator

use clap::Parser;
use wallweave::io::cli::{Cli, RenderProcessor};

fn main() -> wallweave::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    RenderProcessor::new(cli).process()
}
