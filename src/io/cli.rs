//! Command-line interface for rendering a single wallpaper to SVG

use crate::algorithm::deformation::Composition;
use crate::algorithm::executor::{RenderRequest, Wallpaper};
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH, STDOUT_PATH};
use crate::io::error::{Result, WallpaperError};
use crate::io::svg::write_svg;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "wallweave")]
#[command(
    author,
    version,
    about = "Generate deterministic geometric wallpapers as SVG"
)]
/// Command-line arguments for the wallpaper generator
pub struct Cli {
    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Seed string; the same seed always yields the same wallpaper
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Embed every resolved decision as a comment in the output
    #[arg(short, long)]
    pub log_choices: bool,

    /// Output file, `-` for standard output
    #[arg(short, long, default_value = STDOUT_PATH)]
    pub output: PathBuf,

    /// Force a decision, e.g. `--set pattern=Squares` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, String)>,

    /// Apply every enabled deformation in turn instead of only the first
    #[arg(short, long)]
    pub chain_deformations: bool,
}

/// Split a `KEY=VALUE` argument
///
/// # Errors
///
/// Returns an error message if there is no `=` or the key is empty
pub fn parse_override(argument: &str) -> std::result::Result<(String, String), String> {
    match argument.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{argument}'")),
    }
}

impl Cli {
    /// Translate arguments into a render request
    pub fn request(&self) -> RenderRequest {
        let composition = if self.chain_deformations {
            Composition::Chained
        } else {
            Composition::FirstEnabled
        };

        let mut request = RenderRequest::new(self.width, self.height)
            .with_log_choices(self.log_choices)
            .with_composition(composition);
        request.seed = self.seed.clone().map(String::into_bytes);
        request.overrides = self.overrides.iter().cloned().collect();
        request
    }

    /// Whether output goes to standard output
    pub fn writes_stdout(&self) -> bool {
        self.output == Path::new(STDOUT_PATH)
    }
}

/// Renders the wallpaper described by the CLI arguments
pub struct RenderProcessor {
    cli: Cli,
}

impl RenderProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render and write the wallpaper
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is zero
    /// - An override names no available option
    /// - The output cannot be created or written
    pub fn process(&self) -> Result<()> {
        let start = Instant::now();
        let wallpaper = Wallpaper::generate(&self.cli.request())?;

        if self.cli.writes_stdout() {
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_svg(&wallpaper, &mut out)?;
        } else {
            self.write_file(&wallpaper)?;
        }

        log::info!(
            "rendered {}x{} to {} in {:.2?}",
            self.cli.width,
            self.cli.height,
            self.cli.output.display(),
            start.elapsed()
        );
        Ok(())
    }

    fn write_file(&self, wallpaper: &Wallpaper) -> Result<()> {
        let path = &self.cli.output;
        let file = File::create(path).map_err(|source| WallpaperError::Output {
            path: path.clone(),
            operation: "create",
            source,
        })?;

        let mut out = BufWriter::new(file);
        write_svg(wallpaper, &mut out).map_err(|error| match error {
            WallpaperError::Output { source, .. } => WallpaperError::Output {
                path: path.clone(),
                operation: "write",
                source,
            },
            other => other,
        })?;

        out.flush().map_err(|source| WallpaperError::Output {
            path: path.clone(),
            operation: "flush",
            source,
        })
    }
}
