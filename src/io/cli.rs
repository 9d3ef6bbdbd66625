//! Command-line interface selecting an image source and running the encoder

use crate::encoding::{Strategy, encode_grid};
use crate::grid::PixelGrid;
use crate::io::configuration::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, Limits};
use crate::io::error::{Result, stream_error};
use crate::io::manual::read_manual_input;
use crate::io::pbm::load_pbm_file;
use crate::io::presenter::{write_code, write_grid};
use clap::{ArgAction, CommandFactory, Parser};
use log::info;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quadcode")]
#[command(
    version,
    about = "Encode binary images from PBM files or manual entry as P/B/X quadtree codes",
    disable_help_flag = true
)]
/// Command-line arguments for the encoder
pub struct Cli {
    /// Print help
    #[arg(short = '?', long, short_alias = 'h', action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Read the image interactively (width, height, then every pixel)
    #[arg(short, long, conflicts_with = "file")]
    pub manual: bool,

    /// Read the image from a plain PBM (P1) file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Maximum accepted image width
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    pub max_width: usize,

    /// Maximum accepted image height
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
    pub max_height: usize,

    /// How region uniformity is checked
    #[arg(long, value_enum, default_value_t = Strategy::Scan)]
    pub strategy: Strategy,

    /// Print only the code, without echoing the image
    #[arg(short, long)]
    pub quiet: bool,
}

/// Where the image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Prompted entry on the console
    Manual,
    /// Plain PBM file
    File(PathBuf),
}

impl Cli {
    /// Selected image source, if any
    pub fn source(&self) -> Option<Source> {
        if self.manual {
            Some(Source::Manual)
        } else {
            self.file.clone().map(Source::File)
        }
    }

    /// Size limits requested on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if either maximum is zero
    pub fn limits(&self) -> Result<Limits> {
        Limits::new(self.max_width, self.max_height)
    }
}

/// Runs one load-encode-print cycle for parsed arguments
pub struct Session {
    cli: Cli,
}

impl Session {
    /// Create a session for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against the process's standard streams
    ///
    /// # Errors
    ///
    /// Returns an error if loading, encoding, or printing fails
    pub fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run with explicit input and output streams
    ///
    /// Without a selected source, prints the help text and succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, encoding, or printing fails
    pub fn run_with<R: BufRead, W: Write>(&self, input: R, mut out: W) -> Result<()> {
        let Some(source) = self.cli.source() else {
            return write!(out, "{}", Cli::command().render_help())
                .map_err(|e| stream_error("write help", e));
        };

        let limits = self.cli.limits()?;
        let grid = Self::load(&source, input, &mut out, &limits)?;

        if !self.cli.quiet {
            write_grid(&mut out, &grid)?;
        }

        let code = encode_grid(&grid, self.cli.strategy)?;
        info!(
            "{}x{} image encoded as {} symbols",
            grid.width(),
            grid.height(),
            code.len()
        );
        write_code(&mut out, &code, self.cli.quiet)
    }

    fn load<R: BufRead, W: Write>(
        source: &Source,
        input: R,
        prompt: &mut W,
        limits: &Limits,
    ) -> Result<PixelGrid> {
        match source {
            Source::Manual => read_manual_input(input, prompt, limits),
            Source::File(path) => load_pbm_file(path, limits),
        }
    }
}
