//! CLI entry point for the quadtree image encoder

use clap::Parser;
use quadcode::io::cli::{Cli, Session};
use std::process::ExitCode;

// Allow print for the final user-facing error report
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match Session::new(cli).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
