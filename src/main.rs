//! CLI entry point for the photo collage builder

use clap::Parser;
use photocollage::io::cli::{Cli, CollageProcessor};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut processor = CollageProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
