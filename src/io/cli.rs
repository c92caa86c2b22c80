//! Command-line interface for building a collage from photo files

use crate::io::configuration::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_TILE_SIZE};
use crate::io::error::{CollageError, Result};
use crate::io::progress::{ProgressManager, ProgressReporter, SilentProgress};
use crate::layout::LayoutEngine;
use crate::model::CanvasSpec;
use crate::session::Session;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "photocollage")]
#[command(
    author,
    version,
    about = "Arrange photos into an overlapping scrapbook-style collage"
)]
/// Command-line arguments for the collage builder
pub struct Cli {
    /// Photo files or directories of photos to import
    #[arg(value_name = "PHOTOS", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_CANVAS_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Base photo size in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub tile_size: u32,

    /// Random seed for a reproducible layout
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory the collage is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Bring the tile at INDEX to the front before exporting (repeatable, applied in order)
    #[arg(short, long = "front", value_name = "INDEX")]
    pub front: Vec<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Canvas specification from the size arguments
    ///
    /// # Errors
    ///
    /// Returns an error if any size is zero
    pub fn canvas_spec(&self) -> Result<CanvasSpec> {
        CanvasSpec::new(self.width, self.height, self.tile_size)
    }
}

/// Drives a session from import through export
pub struct CollageProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    session: Session,
}

impl CollageProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
            session: Session::new(),
        }
    }

    /// Session state after processing
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Progress display, unless running quietly
    pub const fn progress_manager(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    /// Import, lay out, restack and export
    ///
    /// Returns the path of the exported collage. Progress bars are cleared
    /// whether or not processing succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An input path does not exist
    /// - No photo could be imported
    /// - A restack index is out of range
    /// - The collage cannot be written
    pub fn process(&mut self) -> Result<PathBuf> {
        let result = self.run();
        if let Some(ref manager) = self.progress_manager {
            manager.finish();
        }
        result
    }

    fn run(&mut self) -> Result<PathBuf> {
        let spec = self.cli.canvas_spec()?;
        let files = self.collect_files()?;

        let progress: &dyn ProgressReporter = match &self.progress_manager {
            Some(manager) => manager,
            None => &SilentProgress,
        };

        let summary = self.session.import_files(&files, progress);
        log::info!(
            "Loaded {}/{} files ({} photos in pool)",
            summary.imported,
            summary.processed,
            self.session.pool().len()
        );

        let mut engine = self
            .cli
            .seed
            .map_or_else(LayoutEngine::from_os_rng, LayoutEngine::from_seed);
        let tile_count = self
            .session
            .generate_layout(&mut engine, spec, progress)?
            .len();
        log::info!("Placed {tile_count} tiles on a {}x{} canvas", spec.width(), spec.height());

        for &index in &self.cli.front {
            let stack_order = self.session.bring_to_front(index)?;
            log::debug!("Tile {index} raised to stack order {stack_order}");
        }

        self.session.export(&self.cli.output_dir)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for input in &self.cli.inputs {
            if input.is_dir() {
                files.extend(Self::directory_files(input)?);
            } else if input.is_file() {
                files.push(input.clone());
            } else {
                return Err(crate::io::error::invalid_parameter(
                    "input",
                    &input.display(),
                    &"no such file or directory",
                ));
            }
        }
        Ok(files)
    }

    fn directory_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let read_error = |source| CollageError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory",
            source,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
