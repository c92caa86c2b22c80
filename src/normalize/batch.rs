//! Concurrent normalization of a batch of inputs

use crate::io::error::{CollageError, Result};
use crate::io::progress::{Phase, ProgressReporter};
use crate::model::NormalizedImage;
use crate::normalize::media::RawImage;
use crate::normalize::normalizer::normalize;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Mutex;

/// Input left out of the pool together with the reason
#[derive(Debug)]
pub struct SkippedInput {
    /// Label of the skipped input
    pub label: PathBuf,
    /// Why it was skipped
    pub error: CollageError,
}

/// Outcome of normalizing a batch
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successfully normalized photos in submission order
    pub images: Vec<NormalizedImage>,
    /// Number of inputs processed, successful or not
    pub processed: usize,
    /// Inputs that were skipped
    pub skipped: Vec<SkippedInput>,
}

/// Normalize in-memory inputs concurrently
///
/// Returns once every input has either succeeded or been skipped.
pub fn normalize_batch(raws: Vec<RawImage>, progress: &dyn ProgressReporter) -> BatchReport {
    let total = raws.len();
    let outcomes = raws.into_par_iter().map(|raw| {
        let outcome = normalize(&raw);
        (raw.label, outcome)
    });
    collect_outcomes(total, outcomes, progress)
}

/// Read and normalize files concurrently
///
/// Unreadable files are skipped like undecodable ones.
pub fn normalize_files(paths: &[PathBuf], progress: &dyn ProgressReporter) -> BatchReport {
    let outcomes = paths.par_iter().map(|path| {
        let outcome = RawImage::from_path(path).and_then(|raw| normalize(&raw));
        (path.clone(), outcome)
    });
    collect_outcomes(paths.len(), outcomes, progress)
}

fn collect_outcomes<I>(total: usize, outcomes: I, progress: &dyn ProgressReporter) -> BatchReport
where
    I: IndexedParallelIterator<Item = (PathBuf, Result<NormalizedImage>)>,
{
    if total == 0 {
        return BatchReport::default();
    }

    let completed = Mutex::new(0_usize);
    progress.report(Phase::Loading, 0, total);

    // Completion order is arbitrary; collect restores submission order.
    // Counting and reporting under one lock keeps updates monotonic.
    let results: Vec<(PathBuf, Result<NormalizedImage>)> = outcomes
        .inspect(|_| {
            if let Ok(mut done) = completed.lock() {
                *done += 1;
                progress.report(Phase::Loading, *done, total);
            }
        })
        .collect();

    let mut report = BatchReport {
        processed: results.len(),
        ..BatchReport::default()
    };

    for (label, outcome) in results {
        match outcome {
            Ok(image) => report.images.push(image),
            Err(error) => {
                log::warn!("{error}");
                report.skipped.push(SkippedInput { label, error });
            }
        }
    }

    log::info!(
        "Batch complete: {} of {} photos imported",
        report.images.len(),
        report.processed
    );

    report
}
