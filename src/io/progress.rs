//! Progress reporting for photo import and tile placement

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, OnceLock};

/// Long-running stage a progress update belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Decoding and normalizing imported photos
    Loading,
    /// Placing tiles on the layout grid
    Placing,
}

impl Phase {
    /// Label shown next to the progress bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "Loading photos",
            Self::Placing => "Placing photos",
        }
    }
}

/// Receives `(completed, total)` counters during long-running work
///
/// Updates are for user feedback only; implementations must tolerate
/// being called from several worker threads.
pub trait ProgressReporter: Sync {
    /// Report that `completed` out of `total` units of `phase` are done
    fn report(&self, phase: Phase, completed: usize, total: usize);
}

/// Reporter that discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&self, _phase: Phase, _completed: usize, _total: usize) {}
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("{{msg:<15}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal progress display with one bar per phase
///
/// Bars are created the first time their phase reports. Updates arriving
/// after [`ProgressManager::finish`] are ignored.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    loading: OnceLock<ProgressBar>,
    placing: OnceLock<ProgressBar>,
    finished: AtomicBool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            loading: OnceLock::new(),
            placing: OnceLock::new(),
            finished: AtomicBool::new(false),
        }
    }

    fn bar(&self, phase: Phase) -> &ProgressBar {
        let slot = match phase {
            Phase::Loading => &self.loading,
            Phase::Placing => &self.placing,
        };
        slot.get_or_init(|| {
            let bar = ProgressBar::new(0);
            bar.set_style(PROGRESS_STYLE.clone());
            bar.set_message(phase.label());
            self.multi_progress.add(bar)
        })
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        self.finished.store(true, Ordering::Release);
        for bar in [self.loading.get(), self.placing.get()].into_iter().flatten() {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    /// Whether [`ProgressManager::finish`] has run
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

impl ProgressReporter for ProgressManager {
    fn report(&self, phase: Phase, completed: usize, total: usize) {
        if self.is_finished() {
            return;
        }
        let bar = self.bar(phase);
        bar.set_length(total as u64);
        bar.set_position(completed as u64);
        if completed >= total {
            bar.finish();
        }
    }
}
