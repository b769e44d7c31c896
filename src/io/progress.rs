//! Script batch progress with one summary line per finished script

use crate::io::cli::RunSummary;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Outcome of one script as shown in the batch log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptReport {
    /// File name of the script
    pub name: String,
    /// Commands executed
    pub executed: usize,
    /// Lines rejected as invalid input
    pub rejected: usize,
}

impl ScriptReport {
    fn line(&self) -> String {
        let mark = if self.rejected == 0 { '✓' } else { '✗' };
        format!(
            "{mark} {}: {} commands, {} rejected",
            self.name, self.executed, self.rejected
        )
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Scripts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Tracks a batch of scripts on a single bar
///
/// The bar advances once per script and names the script being run. Each
/// finished script prints a summary line above the bar and is kept as a
/// [`ScriptReport`].
pub struct ProgressManager {
    bar: ProgressBar,
    reports: Vec<ScriptReport>,
}

impl ProgressManager {
    /// Create a manager drawing to stderr for `script_count` scripts
    pub fn new(script_count: usize) -> Self {
        Self::with_target(script_count, ProgressDrawTarget::stderr())
    }

    /// Create a manager that never draws, for tests and piped output
    pub fn hidden(script_count: usize) -> Self {
        Self::with_target(script_count, ProgressDrawTarget::hidden())
    }

    fn with_target(script_count: usize, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(script_count as u64), target);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            reports: Vec::with_capacity(script_count),
        }
    }

    /// Number of scripts in the batch
    pub fn script_count(&self) -> usize {
        self.bar.length().unwrap_or_default() as usize
    }

    /// Name the script about to run
    pub fn start_script(&self, path: &Path) {
        self.bar.set_message(display_name(path));
    }

    /// Record a finished script and advance the bar
    pub fn finish_script(&mut self, path: &Path, summary: &RunSummary) {
        let report = ScriptReport {
            name: display_name(path),
            executed: summary.executed,
            rejected: summary.rejected,
        };
        self.bar.println(report.line());
        self.bar.inc(1);
        self.reports.push(report);
    }

    /// Reports of finished scripts in run order
    pub fn reports(&self) -> &[ScriptReport] {
        &self.reports
    }

    /// Scripts finished so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar, leaving the summary lines
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
