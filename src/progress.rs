use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::time::Instant;

const BAR_STEPS: u64 = 1000;

/// Advisory progress feedback. Called once per candidate file.
pub trait ProgressSink {
    fn report(&mut self, label: &str, path: &Path, fraction: f32);

    fn finish(&mut self) {}
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _label: &str, _path: &Path, _fraction: f32) {}
}

/// Progress bar on stderr.
pub struct ProgressReporter {
    bar: ProgressBar,
    files_seen: usize,
    start_time: Instant,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {percent:>3}% {prefix}\n{wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");

        let bar = ProgressBar::with_draw_target(Some(BAR_STEPS), ProgressDrawTarget::stderr());
        bar.set_style(style);

        Self {
            bar,
            files_seen: 0,
            start_time: Instant::now(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressReporter {
    fn report(&mut self, label: &str, path: &Path, fraction: f32) {
        self.files_seen += 1;
        self.bar.set_prefix(label.to_string());
        self.bar.set_message(format!("Checking: {}", path.display()));
        let position = (fraction.clamp(0.0, 1.0) * BAR_STEPS as f32) as u64;
        self.bar.set_position(position);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
        log::debug!(
            "Checked {} files in {:.2}s",
            self.files_seen,
            self.start_time.elapsed().as_secs_f64()
        );
    }
}
