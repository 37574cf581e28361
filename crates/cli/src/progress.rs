//! Progress reporting for CLI runs

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over input bytes, falling back to a spinner when the
/// input size is unknown (compressed files)
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter; `total_bytes` of None yields a spinner
    pub fn new(total_bytes: Option<u64>) -> Self {
        let bar = match total_bytes {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}")
                        .unwrap()
                        .progress_chars("█▓▒░-"),
                );
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(
                    ProgressStyle::default_spinner()
                        .template("[{elapsed_precise}] {spinner} {msg}")
                        .unwrap(),
                );
                bar
            }
        };

        Self { bar }
    }

    /// Update byte position and the record counter message
    pub fn update(&self, bytes: u64, records: usize) {
        self.bar.set_position(bytes);
        self.bar.set_message(format!("{} records", records));
    }

    /// Finish the bar with a closing message
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

/// Human-readable run summary
pub fn print_summary_report(
    input: &Path,
    output: Option<&Path>,
    total: usize,
    missing_field: usize,
    undefined: usize,
    mean_weight: Option<f64>,
) {
    println!();
    println!("Scoring complete");
    println!("  Input:           {}", input.display());
    if let Some(output) = output {
        println!("  Output:          {}", output.display());
    }
    println!("  Records:         {}", total);
    println!("  Missing field:   {}", missing_field);
    println!("  Undefined score: {}", undefined);
    match mean_weight {
        Some(mean) => println!("  Mean weight:     {:.4}", mean),
        None => println!("  Mean weight:     n/a"),
    }
}
