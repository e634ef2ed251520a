//! Progress indicators
//!
//! Progress bars for batch query runs.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for running a list of queries
///
/// Hidden when `total` is zero so empty batches print nothing.
pub fn query_progress(total: u64) -> ProgressBar {
    if total == 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} queries ({eta})")
    {
        pb.set_style(style.progress_chars("█▓░"));
    }
    pb
}
