//! Statistics reporting.

use console::style;

use crate::download::DownloadState;

/// Print statistics for the run.
pub fn print_download_stats(state: &DownloadState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Statistics:").bold());
    println!("  Directory: {}", state.target_dir.display());
    println!("  Staged:    {}", state.attempted());
    println!("  As .jpg:   {}", state.saved_first_try);
    println!("  As .png:   {}", state.saved_fallback);
    if state.gave_up > 0 {
        println!("  Failed:    {}", style(state.gave_up).red());
    }
    println!(
        "  Total:     {} downloaded",
        style(state.total_downloaded()).green()
    );
    println!("{}", style("═".repeat(50)).dim());
}
