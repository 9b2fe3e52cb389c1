//! Per-file status lines and the end-of-run summary table.
//!
//! Presentation only: consumes [`FileResult`]s and computes nothing the
//! engine has not already decided.

use owo_colors::OwoColorize;

use crate::process::{FileResult, FileStatus};
use crate::{debug, log};

/// Print the status line for one result as it happens.
///
/// Errors and minifications always print; quiet statuses (ignored,
/// no change, skipped) only under verbose.
pub fn log_result(result: &FileResult) {
    match result.status {
        FileStatus::Error => {
            let message = result.error.as_deref().unwrap_or("unknown error");
            log!("error"; "{}: {message}", result.file_path);
        }
        FileStatus::Minified => {
            log!(
                "minify";
                "{} ({} -> {}, -{:.1}%)",
                result.file_path,
                format_size(result.original_size),
                format_size(result.minified_size),
                result.reduction_percent
            );
        }
        FileStatus::DryRunMinified => {
            log!(
                "dry-run";
                "{} ({} -> {}, -{:.1}%)",
                result.file_path,
                format_size(result.original_size),
                format_size(result.minified_size),
                result.reduction_percent
            );
        }
        FileStatus::Ignored => debug!("ignore"; "{}", result.file_path),
        FileStatus::NoChange => debug!("minify"; "{} (no change)", result.file_path),
        FileStatus::Skipped => debug!("skip"; "{}", result.file_path),
    }
}

/// Print the end-of-run summary table with per-file and aggregate sizes.
pub fn print_summary(results: &[FileResult], dry_run: bool) {
    if results.is_empty() {
        log!("summary"; "no matching files found");
        return;
    }

    let file_width = results
        .iter()
        .map(|r| r.file_path.len())
        .chain(["File".len(), "Total".len()])
        .max()
        .unwrap_or(4);

    println!();
    if dry_run {
        println!("{}", "dry run: no files were written".bright_blue().bold());
    }
    // Pad before styling so ANSI codes don't count toward column widths.
    let header = format!(
        "{:<file_width$}  {:>10}  {:>10}  {:>8}  Status",
        "File", "Original", "Minified", "Saved",
    );
    println!("{}", header.bold());

    let mut total_original = 0u64;
    let mut total_minified = 0u64;
    for result in results {
        let (original, minified, saved) = match result.status {
            FileStatus::Minified | FileStatus::DryRunMinified | FileStatus::NoChange => {
                total_original += result.original_size;
                total_minified += result.minified_size;
                (
                    format_size(result.original_size),
                    format_size(result.minified_size),
                    format!("{:.1}%", result.reduction_percent),
                )
            }
            _ => (String::from("-"), String::from("-"), String::from("-")),
        };
        let status = colorize_status(result.status);
        println!(
            "{:<file_width$}  {original:>10}  {minified:>10}  {saved:>8}  {status}",
            result.file_path,
        );
        if let (FileStatus::Error, Some(message)) = (result.status, result.error.as_deref()) {
            println!("{:<file_width$}  {}", "", message.red());
        }
    }

    let total_saved = if total_original == 0 {
        0.0
    } else {
        (total_original as i64 - total_minified as i64) as f64 / total_original as f64 * 100.0
    };
    let totals = format!(
        "{:<file_width$}  {:>10}  {:>10}  {:>8}",
        "Total",
        format_size(total_original),
        format_size(total_minified),
        format!("{total_saved:.1}%"),
    );
    println!("{}", totals.bold());
}

/// Render a status with its color.
fn colorize_status(status: FileStatus) -> String {
    match status {
        FileStatus::Minified => status.to_string().green().to_string(),
        FileStatus::DryRunMinified => status.to_string().bright_blue().to_string(),
        FileStatus::Ignored | FileStatus::Skipped => status.to_string().dimmed().to_string(),
        FileStatus::NoChange => status.to_string().yellow().to_string(),
        FileStatus::Error => status.to_string().red().bold().to_string(),
    }
}

/// Format a byte count as B / KB / MB.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.2} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.2} KB", bytes_f / KB)
    } else {
        format!("{bytes} B")
    }
}
