// Colored terminal output for moderation verdicts and health reports.

use colored::Colorize;

use super::truncate_chars;
use crate::models::{HealthReport, ModerationResult};

/// Longest text shown before truncation.
const MAX_DISPLAY_CHARS: usize = 120;

/// Display a single moderation verdict.
pub fn display_result(result: &ModerationResult) {
    let verdict = if result.is_toxic {
        "TOXIC".red().bold()
    } else {
        "CLEAN".green().bold()
    };

    println!("\n  Verdict:    {verdict}");
    println!("  Confidence: {:.2}", result.confidence);
    println!(
        "  Original:   {}",
        truncate_chars(&result.original_text, MAX_DISPLAY_CHARS)
    );
    if result.is_toxic {
        println!(
            "  Filtered:   {}",
            truncate_chars(&result.filtered_text, MAX_DISPLAY_CHARS).dimmed()
        );
    }
    println!();
}

/// Display a service health report.
pub fn display_health(url: &str, report: &HealthReport) {
    println!("{} {}", "Service:".dimmed(), url);
    println!("{} {}", "Status: ".dimmed(), report.status.green());
    println!("{} {}", "Model:  ".dimmed(), report.model);
}
