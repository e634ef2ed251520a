//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// One ranked row of search output
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow<'a> {
    /// 1-based position in the ranking
    pub rank: usize,
    /// Item identifier
    pub id: u64,
    /// Display name
    pub name: &'a str,
    /// SKU, may be empty
    pub sku: &'a str,
    /// Weighted score
    pub score: f64,
    /// Fields that contributed
    pub matched_fields: usize,
}

impl ResultRow<'_> {
    /// Render the row without colors
    pub fn plain(&self) -> String {
        let sku = if self.sku.is_empty() { "-" } else { self.sku };
        format!(
            "{:>3}. {:<32} {:<12} {:>8}  ({})",
            self.rank,
            truncate(self.name, 32),
            truncate(sku, 12),
            format_score(self.score),
            format_count(self.matched_fields, "field", "fields"),
        )
    }

    /// Print the row, dimming the metadata
    pub fn print(&self) {
        let sku = if self.sku.is_empty() { "-" } else { self.sku };
        println!(
            "{:>3}. {:<32} {:<12} {:>8}  {}",
            self.rank,
            truncate(self.name, 32).bold(),
            truncate(sku, 12).dimmed(),
            format_score(self.score).green(),
            format!("(#{}, {})", self.id, format_count(self.matched_fields, "field", "fields")).dimmed(),
        );
    }
}

/// Format a relevance score for display
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Shorten `text` to at most `max` chars, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
