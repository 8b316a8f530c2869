//! Output formatting for the CLI.

use aura_commerce::catalog::{Product, StockStatus};
use aura_commerce::checkout::OrderStatus;
use aura_commerce::money::Money;
use chrono::DateTime;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!(
            "{} {}",
            style(format!("[{}/{}]", num, total)).dim(),
            msg
        );
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a horizontal rule across the terminal.
    pub fn rule(&self) {
        if self.json {
            return;
        }
        let width = self.term_width().clamp(20, 80);
        println!("{}", style("─".repeat(width)).dim());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let template = ProgressStyle::default_spinner().template("{spinner:.green} {msg}");
        if let Ok(spinner_style) = template {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }
}

/// Column widths of a product listing: id, brand, name, price, stock.
pub const PRODUCT_COLUMNS: [usize; 5] = [4, 20, 26, 10, 14];

/// Print the header of a product listing.
pub fn product_table_header(output: &Output) {
    output.table_row(&["ID", "Brand", "Name", "Price", "Stock"], &PRODUCT_COLUMNS);
}

/// Print one product as a listing row.
pub fn product_row(output: &Output, product: &Product) {
    let price = product.price.display();
    output.table_row(
        &[
            product.id.as_str(),
            &truncate(&product.brand, PRODUCT_COLUMNS[1]),
            &truncate(&product.name, PRODUCT_COLUMNS[2]),
            &price,
            &stock_badge(product.stock_status()),
        ],
        &PRODUCT_COLUMNS,
    );
}

/// Colored stock label.
pub fn stock_badge(status: StockStatus) -> String {
    match status {
        StockStatus::InStock => style(status.label()).green().to_string(),
        StockStatus::LowStock(_) => style(status.label()).yellow().to_string(),
        StockStatus::OutOfStock => style(status.label()).red().to_string(),
    }
}

/// Colored order status.
pub fn order_status_badge(status: OrderStatus) -> String {
    match status {
        OrderStatus::Confirmed | OrderStatus::Delivered => {
            style(status.display_name()).green().to_string()
        }
        OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped => {
            style(status.display_name()).yellow().to_string()
        }
        OrderStatus::Cancelled | OrderStatus::Refunded => {
            style(status.display_name()).dim().to_string()
        }
    }
}

/// Price with the pre-sale price struck through, if any.
pub fn format_price(price: Money, original: Option<Money>) -> String {
    match original {
        Some(original) if original.amount_cents > price.amount_cents => format!(
            "{} {}",
            style(price.display()).bold(),
            style(original.display()).dim().strikethrough()
        ),
        _ => style(price.display()).bold().to_string(),
    }
}

/// Format a unix timestamp as a date.
pub fn format_date(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Format a unix timestamp as date and time (UTC).
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Cut `s` to at most `width` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Rating as stars plus the review count.
pub fn format_rating(rating: f64, reviews: u32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!(
        "{}{} {:.1} ({} reviews)",
        "★".repeat(full),
        "☆".repeat(5 - full),
        rating,
        reviews
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Aventus", 10), "Aventus");
        assert_eq!(truncate("Baccarat Rouge 540", 8), "Baccara…");
        assert_eq!(truncate("Acqua di Giò", 12), "Acqua di Giò");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(1_704_067_200), "2024-01-01");
        assert_eq!(format_timestamp(1_704_067_200), "2024-01-01 00:00 UTC");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.8, 23), "★★★★★ 4.8 (23 reviews)");
        assert_eq!(format_rating(3.2, 1), "★★★☆☆ 3.2 (1 reviews)");
    }
}
