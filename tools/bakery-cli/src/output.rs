//! Output formatting for the CLI, and the terminal cart surface.

use bakery_cart::{Notice, NoticeKind, OrderConfirmation};
use bakery_view::{CartSnapshot, Surface};
use console::style;
use tracing::debug;

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
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

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
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
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Draws the cart panel as text on stdout.
///
/// A CLI invocation is one event, so notices are printed immediately and
/// there is nothing to dismiss afterwards.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    output: Output,
}

impl TerminalSurface {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Surface for TerminalSurface {
    fn render(&mut self, snapshot: &CartSnapshot) {
        if self.output.is_json() {
            self.output.json(snapshot);
            return;
        }

        match snapshot.count_badge {
            Some(count) => self.output.header(&format!("Cart ({})", count)),
            None => self.output.header("Cart"),
        }

        if let Some(message) = snapshot.empty_message {
            println!("  {}", style(message).dim());
        }

        for (i, line) in snapshot.lines.iter().enumerate() {
            let number = format!("{}.", i + 1);
            let price = format!("{}{}", snapshot.currency_symbol, line.price);
            let quantity = format!("x{}", line.quantity);
            let total = format!("{}{}", snapshot.currency_symbol, line.line_total);
            self.output.table_row(
                &[&number, &line.name, &price, &quantity, &total, line.id.as_str()],
                &[3, 20, 10, 4, 10, 0],
            );
        }

        if snapshot.footer_visible {
            println!(
                "\n  {} {}{}",
                style("Total:").bold(),
                snapshot.currency_symbol,
                style(&snapshot.total).bold()
            );
        }
    }

    fn show_notice(&mut self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => self.output.success(&notice.message),
            NoticeKind::Error => self.output.error(&notice.message),
        }
    }

    fn clear_notice(&mut self) {}

    fn set_panel_visible(&mut self, visible: bool) {
        debug!(visible, "panel visibility");
    }

    fn show_confirmation(&mut self, confirmation: &OrderConfirmation) {
        if self.output.is_json() {
            self.output.json(confirmation);
            return;
        }
        self.output.header(&format!("Order {}", confirmation.order_id));
        for line in &confirmation.lines {
            println!("  {} x{}  {}", line.name, line.quantity, line.line_total);
        }
        println!();
        println!("{}", confirmation.message());
    }
}
