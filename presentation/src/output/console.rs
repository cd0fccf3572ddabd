//! Console output formatter for suggestion results

use colored::Colorize;
use scout_domain::{AgentResponse, DomainSuggestion, OutputFormat};

const HEADERS: [&str; 5] = ["Domain", "Score", "Available", "Price", "Renewal"];

/// Formats suggestion results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a response in the requested format
    pub fn render(format: OutputFormat, response: &AgentResponse) -> String {
        match format {
            OutputFormat::Table => Self::format(response),
            OutputFormat::Json => Self::format_json(response),
        }
    }

    /// Format the response as an aligned table followed by the model's notes
    pub fn format(response: &AgentResponse) -> String {
        let rows: Vec<[String; 5]> = response.domains.iter().map(Self::row).collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        output.push_str(&Self::header(&format!("{} suggestions", response.domains.len())));

        let header_line: Vec<String> = HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{:<w$}", h, w = w).cyan().bold().to_string())
            .collect();
        output.push_str(&header_line.join("  "));
        output.push('\n');

        for (suggestion, row) in response.domains.iter().zip(&rows) {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let padded = format!("{:<w$}", cell, w = w);
                    match (i, suggestion.available) {
                        (0, _) => padded.bold().to_string(),
                        (2, Some(true)) => padded.green().to_string(),
                        (2, Some(false)) => padded.red().to_string(),
                        _ => padded,
                    }
                })
                .collect();
            output.push_str(cells.join("  ").trim_end());
            output.push('\n');
        }

        let notes: Vec<&DomainSuggestion> = response
            .domains
            .iter()
            .filter(|d| d.reasoning.is_some())
            .collect();
        if !notes.is_empty() {
            output.push_str(&format!("\n{}\n", "Reasoning:".cyan().bold()));
            for suggestion in notes {
                output.push_str(&format!(
                    "  * {}: {}\n",
                    suggestion.domain.yellow(),
                    suggestion.reasoning.as_deref().unwrap_or_default()
                ));
            }
        }

        if response.domains.iter().any(|d| d.promotion == Some(true)) {
            output.push_str(&format!("\n{} promotional price\n", "*".yellow()));
        }

        if let Some(message) = &response.final_message {
            output.push_str(&format!("\n{} {}\n", "Note:".cyan().bold(), message));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(response: &AgentResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    fn row(suggestion: &DomainSuggestion) -> [String; 5] {
        let available = match suggestion.available {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        let promo = if suggestion.promotion == Some(true) { "*" } else { "" };

        [
            suggestion.domain.clone(),
            format!("{:.2}", suggestion.score),
            available.to_string(),
            Self::money(suggestion.price, suggestion.currency.as_deref(), promo),
            Self::money(suggestion.renewal_price, suggestion.currency.as_deref(), ""),
        ]
    }

    fn money(amount: Option<f64>, currency: Option<&str>, suffix: &str) -> String {
        match (amount, currency) {
            (Some(amount), Some(currency)) => format!("{:.2} {}{}", amount, currency, suffix),
            (Some(amount), None) => format!("{:.2}{}", amount, suffix),
            (None, _) => "-".to_string(),
        }
    }

    fn header(title: &str) -> String {
        format!("{}\n\n", format!("=== {} ===", title).cyan().bold())
    }
}
