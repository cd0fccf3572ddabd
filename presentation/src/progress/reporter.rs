//! Progress reporting for agent runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use scout_application::AgentProgressNotifier;
use scout_domain::AgentResponse;
use std::time::Duration;

/// Reports agent progress with a single spinner on stderr
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("domain-scout");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn tool_label(tool_name: &str) -> &str {
        match tool_name {
            "price_checker_tool" => "Checking price",
            "availability_checker_tool" => "Checking availability",
            other => other,
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

impl AgentProgressNotifier for ProgressReporter {
    fn on_iteration(&self, iteration: usize, max_iterations: usize) {
        self.spinner
            .set_message(format!("Thinking (step {}/{})", iteration, max_iterations));
    }

    fn on_tool_call(&self, tool_name: &str, argument: &str) {
        self.spinner
            .set_message(format!("{} for {}", Self::tool_label(tool_name), argument));
    }

    fn on_tool_result(&self, tool_name: &str, success: bool) {
        let mark = if success { "v".green() } else { "x".red() };
        self.spinner
            .println(format!("  {} {}", mark, Self::tool_label(tool_name)));
    }

    fn on_complete(&self, response: &AgentResponse) {
        self.spinner.finish_with_message(format!(
            "{} {} suggestions",
            "done:".green(),
            response.domains.len()
        ));
    }

    fn on_failed(&self, reason: &str) {
        self.spinner
            .abandon_with_message(format!("{} {}", "failed:".red(), reason));
    }
}

/// Simple text-based progress (no fancy UI), for non-terminal stderr
pub struct SimpleProgress;

impl AgentProgressNotifier for SimpleProgress {
    fn on_iteration(&self, iteration: usize, max_iterations: usize) {
        eprintln!("{} step {}/{}", "->".cyan(), iteration, max_iterations);
    }

    fn on_tool_call(&self, tool_name: &str, argument: &str) {
        eprintln!("  {} {}", ProgressReporter::tool_label(tool_name), argument);
    }

    fn on_tool_result(&self, tool_name: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), tool_name);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), tool_name);
        }
    }

    fn on_failed(&self, reason: &str) {
        eprintln!("{} {}", "x".red(), reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_labels() {
        assert_eq!(ProgressReporter::tool_label("price_checker_tool"), "Checking price");
        assert_eq!(
            ProgressReporter::tool_label("availability_checker_tool"),
            "Checking availability"
        );
        assert_eq!(ProgressReporter::tool_label("whois"), "whois");
    }

    #[test]
    fn test_reporter_lifecycle_does_not_panic() {
        let reporter = ProgressReporter::new();
        reporter.on_iteration(1, 10);
        reporter.on_tool_call("price_checker_tool", "beanhaus.com");
        reporter.on_tool_result("price_checker_tool", true);
        reporter.on_complete(&AgentResponse {
            domains: vec![],
            final_message: None,
        });
    }
}
