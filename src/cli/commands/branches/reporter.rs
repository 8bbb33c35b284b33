use crate::core::git::DeletionResult;
use colored::*;

pub struct DeletionReporter;

impl DeletionReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn show_results(&self, result: &DeletionResult) {
        println!("{}", self.format_results(result));
    }

    pub fn format_results(&self, result: &DeletionResult) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} Deleted {} of {} branch(es)",
            "✅".green(),
            result.succeeded.len(),
            result.total()
        ));

        if result.has_failures() {
            lines.push(format!(
                "\n{}  Failed to delete {} branch(es):",
                "⚠️".yellow(),
                result.failed.len()
            ));
            for failure in &result.failed {
                lines.push(format!(
                    "  • {}: {}",
                    failure.record.deletion_target().red(),
                    first_line(&failure.reason)
                ));
            }
        }

        lines.join("\n")
    }
}

impl Default for DeletionReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn first_line(reason: &str) -> &str {
    reason
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("unknown error")
}
