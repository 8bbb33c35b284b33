use super::display::LabelledBranch;
use crate::core::git::BranchRecord;
use crate::utils::{is_non_interactive, GitBatchError, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect};

const MAX_PAGE_SIZE: usize = 20;

/// How the `branches` command asks a human which records to delete.
pub trait SelectionFlow {
    /// The chosen subset, in list order. Empty when nothing was picked.
    fn select(&self, prompt: &str, items: &[LabelledBranch]) -> Result<Vec<BranchRecord>>;

    /// Final go/no-go for exactly the records described by `summary`.
    fn confirm(&self, summary: &str) -> Result<bool>;
}

pub struct TerminalFlow;

impl TerminalFlow {
    pub fn new() -> Self {
        Self
    }

    fn ensure_interactive() -> Result<()> {
        if is_non_interactive() {
            return Err(GitBatchError::invalid_args(
                "Cannot select branches in non-interactive mode. Use --dry-run to list them.",
            ));
        }
        Ok(())
    }
}

impl Default for TerminalFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionFlow for TerminalFlow {
    fn select(&self, prompt: &str, items: &[LabelledBranch]) -> Result<Vec<BranchRecord>> {
        Self::ensure_interactive()?;

        let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
        let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&labels)
            .max_length(page_size(items.len()))
            .interact_opt()
            .map_err(|e| GitBatchError::invalid_args(format!("Failed to read selection: {e}")))?;

        let mut indices = chosen.unwrap_or_default();
        indices.sort_unstable();
        Ok(indices
            .into_iter()
            .filter_map(|index| items.get(index))
            .map(|item| item.record.clone())
            .collect())
    }

    fn confirm(&self, summary: &str) -> Result<bool> {
        Self::ensure_interactive()?;

        println!("{}", summary);
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Delete these branches?")
            .default(false)
            .interact()
            .unwrap_or(false))
    }
}

pub(crate) fn page_size(items: usize) -> usize {
    items.clamp(1, MAX_PAGE_SIZE)
}
