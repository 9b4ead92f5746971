use anyhow::Result;
use inquire::{Editor, Select, Text};

use bugtrack_core::{BugDraft, Severity, Status};

/// Prompts the user through the log-bug form
pub fn prompt_bug_draft(team: &[String]) -> Result<BugDraft> {
    let title = Text::new("Title:")
        .with_placeholder("Enter a descriptive title")
        .prompt()?;

    // Use the Editor type for multiline input
    let description = Editor::new("Description:")
        .with_help_message("Describe the bug in detail. Include steps to reproduce if possible.")
        .prompt()?;

    let severity = Select::new("Severity:", Severity::ALL.to_vec()).prompt()?;

    let assignee = Select::new("Assignee:", team.to_vec()).prompt()?;

    Ok(BugDraft {
        title,
        description,
        severity: Some(severity),
        assignee: Some(assignee),
    })
}

/// Prompts for a new status, starting on the bug's current one
pub fn prompt_status(current: Status) -> Result<Status> {
    let options = Status::ALL.to_vec();
    let start = options.iter().position(|s| *s == current).unwrap_or(0);
    let status = Select::new("Status:", options)
        .with_starting_cursor(start)
        .prompt()?;
    Ok(status)
}

/// Prompts for the author of a comment
pub fn prompt_author(team: &[String]) -> Result<String> {
    let author = Select::new("Comment as:", team.to_vec()).prompt()?;
    Ok(author)
}
