use colored::{ColoredString, Colorize};

use bugtrack_core::{ai, recent, BugRecord, BugStats, Severity, SortKey, Status};

/// Colors a (pre-padded) severity label the way the list page does
pub fn paint_severity(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Critical => text.red(),
        Severity::High => text.truecolor(251, 146, 60),
        Severity::Medium => text.yellow(),
        Severity::Low => text.blue(),
    }
}

/// Colors a (pre-padded) status label the way the list page does
pub fn paint_status(status: Status, text: &str) -> ColoredString {
    match status {
        Status::Open => text.red(),
        Status::InProgress => text.yellow(),
        Status::Closed => text.green(),
    }
}

fn render_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{}]", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints the sort controls with the active one highlighted
pub fn print_sort_bar(active: Option<SortKey>) {
    let controls: Vec<String> = SortKey::ALL
        .iter()
        .map(|key| {
            if Some(*key) == active {
                format!("[{}]", key.label()).bold().on_blue().to_string()
            } else {
                format!(" {} ", key.label()).dimmed().to_string()
            }
        })
        .collect();
    println!("{}", controls.join("  "));
}

/// Prints the bug table, or the empty-state message
pub fn print_bug_table(records: &[&BugRecord]) {
    if records.is_empty() {
        println!();
        println!("{}", "No bugs found".bold());
        println!("{}", "Try adjusting your search criteria or log a new bug.".dimmed());
        return;
    }

    let title_width = records
        .iter()
        .map(|b| b.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let header = format!(
        "{:>4}  {:<title_width$}  {:<8}  {:<11}  {}",
        "ID",
        "TITLE",
        "SEVERITY",
        "STATUS",
        "TAGS",
        title_width = title_width
    );
    println!("{}", header.bold());

    for bug in records {
        let severity = format!("{:<8}", bug.severity.to_string());
        let status = format!("{:<11}", bug.status.to_string());
        println!(
            "{:>4}  {:<title_width$}  {}  {}  {}",
            bug.id,
            bug.title,
            paint_severity(bug.severity, &severity),
            paint_status(bug.status, &status),
            render_tags(&bug.tags).cyan(),
            title_width = title_width
        );
        println!(
            "      {}",
            format!("Assigned to {}", bug.assignee).dimmed()
        );
    }

    println!();
    println!("{} bug(s)", records.len());
}

/// Prints the detail page for one bug
pub fn print_bug_detail(bug: &BugRecord, show_ai: bool) {
    println!("{} {}", format!("#{}", bug.id).dimmed(), bug.title.bold());
    println!(
        "{}  {}  Created: {}",
        paint_severity(bug.severity, &bug.severity.to_string()),
        paint_status(bug.status, &bug.status.to_string()),
        bug.created_at
    );
    if !bug.tags.is_empty() {
        println!("{}", render_tags(&bug.tags).cyan());
    }
    println!("Assignee: {}", bug.assignee);

    println!();
    println!("{}", "Description".bold().underline());
    if bug.description.is_empty() {
        println!("{}", "(no description)".dimmed());
    } else {
        println!("{}", bug.description);
    }

    if show_ai {
        println!();
        println!("{}", "AI Summary".bold().underline());
        println!("{} {}", "Placeholder summary:".bold(), ai::summary_placeholder());

        println!();
        println!("{}", "AI Suggestions".bold().underline());
        for suggestion in ai::suggestions_placeholder() {
            println!("  {} {}", "*".magenta(), suggestion.title.bold());
            println!("    {}", suggestion.body);
        }
    }

    println!();
    println!(
        "{}",
        format!("Comments ({})", bug.comments.len()).bold().underline()
    );
    if bug.comments.is_empty() {
        println!("{}", "No comments yet.".dimmed());
    }
    for comment in &bug.comments {
        println!(
            "{} {}",
            comment.author.bold(),
            comment.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
        println!("  {}", comment.content);
    }
}

fn progress_bar(rate: f32, width: usize) -> String {
    let filled = ((rate.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

/// Prints the dashboard
pub fn print_stats(records: &[BugRecord]) {
    let stats = BugStats::from_records(records);

    println!("{}", "Dashboard".bold().underline());
    println!("  Total Bugs:   {}", stats.total.to_string().bold());
    println!("  Open Bugs:    {}", stats.open.to_string().red());
    println!("  In Progress:  {}", stats.in_progress.to_string().yellow());
    println!("  Closed Bugs:  {}", stats.closed.to_string().green());

    println!();
    println!("{}", "Bugs by Severity".bold().underline());
    for (severity, count) in &stats.by_severity {
        let label = format!("{:<9}", severity.to_string());
        println!("  {} {}", paint_severity(*severity, &label), count);
    }

    println!();
    println!("{}", "Recent Bugs".bold().underline());
    for bug in recent(records, 3) {
        let label = bug.severity.to_string();
        println!(
            "  {:<36} {}  {}",
            bug.title,
            paint_severity(bug.severity, &label),
            bug.created_at.to_string().dimmed()
        );
    }

    println!();
    println!("{}", "Team Performance".bold().underline());
    for member in &stats.team {
        println!(
            "  {:<16} {} {}/{} resolved",
            member.name,
            progress_bar(member.resolution_rate(), 20).green(),
            member.resolved,
            member.assigned
        );
    }
}
