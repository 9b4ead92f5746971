use anyhow::{bail, Context, Result};
use colored::Colorize;
use inquire::{InquireError, Text};
use log::debug;

use bugtrack_core::{BugCollectionView, BugError, Config, SortKey, Status};

use crate::display;
use crate::prompts;

/// One line typed at the shell prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Sort(SortKey),
    List,
    Show { id: u32, ai: bool },
    Status { id: u32, status: Option<Status> },
    Comment { id: u32, text: String },
    Log,
    Stats,
    Help,
    Quit,
    Empty,
}

fn parse_id(arg: Option<&str>) -> Result<u32> {
    let arg = arg.context("Missing bug ID")?;
    let arg = arg.trim_start_matches('#');
    arg.parse::<u32>()
        .with_context(|| format!("Invalid bug ID: {}", arg))
}

/// Parses a shell line into a command
pub fn parse_command(line: &str) -> Result<ShellCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "search" | "find" | "/" => ShellCommand::Search(rest.to_string()),
        "clear" => ShellCommand::Search(String::new()),
        "sort" => {
            if rest.is_empty() {
                bail!("Usage: sort <severity|status|title>");
            }
            ShellCommand::Sort(rest.parse()?)
        }
        "list" | "ls" => ShellCommand::List,
        "show" | "ai" => {
            let mut args = rest.split_whitespace();
            let id = parse_id(args.next())?;
            let ai = word.eq_ignore_ascii_case("ai") || args.any(|a| a == "--ai");
            ShellCommand::Show { id, ai }
        }
        "status" => {
            let (id, status) = match rest.split_once(char::is_whitespace) {
                Some((id, status)) => (id, Some(status.parse::<Status>()?)),
                None => (rest, None),
            };
            ShellCommand::Status {
                id: parse_id(Some(id).filter(|s| !s.is_empty()))?,
                status,
            }
        }
        "comment" => {
            let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            ShellCommand::Comment {
                id: parse_id(Some(id).filter(|s| !s.is_empty()))?,
                text: text.trim().to_string(),
            }
        }
        "log" | "new" => ShellCommand::Log,
        "stats" | "dashboard" => ShellCommand::Stats,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => bail!("Unknown command '{}'. Type 'help' for a list of commands.", other),
    };

    Ok(command)
}

fn print_help() {
    println!("{}", "Commands".bold().underline());
    println!("  search <text>           filter by title or tag (empty clears)");
    println!("  clear                   clear the search");
    println!("  sort <key>              sort by severity, status or title");
    println!("  list                    show the bug list");
    println!("  show <id> [--ai]        show bug details");
    println!("  ai <id>                 show bug details with AI panels");
    println!("  status <id> [status]    change status (open, in-progress, closed)");
    println!("  comment <id> <text>     add a comment");
    println!("  log                     log a new bug");
    println!("  stats                   show the dashboard");
    println!("  quit                    leave the shell");
}

fn print_list(view: &BugCollectionView) {
    if !view.search_term().is_empty() {
        println!("Search: {}", view.search_term().cyan());
    }
    display::print_sort_bar(view.active_sort());
    display::print_bug_table(&view.visible_records());
}

/// Interactive session over one collection view
pub struct Shell {
    view: BugCollectionView,
    team: Vec<String>,
}

impl Shell {
    pub fn new(view: BugCollectionView, config: &Config) -> Self {
        Self {
            view,
            team: config.team(),
        }
    }

    /// Runs commands until the user quits
    pub fn run(&mut self) -> Result<()> {
        println!("{}", "Code Everest bug tracker".bold());
        println!("Type 'help' for a list of commands.");
        print_list(&self.view);

        loop {
            let line = match Text::new("bugs>").prompt() {
                Ok(line) => line,
                Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    println!("{}", e.to_string().red());
                    continue;
                }
            };
            debug!("Shell command: {:?}", command);

            if command == ShellCommand::Quit {
                break;
            }

            if let Err(e) = self.execute(command) {
                // Prompt cancellation inside a command just returns to the shell
                if let Some(InquireError::OperationCanceled) = e.downcast_ref::<InquireError>() {
                    continue;
                }
                println!("{}", e.to_string().red());
            }
        }

        Ok(())
    }

    fn execute(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::Empty | ShellCommand::Quit => {}
            ShellCommand::Help => print_help(),
            ShellCommand::Search(term) => {
                self.view.set_search_term(term);
                print_list(&self.view);
            }
            ShellCommand::Sort(key) => {
                self.view.apply_sort(key);
                print_list(&self.view);
            }
            ShellCommand::List => print_list(&self.view),
            ShellCommand::Show { id, ai } => {
                let bug = self.view.get(id).ok_or(BugError::NotFound(id))?;
                display::print_bug_detail(bug, ai);
            }
            ShellCommand::Status { id, status } => {
                let current = self.view.get(id).ok_or(BugError::NotFound(id))?.status;
                let status = match status {
                    Some(status) => status,
                    None => prompts::prompt_status(current)?,
                };
                self.view.set_status(id, status)?;
                println!(
                    "{}",
                    format!("Bug #{} is now {}", id, status).green()
                );
            }
            ShellCommand::Comment { id, text } => {
                if self.view.get(id).is_none() {
                    return Err(BugError::NotFound(id).into());
                }
                if text.is_empty() {
                    return Err(BugError::EmptyComment.into());
                }
                let author = prompts::prompt_author(&self.team)?;
                let comment_id = self.view.add_comment(id, &author, &text)?;
                println!(
                    "{}",
                    format!("Comment {} added to bug #{}", comment_id, id).green()
                );
            }
            ShellCommand::Log => {
                let draft = prompts::prompt_bug_draft(&self.team)?;
                let id = self.view.log_bug(&draft)?;
                println!("{}", "Bug logged successfully!".green());
                println!("ID: {}", id.to_string().green());
            }
            ShellCommand::Stats => display::print_stats(self.view.records()),
        }

        Ok(())
    }
}
