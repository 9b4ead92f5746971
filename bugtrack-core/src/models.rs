use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Urgency classification of a bug
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, most urgent first
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Sort rank; higher ranks surface first under a severity sort
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(ParseError::new(
                "severity",
                s,
                "low, medium, high, critical",
            )),
        }
    }
}

/// Workflow state of a bug
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl Status {
    /// All statuses in the order the detail page offers them
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Closed];

    /// Display-priority rank; open bugs surface first under a status sort
    pub const fn rank(self) -> u8 {
        match self {
            Status::Open => 3,
            Status::InProgress => 2,
            Status::Closed => 1,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Open => write!(f, "Open"),
            Status::InProgress => write!(f, "In Progress"),
            Status::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in progress" | "in-progress" | "in_progress" | "inprogress" => Ok(Status::InProgress),
            "closed" => Ok(Status::Closed),
            _ => Err(ParseError::new("status", s, "open, in-progress, closed")),
        }
    }
}

/// Column the bug list can be ordered by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Critical first
    Severity,
    /// Open first
    Status,
    /// Ascending, locale-aware
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Severity, SortKey::Status, SortKey::Title];

    /// Button label for sort controls
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Severity => "Sort by Severity",
            SortKey::Status => "Sort by Status",
            SortKey::Title => "Sort by Title",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Severity => write!(f, "severity"),
            SortKey::Status => write!(f, "status"),
            SortKey::Title => write!(f, "title"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "severity" => Ok(SortKey::Severity),
            "status" => Ok(SortKey::Status),
            "title" => Ok(SortKey::Title),
            _ => Err(ParseError::new("sort key", s, "severity, status, title")),
        }
    }
}

/// A comment left on a bug's detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// Unique within the owning bug
    pub id: u32,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// One reported defect
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BugRecord {
    /// Unique identifier, assigned at creation and never changed
    pub id: u32,

    /// Short title describing the bug
    pub title: String,

    /// Detailed description, including reproduction steps
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    pub severity: Severity,

    pub status: Status,

    /// Labels in insertion order
    pub tags: Vec<String>,

    /// Team member responsible for the bug
    pub assignee: String,

    /// Day the bug was logged
    pub created_at: NaiveDate,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

impl BugRecord {
    /// Creates an open bug with no tags, description or comments
    pub fn new(
        id: u32,
        title: impl Into<String>,
        severity: Severity,
        assignee: impl Into<String>,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            severity,
            status: Status::Open,
            tags: Vec::new(),
            assignee: assignee.into(),
            created_at,
            comments: Vec::new(),
        }
    }

    /// Builder-style tag assignment
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style status assignment
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Builder-style description assignment
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True if the title or any tag contains `needle`.
    ///
    /// `needle` must already be lowercased; the record's text is folded here.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Id the next comment on this bug will receive
    pub fn next_comment_id(&self) -> u32 {
        self.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }
}
