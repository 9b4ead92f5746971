//! Fixed demo data shown when the tracker starts.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{BugRecord, Comment, Severity, Status};

/// Team members offered by the log-bug form
pub const DEFAULT_TEAM: [&str; 4] = [
    "Alice Johnson",
    "Bob Smith",
    "Charlie Brown",
    "Diana Wilson",
];

const LOGIN_BUG_DESCRIPTION: &str = "The login button on the main page is not responding to clicks. \
Users are unable to log into their accounts. This appears to be affecting all browsers and devices. \
Steps to reproduce:\n\n\
1. Navigate to the login page\n\
2. Enter valid credentials\n\
3. Click the login button\n\
4. Nothing happens - no error message, no redirect";

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, d).unwrap_or_default()
}

fn sample_comments() -> Vec<Comment> {
    let at = |hour, minute| {
        Utc.with_ymd_and_hms(2025, 1, 8, hour, minute, 0)
            .single()
            .unwrap_or_default()
    };

    vec![
        Comment {
            id: 1,
            author: "Alice Johnson".to_string(),
            content: "I've started investigating this issue. Check the console for any JavaScript errors."
                .to_string(),
            timestamp: at(10, 30),
        },
        Comment {
            id: 2,
            author: "Bob Smith".to_string(),
            content: "I can reproduce this on Chrome and Firefox. Seems like the click event handler is not attached."
                .to_string(),
            timestamp: at(11, 15),
        },
    ]
}

/// The five bugs the list page is seeded with, in seed order
pub fn sample_bugs() -> Vec<BugRecord> {
    let mut login = BugRecord::new(
        1,
        "Login Button Not Working",
        Severity::Critical,
        "Alice Johnson",
        day(8),
    )
    .with_tags(["UI", "Authentication"])
    .with_description(LOGIN_BUG_DESCRIPTION);
    login.comments = sample_comments();

    vec![
        login,
        BugRecord::new(2, "Profile Image Not Loading", Severity::Medium, "Bob Smith", day(7))
            .with_status(Status::InProgress)
            .with_tags(["UI", "Assets"]),
        BugRecord::new(3, "Incorrect Total in Cart", Severity::High, "Charlie Brown", day(6))
            .with_tags(["Calculation", "Payment"]),
        BugRecord::new(
            4,
            "Password Reset Email Not Sending",
            Severity::Critical,
            "Diana Wilson",
            day(5),
        )
        .with_status(Status::InProgress)
        .with_tags(["Email", "Authentication"]),
        BugRecord::new(
            5,
            "Search Results Pagination Error",
            Severity::Low,
            "Alice Johnson",
            day(3),
        )
        .with_status(Status::Closed)
        .with_tags(["UI", "Search"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_unique() {
        let bugs = sample_bugs();
        let ids: HashSet<u32> = bugs.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), bugs.len());
        assert_eq!(bugs.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_login_bug_has_detail_content() {
        let bugs = sample_bugs();
        let login = &bugs[0];
        assert!(login.description.contains("Steps to reproduce"));
        assert_eq!(login.comments.len(), 2);
        assert_eq!(login.comments[1].author, "Bob Smith");
    }

    #[test]
    fn test_assignees_are_on_default_team() {
        for bug in sample_bugs() {
            assert!(DEFAULT_TEAM.contains(&bug.assignee.as_str()));
        }
    }
}
