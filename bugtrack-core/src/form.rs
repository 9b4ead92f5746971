use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::Severity;

/// Field values of the log-bug form as the user is filling it in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BugDraft {
    pub title: String,
    pub description: String,
    pub severity: Option<Severity>,
    pub assignee: Option<String>,
}

/// A draft that passed validation, ready to be added to a collection
#[derive(Debug, Clone, PartialEq)]
pub struct NewBug {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub assignee: String,
}

impl BugDraft {
    /// Checks every required field, reporting the first one missing
    pub fn validate(&self) -> Result<NewBug, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }

        let severity = self.severity.ok_or(ValidationError::MissingSeverity)?;

        let assignee = self
            .assignee
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or(ValidationError::MissingAssignee)?;

        Ok(NewBug {
            title: title.to_string(),
            description: description.to_string(),
            severity,
            assignee: assignee.to_string(),
        })
    }

    /// Clears every field, as after a successful submit
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> BugDraft {
        BugDraft {
            title: "  Checkout button hidden on mobile ".into(),
            description: "Button renders off-screen below 375px".into(),
            severity: Some(Severity::High),
            assignee: Some("Bob Smith".into()),
        }
    }

    #[test]
    fn test_validate_complete_draft() {
        let new_bug = complete_draft().validate().unwrap();
        assert_eq!(new_bug.title, "Checkout button hidden on mobile");
        assert_eq!(new_bug.severity, Severity::High);
        assert_eq!(new_bug.assignee, "Bob Smith");
    }

    #[test]
    fn test_validate_reports_missing_fields_in_order() {
        let mut draft = complete_draft();
        draft.title = "   ".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));

        let mut draft = complete_draft();
        draft.description.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingDescription));

        let mut draft = complete_draft();
        draft.severity = None;
        assert_eq!(draft.validate(), Err(ValidationError::MissingSeverity));

        let mut draft = complete_draft();
        draft.assignee = Some(" ".into());
        assert_eq!(draft.validate(), Err(ValidationError::MissingAssignee));
    }

    #[test]
    fn test_reset_clears_draft() {
        let mut draft = complete_draft();
        draft.reset();
        assert_eq!(draft, BugDraft::default());
    }
}
