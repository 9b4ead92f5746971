use serde::Serialize;

use crate::models::{BugRecord, Severity, Status};

/// Per-assignee progress shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub name: String,
    /// Closed bugs assigned to this member
    pub resolved: usize,
    /// All bugs assigned to this member
    pub assigned: usize,
}

impl TeamMember {
    /// Fraction of assigned bugs that are closed, 0.0 when nothing is assigned
    pub fn resolution_rate(&self) -> f32 {
        if self.assigned == 0 {
            0.0
        } else {
            self.resolved as f32 / self.assigned as f32
        }
    }
}

/// Dashboard numbers computed from the current collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BugStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
    /// Counts in `Severity::ALL` order (Critical first)
    pub by_severity: Vec<(Severity, usize)>,
    /// Assignees in order of first appearance
    pub team: Vec<TeamMember>,
}

impl BugStats {
    pub fn from_records(records: &[BugRecord]) -> Self {
        let count_status = |status: Status| records.iter().filter(|b| b.status == status).count();

        let by_severity = Severity::ALL
            .iter()
            .map(|&severity| {
                let count = records.iter().filter(|b| b.severity == severity).count();
                (severity, count)
            })
            .collect();

        let mut team: Vec<TeamMember> = Vec::new();
        for bug in records {
            let idx = match team.iter().position(|m| m.name == bug.assignee) {
                Some(idx) => idx,
                None => {
                    team.push(TeamMember {
                        name: bug.assignee.clone(),
                        resolved: 0,
                        assigned: 0,
                    });
                    team.len() - 1
                }
            };
            team[idx].assigned += 1;
            if bug.status == Status::Closed {
                team[idx].resolved += 1;
            }
        }

        Self {
            total: records.len(),
            open: count_status(Status::Open),
            in_progress: count_status(Status::InProgress),
            closed: count_status(Status::Closed),
            by_severity,
            team,
        }
    }

    /// Count for a single severity
    pub fn severity_count(&self, severity: Severity) -> usize {
        self.by_severity
            .iter()
            .find(|(s, _)| *s == severity)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

/// The `n` most recently created bugs, newest first (ties: higher id first)
pub fn recent(records: &[BugRecord], n: usize) -> Vec<&BugRecord> {
    let mut sorted: Vec<&BugRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    sorted.truncate(n);
    sorted
}
