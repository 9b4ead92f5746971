use serde::Serialize;

use crate::models::BugRecord;

/// Row shape used for machine-readable list output
#[derive(Debug, Serialize)]
struct ListRow<'a> {
    id: u32,
    title: &'a str,
    severity: String,
    status: String,
    tags: &'a [String],
    assignee: &'a str,
}

/// Renders the given records as a pretty-printed JSON array
pub fn records_to_json(records: &[&BugRecord]) -> serde_json::Result<String> {
    let rows: Vec<ListRow> = records
        .iter()
        .map(|bug| ListRow {
            id: bug.id,
            title: &bug.title,
            severity: bug.severity.to_string(),
            status: bug.status.to_string(),
            tags: &bug.tags,
            assignee: &bug.assignee,
        })
        .collect();

    serde_json::to_string_pretty(&rows)
}

/// Renders a single record, including description and comments, as JSON
pub fn record_to_json(record: &BugRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}
