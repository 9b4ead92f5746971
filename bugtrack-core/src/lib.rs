pub mod ai;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod models;
pub mod sample;
pub mod stats;
pub mod view;

// Re-export commonly used types
pub use config::{get_config_path, load_config, Config};
pub use error::{BugError, ParseError, Result, ValidationError};
pub use form::{BugDraft, NewBug};
pub use models::{BugRecord, Comment, Severity, SortKey, Status};
pub use sample::{sample_bugs, DEFAULT_TEAM};
pub use stats::{recent, BugStats, TeamMember};
pub use view::{compare_titles, BugCollectionView};
