//! The bug list pipeline: search filter over a sortable collection.
//!
//! Sorting reorders the owned collection itself, so a sort chosen once keeps
//! applying while the search term changes. Filtering is recomputed on every
//! read and never touches the collection.

use chrono::{Local, Utc};
use log::debug;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::{BugError, Result};
use crate::form::BugDraft;
use crate::models::{BugRecord, Comment, SortKey, Status};
use crate::sample::sample_bugs;

/// Base letters of `s`: canonical decomposition with combining marks dropped,
/// lowercased
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Compares two titles the way a user-facing list expects.
///
/// Primary order compares base letters, ignoring accents and case, so `Écran`
/// sorts with `E` and `Şifre` with `S`. Ties are broken by accents, then
/// lowercase before uppercase at the first position where the titles differ.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            let accented_a = a.nfd().flat_map(char::to_lowercase);
            let accented_b = b.nfd().flat_map(char::to_lowercase);
            accented_a.cmp(accented_b)
        })
        .then_with(|| {
            for (x, y) in a.chars().zip(b.chars()) {
                if x == y {
                    continue;
                }
                return match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                };
            }
            a.chars().count().cmp(&b.chars().count())
        })
}

/// Ordering used by `apply_sort` for each key
fn compare_by(key: SortKey, a: &BugRecord, b: &BugRecord) -> Ordering {
    match key {
        SortKey::Severity => b.severity.rank().cmp(&a.severity.rank()),
        SortKey::Status => b.status.rank().cmp(&a.status.rank()),
        SortKey::Title => compare_titles(&a.title, &b.title),
    }
}

/// Ordered bug collection plus the list page's search and sort state
#[derive(Debug, Clone, Default)]
pub struct BugCollectionView {
    records: Vec<BugRecord>,
    search_term: String,
    active_sort: Option<SortKey>,
}

impl BugCollectionView {
    /// Creates a view over `records` in the given order, with no search and no sort
    pub fn new(records: Vec<BugRecord>) -> Self {
        Self {
            records,
            search_term: String::new(),
            active_sort: None,
        }
    }

    /// Creates a view over the built-in demo bugs
    pub fn with_sample_data() -> Self {
        Self::new(sample_bugs())
    }

    /// Sets the text the list is filtered by
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        debug!("Search term set to {:?}", self.search_term);
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Reorders the underlying collection by `key` (stable) and remembers it
    pub fn apply_sort(&mut self, key: SortKey) {
        self.records.sort_by(|a, b| compare_by(key, a, b));
        self.active_sort = Some(key);
        debug!("Sorted {} bugs by {}", self.records.len(), key);
    }

    /// The sort last applied, if any
    pub fn active_sort(&self) -> Option<SortKey> {
        self.active_sort
    }

    /// Records whose title or tags contain the search term, ignoring case,
    /// in the collection's current order
    pub fn visible_records(&self) -> Vec<&BugRecord> {
        let needle = self.search_term.to_lowercase();
        self.records.iter().filter(|bug| bug.matches(&needle)).collect()
    }

    /// The whole collection in its current order
    pub fn records(&self) -> &[BugRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Gets a bug by id
    pub fn get(&self, id: u32) -> Option<&BugRecord> {
        self.records.iter().find(|b| b.id == id)
    }

    /// Gets a mutable reference to a bug by id
    pub fn get_mut(&mut self, id: u32) -> Option<&mut BugRecord> {
        self.records.iter_mut().find(|b| b.id == id)
    }

    /// Id the next logged bug will receive
    pub fn next_id(&self) -> u32 {
        self.records.iter().map(|b| b.id).max().unwrap_or(0) + 1
    }

    /// Moves a bug to a new workflow state
    pub fn set_status(&mut self, id: u32, status: Status) -> Result<()> {
        let bug = self.get_mut(id).ok_or(BugError::NotFound(id))?;
        let previous = bug.status;
        bug.status = status;
        debug!("Bug #{} status {} -> {}", id, previous, status);
        Ok(())
    }

    /// Appends a comment to a bug, returning the new comment's id
    pub fn add_comment(&mut self, id: u32, author: &str, content: &str) -> Result<u32> {
        let content = content.trim();
        if content.is_empty() {
            return Err(BugError::EmptyComment);
        }

        let bug = self.get_mut(id).ok_or(BugError::NotFound(id))?;
        let comment_id = bug.next_comment_id();
        bug.comments.push(Comment {
            id: comment_id,
            author: author.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
        });
        debug!("Comment {} added to bug #{}", comment_id, id);

        Ok(comment_id)
    }

    /// Validates a log-bug form draft and appends it as a new open bug.
    ///
    /// The new bug goes to the end of the collection; the active sort is not
    /// re-applied until the user picks a sort again.
    pub fn log_bug(&mut self, draft: &BugDraft) -> Result<u32> {
        let new_bug = draft.validate()?;
        let id = self.next_id();

        let record = BugRecord::new(
            id,
            new_bug.title,
            new_bug.severity,
            new_bug.assignee,
            Local::now().date_naive(),
        )
        .with_description(new_bug.description);

        debug!("Logged bug #{}: {}", id, record.title);
        self.records.push(record);

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::Severity;
    use chrono::NaiveDate;

    fn ids(records: &[&BugRecord]) -> Vec<u32> {
        records.iter().map(|b| b.id).collect()
    }

    fn all_ids(view: &BugCollectionView) -> Vec<u32> {
        view.records().iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_new_view_has_no_search_or_sort() {
        let view = BugCollectionView::with_sample_data();
        assert_eq!(view.search_term(), "");
        assert_eq!(view.active_sort(), None);
        assert_eq!(all_ids(&view), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_by_severity() {
        let mut view = BugCollectionView::with_sample_data();
        view.apply_sort(SortKey::Severity);

        assert_eq!(all_ids(&view), vec![1, 4, 3, 2, 5]);
        assert_eq!(view.active_sort(), Some(SortKey::Severity));
    }

    #[test]
    fn test_sort_by_status() {
        let mut view = BugCollectionView::with_sample_data();
        view.apply_sort(SortKey::Status);
        assert_eq!(all_ids(&view), vec![1, 3, 2, 4, 5]);
    }

    #[test]
    fn test_sort_by_title_ascending() {
        let mut view = BugCollectionView::with_sample_data();
        view.apply_sort(SortKey::Title);

        let titles: Vec<&str> = view.records().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Incorrect Total in Cart",
                "Login Button Not Working",
                "Password Reset Email Not Sending",
                "Profile Image Not Loading",
                "Search Results Pagination Error",
            ]
        );
    }

    #[test]
    fn test_sort_is_idempotent() {
        for key in SortKey::ALL {
            let mut once = BugCollectionView::with_sample_data();
            once.apply_sort(key);

            let mut twice = BugCollectionView::with_sample_data();
            twice.apply_sort(key);
            twice.apply_sort(key);

            assert_eq!(all_ids(&once), all_ids(&twice), "key {}", key);
        }
    }

    #[test]
    fn test_severity_sort_is_stable() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let records = vec![
            BugRecord::new(10, "e", Severity::Low, "x", date),
            BugRecord::new(11, "d", Severity::High, "x", date),
            BugRecord::new(12, "c", Severity::Low, "x", date),
            BugRecord::new(13, "b", Severity::High, "x", date),
            BugRecord::new(14, "a", Severity::Low, "x", date),
        ];
        let mut view = BugCollectionView::new(records);

        // Title order first, then severity: equal severities keep title order
        view.apply_sort(SortKey::Title);
        view.apply_sort(SortKey::Severity);
        assert_eq!(all_ids(&view), vec![13, 11, 14, 12, 10]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty = BugCollectionView::new(Vec::new());
        empty.apply_sort(SortKey::Severity);
        assert!(empty.is_empty());
        assert_eq!(empty.active_sort(), Some(SortKey::Severity));

        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut single = BugCollectionView::new(vec![BugRecord::new(9, "only", Severity::Low, "x", date)]);
        single.apply_sort(SortKey::Title);
        assert_eq!(all_ids(&single), vec![9]);
    }

    #[test]
    fn test_search_login_matches_title() {
        let mut view = BugCollectionView::with_sample_data();
        view.set_search_term("login");
        assert_eq!(ids(&view.visible_records()), vec![1]);
    }

    #[test]
    fn test_search_ui_matches_tags() {
        let mut view = BugCollectionView::with_sample_data();
        view.set_search_term("ui");
        assert_eq!(ids(&view.visible_records()), vec![1, 2, 5]);

        view.set_search_term("UI");
        assert_eq!(ids(&view.visible_records()), vec![1, 2, 5]);
    }

    #[test]
    fn test_search_follows_current_sort_order() {
        let mut view = BugCollectionView::with_sample_data();
        view.apply_sort(SortKey::Title);
        view.set_search_term("in");

        // Cart, Login, Password, Profile, Search
        assert_eq!(ids(&view.visible_records()), vec![3, 1, 4, 2, 5]);

        view.apply_sort(SortKey::Severity);
        assert_eq!(ids(&view.visible_records()), vec![1, 4, 3, 2, 5]);

        view.apply_sort(SortKey::Status);
        assert_eq!(ids(&view.visible_records()), vec![1, 3, 2, 4, 5]);
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let mut view = BugCollectionView::with_sample_data();
        view.apply_sort(SortKey::Severity);
        view.set_search_term("login");
        view.set_search_term("");

        assert_eq!(ids(&view.visible_records()), vec![1, 4, 3, 2, 5]);
    }

    #[test]
    fn test_search_with_no_match_is_empty() {
        let mut view = BugCollectionView::with_sample_data();
        view.set_search_term("kernel panic");
        assert!(view.visible_records().is_empty());
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_filter_has_no_false_positives_or_negatives() {
        let mut view = BugCollectionView::with_sample_data();
        for term in ["", "a", "in", "UI", "auth", "ERROR", "zzz", "t"] {
            view.set_search_term(term);
            let visible: Vec<u32> = ids(&view.visible_records());
            let needle = term.to_lowercase();

            for bug in view.records() {
                let predicate = bug.title.to_lowercase().contains(&needle)
                    || bug.tags.iter().any(|t| t.to_lowercase().contains(&needle));
                assert_eq!(visible.contains(&bug.id), predicate, "term {:?} bug {}", term, bug.id);
            }
        }
    }

    #[test]
    fn test_visible_records_are_unmodified() {
        let mut view = BugCollectionView::with_sample_data();
        view.set_search_term("cart");
        let before = view.get(3).cloned().unwrap();
        let visible = view.visible_records();
        assert_eq!(visible.len(), 1);
        assert_eq!(*visible[0], before);
    }

    #[test]
    fn test_compare_titles_case_rules() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Banana", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("cart", "Cart"), Ordering::Less);
        assert_eq!(compare_titles("Cart", "Cart"), Ordering::Equal);
        assert_eq!(compare_titles("Cart", "Carts"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_title_accents() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut view = BugCollectionView::new(vec![
            BugRecord::new(1, "Zoom broken", Severity::Low, "x", date),
            BugRecord::new(2, "Écran noir", Severity::Low, "x", date),
            BugRecord::new(3, "Fix crash", Severity::Low, "x", date),
            BugRecord::new(4, "Şifre sıfırlama çalışmıyor", Severity::Low, "x", date),
            BugRecord::new(5, "Sepet toplamı yanlış", Severity::Low, "x", date),
            BugRecord::new(6, "Ödeme sayfası açılmıyor", Severity::Low, "x", date),
            BugRecord::new(7, "Çıkış butonu", Severity::Low, "x", date),
        ]);
        view.apply_sort(SortKey::Title);

        assert_eq!(all_ids(&view), vec![7, 2, 3, 6, 5, 4, 1]);
    }

    #[test]
    fn test_compare_titles_accent_rules() {
        assert_eq!(compare_titles("Écran noir", "Fix crash"), Ordering::Less);
        assert_eq!(compare_titles("Ünlü", "Zoom"), Ordering::Less);
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_titles("résumé", "Resume"), Ordering::Greater);
        assert_eq!(compare_titles("İndir", "indir"), Ordering::Greater);
    }

    #[test]
    fn test_set_status_keeps_identity() {
        let mut view = BugCollectionView::with_sample_data();
        view.set_status(3, Status::Closed).unwrap();

        let bug = view.get(3).unwrap();
        assert_eq!(bug.status, Status::Closed);
        assert_eq!(bug.title, "Incorrect Total in Cart");
        assert_eq!(all_ids(&view), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_set_status_unknown_bug() {
        let mut view = BugCollectionView::with_sample_data();
        let result = view.set_status(42, Status::Closed);
        assert!(matches!(result, Err(BugError::NotFound(42))));
    }

    #[test]
    fn test_add_comment() {
        let mut view = BugCollectionView::with_sample_data();
        let id = view.add_comment(1, "Diana Wilson", "  Fixed in the latest build ").unwrap();

        assert_eq!(id, 3);
        let comment = view.get(1).unwrap().comments.last().unwrap();
        assert_eq!(comment.content, "Fixed in the latest build");
        assert_eq!(comment.author, "Diana Wilson");
    }

    #[test]
    fn test_add_comment_rejects_blank() {
        let mut view = BugCollectionView::with_sample_data();
        assert!(matches!(
            view.add_comment(1, "Bob Smith", "   \n"),
            Err(BugError::EmptyComment)
        ));
        assert_eq!(view.get(1).unwrap().comments.len(), 2);

        assert!(matches!(
            view.add_comment(99, "Bob Smith", "hello"),
            Err(BugError::NotFound(99))
        ));
    }

    #[test]
    fn test_log_bug_appends_with_next_id() {
        let mut view = BugCollectionView::with_sample_data();
        view.apply_sort(SortKey::Severity);

        let draft = BugDraft {
            title: "Dark mode toggle resets".into(),
            description: "Preference is lost after reload".into(),
            severity: Some(Severity::Critical),
            assignee: Some("Charlie Brown".into()),
        };
        let id = view.log_bug(&draft).unwrap();

        assert_eq!(id, 6);
        assert_eq!(view.len(), 6);
        assert_eq!(all_ids(&view), vec![1, 4, 3, 2, 5, 6]);

        let bug = view.get(6).unwrap();
        assert_eq!(bug.status, Status::Open);
        assert!(bug.tags.is_empty());
        assert_eq!(bug.description, "Preference is lost after reload");
    }

    #[test]
    fn test_log_bug_rejects_invalid_draft() {
        let mut view = BugCollectionView::with_sample_data();
        let draft = BugDraft {
            title: "No severity".into(),
            description: "d".into(),
            severity: None,
            assignee: Some("Bob Smith".into()),
        };

        let result = view.log_bug(&draft);
        assert!(matches!(
            result,
            Err(BugError::Validation(ValidationError::MissingSeverity))
        ));
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_next_id_empty_collection() {
        let view = BugCollectionView::new(Vec::new());
        assert_eq!(view.next_id(), 1);
    }
}
