//! Prefix list selection logic.
//!
//! Filters customer-managed prefix lists by owner and name and produces a
//! deterministically ordered id -> name mapping sorted by name.

use crate::models::PrefixList;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;

/// Filters applied when selecting prefix lists.
///
/// Every criterion is optional, and an empty string behaves the same as an
/// absent value - the criterion is simply not applied.
#[derive(Debug, Clone, Default)]
pub struct SelectionCriteria {
    /// Keep only prefix lists whose owner id equals this exactly
    /// (byte-for-byte, case-sensitive).
    pub account_id: Option<String>,
    /// Keep only prefix lists whose name contains this substring
    /// (case-insensitive).
    pub name_filter: Option<String>,
    /// Drop prefix lists whose name contains this substring
    /// (case-insensitive).
    pub name_exclude: Option<String>,
}

/// Observer for the selection side channel.
///
/// Selection emits two observational events: one when it starts and one when
/// nothing survived filtering. Callers that only want the default log lines
/// pass [`LogObserver`]; tests can record the events instead.
pub trait SelectionObserver {
    /// Called once, before any record is examined.
    fn selection_started(&self);
    /// Called once, after filtering, iff no prefix list matched.
    fn no_matches(&self);
}

/// Default observer reporting through the `log` facade.
pub struct LogObserver;

impl SelectionObserver for LogObserver {
    fn selection_started(&self) {
        log::info!("Retrieving all managed prefix lists...");
    }

    fn no_matches(&self) {
        log::error!("No customer-managed prefix lists found matching criteria.");
    }
}

/// Ordered id -> name mapping produced by selection.
///
/// Entries are sorted ascending by name, compared case-insensitively;
/// iteration order is the sort order, never insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionResult {
    entries: Vec<(String, String)>,
}

impl SelectionResult {
    /// Number of selected prefix lists.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name recorded for the given prefix list id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, name)| name.as_str())
    }

    /// Iterate `(id, name)` pairs in sort order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Iterate ids in sort order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SelectionResult ({} prefix lists):", self.entries.len())?;
        for (id, name) in &self.entries {
            writeln!(f, "  - {id} '{name}'")?;
        }
        Ok(())
    }
}

/// A criterion is active only when present and non-empty.
fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

/// Select customer-managed prefix lists matching the given criteria.
///
/// Records without a usable id are skipped outright. A missing name is
/// replaced by the `"N/A"` placeholder before filtering. Duplicate ids
/// collapse to a single entry carrying the name of the last record that
/// passed the filters. An empty result is reported through the observer but
/// is not an error.
///
/// # Arguments
/// * `prefix_lists` - Records as returned by the API, in response order
/// * `criteria` - Owner and name filters to apply
/// * `observer` - Sink for the two observational events
///
/// # Returns
/// The surviving entries as an id -> name mapping sorted ascending by name
/// (case-insensitive).
pub fn select_prefix_lists(
    prefix_lists: &[PrefixList],
    criteria: &SelectionCriteria,
    observer: &dyn SelectionObserver,
) -> SelectionResult {
    observer.selection_started();

    let account_id = active(&criteria.account_id);
    let name_filter = active(&criteria.name_filter).map(|f| f.to_lowercase());
    let name_exclude = active(&criteria.name_exclude).map(|f| f.to_lowercase());

    // Working map keyed by id: inserting twice overwrites, so the last record
    // that passed the filters wins. BTreeMap iteration is deterministic,
    // which keeps ties in the final sort deterministic as well.
    let mut matched: BTreeMap<String, String> = BTreeMap::new();

    for pl in prefix_lists {
        let id = match pl.id() {
            Some(id) => id,
            None => continue,
        };
        let name = pl.display_name();

        if account_id.is_some() && pl.owner_id.as_deref() != account_id {
            continue;
        }

        let name_lower = name.to_lowercase();
        if let Some(wanted) = &name_filter {
            if !name_lower.contains(wanted.as_str()) {
                continue;
            }
        }
        if let Some(unwanted) = &name_exclude {
            if name_lower.contains(unwanted.as_str()) {
                continue;
            }
        }

        matched.insert(id.to_string(), name.to_string());
    }

    if matched.is_empty() {
        observer.no_matches();
        return SelectionResult::default();
    }

    let entries = matched
        .into_iter()
        .sorted_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()))
        .collect();

    SelectionResult { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Observer that counts events instead of logging them.
    #[derive(Default)]
    struct RecordingObserver {
        started: AtomicUsize,
        no_matches: AtomicUsize,
    }

    impl SelectionObserver for RecordingObserver {
        fn selection_started(&self) {
            self.started.fetch_add(1, Ordering::SeqCst);
        }

        fn no_matches(&self) {
            self.no_matches.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn pl(id: &str, name: &str, owner: &str) -> PrefixList {
        PrefixList {
            prefix_list_id: Some(id.to_string()),
            prefix_list_name: Some(name.to_string()),
            owner_id: Some(owner.to_string()),
            ..Default::default()
        }
    }

    fn sample_records() -> Vec<PrefixList> {
        vec![
            pl("pl-1", "Prod-East", "111"),
            pl("pl-2", "dev-west", "111"),
            pl("pl-3", "Prod-West", "222"),
        ]
    }

    fn entries(result: &SelectionResult) -> Vec<(String, String)> {
        result
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn test_select_by_owner_sorted_by_name() {
        let criteria = SelectionCriteria {
            account_id: Some("111".to_string()),
            ..Default::default()
        };
        let result =
            select_prefix_lists(&sample_records(), &criteria, &RecordingObserver::default());
        assert_eq!(
            entries(&result),
            vec![
                ("pl-2".to_string(), "dev-west".to_string()),
                ("pl-1".to_string(), "Prod-East".to_string()),
            ],
            "Expected owner 111 lists sorted case-insensitively by name"
        );
    }

    #[test]
    fn test_select_with_include_filter() {
        let criteria = SelectionCriteria {
            account_id: Some("111".to_string()),
            name_filter: Some("prod".to_string()),
            ..Default::default()
        };
        let result =
            select_prefix_lists(&sample_records(), &criteria, &RecordingObserver::default());
        assert_eq!(
            entries(&result),
            vec![("pl-1".to_string(), "Prod-East".to_string())],
            "Include filter should match case-insensitively"
        );
    }

    #[test]
    fn test_select_with_exclude_filter_no_owner() {
        let criteria = SelectionCriteria {
            name_exclude: Some("west".to_string()),
            ..Default::default()
        };
        let result =
            select_prefix_lists(&sample_records(), &criteria, &RecordingObserver::default());
        assert_eq!(
            entries(&result),
            vec![("pl-1".to_string(), "Prod-East".to_string())],
            "Exclude filter applies across owners when account_id is unset"
        );
    }

    #[test]
    fn test_select_empty_input_reports_no_matches() {
        let observer = RecordingObserver::default();
        let result = select_prefix_lists(&[], &SelectionCriteria::default(), &observer);
        assert!(result.is_empty(), "Empty input should yield an empty result");
        assert_eq!(observer.started.load(Ordering::SeqCst), 1);
        assert_eq!(
            observer.no_matches.load(Ordering::SeqCst),
            1,
            "Empty result must be reported exactly once"
        );
    }

    #[test]
    fn test_select_skips_empty_id() {
        let records = vec![PrefixList {
            prefix_list_id: Some(String::new()),
            prefix_list_name: Some("X".to_string()),
            owner_id: Some("1".to_string()),
            ..Default::default()
        }];
        let criteria = SelectionCriteria {
            account_id: Some("1".to_string()),
            ..Default::default()
        };
        let observer = RecordingObserver::default();
        let result = select_prefix_lists(&records, &criteria, &observer);
        assert!(result.is_empty(), "Records with an empty id never match");
        assert_eq!(observer.no_matches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_select_missing_id_skipped() {
        let records = vec![
            PrefixList {
                prefix_list_name: Some("no-id-at-all".to_string()),
                ..Default::default()
            },
            pl("pl-9", "kept", "111"),
        ];
        let result = select_prefix_lists(
            &records,
            &SelectionCriteria::default(),
            &RecordingObserver::default(),
        );
        assert_eq!(entries(&result), vec![("pl-9".to_string(), "kept".to_string())]);
    }

    #[test]
    fn test_missing_name_gets_placeholder() {
        let records = vec![PrefixList {
            prefix_list_id: Some("pl-7".to_string()),
            owner_id: Some("111".to_string()),
            ..Default::default()
        }];
        let result = select_prefix_lists(
            &records,
            &SelectionCriteria::default(),
            &RecordingObserver::default(),
        );
        assert_eq!(result.get("pl-7"), Some("N/A"));

        // The placeholder also takes part in name filtering.
        let criteria = SelectionCriteria {
            name_filter: Some("n/a".to_string()),
            ..Default::default()
        };
        let filtered = select_prefix_lists(&records, &criteria, &RecordingObserver::default());
        assert_eq!(filtered.len(), 1, "Include filter should match the placeholder");
    }

    #[test]
    fn test_missing_owner_never_matches_account_filter() {
        let records = vec![PrefixList {
            prefix_list_id: Some("pl-5".to_string()),
            prefix_list_name: Some("ownerless".to_string()),
            ..Default::default()
        }];

        let criteria = SelectionCriteria {
            account_id: Some("111".to_string()),
            ..Default::default()
        };
        let result = select_prefix_lists(&records, &criteria, &RecordingObserver::default());
        assert!(
            result.is_empty(),
            "A record without an owner must not match a set account filter"
        );

        // Without the filter the same record is kept.
        let unfiltered = select_prefix_lists(
            &records,
            &SelectionCriteria::default(),
            &RecordingObserver::default(),
        );
        assert_eq!(unfiltered.get("pl-5"), Some("ownerless"));
    }

    #[test]
    fn test_owner_filter_is_case_sensitive() {
        let records = vec![pl("pl-6", "edge", "AWS")];
        let criteria = SelectionCriteria {
            account_id: Some("aws".to_string()),
            ..Default::default()
        };
        let result = select_prefix_lists(&records, &criteria, &RecordingObserver::default());
        assert!(result.is_empty(), "Owner comparison is byte-for-byte");
    }

    #[test]
    fn test_empty_criteria_strings_mean_unset() {
        let criteria = SelectionCriteria {
            account_id: Some(String::new()),
            name_filter: Some(String::new()),
            name_exclude: Some(String::new()),
        };
        let result =
            select_prefix_lists(&sample_records(), &criteria, &RecordingObserver::default());
        assert_eq!(result.len(), 3, "Empty criterion strings apply no filtering");
    }

    #[test]
    fn test_duplicate_id_last_passing_record_wins() {
        let records = vec![
            pl("pl-dup", "first-name", "111"),
            pl("pl-dup", "second-name", "111"),
        ];
        let result = select_prefix_lists(
            &records,
            &SelectionCriteria::default(),
            &RecordingObserver::default(),
        );
        assert_eq!(result.len(), 1, "Duplicate ids collapse to one entry");
        assert_eq!(result.get("pl-dup"), Some("second-name"));

        // A later duplicate that fails the filters must not clobber an
        // earlier record that passed.
        let records = vec![
            pl("pl-dup", "keep-me", "111"),
            pl("pl-dup", "other-owner", "222"),
        ];
        let criteria = SelectionCriteria {
            account_id: Some("111".to_string()),
            ..Default::default()
        };
        let result = select_prefix_lists(&records, &criteria, &RecordingObserver::default());
        assert_eq!(result.get("pl-dup"), Some("keep-me"));
    }

    #[test]
    fn test_sort_order_is_case_insensitive_non_decreasing() {
        let records = vec![
            pl("pl-a", "beta", "1"),
            pl("pl-b", "ALPHA", "1"),
            pl("pl-c", "Gamma", "1"),
            pl("pl-d", "alpha-2", "1"),
        ];
        let result = select_prefix_lists(
            &records,
            &SelectionCriteria::default(),
            &RecordingObserver::default(),
        );
        let names: Vec<String> = result.iter().map(|(_, n)| n.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted, "Result names must be in non-decreasing order");
        assert_eq!(result.ids().next(), Some("pl-b"), "ALPHA sorts first");
    }

    #[test]
    fn test_select_is_idempotent() {
        let records = vec![
            pl("pl-x", "Same-Name", "1"),
            pl("pl-y", "same-name", "1"),
            pl("pl-z", "other", "1"),
        ];
        let criteria = SelectionCriteria::default();
        let first = select_prefix_lists(&records, &criteria, &RecordingObserver::default());
        let second = select_prefix_lists(&records, &criteria, &RecordingObserver::default());
        assert_eq!(first, second, "Same input must give same keys in same order");
    }

    #[test]
    fn test_started_event_fires_exactly_once() {
        let observer = RecordingObserver::default();
        select_prefix_lists(&sample_records(), &SelectionCriteria::default(), &observer);
        assert_eq!(observer.started.load(Ordering::SeqCst), 1);
        assert_eq!(
            observer.no_matches.load(Ordering::SeqCst),
            0,
            "No no-match event when records survive"
        );
    }

    #[test]
    fn test_result_display() {
        let result = select_prefix_lists(
            &sample_records(),
            &SelectionCriteria::default(),
            &RecordingObserver::default(),
        );
        let rendered = result.to_string();
        assert!(rendered.starts_with("SelectionResult (3 prefix lists):"));
        assert!(rendered.contains("pl-2 'dev-west'"));
    }
}
