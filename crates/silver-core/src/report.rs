//! Stateless reporting over a record snapshot.
//!
//! These are pure functions for the statistics view. Nothing here is
//! persisted; every figure is recomputed from the current table.

use serde::Serialize;

use crate::entities::CompensationRecord;

/// Aggregate figures for the statistics view.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_silver: u64,
    pub given_count: usize,
    pub not_given_count: usize,
}

/// One row of the top-recipients ranking.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecipientTotal {
    pub nick: String,
    pub silver: u64,
}

/// Sum of `silver` over all records.
#[must_use]
pub fn total_silver(records: &[CompensationRecord]) -> u64 {
    records.iter().map(|record| record.silver).sum()
}

/// Totals and the given/pending partition.
#[must_use]
pub fn summary(records: &[CompensationRecord]) -> StatsSummary {
    let given_count = records.iter().filter(|record| record.given).count();
    StatsSummary {
        total_silver: total_silver(records),
        given_count,
        not_given_count: records.len() - given_count,
    }
}

/// Sum still owed to a nick (records not yet marked given).
#[must_use]
pub fn pending_silver_for(records: &[CompensationRecord], nick: &str) -> u64 {
    records
        .iter()
        .filter(|record| !record.given && record.nick == nick)
        .map(|record| record.silver)
        .sum()
}

/// Nicks with at least one pending record, in first-appearance order.
///
/// This feeds the mark-given selection list.
#[must_use]
pub fn pending_nicks(records: &[CompensationRecord]) -> Vec<String> {
    let mut nicks: Vec<String> = Vec::new();
    for record in records.iter().filter(|record| !record.given) {
        if !nicks.iter().any(|nick| *nick == record.nick) {
            nicks.push(record.nick.clone());
        }
    }
    nicks
}

/// Recipients ranked by total silver received, descending.
///
/// Ties keep first-appearance order (stable sort), and the ranking is
/// truncated to `limit` entries.
#[must_use]
pub fn top_recipients(records: &[CompensationRecord], limit: usize) -> Vec<RecipientTotal> {
    let mut totals: Vec<RecipientTotal> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|total| total.nick == record.nick) {
            Some(total) => total.silver += record.silver,
            None => totals.push(RecipientTotal {
                nick: record.nick.clone(),
                silver: record.silver,
            }),
        }
    }
    totals.sort_by(|a, b| b.silver.cmp(&a.silver));
    totals.truncate(limit);
    totals
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::CompensationRecord;

    fn record(nick: &str, silver: u64, given: bool) -> CompensationRecord {
        CompensationRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            nick: nick.into(),
            silver,
            given,
        }
    }

    #[test]
    fn summary_partitions_by_given() {
        let records = vec![
            record("A", 100, true),
            record("B", 300, false),
            record("C", 300, false),
        ];
        let stats = summary(&records);
        assert_eq!(stats.total_silver, 700);
        assert_eq!(stats.given_count, 1);
        assert_eq!(stats.not_given_count, 2);
        assert_eq!(stats.given_count + stats.not_given_count, records.len());
    }

    #[test]
    fn empty_table_sums_to_zero() {
        assert_eq!(total_silver(&[]), 0);
        assert_eq!(summary(&[]).not_given_count, 0);
        assert!(top_recipients(&[], 10).is_empty());
    }

    #[test]
    fn pending_silver_ignores_given_rows() {
        let records = vec![
            record("Alice", 100, false),
            record("Alice", 200, true),
            record("Bob", 50, false),
        ];
        assert_eq!(pending_silver_for(&records, "Alice"), 100);
        assert_eq!(pending_silver_for(&records, "Bob"), 50);
        assert_eq!(pending_silver_for(&records, "Carol"), 0);
    }

    #[test]
    fn pending_nicks_dedupe_in_first_appearance_order() {
        let records = vec![
            record("Bob", 10, false),
            record("Alice", 20, false),
            record("Bob", 30, false),
            record("Carol", 40, true),
        ];
        assert_eq!(pending_nicks(&records), vec!["Bob", "Alice"]);
    }

    #[test]
    fn top_recipients_orders_descending_with_stable_ties() {
        let records = vec![
            record("A", 100, false),
            record("B", 300, true),
            record("C", 300, false),
        ];
        let top = top_recipients(&records, 10);
        let nicks: Vec<&str> = top.iter().map(|total| total.nick.as_str()).collect();
        // B and C tie at 300; B appeared first so B stays ahead.
        assert_eq!(nicks, vec!["B", "C", "A"]);
    }

    #[test]
    fn top_recipients_groups_across_rows_and_truncates() {
        let mut records = Vec::new();
        for index in 0..12 {
            records.push(record(&format!("nick{index}"), 10 + index, false));
        }
        records.push(record("nick0", 1000, true));

        let top = top_recipients(&records, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].nick, "nick0");
        assert_eq!(top[0].silver, 1010);
    }
}
