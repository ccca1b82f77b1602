//! Trigger-log collection state for both dashboards.
//!
//! DESIGN
//! ======
//! Each fetch replaces the whole collection. A failed fetch empties the list
//! and raises a dismissible banner instead of propagating, so the page stays
//! usable in a read-only, empty state.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use std::collections::BTreeMap;

use crate::net::error::ApiError;
use crate::net::types::{SaveStatus, TriggerLog};

/// Shared trigger-log state backed by `GET /webhook/logs`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsState {
    pub items: Vec<TriggerLog>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Counters shown in the dashboard stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogStats {
    pub total_leads: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub no_contact_count: usize,
    /// Rounded percentage of successful saves; 0 when there are no logs.
    pub success_rate: u32,
    pub today_count: usize,
}

impl LogsState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<TriggerLog>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!("log fetch failed: {e}");
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Derive stat-card counters. `today` is a `YYYY-MM-DD` date.
    pub fn stats(&self, today: &str) -> LogStats {
        let count = |status: SaveStatus| self.items.iter().filter(|l| l.save_status == status).count();
        let total_leads = self.items.len();
        let success_count = count(SaveStatus::Success);
        LogStats {
            total_leads,
            success_count,
            failure_count: count(SaveStatus::Failure),
            no_contact_count: count(SaveStatus::NoContactInfo),
            success_rate: percentage(success_count, total_leads),
            today_count: self.items.iter().filter(|l| l.date() == Some(today)).count(),
        }
    }

    /// Leads per hour bucket (`YYYY-MM-DD HH:00`), oldest first, keeping
    /// the latest `limit` buckets. Entries without an hour are skipped.
    pub fn hourly_counts(&self, limit: usize) -> Vec<(String, usize)> {
        let mut buckets: BTreeMap<String, usize> = BTreeMap::new();
        for entry in &self.items {
            let (Some(date), Some(hour)) = (entry.date(), entry.timestamp.get(11..13)) else {
                continue;
            };
            *buckets.entry(format!("{date} {hour}:00")).or_default() += 1;
        }
        let skip = buckets.len().saturating_sub(limit);
        buckets.into_iter().skip(skip).collect()
    }

    /// Newest `n` entries, newest first. The server returns oldest first.
    pub fn recent(&self, n: usize) -> Vec<TriggerLog> {
        self.items.iter().rev().take(n).cloned().collect()
    }
}

/// Rounded `part / whole` percentage, 0 for an empty whole.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = (part.min(whole) * 200 + whole) / (2 * whole);
    u32::try_from(scaled).unwrap_or(100)
}
