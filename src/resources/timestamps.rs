//! Status transition timestamps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// When a resource entered each status, keyed like `queued-at` or `finished-at`.
///
/// Kept as a map because every resource kind reports a different set of
/// keys and servers add new ones over time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusTimestamps(BTreeMap<String, DateTime<Utc>>);

impl StatusTimestamps {
    /// Timestamp for a key such as `finished-at`
    pub fn get(&self, key: &str) -> Option<DateTime<Utc>> {
        self.0.get(key).copied()
    }

    pub fn queued_at(&self) -> Option<DateTime<Utc>> {
        self.get("queued-at")
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.get("started-at")
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.get("finished-at")
    }

    pub fn errored_at(&self) -> Option<DateTime<Utc>> {
        self.get("errored-at")
    }

    pub fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.get("canceled-at")
    }

    /// Number of recorded timestamps
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, DateTime<Utc>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
