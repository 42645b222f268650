//! Shared set of hosts that are refused while the block window is open

use crate::error::EmptyBlockListInput;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Canonical form used for every host comparison: whitespace and line
/// breaks stripped, lowercased
fn normalize_host(host: &str) -> String {
    host.chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Split a comma-separated seed string into hosts
///
/// Blank members are dropped; an input with no usable member is an error
/// so a proxy is never started with nothing to do.
pub fn parse_seed_list(input: &str) -> Result<Vec<String>, EmptyBlockListInput> {
    let members: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|member| !member.is_empty())
        .map(str::to_owned)
        .collect();

    if members.is_empty() {
        return Err(EmptyBlockListInput);
    }
    Ok(members)
}

/// Thread-safe set of blocked hosts
///
/// Clones share the same underlying set, so the admin endpoint and the
/// request path observe each other's changes immediately. All lookups and
/// mutations normalize their argument, callers never pre-clean input.
#[derive(Debug, Clone)]
pub struct BlockList {
    hosts: Arc<Mutex<HashSet<String>>>,
}

impl BlockList {
    pub fn new() -> Self {
        Self {
            hosts: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Add a host; adding an existing member is a no-op
    pub fn add(&self, host: &str) {
        if let Ok(mut hosts) = self.hosts.lock() {
            hosts.insert(normalize_host(host));
        }
    }

    /// Remove a host; removing an absent member is a no-op
    pub fn remove(&self, host: &str) {
        if let Ok(mut hosts) = self.hosts.lock() {
            hosts.remove(&normalize_host(host));
        }
    }

    /// Whether the host is currently blocked
    pub fn contains(&self, host: &str) -> bool {
        self.hosts
            .lock()
            .map(|hosts| hosts.contains(&normalize_host(host)))
            .unwrap_or(false)
    }

    /// Snapshot of the current members, in no particular order
    pub fn all(&self) -> Vec<String> {
        self.hosts
            .lock()
            .map(|hosts| hosts.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of blocked hosts
    pub fn len(&self) -> usize {
        self.hosts.lock().map(|hosts| hosts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every member
    pub fn clear(&self) {
        if let Ok(mut hosts) = self.hosts.lock() {
            hosts.clear();
        }
    }
}

impl Default for BlockList {
    fn default() -> Self {
        Self::new()
    }
}
