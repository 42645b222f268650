//! Combines the block list and the block window into one admission decision

use crate::blocklist::BlockList;
use crate::window::BlockWindow;
use chrono::{DateTime, TimeZone};
use std::sync::{Arc, PoisonError, RwLock};

/// Decides whether a request may be forwarded
///
/// A host is refused only while the block window is open AND the host is on
/// the block list; at every other moment everything is forwarded. Clones
/// share the same list and window, so admin changes apply to in-flight
/// traffic immediately.
#[derive(Debug, Clone)]
pub struct AdmissionEngine {
    list: BlockList,
    window: Arc<RwLock<BlockWindow>>,
}

impl AdmissionEngine {
    pub fn new(list: BlockList, window: BlockWindow) -> Self {
        Self {
            list,
            window: Arc::new(RwLock::new(window)),
        }
    }

    /// Whether a request for `host` at `moment` may be forwarded
    pub fn should_forward<Tz: TimeZone>(&self, host: &str, moment: &DateTime<Tz>) -> bool {
        if !self.window().contains(moment) {
            return true;
        }
        !self.list.contains(host)
    }

    /// The shared block list, for admin mutations and reporting
    pub fn list(&self) -> &BlockList {
        &self.list
    }

    /// Snapshot of the current window
    pub fn window(&self) -> BlockWindow {
        *self.window.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swap in a new window; readers see either the old or the new value,
    /// never a half-written one
    pub fn set_window(&self, window: BlockWindow) {
        *self.window.write().unwrap_or_else(PoisonError::into_inner) = window;
    }
}
