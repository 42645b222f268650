//! Clock seam so the request path and tests agree on the current moment

use chrono::{DateTime, Local};

/// Source of the moment used for admission decisions
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock used by the daemon
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_tracks_local_time() {
        let before = Local::now();
        let observed = SystemClock.now();
        let after = Local::now();

        assert!(before <= observed);
        assert!(observed <= after);
    }
}
