//! Stale-result detection for overlapping checks.
//!
//! Checks are independent requests and may complete out of order. A caller
//! that re-checks on every edit takes a ticket before each call and drops any
//! result whose ticket is no longer current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckTicket(u64);

/// Hands out monotonically increasing [`CheckTicket`]s.
#[derive(Debug, Default)]
pub struct CheckSequencer {
    latest: AtomicU64,
}

impl CheckSequencer {
    /// Creates a sequencer with no tickets issued.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issues a ticket, superseding every earlier one.
    pub fn begin(&self) -> CheckTicket {
        CheckTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Returns true if no later ticket has been issued.
    pub fn is_current(&self, ticket: CheckTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn later_ticket_supersedes_earlier() {
        let sequencer = CheckSequencer::new();
        let first = sequencer.begin();
        assert!(sequencer.is_current(first));

        let second = sequencer.begin();
        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[tokio::test]
    async fn slow_superseded_check_is_discarded() {
        let sequencer = Arc::new(CheckSequencer::new());

        let slow = {
            let sequencer = Arc::clone(&sequencer);
            let ticket = sequencer.begin();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                sequencer.is_current(ticket)
            })
        };
        let fast = {
            let sequencer = Arc::clone(&sequencer);
            let ticket = sequencer.begin();
            tokio::spawn(async move { sequencer.is_current(ticket) })
        };

        assert!(fast.await.unwrap());
        assert!(!slow.await.unwrap());
    }
}
