use std::time::{Duration, Instant};

/// Identity of one game between resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionId(u64);

impl SessionId {
    pub fn next(self) -> SessionId {
        SessionId(self.0.wrapping_add(1))
    }
}

/// A computer move waiting for its delay to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledMove {
    session: SessionId,
    due: Instant,
}

impl ScheduledMove {
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

/// Holds at most one pending computer move.
#[derive(Debug, Clone)]
pub struct Scheduler {
    delay: Duration,
    pending: Option<ScheduledMove>,
}

impl Scheduler {
    pub fn new(delay: Duration) -> Self {
        Scheduler {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pending(&self) -> Option<&ScheduledMove> {
        self.pending.as_ref()
    }

    /// Schedule a move for `session`, replacing anything already pending.
    pub fn schedule(&mut self, session: SessionId, now: Instant) -> ScheduledMove {
        let scheduled = ScheduledMove {
            session,
            due: now + self.delay,
        };
        self.pending = Some(scheduled);
        scheduled
    }

    pub fn cancel(&mut self) -> Option<ScheduledMove> {
        self.pending.take()
    }

    /// Take the pending move if it is due. A due move scheduled for another
    /// session is discarded rather than returned.
    pub fn take_due(&mut self, session: SessionId, now: Instant) -> Option<ScheduledMove> {
        if !self.pending.is_some_and(|p| p.is_due(now)) {
            return None;
        }
        let scheduled = self.pending.take()?;
        if scheduled.session != session {
            tracing::debug!(
                stale = scheduled.session.0,
                current = session.0,
                "dropping computer move from a previous game"
            );
            return None;
        }
        Some(scheduled)
    }
}
