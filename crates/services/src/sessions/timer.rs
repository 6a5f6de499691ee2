use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Epochs are unique across sessions so a token from a replaced game can
/// never match a newer one.
static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

fn next_epoch() -> u64 {
    NEXT_EPOCH.fetch_add(1, Ordering::Relaxed)
}

/// Handle for a delayed transition the host must fire later.
///
/// Tokens are stamped with an epoch; anything that invalidates the pending
/// transition bumps the epoch so the old token is rejected when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken {
    epoch: u64,
}

/// A transition the host should fire after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub token: TransitionToken,
    pub delay: Duration,
}

/// Identifies one uninterrupted run of the per-question countdown.
///
/// A new token is issued whenever the countdown restarts or stops, so a tick
/// loop started for an earlier run cannot drain the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountdownToken {
    epoch: u64,
}

/// At most one pending transition at a time.
#[derive(Debug, Default)]
pub(crate) struct TransitionSlot {
    pending: Option<TransitionToken>,
}

impl TransitionSlot {
    /// Replaces any pending transition with a fresh one.
    pub(crate) fn schedule(&mut self, delay: Duration) -> PendingTransition {
        let token = TransitionToken {
            epoch: next_epoch(),
        };
        self.pending = Some(token);
        PendingTransition { token, delay }
    }

    /// Returns true if a transition was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consumes the pending transition if `token` still matches it.
    pub(crate) fn take(&mut self, token: TransitionToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug)]
pub(crate) struct CountdownEpoch {
    epoch: u64,
}

impl Default for CountdownEpoch {
    fn default() -> Self {
        Self {
            epoch: next_epoch(),
        }
    }
}

impl CountdownEpoch {
    pub(crate) fn bump(&mut self) {
        self.epoch = next_epoch();
    }

    pub(crate) fn token(&self) -> CountdownToken {
        CountdownToken { epoch: self.epoch }
    }
}
