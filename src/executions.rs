//! Execution counting and gating
//!
//! Every action tracks how many times it has been applied against a cap
//! that the action re-derives from its bound object on each query. The
//! counter itself is a plain value type; cap evaluation stays with the
//! action so dynamic caps keep working.

use serde::{Deserialize, Serialize};

/// Sentinel cap meaning "no limit on executions".
pub const INFINITE_EXECUTIONS: i32 = -1;

/// Coarse lifecycle phase of an execution counter under a given cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionPhase {
    /// Nothing applied yet and the cap still allows runs.
    Unexecuted,
    /// Some runs applied, more allowed.
    PartiallyExecuted,
    /// The cap is spent; no further runs are allowed.
    Exhausted,
    /// The cap is the infinite sentinel; runs are never denied.
    Unlimited,
}

impl ExecutionPhase {
    /// Whether this phase permits further executions
    #[inline]
    pub fn allows_execution(&self) -> bool {
        !matches!(self, ExecutionPhase::Exhausted)
    }

    /// Get phase name as string
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionPhase::Unexecuted => "unexecuted",
            ExecutionPhase::PartiallyExecuted => "partially_executed",
            ExecutionPhase::Exhausted => "exhausted",
            ExecutionPhase::Unlimited => "unlimited",
        }
    }
}

/// Monotonic count of completed executions.
///
/// The counter never decreases and, under a finite cap, never exceeds it.
/// Caps below [`INFINITE_EXECUTIONS`] are treated as the sentinel itself,
/// matching the clamping applied when a cap is read from an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionCounter {
    count: i32,
}

impl ExecutionCounter {
    /// Create a counter with zero recorded executions
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total executions recorded so far.
    #[inline]
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Record up to `amount` further executions under `cap`.
    ///
    /// Negative amounts are ignored. Under a finite cap the count saturates
    /// at the cap; under the infinite sentinel it grows without bound. A
    /// counter already at or past a finite cap is left untouched, so a cap
    /// that shrinks between calls never rolls the count back.
    pub fn advance(&mut self, amount: i32, cap: i32) {
        if amount < 0 {
            return;
        }
        let cap = cap.max(INFINITE_EXECUTIONS);
        if cap == INFINITE_EXECUTIONS {
            self.count = self.count.saturating_add(amount);
        } else if self.count < cap {
            self.count = self.count.saturating_add(amount).min(cap);
        }
    }

    /// Executions still available under `cap`.
    ///
    /// Returns [`INFINITE_EXECUTIONS`] when the cap is the sentinel, and
    /// never returns a negative value for finite caps.
    #[inline]
    pub fn remaining(&self, cap: i32) -> i32 {
        let cap = cap.max(INFINITE_EXECUTIONS);
        if cap == INFINITE_EXECUTIONS {
            INFINITE_EXECUTIONS
        } else {
            (cap - self.count).max(0)
        }
    }

    /// Whether at least one more execution is available under `cap`.
    #[inline]
    pub fn has_remaining(&self, cap: i32) -> bool {
        self.remaining(cap) != 0
    }

    /// Classify the counter relative to `cap`.
    pub fn phase(&self, cap: i32) -> ExecutionPhase {
        let cap = cap.max(INFINITE_EXECUTIONS);
        if cap == INFINITE_EXECUTIONS {
            ExecutionPhase::Unlimited
        } else if self.remaining(cap) == 0 {
            ExecutionPhase::Exhausted
        } else if self.count == 0 {
            ExecutionPhase::Unexecuted
        } else {
            ExecutionPhase::PartiallyExecuted
        }
    }
}
