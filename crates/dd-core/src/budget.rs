//! Dual-governor run budget.
//!
//! # Design
//!
//! A dispatch run is bounded by two independent quantities:
//!
//! - the **logical limit** caps the *simulated* schedule length (total
//!   travel-time units accumulated across orders);
//! - the **wall limit** caps how long the *computation itself* may run — a
//!   safety valve against runaway input sizes.
//!
//! Both are checked once per processed order, so a single oversized order
//! cannot blow through the budget unnoticed.  Reading the wall clock is a
//! non-blocking, idempotent `Instant::elapsed` call — never a suspension
//! point.  There is no separate cancellation token; the wall limit *is* the
//! cancellation mechanism.

use std::time::{Duration, Instant};

// ── RunBudget ─────────────────────────────────────────────────────────────────

/// The two caps governing one dispatch run.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunBudget {
    /// Maximum simulated time units.  The run stops once the accumulated
    /// total reaches or exceeds this.
    pub logical_limit: u64,

    /// Maximum real computation duration.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub wall_limit: Duration,
}

impl RunBudget {
    pub fn new(logical_limit: u64, wall_limit: Duration) -> Self {
        Self { logical_limit, wall_limit }
    }

    /// A budget large enough to never trip in practice.  Used by tests and
    /// callers that want pure completion semantics.
    pub fn unbounded() -> Self {
        Self {
            logical_limit: u64::MAX,
            wall_limit:    Duration::from_secs(u64::MAX / 1_000),
        }
    }

    /// `true` once the accumulated simulated total trips the logical cap.
    #[inline]
    pub fn logical_exceeded(&self, total_time: u64) -> bool {
        total_time >= self.logical_limit
    }
}

#[cfg(feature = "serde")]
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        (d.as_millis() as u64).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

// ── BudgetClock ───────────────────────────────────────────────────────────────

/// Wall-clock governor for a single run.
///
/// Started when the run begins; cheap to query every iteration.
#[derive(Clone, Debug)]
pub struct BudgetClock {
    started:    Instant,
    wall_limit: Duration,
}

impl BudgetClock {
    /// Start the clock now.
    pub fn start(wall_limit: Duration) -> Self {
        Self { started: Instant::now(), wall_limit }
    }

    /// Real time elapsed since the run started, in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// `true` once the wall limit has been reached.
    #[inline]
    pub fn wall_exceeded(&self) -> bool {
        self.started.elapsed() >= self.wall_limit
    }
}
