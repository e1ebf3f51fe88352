//=========================================================================
// Scheduler
//=========================================================================
//
// Owned set of cancellable delayed tasks.
//
// Architecture:
//   schedule_once / schedule_repeating ──► tasks: Vec<ScheduledTask>
//                                              │
//   tick loop ──► pop_due(now) ◄───────────────┘  (earliest first)
//
//   cancel_owner(key) / cancel_all() drop tasks en masse, so nothing
//   scheduled by a torn-down owner can fire afterwards.
//
// Time is a `Duration` since engine start, supplied by the caller. The
// scheduler never reads a clock itself.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::time::Duration;

use log::trace;

//=== ScheduledTask =======================================================

#[derive(Debug)]
struct ScheduledTask<K, T> {
    /// Insertion order, breaks deadline ties.
    seq: u64,
    owner: K,
    payload: T,
    due: Duration,
    period: Option<Duration>,
}

//=== Fired ===============================================================

/// A task that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<K, T> {
    pub owner: K,
    pub payload: T,
    /// Deadline the task was scheduled for (not the time it was polled).
    pub due: Duration,
}

//=== Scheduler ===========================================================

/// Delayed tasks keyed by the owner that scheduled them.
///
/// An `(owner, payload)` pair can be pending at most once; scheduling it
/// again while pending is refused.
pub struct Scheduler<K, T> {
    tasks: Vec<ScheduledTask<K, T>>,
    next_seq: u64,
}

impl<K, T> Scheduler<K, T>
where
    K: Copy + PartialEq + Debug,
    T: Clone + PartialEq + Debug,
{
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_seq: 0,
        }
    }

    //--- Scheduling -------------------------------------------------------

    /// Fires `payload` once, `delay` after `now`.
    ///
    /// Returns `false` if the same `(owner, payload)` is already pending.
    pub fn schedule_once(&mut self, owner: K, now: Duration, delay: Duration, payload: T) -> bool {
        self.insert(owner, now + delay, None, payload)
    }

    /// Fires `payload` every `period`, first at `now + period`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn schedule_repeating(&mut self, owner: K, now: Duration, period: Duration, payload: T) -> bool {
        assert!(!period.is_zero(), "Repeating period must be non-zero");
        self.insert(owner, now + period, Some(period), payload)
    }

    //--- Cancellation -----------------------------------------------------

    /// Cancels every task scheduled by `owner`. Returns how many were dropped.
    pub fn cancel_owner(&mut self, owner: K) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.owner != owner);
        let dropped = before - self.tasks.len();
        if dropped > 0 {
            trace!("Cancelled {} timer(s) owned by {:?}", dropped, owner);
        }
        dropped
    }

    /// Cancels everything. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }

    //--- Polling ----------------------------------------------------------

    /// Removes and returns the earliest task due at or before `now`.
    ///
    /// Ties fire in scheduling order. Repeating tasks are re-armed at the
    /// first whole period strictly after `now`, so a long stall fires them
    /// once rather than once per missed period.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<K, T>> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;

        let task = &self.tasks[index];
        let fired = Fired {
            owner: task.owner,
            payload: task.payload.clone(),
            due: task.due,
        };

        let period = task.period;

        match period {
            Some(period) => {
                let task = &mut self.tasks[index];
                while task.due <= now {
                    task.due += period;
                }
            }
            None => {
                self.tasks.swap_remove(index);
            }
        }

        trace!("Timer fired: {:?}", fired);
        Some(fired)
    }

    //--- Query API --------------------------------------------------------

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_scheduled(&self, owner: K, payload: &T) -> bool {
        self.tasks
            .iter()
            .any(|t| t.owner == owner && &t.payload == payload)
    }

    //--- Internal Helpers -------------------------------------------------

    fn insert(&mut self, owner: K, due: Duration, period: Option<Duration>, payload: T) -> bool {
        if self.is_scheduled(owner, &payload) {
            trace!("{:?} already scheduled for {:?}, skipping", payload, owner);
            return false;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(ScheduledTask {
            seq,
            owner,
            payload,
            due,
            period,
        });
        true
    }
}

impl<K, T> Default for Scheduler<K, T>
where
    K: Copy + PartialEq + Debug,
    T: Clone + PartialEq + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
