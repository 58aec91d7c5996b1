//! Scheduled timers for the clock engine.
//!
//! The engine never sleeps or spawns on its own. It asks a [`Scheduler`] for
//! a repeating or one-shot timer and receives a [`CancelToken`] back; when a
//! timer fires, the host hands the resulting [`Fired`] value to
//! `TimerEngine::on_fired`.
//!
//! - [`TokioScheduler`]: one tokio task per timer, fires sent over an mpsc channel
//! - [`ManualScheduler`]: a virtual clock for deterministic tests

use std::collections::HashMap;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Duration, Instant, MissedTickBehavior};
use tracing::{debug, trace};

// ============================================================================
// Tokens and fires
// ============================================================================

/// The logical timers the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// One-second clock tick (repeating)
    Tick,
    /// Overlay inactivity countdown (one-shot)
    AutoHide,
    /// Edit highlight removal (one-shot)
    FlashClear,
}

/// Handle identifying one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CancelToken(u64);

impl CancelToken {
    /// Returns the raw identifier.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A timer fire delivered back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub kind: TimerKind,
    pub token: CancelToken,
}

// ============================================================================
// Scheduler
// ============================================================================

/// Capability for registering timers.
///
/// Implementations must stop delivering fires for a token once it is
/// cancelled. A fire already in flight may still arrive; the engine drops
/// fires whose token it no longer holds.
pub trait Scheduler {
    /// Fires `kind` every `interval`, first after one full interval.
    fn schedule_repeating(&mut self, kind: TimerKind, interval: Duration) -> CancelToken;

    /// Fires `kind` once after `delay`.
    fn schedule_once(&mut self, kind: TimerKind, delay: Duration) -> CancelToken;

    /// Stops a timer. Unknown or finished tokens are ignored.
    fn cancel(&mut self, token: CancelToken);
}

// ============================================================================
// TokioScheduler
// ============================================================================

/// Scheduler backed by tokio tasks.
///
/// Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    fired_tx: mpsc::UnboundedSender<Fired>,
    tasks: HashMap<CancelToken, JoinHandle<()>>,
    next_id: u64,
}

impl TokioScheduler {
    /// Creates a scheduler that delivers fires to `fired_tx`.
    pub fn new(fired_tx: mpsc::UnboundedSender<Fired>) -> Self {
        Self {
            fired_tx,
            tasks: HashMap::new(),
            next_id: 0,
        }
    }

    /// Returns the number of timers whose task is still alive.
    pub fn active_count(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    fn allocate(&mut self) -> CancelToken {
        self.tasks.retain(|_, handle| !handle.is_finished());
        self.next_id += 1;
        CancelToken(self.next_id)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&mut self, kind: TimerKind, period: Duration) -> CancelToken {
        let token = self.allocate();
        let tx = self.fired_tx.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if tx.send(Fired { kind, token }).is_err() {
                    break;
                }
            }
        });

        debug!(?kind, token = token.id(), "Scheduled repeating timer");
        self.tasks.insert(token, handle);
        token
    }

    fn schedule_once(&mut self, kind: TimerKind, delay: Duration) -> CancelToken {
        let token = self.allocate();
        let tx = self.fired_tx.clone();

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            let _ = tx.send(Fired { kind, token });
        });

        trace!(?kind, token = token.id(), "Scheduled one-shot timer");
        self.tasks.insert(token, handle);
        token
    }

    fn cancel(&mut self, token: CancelToken) {
        if let Some(handle) = self.tasks.remove(&token) {
            handle.abort();
            trace!(token = token.id(), "Cancelled timer");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

// ============================================================================
// ManualScheduler
// ============================================================================

#[derive(Debug, Clone)]
struct ManualEntry {
    token: CancelToken,
    kind: TimerKind,
    due: Duration,
    period: Option<Duration>,
}

/// Scheduler driven by a virtual clock.
///
/// Time only moves when the owner calls [`ManualScheduler::pop_due`] or
/// [`ManualScheduler::settle`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    entries: Vec<ManualEntry>,
    next_id: u64,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live timers of `kind`.
    pub fn active(&self, kind: TimerKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Number of live timers of any kind.
    pub fn active_total(&self) -> usize {
        self.entries.len()
    }

    /// Releases the earliest timer due at or before `deadline`.
    ///
    /// The virtual clock moves to that timer's due time. Repeating timers
    /// are rescheduled one period later; one-shot timers are removed.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Fired> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= deadline)
            .min_by_key(|(_, e)| (e.due, e.token.0))
            .map(|(i, _)| i)?;

        let entry = self.entries[index].clone();
        self.now = self.now.max(entry.due);

        match entry.period {
            Some(period) => self.entries[index].due = entry.due + period,
            None => {
                self.entries.remove(index);
            }
        }

        Some(Fired {
            kind: entry.kind,
            token: entry.token,
        })
    }

    /// Moves the virtual clock forward to `deadline` without firing anything.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    fn push(&mut self, kind: TimerKind, delay: Duration, period: Option<Duration>) -> CancelToken {
        self.next_id += 1;
        let token = CancelToken(self.next_id);
        self.entries.push(ManualEntry {
            token,
            kind,
            due: self.now + delay,
            period,
        });
        token
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, kind: TimerKind, interval: Duration) -> CancelToken {
        self.push(kind, interval, Some(interval))
    }

    fn schedule_once(&mut self, kind: TimerKind, delay: Duration) -> CancelToken {
        self.push(kind, delay, None)
    }

    fn cancel(&mut self, token: CancelToken) {
        self.entries.retain(|e| e.token != token);
    }
}

// ============================================================================
// Tests
// ============================================================================
