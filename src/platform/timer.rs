use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time for a scheduler.
///
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when advanced. Clones share the same time, so a test
/// can keep one handle while the scheduler owns another.
///
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        ManualClock::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

/// Opaque reference to one scheduled expiry.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Capability to arm and cancel deferred expiries.
///
/// Expiries are delivered by polling [`Scheduler::take_due`] from the event
/// loop rather than by invoking callbacks, so the owner of a handle decides
/// what firing means.
pub trait Scheduler {
    /// Arm a timer that becomes due once `delay` has elapsed.
    fn after(&mut self, delay: Duration) -> TimerHandle;

    /// Disarm a timer. Returns false if it already fired or was never armed.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Remove and return every timer whose deadline has passed, earliest first.
    fn take_due(&mut self) -> Vec<TimerHandle>;

    /// Number of armed timers.
    fn pending(&self) -> usize;
}

/// Deadline queue over a [`Clock`].
///
#[derive(Debug)]
pub struct TimerQueue<C: Clock> {
    clock: C,
    next_id: u64,
    deadlines: BTreeMap<TimerHandle, Instant>,
}

impl<C: Clock> TimerQueue<C> {
    pub fn new(clock: C) -> Self {
        TimerQueue {
            clock,
            next_id: 0,
            deadlines: BTreeMap::new(),
        }
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn after(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.deadlines.insert(handle, self.clock.now() + delay);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.deadlines.remove(&handle).is_some()
    }

    fn take_due(&mut self) -> Vec<TimerHandle> {
        let now = self.clock.now();
        let mut due: Vec<(Instant, TimerHandle)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(handle, deadline)| (*deadline, *handle))
            .collect();
        due.sort();
        for (_, handle) in &due {
            self.deadlines.remove(handle);
        }
        due.into_iter().map(|(_, handle)| handle).collect()
    }

    fn pending(&self) -> usize {
        self.deadlines.len()
    }
}
