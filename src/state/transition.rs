//! Section transition choreography.
//!
//! A switch plays the outgoing section's exit, then the incoming section's
//! entry. Only one section is ever displayed: during the exit it is the
//! outgoing one, afterwards the incoming one. None of this affects which
//! section is active.

use super::navigation::Section;
use std::time::{Duration, Instant};

/// CSS-style cubic Bézier timing curve with fixed end points (0,0) and (1,1).
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        CubicBezier { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    /// Map linear progress `x` in [0, 1] to eased progress.
    ///
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        // x(t) is monotonic for control points inside [0, 1], so bisect on t.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut t = x;
        for _ in 0..48 {
            let current = Self::sample(self.x1, self.x2, t);
            if (current - x).abs() < 1e-7 {
                break;
            }
            if current < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

/// Timing contract for section changes.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPolicy {
    /// Length of each phase, and of each item's reveal.
    pub duration: Duration,
    pub easing: CubicBezier,
    /// Vertical offset an entering section starts from.
    pub entry_offset: f64,
    /// Vertical offset an exiting section ends at.
    pub exit_offset: f64,
    /// Wait after a section starts entering before its first item reveals.
    pub item_delay: Duration,
    /// Additional wait for each later item.
    pub item_stagger: Duration,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        TransitionPolicy {
            duration: Duration::from_millis(400),
            easing: CubicBezier::new(0.25, 0.1, 0.25, 1.0),
            entry_offset: 20.0,
            exit_offset: -20.0,
            item_delay: Duration::from_millis(200),
            item_stagger: Duration::from_millis(100),
        }
    }
}

impl TransitionPolicy {
    /// Eased reveal progress of the `index`-th item of a section that started
    /// entering `since_entry` ago. Zero until the item's delay has passed.
    /// Without an entry every item is fully shown.
    ///
    pub fn item_progress(&self, index: usize, since_entry: Option<Duration>) -> f64 {
        let Some(since_entry) = since_entry else {
            return 1.0;
        };
        let stagger = self
            .item_stagger
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
        let delay = self.item_delay.saturating_add(stagger);
        match since_entry.checked_sub(delay) {
            Some(elapsed) => self
                .easing
                .ease(elapsed.as_secs_f64() / self.duration.as_secs_f64()),
            None => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exiting,
    Entering,
    Settled,
}

/// What to draw at one instant.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionFrame {
    pub section: Section,
    pub phase: Phase,
    pub opacity: f64,
    pub offset: f64,
    /// Time since this section started a fresh entry, while its items may
    /// still be revealing. `None` when there is nothing to stagger.
    pub since_entry: Option<Duration>,
}

/// Tracks the visual progress of the latest section change.
///
#[derive(Debug, Clone)]
pub struct SectionTransition {
    policy: TransitionPolicy,
    from: Option<Section>,
    to: Section,
    started_at: Option<Instant>,
    /// Opacity and offset a re-entry continues from.
    resume_from: Option<(f64, f64)>,
}

impl SectionTransition {
    /// Start at rest on `section`.
    ///
    pub fn settled(section: Section, policy: TransitionPolicy) -> Self {
        SectionTransition {
            policy,
            from: None,
            to: section,
            started_at: None,
            resume_from: None,
        }
    }

    pub fn policy(&self) -> &TransitionPolicy {
        &self.policy
    }

    /// Animate towards `to`, starting from whatever is displayed at `now`.
    ///
    pub fn begin(&mut self, to: Section, now: Instant) {
        let current = self.frame(now);
        if current.section == to {
            // Reselected the section that was on its way out: bring it back
            // in from where the exit had got to.
            if current.phase == Phase::Exiting {
                self.from = None;
                self.resume_from = Some((current.opacity, current.offset));
                self.started_at = Some(now);
            }
        } else if current.phase == Phase::Exiting {
            // Still leaving: keep the exit running and retarget the entry.
        } else {
            self.from = Some(current.section);
            self.resume_from = None;
            self.started_at = Some(now);
        }
        self.to = to;
    }

    /// The single section displayed at `now` and how far along it is.
    ///
    pub fn frame(&self, now: Instant) -> SectionFrame {
        let Some(started_at) = self.started_at else {
            return self.rest(None);
        };
        let duration = self.policy.duration;
        let mut elapsed = now.saturating_duration_since(started_at);

        if let Some(from) = self.from {
            if elapsed < duration {
                let p = self.progress(elapsed);
                return SectionFrame {
                    section: from,
                    phase: Phase::Exiting,
                    opacity: 1.0 - p,
                    offset: self.policy.exit_offset * p,
                    since_entry: None,
                };
            }
            elapsed -= duration;
        }

        // A resumed section never left, so its items are already in place.
        let since_entry = match self.resume_from {
            Some(_) => None,
            None => Some(elapsed),
        };
        if elapsed < duration {
            let p = self.progress(elapsed);
            let (opacity, offset) = match self.resume_from {
                Some((opacity, offset)) => (opacity + (1.0 - opacity) * p, offset * (1.0 - p)),
                None => (p, self.policy.entry_offset * (1.0 - p)),
            };
            return SectionFrame {
                section: self.to,
                phase: Phase::Entering,
                opacity,
                offset,
                since_entry,
            };
        }
        self.rest(since_entry)
    }

    fn progress(&self, elapsed: Duration) -> f64 {
        let linear = elapsed.as_secs_f64() / self.policy.duration.as_secs_f64();
        self.policy.easing.ease(linear)
    }

    fn rest(&self, since_entry: Option<Duration>) -> SectionFrame {
        SectionFrame {
            section: self.to,
            phase: Phase::Settled,
            opacity: 1.0,
            offset: 0.0,
            since_entry,
        }
    }
}
