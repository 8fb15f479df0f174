//! Staggered reveal scheduling.
//!
//! When the filter displays a new page, entries are revealed one after the
//! other rather than all at once: the `k`-th displayed entry becomes active
//! `k * step` after the render. The schedule is purely presentational and is
//! driven by the host, which advances its clock (from a frame callback, a
//! timer, or in one go when it does not animate).
//!
//! # Invariants
//!
//! 1. Pending reveals are ordered by due time (offsets only grow with `k`).
//! 2. [`RevealSchedule::replace`] cancels every pending reveal before
//!    scheduling the new batch and bumps the generation, so a reveal queued
//!    for an older page can never fire after a newer render.
//! 3. The clock only moves forward; a zero step makes every reveal due
//!    immediately.

use std::collections::VecDeque;
use std::time::Duration;

pub const DEFAULT_REVEAL_STEP: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingReveal {
    slot: usize,
    due: Duration,
}

#[derive(Debug, Clone)]
pub struct RevealSchedule {
    step: Duration,
    clock: Duration,
    generation: u64,
    pending: VecDeque<PendingReveal>,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_STEP)
    }
}

impl RevealSchedule {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            clock: Duration::ZERO,
            generation: 0,
            pending: VecDeque::new(),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of batches scheduled so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn cancel(&mut self) {
        self.pending.clear();
    }

    /// Replaces whatever is pending with a new batch, staggered from now.
    /// Returns the generation of the new batch.
    pub fn replace<I: IntoIterator<Item = usize>>(&mut self, slots: I) -> u64 {
        self.cancel();
        self.generation += 1;
        for (k, slot) in slots.into_iter().enumerate() {
            let k = u32::try_from(k).unwrap_or(u32::MAX);
            self.pending.push_back(PendingReveal {
                slot,
                due: self.clock.saturating_add(self.step.saturating_mul(k)),
            });
        }
        self.generation
    }

    /// Moves the clock forward by `dt` and returns the slots now due, in
    /// reveal order.
    pub fn advance(&mut self, dt: Duration) -> Vec<usize> {
        self.clock = self.clock.saturating_add(dt);
        let mut due = Vec::new();
        while let Some(next) = self.pending.front() {
            if next.due > self.clock {
                break;
            }
            due.push(next.slot);
            self.pending.pop_front();
        }
        due
    }

    /// Returns every pending slot at once, without moving the clock.
    pub fn drain(&mut self) -> Vec<usize> {
        self.pending.drain(..).map(|p| p.slot).collect()
    }
}
