use thiserror::Error;

/// Seconds the lock lingers in the refused state before snapping back to the
/// start of the sequence.
pub const RESET_DELAY_S: f32 = 1.5;

/// Seconds between matching the final symbol and the unlock event firing.
pub const UNLOCK_DELAY_S: f32 = 1.5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LockConfigError {
    #[error("target sequence must not be empty")]
    EmptySequence,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Waiting,
    Refused { remaining_s: f32 },
    Unlocked { event_in_s: Option<f32> },
}

/// What a single input did to the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Matched the current target; the lock moved to the next index.
    Advanced,
    /// Matched the final target; the unlock event is now pending.
    Unlocked,
    /// Wrong committed input; a full reset is scheduled.
    Refused,
    /// No effect (out-of-tolerance sample, or input while refused/unlocked).
    Ignored,
}

/// Emitted by [`SequenceLock::advance`] when a scheduled transition lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockEvent {
    /// The refusal delay elapsed; the lock is back at the first index with
    /// nothing completed.
    Reset,
    /// The presentation delay after the final match elapsed. Fires exactly
    /// once per successful traversal.
    Unlocked,
}

/// Combination lock over a fixed ordered sequence of `u16` symbols.
///
/// One machine covers both lock widgets: gear identifiers match exactly
/// (tolerance 0), RPM targets match within a band (tolerance 200). Committed
/// inputs go through [`press`](Self::press); a continuously sampled value such
/// as the live needle position goes through [`observe`](Self::observe), where
/// non-matching samples are simply ignored instead of refusing.
///
/// The machine carries no timers. The owning view calls
/// [`advance`](Self::advance) from its single tick source and reacts to the
/// returned [`LockEvent`]s; `Unlocked` is sticky and its event fires once.
#[derive(Debug, Clone)]
pub struct SequenceLock {
    targets: Vec<u16>,
    tolerance: u16,
    completed: usize,
    phase: Phase,
}

impl SequenceLock {
    pub fn new(targets: Vec<u16>, tolerance: u16) -> Result<Self, LockConfigError> {
        if targets.is_empty() {
            return Err(LockConfigError::EmptySequence);
        }
        Ok(Self {
            targets,
            tolerance,
            completed: 0,
            phase: Phase::Waiting,
        })
    }

    /// Exact-match lock over discrete symbols (the gear shifter).
    pub fn gears(targets: &[u16]) -> Result<Self, LockConfigError> {
        Self::new(targets.to_vec(), 0)
    }

    pub fn targets(&self) -> &[u16] {
        &self.targets
    }

    pub fn tolerance(&self) -> u16 {
        self.tolerance
    }

    /// Index of the target currently being matched. Stays put while refused;
    /// equals `targets().len()` only in the unlocked state.
    pub fn index(&self) -> usize {
        self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    pub fn step_completed(&self, index: usize) -> bool {
        index < self.completed
    }

    pub fn current_target(&self) -> Option<u16> {
        self.targets.get(self.completed).copied()
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self.phase, Phase::Unlocked { .. })
    }

    pub fn is_refused(&self) -> bool {
        matches!(self.phase, Phase::Refused { .. })
    }

    /// A committed input, e.g. a gear selection. A mismatch refuses the input
    /// and schedules a full reset; further presses are ignored until the reset
    /// lands, so a wrong press can never be "repaired" mid-delay.
    pub fn press(&mut self, symbol: u16) -> InputOutcome {
        match self.phase {
            Phase::Waiting => {
                if self.matches(symbol) {
                    self.complete_current()
                } else {
                    self.phase = Phase::Refused {
                        remaining_s: RESET_DELAY_S,
                    };
                    InputOutcome::Refused
                }
            }
            Phase::Refused { .. } | Phase::Unlocked { .. } => InputOutcome::Ignored,
        }
    }

    /// A sampled input, e.g. the current RPM while the needle sweeps. Only an
    /// in-tolerance sample has any effect; everything else is ignored because
    /// the value legitimately passes through non-target bands on its way.
    pub fn observe(&mut self, value: u16) -> InputOutcome {
        match self.phase {
            Phase::Waiting if self.matches(value) => self.complete_current(),
            _ => InputOutcome::Ignored,
        }
    }

    /// Manual reset. Accepted in any state except unlocked (terminal).
    pub fn reset(&mut self) {
        if !self.is_unlocked() {
            self.completed = 0;
            self.phase = Phase::Waiting;
        }
    }

    /// Advance scheduled delays by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> Option<LockEvent> {
        let dt = dt.max(0.0);
        match &mut self.phase {
            Phase::Waiting => None,
            Phase::Refused { remaining_s } => {
                *remaining_s -= dt;
                if *remaining_s <= 0.0 {
                    self.completed = 0;
                    self.phase = Phase::Waiting;
                    Some(LockEvent::Reset)
                } else {
                    None
                }
            }
            Phase::Unlocked { event_in_s } => {
                let remaining = (*event_in_s)? - dt;
                if remaining <= 0.0 {
                    *event_in_s = None;
                    Some(LockEvent::Unlocked)
                } else {
                    *event_in_s = Some(remaining);
                    None
                }
            }
        }
    }

    fn matches(&self, value: u16) -> bool {
        let target = self.targets[self.completed];
        value.abs_diff(target) <= self.tolerance
    }

    fn complete_current(&mut self) -> InputOutcome {
        self.completed += 1;
        if self.completed == self.targets.len() {
            self.phase = Phase::Unlocked {
                event_in_s: Some(UNLOCK_DELAY_S),
            };
            InputOutcome::Unlocked
        } else {
            InputOutcome::Advanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(lock: &mut SequenceLock, total_s: f32) -> Vec<LockEvent> {
        // Step in small ticks the way the widget interval does.
        let mut events = Vec::new();
        let ticks = (total_s / 0.05).ceil() as u32;
        for _ in 0..ticks {
            if let Some(ev) = lock.advance(0.05) {
                events.push(ev);
            }
        }
        events
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(matches!(
            SequenceLock::gears(&[]),
            Err(LockConfigError::EmptySequence)
        ));
    }

    #[test]
    fn full_gear_sequence_unlocks_and_fires_once() {
        let mut lock = SequenceLock::gears(&[1, 3, 5]).unwrap();

        assert_eq!(lock.press(1), InputOutcome::Advanced);
        assert_eq!(lock.press(3), InputOutcome::Advanced);
        assert_eq!(lock.press(5), InputOutcome::Unlocked);
        assert!(lock.is_unlocked());

        // More input in the terminal state does nothing.
        assert_eq!(lock.press(5), InputOutcome::Ignored);

        let events = drain(&mut lock, 3.0);
        assert_eq!(events, vec![LockEvent::Unlocked]);

        // The event never fires a second time.
        assert!(drain(&mut lock, 3.0).is_empty());
    }

    #[test]
    fn wrong_gear_resets_after_delay() {
        let mut lock = SequenceLock::gears(&[1, 3, 5]).unwrap();

        assert_eq!(lock.press(1), InputOutcome::Advanced);
        assert_eq!(lock.press(2), InputOutcome::Refused);
        assert!(lock.is_refused());

        // Presses during the refusal window are ignored, right or wrong.
        assert_eq!(lock.press(3), InputOutcome::Ignored);
        assert_eq!(lock.completed_count(), 1);

        let events = drain(&mut lock, 2.0);
        assert_eq!(events, vec![LockEvent::Reset]);
        assert_eq!(lock.index(), 0);
        assert_eq!(lock.completed_count(), 0);
        assert!(!lock.is_refused());
    }

    #[test]
    fn repeated_wrong_input_never_advances() {
        let mut lock = SequenceLock::gears(&[4]).unwrap();
        assert_eq!(lock.press(2), InputOutcome::Refused);
        assert_eq!(lock.press(2), InputOutcome::Ignored);
        assert_eq!(lock.press(2), InputOutcome::Ignored);
        assert_eq!(lock.completed_count(), 0);
    }

    #[test]
    fn rpm_samples_advance_only_within_tolerance() {
        let mut lock = SequenceLock::new(vec![2500, 5000, 3000], 200).unwrap();

        // 2800 is outside 2500 +/- 200, so the sweep ignores it.
        assert_eq!(lock.observe(2800), InputOutcome::Ignored);
        assert_eq!(lock.index(), 0);

        assert_eq!(lock.observe(2650), InputOutcome::Advanced);
        assert_eq!(lock.index(), 1);

        assert_eq!(lock.observe(4810), InputOutcome::Advanced);
        assert_eq!(lock.observe(3190), InputOutcome::Unlocked);
        assert!(lock.is_unlocked());

        // The needle sitting on the final target must not refire.
        assert_eq!(lock.observe(3000), InputOutcome::Ignored);
        assert_eq!(drain(&mut lock, 2.0), vec![LockEvent::Unlocked]);
    }

    #[test]
    fn manual_reset_clears_progress_but_not_unlocked() {
        let mut lock = SequenceLock::gears(&[1, 2]).unwrap();
        lock.press(1);
        lock.reset();
        assert_eq!(lock.completed_count(), 0);

        lock.press(1);
        lock.press(2);
        lock.reset();
        assert!(lock.is_unlocked(), "unlocked is sticky");
    }
}
