/// Ordered step progression for the multi-step widgets (reframe forge,
/// journal AI panel, exposure-ladder builder).
///
/// The completion predicate for the current step lives with the caller, which
/// evaluates it against its own fields and passes the verdict into
/// [`advance`](Self::advance). The terminal completed view is therefore only
/// reachable once every step's predicate has held in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepWizard {
    step: u32,
    last: u32,
    completed: bool,
}

impl StepWizard {
    pub fn new(steps: u32) -> Self {
        Self {
            step: 1,
            last: steps.max(1),
            completed: false,
        }
    }

    /// Current step, 1-based.
    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn step_count(&self) -> u32 {
        self.last
    }

    pub fn is_last(&self) -> bool {
        self.step == self.last
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Move forward if the current step's completion predicate holds.
    /// Returns whether anything changed. Advancing past the last step enters
    /// the completed view.
    pub fn advance(&mut self, current_step_complete: bool) -> bool {
        if self.completed || !current_step_complete {
            return false;
        }
        if self.step == self.last {
            self.completed = true;
        } else {
            self.step += 1;
        }
        true
    }

    /// Step back one step; no-op at step 1 and in the completed view.
    pub fn retreat(&mut self) {
        if !self.completed && self.step > 1 {
            self.step -= 1;
        }
    }

    /// Back to step 1 with the completed view cleared. The caller clears its
    /// accumulated answers alongside.
    pub fn reset(&mut self) {
        self.step = 1;
        self.completed = false;
    }
}

/// At most one generative-AI request in flight per wizard instance.
///
/// `begin` refuses while a request is pending; the UI disables the triggering
/// control off the same flag. `settle` runs on success and failure alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiGate {
    in_flight: bool,
}

impl AiGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn settle(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_requires_the_predicate() {
        let mut w = StepWizard::new(3);
        assert!(!w.advance(false));
        assert_eq!(w.step(), 1);

        assert!(w.advance(true));
        assert_eq!(w.step(), 2);
    }

    #[test]
    fn completes_only_after_every_step_in_order() {
        let mut w = StepWizard::new(3);
        assert!(w.advance(true));
        assert!(w.advance(true));
        assert!(!w.is_completed());
        assert!(w.advance(true));
        assert!(w.is_completed());
        assert_eq!(w.step(), 3, "step stays at the last index when completed");

        // Terminal view accepts no further movement except reset.
        assert!(!w.advance(true));
        w.retreat();
        assert!(w.is_completed());

        w.reset();
        assert_eq!(w.step(), 1);
        assert!(!w.is_completed());
    }

    #[test]
    fn retreat_stops_at_the_first_step() {
        let mut w = StepWizard::new(2);
        w.retreat();
        assert_eq!(w.step(), 1);
        w.advance(true);
        w.retreat();
        assert_eq!(w.step(), 1);
    }

    #[test]
    fn gate_admits_one_request_at_a_time() {
        let mut gate = AiGate::new();
        assert!(gate.begin());
        assert!(!gate.begin(), "second request while loading is refused");
        gate.settle();
        assert!(gate.begin());
    }
}
