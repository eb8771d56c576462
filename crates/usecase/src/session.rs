// crates/usecase/src/session.rs
use multab_domain::{Limits, RawRangeInput, build, validate_raw};

use crate::dto::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Validating,
    Rendering,
    Failed,
}

/// Holds the output of the latest submission.
///
/// Every [`submit`](Self::submit) discards the previous outcome before any
/// work starts, so a failed submission never leaves a stale table behind.
#[derive(Debug)]
pub struct TableSession {
    limits: Limits,
    phase: Phase,
    current: Option<Outcome>,
    submissions: u64,
}

impl TableSession {
    pub fn new(limits: Limits) -> Self {
        Self { limits, phase: Phase::Idle, current: None, submissions: 0 }
    }

    /// Outcome of the latest submission, if any.
    pub fn current(&self) -> Option<&Outcome> {
        self.current.as_ref()
    }

    pub const fn submissions(&self) -> u64 {
        self.submissions
    }

    pub fn submit(&mut self, raw: &RawRangeInput) -> &Outcome {
        self.current = None;
        self.submissions += 1;
        self.transition(Phase::Validating);

        let outcome = match validate_raw(raw, &self.limits) {
            Ok(range) => {
                self.transition(Phase::Rendering);
                Outcome::Rendered(build(&range))
            }
            Err(err) => {
                self.transition(Phase::Failed);
                Outcome::Failed(err)
            }
        };
        self.transition(Phase::Idle);

        self.current.insert(outcome)
    }

    fn transition(&mut self, next: Phase) {
        log::debug!("submission #{}: {:?} -> {:?}", self.submissions, self.phase, next);
        self.phase = next;
    }
}

impl Default for TableSession {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}
