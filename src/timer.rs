/// Cancellable countdown that drives the automatic transition out of the
/// feedback phase.
///
/// The runtime feeds elapsed milliseconds in via `on_tick`; the deadline
/// fires exactly once when the remaining time is used up. Cancelling (or
/// never scheduling) means it never fires, which is how an abandoned
/// session avoids mutating state it no longer owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceTimer {
    remaining_ms: Option<u64>,
}

impl AdvanceTimer {
    pub fn idle() -> Self {
        Self { remaining_ms: None }
    }

    pub fn schedule(&mut self, delay_ms: u64) {
        self.remaining_ms = Some(delay_ms);
    }

    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Advances the countdown by `elapsed_ms`. Returns true on the tick
    /// where the deadline passes, false otherwise.
    pub fn on_tick(&mut self, elapsed_ms: u64) -> bool {
        match self.remaining_ms {
            Some(remaining) if remaining <= elapsed_ms => {
                self.remaining_ms = None;
                true
            }
            Some(remaining) => {
                self.remaining_ms = Some(remaining - elapsed_ms);
                false
            }
            None => false,
        }
    }
}
