/// Single-consumer latched notification.
///
/// Replaces a multicast event with drain semantics: `raise` latches, `take`
/// reads and clears in one step. Re-raising before the consumer drains
/// collapses into one delivery, so a logical completion is observed at most
/// once.
#[derive(Debug, Default, Clone)]
pub struct Signal {
    raised: bool,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self) {
        self.raised = true;
    }

    pub fn is_raised(&self) -> bool {
        self.raised
    }

    /// Drain the signal, returning whether it had been raised.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.raised)
    }
}
