use std::sync::atomic::{AtomicU64, Ordering};

/// Proof that a request was started; compared against the tracker when the
/// response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTicket {
    generation: u64,
}

/// Generation counter for in-flight tutor requests. Only the newest ticket is
/// current.
#[derive(Debug, Default)]
pub struct HelpTracker {
    generation: AtomicU64,
}

impl HelpTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, making every older ticket stale.
    pub fn begin(&self) -> HelpTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        HelpTicket { generation }
    }

    /// Drop interest in whatever is in flight.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    #[must_use]
    pub fn is_current(&self, ticket: &HelpTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.generation
    }
}
