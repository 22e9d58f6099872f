//! Events that advance the panel lifecycle

/// Events that can advance the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Controller startup and baseline configuration completed
    InitSucceeded,
    /// Controller startup failed
    InitFailed,
    /// All draw commands for the final frame have been issued
    FrameCommitted,
    /// Clock and data lines handed off to high impedance
    ReleaseComplete,
}

impl Event {
    /// Check if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::InitFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_events() {
        assert!(Event::InitFailed.is_failure());
        assert!(!Event::InitSucceeded.is_failure());
        assert!(!Event::FrameCommitted.is_failure());
        assert!(!Event::ReleaseComplete.is_failure());
    }
}
