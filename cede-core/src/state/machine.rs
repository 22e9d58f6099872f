//! Lifecycle state machine
//!
//! The display task moves through a fixed sequence of phases: bring the
//! controller up, paint the final frame, hand the bus off, then park. The
//! sequence never runs backwards and never repeats a phase.

use super::events::Event;

/// Lifecycle phases of the panel task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Bus and controller bring-up in progress
    Initializing,
    /// Controller ready, final frame being drawn
    Rendering,
    /// Frame committed, data lines being handed off
    Releasing,
    /// Terminal: task idle forever, display handle kept alive
    Parked,
    /// Terminal: controller startup failed, task exits
    Failed,
}

impl Phase {
    /// Check if drawing is allowed in this phase
    pub fn drawing_allowed(&self) -> bool {
        matches!(self, Phase::Rendering)
    }

    /// Check if the display side still drives the data lines
    pub fn bus_driven(&self) -> bool {
        matches!(
            self,
            Phase::Initializing | Phase::Rendering | Phase::Releasing
        )
    }

    /// Check if this is a terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Parked | Phase::Failed)
    }

    /// Process an event and return the next phase
    ///
    /// Transitions are strictly forward; an event that does not apply to
    /// the current phase leaves it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Initializing, InitSucceeded) => Rendering,
            (Initializing, InitFailed) => Failed,
            (Rendering, FrameCommitted) => Releasing,
            (Releasing, ReleaseComplete) => Parked,

            // Default: stay in current phase
            _ => self,
        }
    }
}
