//! Panel session: the ownership container for the display handle
//!
//! The session pairs the display handle with its lifecycle phase and
//! gates every operation on that phase, so the bring-up/draw/handoff/park
//! ordering holds by construction. The owning task keeps the session
//! alive for the process lifetime; nothing else is granted a reference
//! to the handle.

use crate::config::{PanelGeometry, PanelSettings, SplashConfig};
use crate::state::{Event, Phase};
use crate::traits::panel::{BusHandoff, InitError, PanelController};
use crate::{lifecycle, splash};

/// Owns the display handle and drives it through its lifecycle
pub struct PanelSession<C> {
    panel: C,
    phase: Phase,
}

impl<C: PanelController + BusHandoff> PanelSession<C> {
    /// Wrap a freshly constructed display handle
    pub fn new(panel: C) -> Self {
        Self {
            panel,
            phase: Phase::Initializing,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Bring the controller up and apply baseline settings
    ///
    /// Valid once, from `Initializing`. On failure the session is left in
    /// `Failed` and no draw or handoff can ever happen through it.
    pub fn initialize(&mut self, settings: &PanelSettings) -> Result<(), InitError> {
        if self.phase != Phase::Initializing {
            return Err(InitError::Startup);
        }

        match lifecycle::bring_up(&mut self.panel, settings) {
            Ok(()) => {
                self.phase = self.phase.transition(Event::InitSucceeded);
                Ok(())
            }
            Err(e) => {
                self.phase = self.phase.transition(Event::InitFailed);
                Err(e)
            }
        }
    }

    /// Draw the final frame and mark it committed
    ///
    /// Ignored outside the `Rendering` phase.
    pub fn render(&mut self, geometry: &PanelGeometry, splash_cfg: &SplashConfig) {
        if !self.phase.drawing_allowed() {
            return;
        }

        splash::draw(&mut self.panel, geometry, splash_cfg);
        self.phase = self.phase.transition(Event::FrameCommitted);
    }

    /// Hand the data lines off and park the session
    ///
    /// Only reachable after a committed frame; ignored in any other phase.
    pub fn release(&mut self) {
        if self.phase != Phase::Releasing {
            return;
        }

        self.panel.release_data_lines();
        self.phase = self.phase.transition(Event::ReleaseComplete);
    }
}
