//! Hardware abstraction traits
//!
//! Implemented by the firmware crate for real pads and by test mocks on
//! the host.

pub mod panel;
pub mod pin;

// Re-export key traits at crate root for convenience
pub use panel::{BusHandoff, InitError, PanelController, Rotation};
pub use pin::{BusLine, LineMode, OutputLine};
