//! Inter-task signaling
//!
//! There is no lock on the shared bus pads; correctness rests on phase
//! ordering made explicit through the signal below.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// One-shot readiness signal: set exactly once, after the panel task has
/// parked the clock and data lines in high impedance. Radio bus bring-up
/// must `wait()` on this before claiming the pads.
pub static BUS_RELEASED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
