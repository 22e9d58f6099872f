//! Board pin map and pad adapters
//!
//! Wiring for the radio board's AMOLED. The clock and data lanes are the
//! lines shared with the radio; chip select, reset, and backlight stay
//! driven for the life of the process.

use cede_core::config::{ControlPins, DataPins, PanelGeometry, PanelSettings, PinAssignments};
use cede_core::traits::panel::Rotation;
use cede_core::traits::pin::{BusLine, LineMode, OutputLine};
use embassy_rp::gpio::{Flex, Output};

/// Panel pin assignment
pub const PANEL_PINS: PinAssignments = PinAssignments {
    data: DataPins {
        sclk: 17,
        sdio: [15, 14, 16, 10],
    },
    control: ControlPins {
        cs: 9,
        reset: 8,
        backlight: 22,
    },
};

// A pin in both roles would let the handoff blank the panel
const _: () = assert!(PANEL_PINS.is_disjoint());

/// Visible panel area
pub const GEOMETRY: PanelGeometry = PanelGeometry::new(410, 502);

/// Baseline panel settings; reduced brightness suits a persistent panel
pub const SETTINGS: PanelSettings = PanelSettings {
    rotation: Rotation::Deg0,
    brightness: 80,
};

/// Shared bus line backed by an RP2040 pad
///
/// Starts as a driven-low output; tracks the mode it was last put in,
/// which the pad itself does not report.
pub struct DataLine {
    pin: Flex<'static>,
    mode: LineMode,
}

impl DataLine {
    /// Configure the pad as a driven-low output and wrap it
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_low();
        pin.set_as_output();
        Self {
            pin,
            mode: LineMode::Output,
        }
    }
}

impl OutputLine for DataLine {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

impl BusLine for DataLine {
    fn set_as_output(&mut self) {
        self.pin.set_as_output();
        self.mode = LineMode::Output;
    }

    fn set_as_input(&mut self) {
        self.pin.set_as_input();
        self.mode = LineMode::Input;
    }

    fn mode(&self) -> LineMode {
        self.mode
    }
}

/// Always-driven control line backed by an RP2040 pad
pub struct ControlLine {
    pin: Output<'static>,
}

impl ControlLine {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputLine for ControlLine {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}
