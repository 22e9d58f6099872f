//! Display controller capability traits
//!
//! The controller is consumed through a fixed capability interface; its
//! wire protocol is a driver concern. Startup is the single fallible
//! operation; every drawing primitive is infallible at this level.

use crate::palette::Rgb565;

/// Errors from controller startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Controller did not come out of startup
    Startup,
    /// Configured geometry exceeds the controller's addressable area
    Geometry,
}

/// Panel orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Native orientation
    #[default]
    Deg0,
    /// Rotated 90 degrees clockwise
    Deg90,
    /// Rotated 180 degrees
    Deg180,
    /// Rotated 270 degrees clockwise
    Deg270,
}

/// Capability interface of the attached display controller
pub trait PanelController {
    /// Run the controller startup sequence
    ///
    /// Must complete before any other operation; drawing against a
    /// half-started controller leaves visible corruption on real panels.
    fn begin(&mut self) -> Result<(), InitError>;

    /// Set the panel orientation
    fn set_rotation(&mut self, rotation: Rotation);

    /// Set panel brightness (0 = minimum, 255 = maximum)
    fn set_brightness(&mut self, level: u8);

    /// Switch the panel on after baseline configuration
    fn display_on(&mut self);

    /// Fill the whole panel with one color
    fn fill_screen(&mut self, color: Rgb565);

    /// Fill a rectangle with one color
    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565);

    /// Move the text cursor to a pixel position
    fn set_cursor(&mut self, x: u16, y: u16);

    /// Set the glyph scale factor (1 = one glyph cell per character)
    fn set_text_size(&mut self, size: u8);

    /// Set text foreground and background colors
    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565);

    /// Draw text at the cursor, advancing it
    fn print(&mut self, text: &str);
}

/// Handoff of the shared data lines
///
/// Separate from [`PanelController`] because it is the one operation that
/// touches pin modes instead of the controller: the clock and data lines
/// go high-impedance, control lines stay driven, and the panel keeps
/// showing its last frame from internal memory.
pub trait BusHandoff {
    /// Transition the clock and data lines to high-impedance input
    ///
    /// Inert after the first call. Cannot fail: pin-mode assignment is not
    /// a fallible operation.
    fn release_data_lines(&mut self);

    /// Check if the data lines have been handed off
    fn data_lines_released(&self) -> bool;
}
