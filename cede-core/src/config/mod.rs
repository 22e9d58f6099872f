//! Build-time configuration types
//!
//! All configuration is const-constructed by the firmware's board module
//! and read-only to this crate: pin assignments, panel geometry, baseline
//! settings, and the splash content.

use heapless::String;

use crate::palette::{self, Rgb565};
use crate::traits::panel::Rotation;

/// Maximum length of a splash text line
pub const MAX_TEXT_LEN: usize = 32;

/// Data-line pin assignments (clock + four data lanes)
///
/// These are the lines handed off to the radio after the final frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataPins {
    /// Bus clock
    pub sclk: u8,
    /// Data lanes, lane 0 first
    pub sdio: [u8; 4],
}

/// Control-line pin assignments
///
/// Never released: the panel needs chip select, reset, and backlight
/// stable to keep showing its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlPins {
    /// Chip select
    pub cs: u8,
    /// Controller reset
    pub reset: u8,
    /// Backlight enable
    pub backlight: u8,
}

/// Complete pin assignment for the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignments {
    /// Lines released after the final frame
    pub data: DataPins,
    /// Lines driven for the process lifetime
    pub control: ControlPins,
}

impl PinAssignments {
    /// Check that no pin appears in both roles
    pub const fn is_disjoint(&self) -> bool {
        let control = [self.control.cs, self.control.reset, self.control.backlight];
        let data = [
            self.data.sclk,
            self.data.sdio[0],
            self.data.sdio[1],
            self.data.sdio[2],
            self.data.sdio[3],
        ];

        let mut i = 0;
        while i < data.len() {
            let mut j = 0;
            while j < control.len() {
                if data[i] == control[j] {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}

/// Panel geometry and address offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelGeometry {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// Column address offset of the visible area
    pub col_offset: u16,
    /// Row address offset of the visible area
    pub row_offset: u16,
}

impl PanelGeometry {
    /// Geometry with no address offsets
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            col_offset: 0,
            row_offset: 0,
        }
    }
}

/// Baseline settings applied right after controller startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelSettings {
    /// Panel orientation
    pub rotation: Rotation,
    /// Brightness (0-255); reduced values suit a persistent status panel
    pub brightness: u8,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            rotation: Rotation::Deg0,
            brightness: 80,
        }
    }
}

/// Splash frame content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashConfig {
    /// Full-screen background color
    pub background: Rgb565,
    /// Status bar color over the lower third
    pub bar: Rgb565,
    /// Text color inside the bar
    pub text: Rgb565,
    /// Large title line
    pub title: String<MAX_TEXT_LEN>,
    /// Smaller subtitle line
    pub subtitle: String<MAX_TEXT_LEN>,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            background: palette::PRIMARY,
            bar: palette::PRIMARY,
            text: palette::ACCENT,
            title: String::new(),
            subtitle: String::new(),
        }
    }
}

impl SplashConfig {
    /// Splash with default palette colors and the given text lines
    ///
    /// Lines longer than [`MAX_TEXT_LEN`] are truncated.
    pub fn with_text(title: &str, subtitle: &str) -> Self {
        let mut cfg = Self::default();
        push_truncated(&mut cfg.title, title);
        push_truncated(&mut cfg.subtitle, subtitle);
        cfg
    }
}

/// Append as much of `src` as fits
fn push_truncated(dst: &mut String<MAX_TEXT_LEN>, src: &str) {
    for ch in src.chars() {
        if dst.push(ch).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PINS: PinAssignments = PinAssignments {
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

    #[test]
    fn test_roles_are_disjoint() {
        assert!(PINS.is_disjoint());

        let mut overlapping = PINS;
        overlapping.control.cs = PINS.data.sclk;
        assert!(!overlapping.is_disjoint());
    }

    #[test]
    fn test_geometry_defaults_to_no_offsets() {
        let geometry = PanelGeometry::new(410, 502);
        assert_eq!(geometry.width, 410);
        assert_eq!(geometry.height, 502);
        assert_eq!(geometry.col_offset, 0);
        assert_eq!(geometry.row_offset, 0);
    }

    #[test]
    fn test_splash_text_truncates() {
        let long = "a line much longer than the bounded splash string allows";
        let cfg = SplashConfig::with_text("title", long);
        assert_eq!(cfg.title.as_str(), "title");
        assert_eq!(cfg.subtitle.len(), MAX_TEXT_LEN);
    }
}
