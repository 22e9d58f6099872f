//! Splash frame composition
//!
//! The final frame is a full-screen background, a status bar over the
//! lower third, and two centered text lines inside the bar. Last write
//! wins within the frame: the bar overwrites the background fill and the
//! text overwrites the bar.

use crate::config::{PanelGeometry, SplashConfig};
use crate::traits::panel::PanelController;

/// Glyph cell width in pixels at text size 1
pub const CELL_W: u16 = 6;

/// Glyph cell height in pixels at text size 1
pub const CELL_H: u16 = 8;

/// Text size for the title line
const TITLE_SIZE: u8 = 3;

/// Text size for the subtitle line
const SUBTITLE_SIZE: u8 = 2;

/// Title baseline offset from the top of the status bar
const TITLE_Y: u16 = 20;

/// Subtitle baseline offset from the top of the status bar
const SUBTITLE_Y: u16 = 50;

/// Horizontal start for a centered line of `len` characters
fn centered_x(width: u16, len: usize, size: u8) -> u16 {
    let text_w = (len as u16) * CELL_W * (size as u16);
    width.saturating_sub(text_w) / 2
}

/// Top row of the status bar over the lower third
pub fn status_bar_top(geometry: &PanelGeometry) -> u16 {
    (geometry.height * 2) / 3
}

/// Draw the splash frame
pub fn draw<C: PanelController>(
    panel: &mut C,
    geometry: &PanelGeometry,
    splash: &SplashConfig,
) {
    panel.fill_screen(splash.background);

    let bar_top = status_bar_top(geometry);
    panel.fill_rect(
        0,
        bar_top,
        geometry.width,
        geometry.height - bar_top,
        splash.bar,
    );

    panel.set_text_color(splash.text, splash.bar);

    panel.set_text_size(TITLE_SIZE);
    panel.set_cursor(
        centered_x(geometry.width, splash.title.len(), TITLE_SIZE),
        bar_top + TITLE_Y,
    );
    panel.print(&splash.title);

    panel.set_text_size(SUBTITLE_SIZE);
    panel.set_cursor(
        centered_x(geometry.width, splash.subtitle.len(), SUBTITLE_SIZE),
        bar_top + SUBTITLE_Y,
    );
    panel.print(&splash.subtitle);
}
