//! CO5300 AMOLED panel driver
//!
//! Minimal driver for CO5300-based AMOLED panels in single-lane mode, no
//! D/C pin. Every command frame is the write opcode 0x02, a 24-bit
//! address embedding the command byte, then the parameter bytes, with
//! chip select asserted around the whole frame. The panel latches each
//! written frame in internal memory and keeps showing it without further
//! bus activity.

use embedded_hal::delay::DelayNs;

use cede_core::bus::PanelBus;
use cede_core::config::PanelGeometry;
use cede_core::palette::{self, Rgb565};
use cede_core::traits::panel::{BusHandoff, InitError, PanelController, Rotation};
use cede_core::traits::pin::OutputLine;

use super::font;

/// Maximum addressable columns of the controller
const MAX_COLS: u16 = 480;

/// Maximum addressable rows of the controller
const MAX_ROWS: u16 = 502;

/// Write opcode prefixed to every command frame
const WRITE_OPCODE: u8 = 0x02;

/// RGB565 pixel format parameter for COLMOD
const COLMOD_16BPP: u8 = 0x55;

/// Brightness-control-on parameter for WRCTRLD
const WRCTRLD_BCTRL: u8 = 0x20;

/// Pixels streamed per RAMWR chunk
const FILL_CHUNK: usize = 32;

/// Largest supported glyph scale factor
const MAX_TEXT_SIZE: u8 = 8;

/// CO5300 commands
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
    pub const WRDISBV: u8 = 0x51;
    pub const WRCTRLD: u8 = 0x53;
}

/// MADCTL parameter per orientation
fn madctl(rotation: Rotation) -> u8 {
    match rotation {
        Rotation::Deg0 => 0x00,
        Rotation::Deg90 => 0x60,
        Rotation::Deg180 => 0xC0,
        Rotation::Deg270 => 0xA0,
    }
}

/// CO5300 panel driver over a shared data bus
///
/// Owns the bus handle and the three control lines. Generic over the
/// delay provider so the timing-heavy startup sequence runs under test.
pub struct Co5300<B, CS, RST, BL, D> {
    bus: B,
    cs: CS,
    rst: RST,
    backlight: BL,
    delay: D,
    geometry: PanelGeometry,
    cursor: (u16, u16),
    text_size: u8,
    text_fg: Rgb565,
    text_bg: Rgb565,
}

impl<B, CS, RST, BL, D> Co5300<B, CS, RST, BL, D>
where
    B: PanelBus,
    CS: OutputLine,
    RST: OutputLine,
    BL: OutputLine,
    D: DelayNs,
{
    /// Bind a driver to its bus, control lines, and geometry
    ///
    /// Lines must already be driven outputs; [`PanelController::begin`]
    /// must run before any drawing.
    pub fn new(
        bus: B,
        cs: CS,
        rst: RST,
        backlight: BL,
        delay: D,
        geometry: PanelGeometry,
    ) -> Self {
        Self {
            bus,
            cs,
            rst,
            backlight,
            delay,
            geometry,
            cursor: (0, 0),
            text_size: 1,
            text_fg: palette::TEXT_LIGHT,
            text_bg: palette::TEXT_DARK,
        }
    }

    /// Send one command frame with parameters
    fn command(&mut self, op: u8, params: &[u8]) {
        self.cs.set_low();
        self.bus.write(&[WRITE_OPCODE, 0x00, op, 0x00]);
        self.bus.write(params);
        self.cs.set_high();
    }

    /// Address a window in panel memory (inclusive corners)
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        let x0 = x0 + self.geometry.col_offset;
        let x1 = x1 + self.geometry.col_offset;
        let y0 = y0 + self.geometry.row_offset;
        let y1 = y1 + self.geometry.row_offset;

        let ca = [
            (x0 >> 8) as u8,
            (x0 & 0xFF) as u8,
            (x1 >> 8) as u8,
            (x1 & 0xFF) as u8,
        ];
        let ra = [
            (y0 >> 8) as u8,
            (y0 & 0xFF) as u8,
            (y1 >> 8) as u8,
            (y1 & 0xFF) as u8,
        ];

        self.command(cmd::CASET, &ca);
        self.command(cmd::RASET, &ra);
    }

    /// Stream a solid color into the addressed window
    fn fill_window(&mut self, pixels: usize, color: Rgb565) {
        let [hi, lo] = color.to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        self.cs.set_low();
        self.bus.write(&[WRITE_OPCODE, 0x00, cmd::RAMWR, 0x00]);
        let mut remaining = pixels;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK);
            self.bus.write(&chunk[..n * 2]);
            remaining -= n;
        }
        self.cs.set_high();
    }

    /// Draw one glyph cell at the cursor and advance it
    fn draw_glyph(&mut self, ch: char) {
        let glyph = font::glyph(ch);
        let size = self.text_size.clamp(1, MAX_TEXT_SIZE) as u16;
        let (x, y) = self.cursor;
        let w = font::CELL_W as u16 * size;
        let h = font::CELL_H as u16 * size;
        if x + w > self.geometry.width || y + h > self.geometry.height {
            return;
        }

        self.set_window(x, y, x + w - 1, y + h - 1);

        let mut row_buf = [0u8; font::CELL_W * MAX_TEXT_SIZE as usize * 2];
        self.cs.set_low();
        self.bus.write(&[WRITE_OPCODE, 0x00, cmd::RAMWR, 0x00]);
        for row in 0..font::CELL_H {
            let mut i = 0;
            for col in 0..font::CELL_W {
                let on = (glyph[col] >> row) & 1 != 0;
                let color = if on { self.text_fg } else { self.text_bg };
                let [bh, bl] = color.to_be_bytes();
                for _ in 0..size {
                    row_buf[i] = bh;
                    row_buf[i + 1] = bl;
                    i += 2;
                }
            }
            for _ in 0..size {
                self.bus.write(&row_buf[..i]);
            }
        }
        self.cs.set_high();

        self.cursor.0 = x + w;
    }
}

impl<B, CS, RST, BL, D> PanelController for Co5300<B, CS, RST, BL, D>
where
    B: PanelBus,
    CS: OutputLine,
    RST: OutputLine,
    BL: OutputLine,
    D: DelayNs,
{
    fn begin(&mut self) -> Result<(), InitError> {
        if self.geometry.width == 0 || self.geometry.height == 0 {
            return Err(InitError::Geometry);
        }
        if self.geometry.width + self.geometry.col_offset > MAX_COLS
            || self.geometry.height + self.geometry.row_offset > MAX_ROWS
        {
            return Err(InitError::Geometry);
        }

        // Hard reset pulse
        self.rst.set_high();
        self.delay.delay_ms(2);
        self.rst.set_low();
        self.delay.delay_ms(80);
        self.rst.set_high();
        self.delay.delay_ms(150);

        self.command(cmd::SWRESET, &[]);
        self.delay.delay_ms(150);

        self.command(cmd::SLPOUT, &[]);
        self.delay.delay_ms(180);

        self.command(cmd::COLMOD, &[COLMOD_16BPP]);
        self.command(cmd::NORON, &[]);
        self.command(cmd::WRCTRLD, &[WRCTRLD_BCTRL]);

        self.backlight.set_high();

        Ok(())
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.command(cmd::MADCTL, &[madctl(rotation)]);
    }

    fn set_brightness(&mut self, level: u8) {
        self.command(cmd::WRDISBV, &[level]);
    }

    fn display_on(&mut self) {
        self.command(cmd::DISPON, &[]);
        // Panels of this class need settle time before the first RAMWR
        self.delay.delay_ms(80);
    }

    fn fill_screen(&mut self, color: Rgb565) {
        self.fill_rect(0, 0, self.geometry.width, self.geometry.height, color);
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565) {
        if w == 0 || h == 0 || x >= self.geometry.width || y >= self.geometry.height {
            return;
        }

        let x1 = x.saturating_add(w - 1).min(self.geometry.width - 1);
        let y1 = y.saturating_add(h - 1).min(self.geometry.height - 1);
        self.set_window(x, y, x1, y1);

        let pixels = (x1 - x + 1) as usize * (y1 - y + 1) as usize;
        self.fill_window(pixels, color);
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size.clamp(1, MAX_TEXT_SIZE);
    }

    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565) {
        self.text_fg = fg;
        self.text_bg = bg;
    }

    fn print(&mut self, text: &str) {
        for ch in text.chars() {
            self.draw_glyph(ch);
        }
    }
}

impl<B, CS, RST, BL, D> BusHandoff for Co5300<B, CS, RST, BL, D>
where
    B: PanelBus,
    CS: OutputLine,
    RST: OutputLine,
    BL: OutputLine,
    D: DelayNs,
{
    fn release_data_lines(&mut self) {
        self.bus.release(&mut self.delay);
    }

    fn data_lines_released(&self) -> bool {
        self.bus.is_released()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Mock bus capturing every byte clocked out
    struct MockBus {
        bytes: Vec<u8, 4096>,
        released: bool,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                bytes: Vec::new(),
                released: false,
            }
        }
    }

    impl PanelBus for MockBus {
        fn write(&mut self, bytes: &[u8]) {
            if self.released {
                return;
            }
            self.bytes.extend_from_slice(bytes).unwrap();
        }

        fn release(&mut self, _delay: &mut impl DelayNs) {
            self.released = true;
        }

        fn is_released(&self) -> bool {
            self.released
        }
    }

    /// Mock control line tracking its level
    struct MockOut {
        high: bool,
    }

    impl MockOut {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputLine for MockOut {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    struct MockDelay;

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    type TestPanel = Co5300<MockBus, MockOut, MockOut, MockOut, MockDelay>;

    fn test_panel(geometry: PanelGeometry) -> TestPanel {
        Co5300::new(
            MockBus::new(),
            MockOut::new(),
            MockOut::new(),
            MockOut::new(),
            MockDelay,
            geometry,
        )
    }

    #[test]
    fn test_begin_command_sequence() {
        let mut panel = test_panel(PanelGeometry::new(16, 16));
        panel.begin().unwrap();

        // SWRESET, SLPOUT, COLMOD(0x55), NORON, WRCTRLD(0x20)
        let expected: &[u8] = &[
            0x02, 0x00, 0x01, 0x00, //
            0x02, 0x00, 0x11, 0x00, //
            0x02, 0x00, 0x3A, 0x00, 0x55, //
            0x02, 0x00, 0x13, 0x00, //
            0x02, 0x00, 0x53, 0x00, 0x20,
        ];
        assert_eq!(panel.bus.bytes.as_slice(), expected);
        assert!(panel.backlight.high);
    }

    #[test]
    fn test_begin_rejects_oversized_geometry() {
        let mut panel = test_panel(PanelGeometry::new(MAX_COLS + 1, 16));

        assert_eq!(panel.begin(), Err(InitError::Geometry));
        // Validation happens before any bus or reset activity
        assert!(panel.bus.bytes.is_empty());
        assert!(!panel.rst.high);
    }

    #[test]
    fn test_begin_rejects_offsets_past_the_edge() {
        let mut geometry = PanelGeometry::new(MAX_COLS, 16);
        geometry.col_offset = 1;
        let mut panel = test_panel(geometry);

        assert_eq!(panel.begin(), Err(InitError::Geometry));
    }

    #[test]
    fn test_fill_rect_frames() {
        let mut panel = test_panel(PanelGeometry::new(16, 16));
        panel.fill_rect(1, 2, 2, 2, Rgb565(0xABCD));

        let expected: &[u8] = &[
            // CASET 1..=2
            0x02, 0x00, 0x2A, 0x00, 0x00, 0x01, 0x00, 0x02, //
            // RASET 2..=3
            0x02, 0x00, 0x2B, 0x00, 0x00, 0x02, 0x00, 0x03, //
            // RAMWR + four pixels
            0x02, 0x00, 0x2C, 0x00, //
            0xAB, 0xCD, 0xAB, 0xCD, 0xAB, 0xCD, 0xAB, 0xCD,
        ];
        assert_eq!(panel.bus.bytes.as_slice(), expected);
    }

    #[test]
    fn test_fill_rect_applies_offsets() {
        let mut geometry = PanelGeometry::new(16, 16);
        geometry.col_offset = 6;
        let mut panel = test_panel(geometry);
        panel.fill_rect(0, 0, 1, 1, Rgb565(0xFFFF));

        // CASET shifted by the column offset
        assert_eq!(&panel.bus.bytes[..8], &[0x02, 0x00, 0x2A, 0x00, 0x00, 0x06, 0x00, 0x06]);
    }

    #[test]
    fn test_fill_rect_clips_to_panel() {
        let mut panel = test_panel(PanelGeometry::new(16, 16));
        panel.fill_rect(15, 15, 10, 10, Rgb565(0xFFFF));

        // Window clipped to the last pixel: one pixel streamed
        let window_frames = 16;
        assert_eq!(panel.bus.bytes.len(), window_frames + 4 + 2);
    }

    #[test]
    fn test_print_advances_cursor() {
        let mut panel = test_panel(PanelGeometry::new(64, 16));
        panel.set_cursor(0, 0);
        panel.set_text_size(1);
        panel.print("AB");

        assert_eq!(panel.cursor, (12, 0));
    }

    #[test]
    fn test_print_clips_at_the_edge() {
        let mut panel = test_panel(PanelGeometry::new(10, 16));
        panel.set_cursor(6, 0);
        panel.print("A");

        // No window fits: nothing written, cursor unchanged
        assert!(panel.bus.bytes.is_empty());
        assert_eq!(panel.cursor, (6, 0));
    }

    #[test]
    fn test_glyph_pixel_count() {
        let mut panel = test_panel(PanelGeometry::new(64, 32));
        panel.set_text_size(2);
        panel.print("A");

        // CASET + RASET + RAMWR headers, then 12x16 pixels
        let headers = 8 + 8 + 4;
        assert_eq!(panel.bus.bytes.len(), headers + 12 * 16 * 2);
    }

    #[test]
    fn test_release_goes_through_the_bus() {
        let mut panel = test_panel(PanelGeometry::new(16, 16));
        panel.begin().unwrap();
        let backlight_on = panel.backlight.high;

        panel.release_data_lines();

        assert!(panel.data_lines_released());
        // Control lines untouched by the handoff
        assert!(panel.cs.high);
        assert_eq!(panel.backlight.high, backlight_on);

        // Draw calls after the handoff reach a dead bus
        let len = panel.bus.bytes.len();
        panel.fill_rect(0, 0, 1, 1, Rgb565(0xFFFF));
        assert_eq!(panel.bus.bytes.len(), len);
    }
}
