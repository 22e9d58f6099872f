//! Shared mock implementations for unit tests

use heapless::Vec;

use crate::palette::Rgb565;
use crate::traits::panel::{BusHandoff, InitError, PanelController, Rotation};

/// Recorded panel operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Begin,
    SetRotation(Rotation),
    SetBrightness(u8),
    DisplayOn,
    FillScreen(Rgb565),
    FillRect {
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb565,
    },
    SetCursor(u16, u16),
    SetTextSize(u8),
    SetTextColor(Rgb565, Rgb565),
    Print,
}

/// Mock controller recording every operation it receives
pub struct MockPanel {
    pub ops: Vec<Op, 64>,
    pub fail_begin: bool,
    pub released: bool,
    pub control_lines_driven: bool,
}

impl MockPanel {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_begin: false,
            released: false,
            control_lines_driven: true,
        }
    }

    /// Mock whose startup sequence fails
    pub fn failing() -> Self {
        let mut panel = Self::new();
        panel.fail_begin = true;
        panel
    }

    /// Count of draw operations received so far
    pub fn draw_ops(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    Op::FillScreen(_) | Op::FillRect { .. } | Op::Print
                )
            })
            .count()
    }

    /// Final color of a pixel, found by replaying the recorded fills
    pub fn color_at(&self, x: u16, y: u16) -> Option<Rgb565> {
        let mut color = None;
        for op in &self.ops {
            match *op {
                Op::FillScreen(c) => color = Some(c),
                Op::FillRect {
                    x: rx,
                    y: ry,
                    w,
                    h,
                    color: c,
                } => {
                    if x >= rx && x < rx + w && y >= ry && y < ry + h {
                        color = Some(c);
                    }
                }
                _ => {}
            }
        }
        color
    }

    fn record(&mut self, op: Op) {
        self.ops.push(op).unwrap();
    }
}

impl PanelController for MockPanel {
    fn begin(&mut self) -> Result<(), InitError> {
        self.record(Op::Begin);
        if self.fail_begin {
            return Err(InitError::Startup);
        }
        Ok(())
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.record(Op::SetRotation(rotation));
    }

    fn set_brightness(&mut self, level: u8) {
        self.record(Op::SetBrightness(level));
    }

    fn display_on(&mut self) {
        self.record(Op::DisplayOn);
    }

    fn fill_screen(&mut self, color: Rgb565) {
        self.record(Op::FillScreen(color));
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565) {
        self.record(Op::FillRect { x, y, w, h, color });
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.record(Op::SetCursor(x, y));
    }

    fn set_text_size(&mut self, size: u8) {
        self.record(Op::SetTextSize(size));
    }

    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565) {
        self.record(Op::SetTextColor(fg, bg));
    }

    fn print(&mut self, _text: &str) {
        self.record(Op::Print);
    }
}

impl BusHandoff for MockPanel {
    fn release_data_lines(&mut self) {
        self.released = true;
    }

    fn data_lines_released(&self) -> bool {
        self.released
    }
}
