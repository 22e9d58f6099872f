//! Shared-bus data-line handle
//!
//! [`DataBus`] owns the clock and data lanes of the QSPI-class bus that
//! the display shares with the radio. Exactly one handle exists; it is
//! created once at task start and never recreated. Writes use the
//! controller's single-lane mode: bytes clock out MSB-first on lane 0
//! while the remaining lanes sit idle. Releasing the bus parks every
//! owned line in high impedance; control lines never pass through here.

use embedded_hal::delay::DelayNs;

use crate::traits::pin::{BusLine, LineMode, OutputLine};

/// Settling time after the lines go high-impedance, bounding the window
/// in which both subsystems could transiently drive a line.
pub const RELEASE_SETTLE_MS: u32 = 10;

/// Write access plus handoff for the panel's data lines
pub trait PanelBus {
    /// Clock out bytes on the bus
    fn write(&mut self, bytes: &[u8]);

    /// Hand every owned line off to high impedance
    ///
    /// Inert after the first call; a short settling delay follows the
    /// mode change before this returns.
    fn release(&mut self, delay: &mut impl DelayNs);

    /// Check if the lines have been handed off
    fn is_released(&self) -> bool;
}

/// Handle for the shared data lines (clock + four data lanes)
pub struct DataBus<L> {
    sclk: L,
    sdio: [L; 4],
    released: bool,
}

impl<L: BusLine> DataBus<L> {
    /// Take ownership of the bus lines
    ///
    /// Lines must already be configured as driven outputs.
    pub fn new(sclk: L, sdio: [L; 4]) -> Self {
        Self {
            sclk,
            sdio,
            released: false,
        }
    }

    /// Current mode of every owned line, clock first
    pub fn line_modes(&self) -> [LineMode; 5] {
        [
            self.sclk.mode(),
            self.sdio[0].mode(),
            self.sdio[1].mode(),
            self.sdio[2].mode(),
            self.sdio[3].mode(),
        ]
    }
}

impl<L: BusLine> PanelBus for DataBus<L> {
    fn write(&mut self, bytes: &[u8]) {
        if self.released {
            return;
        }

        for &byte in bytes {
            for bit in (0..8).rev() {
                if (byte >> bit) & 1 != 0 {
                    self.sdio[0].set_high();
                } else {
                    self.sdio[0].set_low();
                }
                self.sclk.set_high();
                self.sclk.set_low();
            }
        }
    }

    fn release(&mut self, delay: &mut impl DelayNs) {
        if self.released {
            return;
        }

        self.sclk.set_as_input();
        for line in self.sdio.iter_mut() {
            line.set_as_input();
        }
        self.released = true;

        delay.delay_ms(RELEASE_SETTLE_MS);
    }

    fn is_released(&self) -> bool {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::pin::OutputLine;

    /// Mock bus line tracking level, mode, and clock edge count
    struct MockLine {
        high: bool,
        mode: LineMode,
        rising_edges: u32,
    }

    impl MockLine {
        fn new() -> Self {
            Self {
                high: false,
                mode: LineMode::Output,
                rising_edges: 0,
            }
        }
    }

    impl OutputLine for MockLine {
        fn set_high(&mut self) {
            if !self.high {
                self.rising_edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    impl BusLine for MockLine {
        fn set_as_output(&mut self) {
            self.mode = LineMode::Output;
        }

        fn set_as_input(&mut self) {
            self.mode = LineMode::Input;
        }

        fn mode(&self) -> LineMode {
            self.mode
        }
    }

    /// Delay recording every requested millisecond wait
    struct MockDelay {
        total_ms: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns / 1_000_000;
        }
    }

    fn mock_bus() -> DataBus<MockLine> {
        DataBus::new(
            MockLine::new(),
            [
                MockLine::new(),
                MockLine::new(),
                MockLine::new(),
                MockLine::new(),
            ],
        )
    }

    #[test]
    fn test_write_clocks_eight_edges_per_byte() {
        let mut bus = mock_bus();

        bus.write(&[0xA5]);
        assert_eq!(bus.sclk.rising_edges, 8);

        bus.write(&[0x00, 0xFF]);
        assert_eq!(bus.sclk.rising_edges, 24);
    }

    #[test]
    fn test_write_leaves_last_bit_on_lane_zero() {
        let mut bus = mock_bus();

        bus.write(&[0x01]);
        assert!(bus.sdio[0].high);

        bus.write(&[0x02]);
        assert!(!bus.sdio[0].high);
    }

    #[test]
    fn test_release_parks_every_line() {
        let mut bus = mock_bus();
        let mut delay = MockDelay { total_ms: 0 };

        assert!(!bus.is_released());
        assert_eq!(bus.line_modes(), [LineMode::Output; 5]);

        bus.release(&mut delay);

        assert!(bus.is_released());
        assert_eq!(bus.line_modes(), [LineMode::Input; 5]);
        assert_eq!(delay.total_ms, RELEASE_SETTLE_MS);
    }

    #[test]
    fn test_release_is_inert_after_first_call() {
        let mut bus = mock_bus();
        let mut delay = MockDelay { total_ms: 0 };

        bus.release(&mut delay);
        bus.release(&mut delay);

        // No second settle wait
        assert_eq!(delay.total_ms, RELEASE_SETTLE_MS);
    }

    #[test]
    fn test_write_after_release_is_a_no_op() {
        let mut bus = mock_bus();
        let mut delay = MockDelay { total_ms: 0 };

        bus.write(&[0xFF]);
        let edges = bus.sclk.rising_edges;

        bus.release(&mut delay);
        bus.write(&[0xFF]);

        assert_eq!(bus.sclk.rising_edges, edges);
        assert_eq!(bus.line_modes(), [LineMode::Input; 5]);
    }
}
