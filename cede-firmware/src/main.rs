//! Cede - shared-bus status panel firmware
//!
//! Firmware for RP2040 radio boards whose AMOLED shares its QSPI-class
//! data lanes with the radio transceiver. One background task brings the
//! panel up, paints the splash, hands the lanes off to high impedance,
//! and parks holding the panel alive.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Level, Output};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use cede_core::bus::DataBus;
use cede_core::config::SplashConfig;
use cede_core::session::PanelSession;
use cede_drivers::panel::Co5300;

use crate::board::{ControlLine, DataLine};

mod board;
mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("cede firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    debug!("panel pins: {}", board::PANEL_PINS);

    // Data lanes shared with the radio: SCLK=GPIO17, SDIO0..3=GPIO15/14/16/10
    let bus = DataBus::new(
        DataLine::new(Flex::new(p.PIN_17)),
        [
            DataLine::new(Flex::new(p.PIN_15)),
            DataLine::new(Flex::new(p.PIN_14)),
            DataLine::new(Flex::new(p.PIN_16)),
            DataLine::new(Flex::new(p.PIN_10)),
        ],
    );

    // Control lines, driven for the process lifetime: CS=GPIO9, RST=GPIO8, BCKL=GPIO22
    let cs = ControlLine::new(Output::new(p.PIN_9, Level::High));
    let reset = ControlLine::new(Output::new(p.PIN_8, Level::Low));
    let backlight = ControlLine::new(Output::new(p.PIN_22, Level::Low));

    let panel = Co5300::new(bus, cs, reset, backlight, Delay, board::GEOMETRY);
    let session = PanelSession::new(panel);

    let splash = SplashConfig::with_text("CEDE", concat!("v", env!("CARGO_PKG_VERSION")));

    spawner
        .spawn(tasks::panel_task(
            session,
            board::GEOMETRY,
            board::SETTINGS,
            splash,
        ))
        .unwrap();

    info!("panel task spawned");

    // Main task has nothing else to do - the panel lifecycle runs in its
    // own task and the radio stack claims the bus after BUS_RELEASED
    loop {
        Timer::after_secs(60).await;
        trace!("main loop heartbeat");
    }
}
