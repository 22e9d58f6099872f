//! Panel lifecycle task
//!
//! One long-lived task owns the display for the whole process: bring-up,
//! one splash frame, bus handoff, then parked forever. The radio never
//! shares the data lanes with a live display bus; it waits for the
//! handoff signal and finds the lanes already in high impedance.

use core::future::pending;

use defmt::*;
use embassy_time::{Delay, Timer};

use cede_core::bus::DataBus;
use cede_core::config::{PanelGeometry, PanelSettings, SplashConfig};
use cede_core::session::PanelSession;
use cede_drivers::panel::Co5300;

use crate::board::{ControlLine, DataLine};
use crate::channels::BUS_RELEASED;

/// Delay before bring-up so other boot tasks get the processor first
const STARTUP_GRACE_MS: u64 = 100;

/// Yield after the heavy init sequence
const INIT_SETTLE_MS: u64 = 10;

/// Time for the controller to drain queued commands before the handoff
const DRAIN_MS: u64 = 100;

/// Concrete driver type for this board
pub type PanelDriver = Co5300<DataBus<DataLine>, ControlLine, ControlLine, ControlLine, Delay>;

/// Panel lifecycle task
///
/// Runs exactly once per boot and never returns on the success path: the
/// session owns the display handle, and parking here keeps it alive for
/// the process lifetime.
#[embassy_executor::task]
pub async fn panel_task(
    mut session: PanelSession<PanelDriver>,
    geometry: PanelGeometry,
    settings: PanelSettings,
    splash: SplashConfig,
) {
    info!("panel task started");

    Timer::after_millis(STARTUP_GRACE_MS).await;

    if let Err(e) = session.initialize(&settings) {
        error!("panel startup failed: {}", e);
        return;
    }
    Timer::after_millis(INIT_SETTLE_MS).await;
    info!("panel initialized");

    session.render(&geometry, &splash);

    Timer::after_millis(DRAIN_MS).await;

    session.release();
    BUS_RELEASED.signal(());
    info!("data lanes handed off, panel parked");

    pending::<()>().await
}
