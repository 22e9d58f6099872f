//! Controller bring-up sequence
//!
//! Ordering is strict and not reorderable: draw commands issued before
//! `begin` succeeds, or before rotation and brightness are applied, leave
//! real panels showing corruption or a flash of default state.

use crate::config::PanelSettings;
use crate::traits::panel::{InitError, PanelController};

/// Bring the controller from power-on to ready-to-draw
///
/// `begin` is the single fallible step. On failure nothing further runs;
/// the caller must not draw against a half-initialized bus and terminates
/// the owning task instead.
pub fn bring_up<C: PanelController>(
    panel: &mut C,
    settings: &PanelSettings,
) -> Result<(), InitError> {
    panel.begin()?;

    panel.set_rotation(settings.rotation);
    panel.set_brightness(settings.brightness);
    panel.display_on();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockPanel, Op};
    use crate::traits::panel::Rotation;

    #[test]
    fn test_bring_up_order() {
        let mut panel = MockPanel::new();
        let settings = PanelSettings {
            rotation: Rotation::Deg0,
            brightness: 80,
        };

        bring_up(&mut panel, &settings).unwrap();

        assert_eq!(
            panel.ops.as_slice(),
            &[
                Op::Begin,
                Op::SetRotation(Rotation::Deg0),
                Op::SetBrightness(80),
                Op::DisplayOn,
            ]
        );
    }

    #[test]
    fn test_begin_failure_stops_the_sequence() {
        let mut panel = MockPanel::failing();

        let result = bring_up(&mut panel, &PanelSettings::default());

        assert_eq!(result, Err(InitError::Startup));
        assert_eq!(panel.ops.as_slice(), &[Op::Begin]);
    }
}
