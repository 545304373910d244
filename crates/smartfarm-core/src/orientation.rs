//! Model yaw and the per-frame rotation step

use std::f32::consts::TAU;

/// Yaw added on every frame tick while rotating (radians).
///
/// The step is per tick, not per elapsed second, so the visible spin speed
/// follows the display refresh rate.
pub const ROTATION_STEP: f32 = 0.01;

/// Rotation of the model about its vertical axis, kept in `[0, 2π)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelOrientation {
    yaw: f32,
}

impl ModelOrientation {
    pub fn from_radians(yaw: f32) -> Self {
        Self {
            yaw: yaw.rem_euclid(TAU),
        }
    }

    pub fn radians(&self) -> f32 {
        self.yaw
    }

    /// Signed angular distance travelled from `earlier` to `self`, in `[0, 2π)`
    pub fn delta_since(&self, earlier: ModelOrientation) -> f32 {
        (self.yaw - earlier.yaw).rem_euclid(TAU)
    }
}

/// Advance the orientation by one frame tick
pub fn advance(orientation: ModelOrientation, rotating: bool) -> ModelOrientation {
    if rotating {
        ModelOrientation::from_radians(orientation.yaw + ROTATION_STEP)
    } else {
        orientation
    }
}

/// Advance by `ticks` frames
pub fn advance_by(
    mut orientation: ModelOrientation,
    rotating: bool,
    ticks: u32,
) -> ModelOrientation {
    for _ in 0..ticks {
        orientation = advance(orientation, rotating);
    }
    orientation
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_single_tick() {
        let start = ModelOrientation::default();
        let next = advance(start, true);
        assert!((next.radians() - ROTATION_STEP).abs() < EPS);
        assert_eq!(advance(start, false), start);
    }

    #[test]
    fn test_idle_ticks_leave_orientation_unchanged() {
        let start = ModelOrientation::from_radians(1.25);
        assert_eq!(advance_by(start, false, 1000), start);
    }

    #[test]
    fn test_ten_frames_scenario() {
        let start = ModelOrientation::default();
        let idle = advance_by(start, false, 10);
        assert_eq!(idle, start);

        let spun = advance_by(idle, true, 10);
        assert!((spun.delta_since(start) - 0.1).abs() < EPS);
    }

    #[test]
    fn test_wraps_past_full_turn() {
        let start = ModelOrientation::from_radians(TAU - 0.005);
        let next = advance(start, true);
        assert!(next.radians() < 0.01);
        assert!((next.delta_since(start) - ROTATION_STEP).abs() < EPS);
    }

    #[test]
    fn test_from_radians_normalizes() {
        assert!((ModelOrientation::from_radians(-0.5).radians() - (TAU - 0.5)).abs() < EPS);
        assert!((ModelOrientation::from_radians(TAU + 0.25).radians() - 0.25).abs() < EPS);
    }
}
