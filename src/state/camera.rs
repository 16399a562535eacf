// Preview camera driven by the gesture stream.

use crate::model::{GestureEvent, GestureKind};

pub const MIN_ZOOM_Z: f64 = 2.0;
pub const MAX_ZOOM_Z: f64 = 15.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneCamera {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rot_y: f64,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 8.0,
            rot_y: 0.0,
        }
    }
}

impl SceneCamera {
    /// Apply one gesture payload. Mirrors what the native shell would do
    /// to the WebGL camera: small incremental pans and yaw, multiplicative
    /// zoom clamped so the scene never leaves view.
    pub fn apply(&mut self, g: &GestureEvent) {
        match g.kind {
            GestureKind::Pan => {
                self.x -= g.delta_x * 0.01;
                self.y += g.delta_y * 0.01;
            }
            GestureKind::Zoom => {
                self.z = (self.z * g.scale).clamp(MIN_ZOOM_Z, MAX_ZOOM_Z);
            }
            GestureKind::Rotate => {
                self.rot_y += g.rotation * 0.01;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(kind: GestureKind) -> GestureEvent {
        GestureEvent {
            kind,
            delta_x: 0.0,
            delta_y: 0.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    #[test]
    fn pan_moves_x_against_delta_and_y_with_it() {
        let mut cam = SceneCamera::default();
        let mut g = gesture(GestureKind::Pan);
        g.delta_x = 4.0;
        g.delta_y = -2.0;
        cam.apply(&g);
        assert!((cam.x - (-0.04)).abs() < 1e-12);
        assert!((cam.y - (-0.02)).abs() < 1e-12);
    }

    #[test]
    fn rotate_accumulates_yaw() {
        let mut cam = SceneCamera::default();
        let mut g = gesture(GestureKind::Rotate);
        g.rotation = 0.5;
        cam.apply(&g);
        cam.apply(&g);
        assert!((cam.rot_y - 0.01).abs() < 1e-12);
    }

    #[test]
    fn zoom_is_multiplicative_within_bounds() {
        let mut cam = SceneCamera::default();
        let mut g = gesture(GestureKind::Zoom);
        g.scale = 1.05;
        cam.apply(&g);
        assert!((cam.z - 8.4).abs() < 1e-12);
    }

    #[test]
    fn zoom_clamps_for_any_scale() {
        for scale in [0.0, 1e-9, 0.5, 1.0, 2.0, 100.0, 1e9] {
            let mut cam = SceneCamera::default();
            let mut g = gesture(GestureKind::Zoom);
            g.scale = scale;
            for _ in 0..50 {
                cam.apply(&g);
                assert!(cam.z >= MIN_ZOOM_Z && cam.z <= MAX_ZOOM_Z);
            }
        }
    }
}
