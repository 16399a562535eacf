//! Software 3D for the wallpaper preview canvas.
//! Pure geometry and projection math; the scene component feeds the
//! results to a 2d canvas context every animation frame.

use crate::state::SceneCamera;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn rotate_x(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * c - self.z * s,
            z: self.y * s + self.z * c,
        }
    }

    pub fn rotate_y(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            x: self.x * c + self.z * s,
            y: self.y,
            z: -self.x * s + self.z * c,
        }
    }

    pub fn add(self, other: Vec3) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Box,
    Sphere,
    Torus,
}

/// One animated wireframe in the scene.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub kind: MeshKind,
    pub position: Vec3,
    pub color: &'static str,
}

const PALETTE: [&str; 5] = ["#6366f1", "#22d3ee", "#f59e0b", "#ef4444", "#22c55e"];

/// The five fixed slots of the default scene; extra meshes (meshCount > 5)
/// go on a ring behind them, cycling shape and color.
pub fn mesh_set(count: u32) -> Vec<Mesh> {
    let base = [
        Mesh { kind: MeshKind::Box, position: Vec3::new(-2.0, 0.0, 0.0), color: PALETTE[0] },
        Mesh { kind: MeshKind::Sphere, position: Vec3::new(0.0, 0.0, 0.0), color: PALETTE[1] },
        Mesh { kind: MeshKind::Torus, position: Vec3::new(2.0, 0.0, 0.0), color: PALETTE[2] },
        Mesh { kind: MeshKind::Box, position: Vec3::new(0.0, 2.0, -2.0), color: PALETTE[3] },
        Mesh { kind: MeshKind::Sphere, position: Vec3::new(0.0, -2.0, -2.0), color: PALETTE[4] },
    ];
    let mut meshes: Vec<Mesh> = base.iter().take(count as usize).cloned().collect();
    let extra = count.saturating_sub(base.len() as u32);
    for i in 0..extra {
        let angle = (i as f64) / (extra as f64) * std::f64::consts::TAU;
        let kind = match i % 3 {
            0 => MeshKind::Box,
            1 => MeshKind::Sphere,
            _ => MeshKind::Torus,
        };
        meshes.push(Mesh {
            kind,
            position: Vec3::new(3.5 * angle.cos(), 3.5 * angle.sin(), -3.0),
            color: PALETTE[(i as usize) % PALETTE.len()],
        });
    }
    meshes
}

/// Wireframe edges in mesh-local space.
pub fn wireframe(kind: MeshKind) -> Vec<[Vec3; 2]> {
    match kind {
        MeshKind::Box => box_edges(0.5),
        MeshKind::Sphere => sphere_rings(0.7, 24),
        MeshKind::Torus => torus_rings(0.8, 0.3, 32, 8),
    }
}

fn box_edges(half: f64) -> Vec<[Vec3; 2]> {
    let corners: Vec<Vec3> = (0..8)
        .map(|i| {
            Vec3::new(
                if i & 1 == 0 { -half } else { half },
                if i & 2 == 0 { -half } else { half },
                if i & 4 == 0 { -half } else { half },
            )
        })
        .collect();
    let mut edges = Vec::with_capacity(12);
    for i in 0..8usize {
        for bit in [1usize, 2, 4] {
            let j = i ^ bit;
            if i < j {
                edges.push([corners[i], corners[j]]);
            }
        }
    }
    edges
}

fn ring(radius: f64, segments: u32, to_point: impl Fn(f64, f64) -> Vec3) -> Vec<[Vec3; 2]> {
    let mut edges = Vec::with_capacity(segments as usize);
    for i in 0..segments {
        let a0 = (i as f64) / (segments as f64) * std::f64::consts::TAU;
        let a1 = ((i + 1) as f64) / (segments as f64) * std::f64::consts::TAU;
        edges.push([
            to_point(radius * a0.cos(), radius * a0.sin()),
            to_point(radius * a1.cos(), radius * a1.sin()),
        ]);
    }
    edges
}

fn sphere_rings(radius: f64, segments: u32) -> Vec<[Vec3; 2]> {
    let mut edges = ring(radius, segments, |u, v| Vec3::new(u, v, 0.0));
    edges.extend(ring(radius, segments, |u, v| Vec3::new(u, 0.0, v)));
    edges.extend(ring(radius, segments, |u, v| Vec3::new(0.0, u, v)));
    edges
}

fn torus_rings(major: f64, tube: f64, segments: u32, cross_sections: u32) -> Vec<[Vec3; 2]> {
    let mut edges = ring(major + tube, segments, |u, v| Vec3::new(u, v, 0.0));
    edges.extend(ring(major - tube, segments, |u, v| Vec3::new(u, v, 0.0)));
    for i in 0..cross_sections {
        let a = (i as f64) / (cross_sections as f64) * std::f64::consts::TAU;
        let (s, c) = a.sin_cos();
        edges.extend(ring(tube, 8, move |u, v| {
            Vec3::new((major + u) * c, v, (major + u) * s)
        }));
    }
    edges
}

/// Background particle positions, one per three rolls in [0, 1).
/// Uniform in a 20-unit cube around the origin.
pub fn particle_field(rolls: &[f64]) -> Vec<Vec3> {
    rolls
        .chunks_exact(3)
        .map(|r| Vec3::new((r[0] - 0.5) * 20.0, (r[1] - 0.5) * 20.0, (r[2] - 0.5) * 20.0))
        .collect()
}

/// Depth of the near clip plane in camera space.
const NEAR: f64 = 0.1;

/// Perspective-project a world-space point through the camera onto a
/// `width` x `height` canvas. `None` when the point is at or behind the eye.
pub fn project(p: Vec3, cam: &SceneCamera, width: f64, height: f64) -> Option<(f64, f64)> {
    // Camera yaw rotates the world the opposite way.
    let r = p.rotate_y(-cam.rot_y);
    let vx = r.x - cam.x;
    let vy = r.y - cam.y;
    let vz = cam.z - r.z;
    if vz < NEAR {
        return None;
    }
    // ~75 degree vertical fov.
    let focal = 0.65 * height;
    Some((width * 0.5 + focal * vx / vz, height * 0.5 - focal * vy / vz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_twelve_edges() {
        assert_eq!(wireframe(MeshKind::Box).len(), 12);
    }

    #[test]
    fn mesh_set_respects_count() {
        assert_eq!(mesh_set(0).len(), 0);
        assert_eq!(mesh_set(3).len(), 3);
        assert_eq!(mesh_set(5).len(), 5);
        assert_eq!(mesh_set(9).len(), 9);
    }

    #[test]
    fn particle_field_stays_in_bounds() {
        let rolls = [0.0, 0.5, 0.999, 0.25, 0.75, 0.1];
        for p in particle_field(&rolls) {
            assert!(p.x.abs() <= 10.0 && p.y.abs() <= 10.0 && p.z.abs() <= 10.0);
        }
    }

    #[test]
    fn particle_field_ignores_trailing_rolls() {
        assert_eq!(particle_field(&[0.5; 7]).len(), 2);
    }

    #[test]
    fn origin_projects_to_canvas_center() {
        let cam = SceneCamera::default();
        let (sx, sy) = project(Vec3::new(0.0, 0.0, 0.0), &cam, 400.0, 800.0).unwrap();
        assert!((sx - 200.0).abs() < 1e-9);
        assert!((sy - 400.0).abs() < 1e-9);
    }

    #[test]
    fn points_behind_the_eye_are_clipped() {
        let cam = SceneCamera::default();
        assert!(project(Vec3::new(0.0, 0.0, 20.0), &cam, 400.0, 800.0).is_none());
        assert!(project(Vec3::new(0.0, 0.0, cam.z), &cam, 400.0, 800.0).is_none());
    }

    #[test]
    fn yaw_rotation_moves_projection_sideways() {
        let mut cam = SceneCamera::default();
        let p = Vec3::new(1.0, 0.0, 0.0);
        let (x0, _) = project(p, &cam, 400.0, 800.0).unwrap();
        cam.rot_y += 0.2;
        let (x1, _) = project(p, &cam, 400.0, 800.0).unwrap();
        assert!(x1 != x0);
    }
}
