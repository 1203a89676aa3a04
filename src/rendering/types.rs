use nalgebra::Vector3;

/// Vertical clearance between the ground plane and the lowest point of the
/// ring [m]
pub const RING_CLEARANCE: f64 = 2.0;

/// A bead state projected into world space for a view to draw.
///
/// The ring hangs in a vertical plane that is yawed by `phi` about the
/// world's vertical axis; the bead sits on the ring at angle `theta` from
/// the ring's lowest point.
#[derive(Debug, Clone, PartialEq)]
pub struct BeadPose {
    /// Yaw of the ring's plane about the vertical axis [rad]
    pub ring_yaw: f64,

    /// Bead position in world space [m]
    pub position: Vector3<f64>,
}

impl BeadPose {
    /// Project `(phi, theta)` onto a ring of the given radius whose center
    /// sits `center_height` above the ground plane.
    pub fn new(radius: f64, center_height: f64, phi: f64, theta: f64) -> Self {
        let x = radius * theta.sin() * (-phi).cos();
        let y = center_height - radius * theta.cos();
        let z = radius * theta.sin() * (-phi).sin();

        Self {
            ring_yaw: phi,
            position: Vector3::new(x, y, z),
        }
    }

    /// Center height placing the ring's lowest point `RING_CLEARANCE` above
    /// the ground plane
    pub fn default_center_height(radius: f64) -> f64 {
        radius + RING_CLEARANCE
    }
}
