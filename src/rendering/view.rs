use super::types::BeadPose;

/// Seam between the physics core and whatever draws it.
///
/// The core never depends on a concrete renderer; after each drained batch
/// of steps the driving loop hands the current `(phi, theta)` to a
/// `BeadView`, and the adapter projects it into its own scene.
pub trait BeadView {
    /// Attach the view's scene objects to the scene it owns
    fn add_to_scene(&mut self);

    /// Update the view for a new ring phase and bead angle
    fn rotate(&mut self, phi: f64, theta: f64);
}

/// A scene-less `BeadView` adapter that records projected poses.
///
/// Stands in for a real scene adapter in headless runs and tests; keeps the
/// most recent pose around for inspection.
pub struct PoseRecorder {
    radius: f64,
    center_height: f64,
    attached: bool,
    last: Option<BeadPose>,
}

impl PoseRecorder {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            center_height: BeadPose::default_center_height(radius),
            attached: false,
            last: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn last_pose(&self) -> Option<&BeadPose> {
        self.last.as_ref()
    }
}

impl BeadView for PoseRecorder {
    fn add_to_scene(&mut self) {
        self.attached = true;
    }

    fn rotate(&mut self, phi: f64, theta: f64) {
        self.last = Some(BeadPose::new(self.radius, self.center_height, phi, theta));
    }
}
