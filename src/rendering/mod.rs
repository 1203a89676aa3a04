mod types;
mod view;

pub use types::{BeadPose, RING_CLEARANCE};
pub use view::{BeadView, PoseRecorder};
