pub mod checker;
pub mod error;
pub mod frame;
pub mod math;
pub mod observation;
pub mod trajectory;

pub use checker::{check_ids, Jump, Report, Thresholds, Violation};
pub use frame::{load_frames, Frame};
pub use observation::{ObjectId, TrackedObject};
pub use trajectory::{Trajectories, Trajectory, TrajectoryPoint};

pub use error::Error;

/// Something that can judge whether track ids in a frame sequence are stable.
pub trait Checking {
    fn check(&self, frames: &[Frame]) -> Report;
}

/// Flags an id whose centroid moves further than allowed within a few frames.
#[derive(Debug, Clone, Default)]
pub struct JumpChecker {
    thresholds: Thresholds,
}

impl JumpChecker {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    #[inline]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}

impl crate::Checking for JumpChecker {
    #[inline]
    fn check(&self, frames: &[Frame]) -> Report {
        check_ids(frames, &self.thresholds)
    }
}
