use std::fmt;

use crate::error::Error;
use crate::frame::Frame;
use crate::math;
use crate::observation::ObjectId;
use crate::trajectory::{Trajectories, Trajectory, TrajectoryPoint};

pub const DEFAULT_MAX_GAP: usize = 3;
pub const DEFAULT_MAX_DIST: f64 = 0.15;

const CONSISTENT_MSG: &str = "IDs are consistent";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Largest frame gap for which the distance limit still applies (inclusive)
    pub max_gap: usize,
    /// Largest centroid displacement allowed inside `max_gap` (inclusive)
    pub max_dist: f64,
}

impl Thresholds {
    pub fn new(max_gap: usize, max_dist: f64) -> Result<Self, Error> {
        if !max_dist.is_finite() || max_dist < 0.0 {
            return Err(Error::InvalidThreshold(format!(
                "max distance must be a non-negative number, got {}",
                max_dist
            )));
        }

        Ok(Self { max_gap, max_dist })
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_gap: DEFAULT_MAX_GAP,
            max_dist: DEFAULT_MAX_DIST,
        }
    }
}

/// Adjacent pair of a trajectory that moved too far too quickly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jump {
    pub from: TrajectoryPoint,
    pub to: TrajectoryPoint,
    pub gap: usize,
    pub dist: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub id: ObjectId,
    pub jump: Jump,
}

impl Violation {
    pub fn summary(&self) -> String {
        let Jump {
            from,
            to,
            gap,
            dist,
        } = &self.jump;

        format!(
            "ID {} jumps between frames {} and {} (gap {}, dist {:.3})",
            self.id, from.frame, to.frame, gap, dist
        )
    }

    /// Multi-line description of the offending pair, for humans only.
    pub fn trace(&self) -> String {
        let Jump { from, to, dist, .. } = &self.jump;

        format!(
            "Debug: ID {id} jumps between frames {f1} and {f2}\n  \
             - Centroid 1: ({x1}, {y1}) in frame {f1}\n  \
             - Centroid 2: ({x2}, {y2}) in frame {f2}\n  \
             - Distance: {dist:.3}",
            id = self.id,
            f1 = from.frame,
            f2 = to.frame,
            x1 = math::short_float(from.pos.x),
            y1 = math::short_float(from.pos.y),
            x2 = math::short_float(to.pos.x),
            y2 = math::short_float(to.pos.y),
            dist = dist,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Consistent,
    Violation(Violation),
}

impl Report {
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Report::Consistent)
    }

    #[inline]
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Report::Consistent => None,
            Report::Violation(v) => Some(v),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Report::Consistent => CONSISTENT_MSG.to_string(),
            Report::Violation(v) => v.summary(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// First adjacent pair (in frame order) that lies within `max_gap` frames
/// and is more than `max_dist` apart. Pairs further apart in time are exempt.
pub fn check_trajectory(trajectory: &Trajectory, thresholds: &Thresholds) -> Option<Jump> {
    trajectory.pairs().find_map(|(from, to)| {
        let gap = to.frame - from.frame;
        if gap > thresholds.max_gap {
            return None;
        }

        let dist = math::centroid_distance(&from.pos, &to.pos);
        if dist > thresholds.max_dist {
            Some(Jump {
                from: *from,
                to: *to,
                gap,
                dist,
            })
        } else {
            None
        }
    })
}

/// Scans identifiers in first-seen order and stops at the first one with a jump.
pub fn check_ids(frames: &[Frame], thresholds: &Thresholds) -> Report {
    let trajectories = Trajectories::extract(frames);

    tracing::debug!(
        frames = frames.len(),
        ids = trajectories.len(),
        max_gap = thresholds.max_gap,
        max_dist = thresholds.max_dist,
        "checking trajectories"
    );

    for (id, trajectory) in trajectories.iter() {
        tracing::trace!(%id, points = trajectory.len(), "checking id");

        if let Some(jump) = check_trajectory(trajectory, thresholds) {
            tracing::warn!(
                %id,
                from = jump.from.frame,
                to = jump.to.frame,
                gap = jump.gap,
                dist = jump.dist,
                "id jumps"
            );

            return Report::Violation(Violation {
                id: id.clone(),
                jump,
            });
        }
    }

    Report::Consistent
}
