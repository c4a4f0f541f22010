use indexmap::IndexMap;
use nalgebra as na;

use crate::frame::Frame;
use crate::observation::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub frame: usize,
    pub pos: na::Point2<f64>,
}

/// Observations of a single identifier, ordered by frame index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    #[inline]
    pub fn push(&mut self, frame: usize, pos: na::Point2<f64>) {
        self.points.push(TrajectoryPoint { frame, pos });
    }

    // `sort_by_key` is stable: repeated ids in one frame keep their input order.
    pub fn sort(&mut self) {
        self.points.sort_by_key(|p| p.frame);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Adjacent point pairs, first to last.
    #[inline]
    pub fn pairs(&self) -> impl Iterator<Item = (&TrajectoryPoint, &TrajectoryPoint)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }
}

/// Every identifier's trajectory, iterated in the order the identifiers
/// first appear in the frame sequence.
#[derive(Debug, Default)]
pub struct Trajectories {
    inner: IndexMap<ObjectId, Trajectory>,
}

impl Trajectories {
    pub fn extract(frames: &[Frame]) -> Self {
        let mut inner: IndexMap<ObjectId, Trajectory> = IndexMap::new();

        for (idx, frame) in frames.iter().enumerate() {
            for obj in frame.iter() {
                inner
                    .entry(obj.id.clone())
                    .or_default()
                    .push(idx, obj.centroid());
            }
        }

        for trajectory in inner.values_mut() {
            trajectory.sort();
        }

        Self { inner }
    }

    #[inline]
    pub fn get(&self, id: &ObjectId) -> Option<&Trajectory> {
        self.inner.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &Trajectory)> {
        self.inner.iter()
    }
}
