use serde_derive::Deserialize;
use std::{fs, io, path::Path};

use crate::error::Error;
use crate::observation::TrackedObject;

/// One frame of tracker output. Its index is its position in the sequence,
/// any other keys the tracker writes (`frame_id`, `timestamp`, ...) are skipped.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub tracked_objects: Vec<TrackedObject>,
}

impl Frame {
    pub fn new(tracked_objects: Vec<TrackedObject>) -> Self {
        Self { tracked_objects }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracked_objects.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TrackedObject> {
        self.tracked_objects.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracked_objects.is_empty()
    }
}

pub fn frames_from_str(s: &str) -> Result<Vec<Frame>, Error> {
    Ok(serde_json::from_str(s)?)
}

pub fn frames_from_reader<R: io::Read>(reader: R) -> Result<Vec<Frame>, Error> {
    Ok(serde_json::from_reader(io::BufReader::new(reader))?)
}

/// Reads a JSON array of frames, as dumped by the tracker.
pub fn load_frames<P: AsRef<Path>>(path: P) -> Result<Vec<Frame>, Error> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let frames = frames_from_reader(file)?;

    tracing::debug!(path = %path.display(), frames = frames.len(), "loaded frames");

    Ok(frames)
}
