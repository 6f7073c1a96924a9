use rayon::prelude::*;

use crate::editor::image_editor::Editor;
use crate::editor::ops::Op;
use crate::foundation::error::{EaselError, EaselResult};
use crate::frames::gif;
use crate::workspace::model::Workspace;

/// Ordered frames of an animation.
///
/// Frames may differ in size; the GIF encoder places each at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSequence {
    frames: Vec<Editor>,
    delay_ms: u32,
}

impl FrameSequence {
    /// Empty sequence showing each frame for `delay_ms` milliseconds.
    pub fn new(delay_ms: u32) -> Self {
        Self {
            frames: Vec::new(),
            delay_ms,
        }
    }

    /// Decode an animated GIF; the delay of the first frame becomes the sequence delay.
    pub fn decode_gif(bytes: &[u8]) -> EaselResult<Self> {
        let decoded = gif::decode(bytes)?;
        let frames = decoded
            .frames
            .into_iter()
            .map(Editor::new)
            .collect::<EaselResult<Vec<_>>>()?;
        Ok(Self {
            frames,
            delay_ms: decoded.delay_ms,
        })
    }

    /// Per-frame delay in milliseconds.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Frames in display order.
    pub fn frames(&self) -> &[Editor] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Append a frame.
    pub fn push(&mut self, frame: Editor) -> &mut Self {
        self.frames.push(frame);
        self
    }

    /// Generate `workspace` and append the result.
    pub fn push_workspace(&mut self, workspace: &Workspace) -> EaselResult<&mut Self> {
        let frame = workspace.generate()?;
        self.frames.push(frame);
        Ok(self)
    }

    /// Apply `op` to every frame in parallel.
    ///
    /// Frames are edited in place, so on error some frames may already carry the operation.
    #[tracing::instrument(level = "debug", skip_all, fields(frames = self.frames.len(), op = %op.kind()))]
    pub fn apply(&mut self, op: &Op) -> EaselResult<&mut Self> {
        self.frames
            .par_iter_mut()
            .try_for_each(|frame| frame.apply(op).map(|_| ()))?;
        Ok(self)
    }

    /// Encode as a looping GIF.
    pub fn encode_gif(&self) -> EaselResult<Vec<u8>> {
        if self.frames.is_empty() {
            return Err(EaselError::invalid_argument(
                "cannot encode an empty frame sequence",
            ));
        }
        gif::encode(self.frames.iter().map(Editor::surface), self.delay_ms)
    }
}

impl FromIterator<Editor> for FrameSequence {
    fn from_iter<T: IntoIterator<Item = Editor>>(iter: T) -> Self {
        Self {
            frames: iter.into_iter().collect(),
            delay_ms: 100,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/sequence.rs"]
mod tests;
