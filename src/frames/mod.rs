//! Animated output: an ordered list of editors sharing one frame delay.

mod gif;
/// [`FrameSequence`](sequence::FrameSequence).
pub mod sequence;
