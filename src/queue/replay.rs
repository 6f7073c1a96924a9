use std::sync::Arc;

use tokio::sync::oneshot;

use crate::editor::image_editor::Editor;
use crate::editor::ops::{
    ArcArgs, BarArgs, BlendArgs, BlurArgs, EllipseArgs, MultiTextArgs, Op, Param, PasteArgs,
    PolygonArgs, RectangleArgs, ResizeArgs, RotateArgs, RoundedBarArgs, RoundedCornersArgs,
    TextArgs,
};
use crate::editor::source::ImageSource;
use crate::foundation::core::{BlurMode, Point};
use crate::foundation::error::{EaselError, EaselResult};
use crate::queue::instruction::Instruction;
use crate::queue::opts::{QueueOpts, build_thread_pool};
use crate::raster::surface::Surface;

/// Records editor operations against a source and replays them off the calling thread.
///
/// Recording never touches pixels, so name-addressed calls added with
/// [`InstructionQueue::call`] are only checked when the queue executes.
///
/// ```no_run
/// use easel::{Canvas, InstructionQueue};
///
/// let queue = InstructionQueue::new(Canvas::new(300, 300, "white")?)
///     .resize((128, 128), true)
///     .circle_image();
/// let editor = pollster::block_on(queue.execute())?;
/// # Ok::<(), easel::EaselError>(())
/// ```
#[derive(Debug)]
pub struct InstructionQueue {
    source: ImageSource,
    instructions: Vec<Instruction>,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl InstructionQueue {
    /// Empty queue replaying on rayon's global pool.
    pub fn new(source: impl Into<ImageSource>) -> Self {
        Self {
            source: source.into(),
            instructions: Vec::new(),
            pool: None,
        }
    }

    /// Empty queue with explicit worker configuration.
    pub fn with_opts(source: impl Into<ImageSource>, opts: QueueOpts) -> EaselResult<Self> {
        let pool = build_thread_pool(opts.threads)?.map(Arc::new);
        Ok(Self {
            source: source.into(),
            instructions: Vec::new(),
            pool,
        })
    }

    /// Number of recorded instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// `true` when nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Recorded instructions in replay order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Record a typed operation.
    pub fn push(mut self, op: impl Into<Op>) -> Self {
        self.instructions.push(Instruction::Op(op.into()));
        self
    }

    /// Record an operation by name; unknown names fail at execution.
    pub fn call(mut self, name: impl Into<String>, params: impl IntoIterator<Item = Param>) -> Self {
        self.instructions.push(Instruction::Call {
            name: name.into(),
            params: params.into_iter().collect(),
        });
        self
    }

    /// Record [`Editor::resize`].
    pub fn resize(self, size: (u32, u32), crop: bool) -> Self {
        self.push(ResizeArgs::new(size).crop(crop))
    }

    /// Record [`Editor::rounded_corners`].
    pub fn rounded_corners(self, radius: f64, offset: f64) -> Self {
        self.push(RoundedCornersArgs { radius, offset })
    }

    /// Record [`Editor::circle_image`].
    pub fn circle_image(self) -> Self {
        self.push(Op::CircleImage)
    }

    /// Record [`Editor::rotate`].
    pub fn rotate(self, degrees: f64, expand: bool) -> Self {
        self.push(RotateArgs { degrees, expand })
    }

    /// Record [`Editor::blur`].
    pub fn blur(self, mode: BlurMode, amount: f64) -> Self {
        self.push(BlurArgs { mode, amount })
    }

    /// Record [`Editor::blend`].
    pub fn blend(self, other: impl Into<Arc<Surface>>, alpha: f64, on_top: bool) -> Self {
        self.push(BlendArgs::new(other).alpha(alpha).on_top(on_top))
    }

    /// Record [`Editor::paste`].
    pub fn paste(self, other: impl Into<Arc<Surface>>, position: impl Into<Point>) -> Self {
        self.push(PasteArgs::new(other, position))
    }

    /// Record [`Editor::text`].
    pub fn text(self, args: TextArgs) -> Self {
        self.push(args)
    }

    /// Record [`Editor::multi_text`].
    pub fn multi_text(self, args: MultiTextArgs) -> Self {
        self.push(args)
    }

    /// Record [`Editor::rectangle`].
    pub fn rectangle(self, args: RectangleArgs) -> Self {
        self.push(args)
    }

    /// Record [`Editor::bar`].
    pub fn bar(self, args: BarArgs) -> Self {
        self.push(args)
    }

    /// Record [`Editor::rounded_bar`].
    pub fn rounded_bar(self, args: RoundedBarArgs) -> Self {
        self.push(args)
    }

    /// Record [`Editor::ellipse`].
    pub fn ellipse(self, args: EllipseArgs) -> Self {
        self.push(args)
    }

    /// Record [`Editor::polygon`].
    pub fn polygon(self, args: PolygonArgs) -> Self {
        self.push(args)
    }

    /// Record [`Editor::arc`].
    pub fn arc(self, args: ArcArgs) -> Self {
        self.push(args)
    }

    /// Submit the replay to a worker and return a future resolving to the finished editor or the
    /// first error.
    ///
    /// The task is submitted right away. Dropping the future before a worker picks the task up
    /// discards the batch; once replay has started it runs to the end and the result is dropped.
    /// The future does not depend on any async runtime.
    pub fn execute(self) -> impl Future<Output = EaselResult<Editor>> + Send + 'static {
        let Self {
            source,
            instructions,
            pool,
        } = self;
        let (tx, rx) = oneshot::channel();

        let task = move || {
            if tx.is_closed() {
                tracing::warn!(
                    instructions = instructions.len(),
                    "queue caller went away before replay, discarding batch"
                );
                return;
            }
            let result = replay(source, &instructions);
            if tx.send(result).is_err() {
                tracing::warn!("queue caller went away during replay, dropping result");
            }
        };
        match pool {
            Some(pool) => pool.spawn(task),
            None => rayon::spawn(task),
        }

        async move { rx.await.map_err(|_| EaselError::Canceled)? }
    }

    /// Replay on the calling thread.
    pub fn execute_blocking(self) -> EaselResult<Editor> {
        replay(self.source, &self.instructions)
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(instructions = instructions.len()))]
fn replay(source: ImageSource, instructions: &[Instruction]) -> EaselResult<Editor> {
    let mut editor = Editor::new(source)?;
    for (index, instruction) in instructions.iter().enumerate() {
        tracing::trace!(index, op = instruction.name(), "replay instruction");
        instruction.apply_to(&mut editor)?;
    }
    Ok(editor)
}

#[cfg(test)]
#[path = "../../tests/unit/queue/replay.rs"]
mod tests;
