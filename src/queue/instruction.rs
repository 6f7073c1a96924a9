use crate::editor::image_editor::Editor;
use crate::editor::ops::{Op, Param};
use crate::foundation::error::EaselResult;

/// One recorded editor call.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Validated operation.
    Op(Op),
    /// Operation addressed by name; resolved when the queue executes.
    Call {
        /// Operation name.
        name: String,
        /// Named arguments.
        params: Vec<Param>,
    },
}

impl Instruction {
    /// Operation name.
    pub fn name(&self) -> &str {
        match self {
            Self::Op(op) => op.kind().as_str(),
            Self::Call { name, .. } => name,
        }
    }

    pub(crate) fn apply_to(&self, editor: &mut Editor) -> EaselResult<()> {
        match self {
            Self::Op(op) => {
                editor.apply(op)?;
            }
            Self::Call { name, params } => {
                let op = Op::from_name(name, params.iter().cloned())?;
                editor.apply(&op)?;
            }
        }
        Ok(())
    }
}

impl From<Op> for Instruction {
    fn from(op: Op) -> Self {
        Self::Op(op)
    }
}
