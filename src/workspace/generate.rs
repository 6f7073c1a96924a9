use crate::editor::image_editor::Editor;
use crate::editor::ops::Op;
use crate::foundation::core::Canvas;
use crate::foundation::error::EaselResult;
use crate::workspace::model::{ComponentOp, Layer, Workspace};

impl Workspace {
    /// Render every layer bottom to top into a new transparent image of the workspace size.
    ///
    /// Each layer is drawn on its own canvas cleared to its background, then alpha-composited
    /// at the origin. Pending calls are resolved here, so an unknown operation name surfaces as
    /// [`crate::EaselError::UnknownOperation`]. The first failing component aborts the render.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(width = self.size().0, height = self.size().1, layers = self.layers().len())
    )]
    pub fn generate(&self) -> EaselResult<Editor> {
        let (w, h) = self.size();
        let mut out = Editor::new(Canvas::transparent(w, h)?)?;
        for layer in self.layers() {
            let rendered = render_layer(layer, w, h)?;
            out.paste(rendered.surface(), (0.0, 0.0))?;
            tracing::debug!(
                layer = layer.name(),
                components = layer.components().len(),
                "composited layer"
            );
        }
        Ok(out)
    }
}

fn render_layer(layer: &Layer, width: u32, height: u32) -> EaselResult<Editor> {
    let mut editor = Editor::new(Canvas::new(width, height, layer.background().clone())?)?;
    for component in layer.components() {
        tracing::trace!(
            layer = layer.name(),
            component = component.identifier(),
            op = component.operation().name(),
            "replay component"
        );
        match component.operation() {
            ComponentOp::Resolved(op) => {
                editor.apply(op)?;
            }
            ComponentOp::Pending { name, params } => {
                let op = Op::from_name(name, params.iter().cloned())?;
                editor.apply(&op)?;
            }
        }
    }
    Ok(editor)
}

#[cfg(test)]
#[path = "../../tests/unit/workspace/generate.rs"]
mod tests;
