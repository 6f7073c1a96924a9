/// Convenience result type used across easel.
pub type EaselResult<T> = Result<T, EaselError>;

/// Top-level error taxonomy used by editor, workspace and queue APIs.
#[derive(thiserror::Error, Debug)]
pub enum EaselError {
    /// The image source could not be turned into a surface.
    #[error("construction error: {0}")]
    Construction(String),

    /// Non-positive or non-finite sizes, degenerate shapes.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// An argument value or parameter name the operation does not accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No layer with this name exists in the workspace.
    #[error("unknown layer '{0}'")]
    UnknownLayer(String),

    /// No component with this identifier exists in the layer.
    #[error("unknown component '{identifier}' in layer '{layer}'")]
    UnknownComponent {
        /// Layer that was searched.
        layer: String,
        /// Missing component identifier.
        identifier: String,
    },

    /// A name-addressed call did not resolve to an editor operation.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// A component call named no layer and no working layer is set.
    #[error("no layer selected: pass a layer name or set a working layer")]
    NoLayerSelected,

    /// A layer with this name already exists.
    #[error("duplicate layer '{0}'")]
    DuplicateLayer(String),

    /// Deferred replay was dropped before it produced an editor.
    #[error("instruction replay was canceled")]
    Canceled,

    /// Wrapped lower-level error from codecs or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EaselError {
    /// Build a [`EaselError::Construction`] value.
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    /// Build a [`EaselError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`EaselError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`EaselError::UnknownLayer`] value.
    pub fn unknown_layer(name: impl Into<String>) -> Self {
        Self::UnknownLayer(name.into())
    }

    /// Build a [`EaselError::UnknownComponent`] value.
    pub fn unknown_component(layer: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::UnknownComponent {
            layer: layer.into(),
            identifier: identifier.into(),
        }
    }

    /// Build a [`EaselError::UnknownOperation`] value.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Build a [`EaselError::DuplicateLayer`] value.
    pub fn duplicate_layer(name: impl Into<String>) -> Self {
        Self::DuplicateLayer(name.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
