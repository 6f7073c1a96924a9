use crate::editor::ops::{Op, OpKind, Param};
use crate::foundation::color::Color;
use crate::foundation::core::ensure_size;
use crate::foundation::error::{EaselError, EaselResult};

const ID_LEN: usize = 5;
const ID_ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// What a component draws.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentOp {
    /// Validated operation.
    Resolved(Op),
    /// Operation addressed by name; resolved and validated when the workspace is generated.
    Pending {
        /// Operation name, e.g. `"rectangle"`.
        name: String,
        /// Parameters passed to the operation.
        params: Vec<Param>,
    },
}

impl ComponentOp {
    /// Name-addressed call; an unknown `name` is reported by [`Workspace::generate`].
    pub fn call(name: impl Into<String>, params: impl IntoIterator<Item = Param>) -> Self {
        Self::Pending {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }

    /// Pending call of a known operation.
    pub fn pending(kind: OpKind, params: impl IntoIterator<Item = Param>) -> Self {
        Self::call(kind.as_str(), params)
    }

    /// Operation name.
    pub fn name(&self) -> &str {
        match self {
            Self::Resolved(op) => op.kind().as_str(),
            Self::Pending { name, .. } => name,
        }
    }

    fn merge(&mut self, params: Vec<Param>) -> EaselResult<()> {
        match self {
            Self::Resolved(op) => op.merge(params),
            Self::Pending { params: current, .. } => {
                current.extend(params);
                Ok(())
            }
        }
    }
}

impl From<Op> for ComponentOp {
    fn from(op: Op) -> Self {
        Self::Resolved(op)
    }
}

/// One drawing step of a layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    identifier: String,
    operation: ComponentOp,
}

impl Component {
    /// Identifier, unique within its layer.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Recorded operation.
    pub fn operation(&self) -> &ComponentOp {
        &self.operation
    }
}

/// Named background plus ordered components; insertion order is draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    name: String,
    background: Color,
    components: Vec<Component>,
}

impl Layer {
    /// Layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color the layer is cleared to before its components draw.
    pub fn background(&self) -> &Color {
        &self.background
    }

    /// Components in draw order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Look up a component by identifier.
    pub fn component(&self, identifier: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.identifier == identifier)
    }

    fn position(&self, identifier: &str) -> EaselResult<usize> {
        self.components
            .iter()
            .position(|c| c.identifier == identifier)
            .ok_or_else(|| EaselError::unknown_component(&self.name, identifier))
    }
}

/// Fixed-size stack of layers; later layers draw on top.
///
/// Component calls take an optional layer name and fall back to the working layer set with
/// [`Workspace::set_working_layer`].
#[derive(Clone, Debug, PartialEq)]
pub struct Workspace {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
    working: Option<String>,
    id_seed: u64,
}

impl Workspace {
    /// Empty workspace with no layers.
    pub fn new(width: u32, height: u32) -> EaselResult<Self> {
        ensure_size(width, height)?;
        Ok(Self {
            width,
            height,
            layers: Vec::new(),
            working: None,
            id_seed: 0,
        })
    }

    /// `(width, height)` of the generated image.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Layers bottom to top.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Look up a layer by name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Layer names bottom to top.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    /// Layer used when a component call names none.
    pub fn working_layer(&self) -> Option<&str> {
        self.working.as_deref()
    }

    /// Append a new top layer.
    pub fn create_layer(
        &mut self,
        name: impl Into<String>,
        background: impl Into<Color>,
    ) -> EaselResult<()> {
        let name = name.into();
        if self.layer(&name).is_some() {
            return Err(EaselError::duplicate_layer(name));
        }
        self.layers.push(Layer {
            name,
            background: background.into(),
            components: Vec::new(),
        });
        Ok(())
    }

    /// Remove a layer and return it.
    pub fn remove_layer(&mut self, name: &str) -> EaselResult<Layer> {
        let idx = self.layer_index(name)?;
        if self.working.as_deref() == Some(name) {
            self.working = None;
        }
        Ok(self.layers.remove(idx))
    }

    /// Rename a layer. The renamed layer moves to the top.
    pub fn rename_layer(&mut self, old: &str, new: impl Into<String>) -> EaselResult<()> {
        let new = new.into();
        let idx = self.layer_index(old)?;
        if new != old && self.layer(&new).is_some() {
            return Err(EaselError::duplicate_layer(new));
        }
        let mut layer = self.layers.remove(idx);
        if self.working.as_deref() == Some(old) {
            self.working = Some(new.clone());
        }
        layer.name = new;
        self.layers.push(layer);
        Ok(())
    }

    /// Replace a layer's background color.
    pub fn set_background(&mut self, name: &str, background: impl Into<Color>) -> EaselResult<()> {
        let idx = self.layer_index(name)?;
        self.layers[idx].background = background.into();
        Ok(())
    }

    /// Select the layer component calls use by default.
    pub fn set_working_layer(&mut self, name: &str) -> EaselResult<()> {
        self.layer_index(name)?;
        self.working = Some(name.to_owned());
        Ok(())
    }

    /// Append a component and return its identifier.
    ///
    /// Without an `identifier` a fresh five-letter one is generated. An existing identifier is
    /// replaced in place, keeping its draw position. Pending calls are not validated here.
    pub fn add_component(
        &mut self,
        layer: Option<&str>,
        identifier: Option<&str>,
        operation: impl Into<ComponentOp>,
    ) -> EaselResult<String> {
        let idx = self.target_layer(layer)?;
        let identifier = match identifier {
            Some(id) => id.to_owned(),
            None => self.fresh_identifier(idx),
        };
        let component = Component {
            identifier: identifier.clone(),
            operation: operation.into(),
        };

        let layer = &mut self.layers[idx];
        match layer.components.iter_mut().find(|c| c.identifier == identifier) {
            Some(existing) => *existing = component,
            None => layer.components.push(component),
        }
        Ok(identifier)
    }

    /// Remove a component and return it.
    pub fn remove_component(
        &mut self,
        layer: Option<&str>,
        identifier: &str,
    ) -> EaselResult<Component> {
        let idx = self.target_layer(layer)?;
        let layer = &mut self.layers[idx];
        let pos = layer.position(identifier)?;
        Ok(layer.components.remove(pos))
    }

    /// Shallow-merge `params` into a component's operation.
    ///
    /// Resolved operations reject parameters they do not take right away; pending calls keep
    /// the parameters for [`Workspace::generate`] to check. On error the component is unchanged.
    pub fn update_component(
        &mut self,
        layer: Option<&str>,
        identifier: &str,
        params: impl IntoIterator<Item = Param>,
    ) -> EaselResult<()> {
        let idx = self.target_layer(layer)?;
        let layer = &mut self.layers[idx];
        let pos = layer.position(identifier)?;
        let component = &mut layer.components[pos];

        let mut updated = component.operation.clone();
        updated.merge(params.into_iter().collect())?;
        component.operation = updated;
        Ok(())
    }

    fn layer_index(&self, name: &str) -> EaselResult<usize> {
        self.layers
            .iter()
            .position(|l| l.name == name)
            .ok_or_else(|| EaselError::unknown_layer(name))
    }

    fn target_layer(&self, layer: Option<&str>) -> EaselResult<usize> {
        let name = layer
            .or(self.working.as_deref())
            .ok_or(EaselError::NoLayerSelected)?;
        self.layer_index(name)
    }

    fn fresh_identifier(&mut self, layer_idx: usize) -> String {
        loop {
            self.id_seed += 1;
            let layer = &self.layers[layer_idx];
            let candidate = identifier_from_seed(self.id_seed, &layer.name);
            if layer.component(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

fn identifier_from_seed(seed: u64, layer: &str) -> String {
    let mut hasher = xxhash_rust::xxh3::Xxh3::new();
    hasher.update(&seed.to_le_bytes());
    hasher.update(layer.as_bytes());
    let mut h = hasher.digest();

    let mut id = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        id.push(char::from(ID_ALPHABET[(h % 52) as usize]));
        h /= 52;
    }
    id
}

#[cfg(test)]
#[path = "../../tests/unit/workspace/model.rs"]
mod tests;
