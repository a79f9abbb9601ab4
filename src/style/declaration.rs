use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

/// An ordered mapping of style property names to value strings.
///
/// Insertion order is preserved so declarations read the way their rules
/// were authored; merge precedence is positional, not alphabetical.
pub type PropertyMap = IndexMap<&'static str, String>;

/// An interaction-dependent style block.
///
/// The compound states exist because a control can be hovered or pressed
/// while it still holds focus, and some variants style that intersection
/// differently from either state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PseudoState {
    Hover,
    Active,
    Focus,
    HoverFocus,
    ActiveFocus,
    Disabled,
}

impl PseudoState {
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Hover => ":hover",
            Self::Active => ":active",
            Self::Focus => ":focus",
            Self::HoverFocus => ":hover:focus",
            Self::ActiveFocus => ":active:focus",
            Self::Disabled => ":disabled",
        }
    }
}

/// One conditionally-active contribution to a component's final style.
///
/// A layer owns its unconditional properties plus any pseudo-state blocks.
/// Layers are built with the chainable [`prop`](Self::prop) /
/// [`pseudo_prop`](Self::pseudo_prop) methods and never mutated once pushed
/// into a declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleLayer {
    label: String,
    properties: PropertyMap,
    pseudo: IndexMap<PseudoState, PropertyMap>,
}

impl StyleLayer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            properties: PropertyMap::default(),
            pseudo: IndexMap::default(),
        }
    }

    pub fn prop(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.properties.insert(name, value.into());
        self
    }

    pub fn pseudo_prop(
        mut self,
        state: PseudoState,
        name: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.pseudo.entry(state).or_default().insert(name, value.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn pseudo_block(&self, state: PseudoState) -> Option<&PropertyMap> {
        self.pseudo.get(&state)
    }

    pub fn pseudo_get(&self, state: PseudoState, name: &str) -> Option<&str> {
        self.pseudo_block(state)?.get(name).map(String::as_str)
    }
}

/// The resolved style for one component instance: its active layers in
/// fixed merge order.
///
/// Later layers win per property when merged, both at the top level and
/// inside each pseudo-state block. A layer whose activation predicate did
/// not hold is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleDeclaration {
    layers: SmallVec<[StyleLayer; 6]>,
}

impl StyleDeclaration {
    pub fn push(&mut self, layer: StyleLayer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[StyleLayer] {
        &self.layers
    }

    /// Finds an active layer by its label.
    pub fn layer(&self, label: &str) -> Option<&StyleLayer> {
        self.layers.iter().find(|layer| layer.label == label)
    }

    /// Flattens the top-level properties of all layers, later layers
    /// overriding earlier ones for the same property.
    pub fn merged(&self) -> PropertyMap {
        let mut merged = PropertyMap::default();
        for layer in &self.layers {
            for (name, value) in &layer.properties {
                merged.insert(name, value.clone());
            }
        }
        merged
    }

    /// Flattens one pseudo-state block across all layers, with the same
    /// last-layer-wins rule as [`merged`](Self::merged).
    pub fn merged_pseudo(&self, state: PseudoState) -> PropertyMap {
        let mut merged = PropertyMap::default();
        for layer in &self.layers {
            if let Some(block) = layer.pseudo.get(&state) {
                for (name, value) in block {
                    merged.insert(name, value.clone());
                }
            }
        }
        merged
    }

    /// A property's final top-level value, after merging.
    pub fn get(&self, name: &str) -> Option<String> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.properties.get(name).cloned())
    }

    /// A property's final value inside a pseudo-state block, after merging.
    pub fn pseudo_get(&self, state: PseudoState, name: &str) -> Option<String> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.pseudo.get(&state)?.get(name).cloned())
    }
}
