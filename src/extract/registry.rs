//! Insertion-ordered control registry.
//!
//! Controls are looked up by name for every property/event/parent mutation,
//! while output must preserve registration order. The registry keeps both: a
//! `Vec` for order and a name→index map for O(1) lookup. When a name is
//! registered twice, both entries are kept but lookups keep resolving to the
//! first registration.

use std::collections::HashMap;

use crate::model::ControlInfo;

#[derive(Debug, Default)]
pub struct ControlRegistry {
    controls: Vec<ControlInfo>,
    index: HashMap<String, usize>,
}

impl ControlRegistry {
    /// A registry seeded with the synthetic form entry.
    pub fn with_form() -> Self {
        let mut registry = Self::default();
        registry.register(ControlInfo::form());
        registry
    }

    pub fn register(&mut self, control: ControlInfo) {
        let position = self.controls.len();
        self.index.entry(control.name.clone()).or_insert(position);
        self.controls.push(control);
    }

    /// Mutable access to the control registered under `name`, if any.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ControlInfo> {
        let position = *self.index.get(name)?;
        self.controls.get_mut(position)
    }

    pub fn into_controls(self) -> Vec<ControlInfo> {
        self.controls
    }
}
