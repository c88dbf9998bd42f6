use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ordering::natural_cmp;

/// A single requirement entry of a standard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Control {
    pub family: String,
    pub name: String,
    pub description: String,
}

/// A named catalog of controls keyed by identifier.
///
/// The control map carries no ordering; use [`Standard::visit_sorted`] or
/// [`Standard::sorted_keys`] for the natural identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standard {
    name: String,
    controls: HashMap<String, Control>,
}

impl Standard {
    pub fn new(name: impl Into<String>, controls: HashMap<String, Control>) -> Self {
        Self {
            name: name.into(),
            controls,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn control(&self, key: &str) -> Option<&Control> {
        self.controls.get(key)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Control identifiers in natural order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.controls.keys().map(String::as_str).collect();
        keys.sort_unstable_by(|a, b| natural_cmp(a, b));
        keys
    }

    /// Controls paired with their identifiers, in natural order.
    pub fn sorted_controls(&self) -> Vec<(&str, &Control)> {
        let mut controls: Vec<(&str, &Control)> = self
            .controls
            .iter()
            .map(|(key, control)| (key.as_str(), control))
            .collect();
        controls.sort_unstable_by(|a, b| natural_cmp(a.0, b.0));
        controls
    }

    /// Call `visit` once for every control identifier, in natural order.
    pub fn visit_sorted(&self, mut visit: impl FnMut(&str)) {
        for key in self.sorted_keys() {
            visit(key);
        }
    }
}
