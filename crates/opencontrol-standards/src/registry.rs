//! In-memory collection of loaded standards keyed by name.
//!
//! The registry has no internal locking. Callers that load from several
//! threads wrap it in a `Mutex` themselves.

use std::collections::HashMap;

use tracing::warn;

use crate::ordering::natural_cmp;
use crate::standard::Standard;

#[derive(Debug, Clone, Default)]
pub struct StandardsRegistry {
    entries: HashMap<String, Standard>,
    empty: Standard,
}

impl StandardsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a standard by name.
    pub fn get(&self, name: &str) -> Option<&Standard> {
        self.entries.get(name)
    }

    /// Look up a standard by name, returning an empty standard (no name, no
    /// controls) when absent.
    pub fn get_or_empty(&self, name: &str) -> &Standard {
        self.entries.get(name).unwrap_or(&self.empty)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a standard under its own name, replacing any previous entry.
    pub fn put(&mut self, standard: Standard) -> Option<Standard> {
        let name = standard.name().to_string();
        self.insert(name, standard)
    }

    /// Register a standard under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, standard: Standard) -> Option<Standard> {
        let name = name.into();
        let previous = self.entries.insert(name.clone(), standard);
        if previous.is_some() {
            warn!(standard = %name, "replaced previously registered standard");
        }
        previous
    }

    /// Registered names in natural order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable_by(|a, b| natural_cmp(a, b));
        names
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::standard::Control;

    fn standard(name: &str, keys: &[&str]) -> Standard {
        let controls = keys
            .iter()
            .map(|key| (key.to_string(), Control::default()))
            .collect::<HashMap<_, _>>();
        Standard::new(name, controls)
    }

    #[test]
    fn missing_name_returns_none_or_empty() {
        let registry = StandardsRegistry::new();
        assert!(!registry.contains("NIST-800-53"));
        assert!(registry.get("NIST-800-53").is_none());
        let empty = registry.get_or_empty("NIST-800-53");
        assert_eq!(empty.name(), "");
        assert!(empty.is_empty());
    }

    #[test]
    fn put_overwrites_same_name() {
        let mut registry = StandardsRegistry::new();
        assert!(registry.put(standard("PCI-DSS", &["1.1"])).is_none());
        let previous = registry.put(standard("PCI-DSS", &["1.1", "1.2"]));
        assert_eq!(previous.map(|s| s.len()), Some(1));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("PCI-DSS"));
        assert_eq!(registry.get_or_empty("PCI-DSS").len(), 2);
    }

    #[test]
    fn names_are_naturally_ordered() {
        let mut registry = StandardsRegistry::new();
        for name in ["NIST-800-171", "NIST-800-53", "FRIST-1", "NIST-800-9"] {
            registry.put(standard(name, &[]));
        }
        assert_eq!(
            registry.names(),
            vec!["FRIST-1", "NIST-800-9", "NIST-800-53", "NIST-800-171"]
        );
    }
}
