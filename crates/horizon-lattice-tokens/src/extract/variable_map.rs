//! Ordered custom-property maps.

use std::collections::HashMap;

use crate::types::RawVariable;

/// Custom properties keyed by name, in first-declaration order.
///
/// Names are stored without their leading `--`; lookups accept either form.
/// Setting an existing name replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl VariableMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map where the first declaration of a name wins.
    pub fn first_wins<'a>(vars: impl IntoIterator<Item = &'a RawVariable>) -> Self {
        let mut map = Self::new();
        for var in vars {
            if !map.contains(&var.name) {
                map.set(&var.name, &var.raw_value);
            }
        }
        map
    }

    /// Build a map where the last declaration of a name wins.
    pub fn last_wins<'a>(vars: impl IntoIterator<Item = &'a RawVariable>) -> Self {
        let mut map = Self::new();
        for var in vars {
            map.set(&var.name, &var.raw_value);
        }
        map
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let name = bare(name.as_ref());
        let value = value.into();
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), value));
            }
        }
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(bare(name))
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(bare(name))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert back into raw variables, restoring the `--` prefix.
    pub fn to_raw_variables(&self) -> Vec<RawVariable> {
        self.iter()
            .map(|(name, value)| RawVariable::new(format!("--{name}"), value))
            .collect()
    }
}

fn bare(name: &str) -> &str {
    name.strip_prefix("--").unwrap_or(name)
}
