//! Generic configuration tree handed to a backend.
//!
//! Loading the tree from disk belongs to the host application; a backend only looks up
//! the few nodes it understands.

use serde::Deserialize;

/// One node of a configuration forest: a value with nested children.
///
/// `access_token { "abc" }` is modelled as a node with value `access_token` and a single
/// child whose value is `abc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigNode {
    pub value: String,
    #[serde(default)]
    pub children: Vec<ConfigNode>,
}

impl ConfigNode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, child: ConfigNode) -> Self {
        self.children.push(child);
        self
    }

    /// Shorthand for a `key { value }` pair.
    pub fn entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key).child(Self::new(value))
    }
}

/// Returns the first child value of the first top-level node named `key`.
pub fn lookup<'a>(forest: &'a [ConfigNode], key: &str) -> Option<&'a str> {
    forest
        .iter()
        .find(|n| n.value == key)
        .and_then(|n| n.children.first())
        .map(|c| c.value.as_str())
}
