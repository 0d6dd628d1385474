//! Ordered segment maps produced by the anchor splitter.

use serde_json::{Map, Value};

use crate::error::{Result, ScaffoldError};

/// Named, contiguous pieces of one source text, kept in split order.
///
/// Concatenating the values in order gives back the text they were cut from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentMap {
    entries: Vec<(String, String)>,
}

impl SegmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment. A name may only be bound once, otherwise text would be lost.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(ScaffoldError::VariableConflict(name));
        }
        self.entries.push((name, text.into()));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Segment names in split order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }

    /// Join every segment back together.
    pub fn reassemble(&self) -> String {
        self.entries.iter().map(|(_, t)| t.as_str()).collect()
    }

    /// Convert into a JSON object suitable as a render context.
    pub fn to_json(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(n, t)| (n.clone(), Value::String(t.clone())))
            .collect()
    }
}
