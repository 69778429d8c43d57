//! Artifact records and the generic ordered artifact list
//!
//! An artifact is an opaque id plus a metadata map. Only the `start-order`
//! metadata entry carries meaning for this crate.

pub mod serialization;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, artifact::invalid_start_order};

/// Metadata key holding an artifact's start order
pub const START_ORDER_KEY: &str = "start-order";

/// Field name of the artifact id in serialized form, never a metadata key
pub(crate) const ID_KEY: &str = "id";

/// A single artifact entry from a feature descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    id: String,
    metadata: BTreeMap<String, Value>,
}

impl Artifact {
    /// Create an artifact without metadata
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Create an artifact from an id and its metadata
    ///
    /// An `id` entry in `metadata` is dropped.
    pub fn with_metadata_map(
        id: impl Into<String>,
        mut metadata: BTreeMap<String, Value>,
    ) -> Self {
        metadata.remove(ID_KEY);
        Self {
            id: id.into(),
            metadata,
        }
    }

    /// Builder variant of [`Artifact::set_start_order`]
    #[must_use]
    pub fn with_start_order(mut self, start_order: i32) -> Self {
        self.set_start_order(start_order);
        self
    }

    /// Builder for arbitrary metadata entries
    ///
    /// The key `id` is reserved for the artifact id and is ignored.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != ID_KEY {
            self.metadata.insert(key, value.into());
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Get the start order of this artifact
    ///
    /// A missing `start-order` entry means "unspecified" and yields `0`.
    /// Integers and decimal strings are accepted; anything else, or a value
    /// outside the `i32` range, is an error.
    pub fn start_order(&self) -> Result<i32> {
        let Some(value) = self.metadata.get(START_ORDER_KEY) else {
            return Ok(0);
        };

        let parsed = match value {
            Value::Number(number) => number.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(text) => text.trim().parse::<i32>().ok(),
            _ => None,
        };

        parsed.ok_or_else(|| {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            invalid_start_order(&self.id, rendered)
        })
    }

    /// Set the start order, `0` clears it
    pub fn set_start_order(&mut self, start_order: i32) {
        if start_order == 0 {
            self.metadata.remove(START_ORDER_KEY);
        } else {
            self.metadata
                .insert(START_ORDER_KEY.to_string(), Value::from(start_order));
        }
    }
}

/// An ordered list of artifacts
///
/// Insertion order is preserved and duplicates are allowed. Not thread-safe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artifacts {
    items: Vec<Artifact>,
}

impl Artifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an artifact at the end of the list
    pub fn push(&mut self, artifact: Artifact) {
        self.items.push(artifact);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Artifact> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.items.iter()
    }
}

impl FromIterator<Artifact> for Artifacts {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Artifacts {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Artifacts {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
