//! Bundles and grouping by start order
//!
//! [`Bundles`] wraps an [`Artifacts`] list. [`Bundles::by_start_order`] groups
//! the bundles so they can be started group by group: explicit start orders
//! ascending, bundles without a start order last.

pub mod groups;
pub mod start_order;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::artifact::{Artifact, Artifacts};
use crate::error::Result;

pub use groups::StartOrderGroups;
pub use start_order::{StartOrder, compare_start_order};

/// Group records by start order in a single pass
///
/// `start_order` is called once per record, in input order. The first error
/// it returns is handed back unchanged and no groups are produced.
pub fn group_by_start_order<I, T, F, E>(
    records: I,
    mut start_order: F,
) -> std::result::Result<StartOrderGroups<T>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> std::result::Result<i32, E>,
{
    let mut groups: BTreeMap<StartOrder, Vec<T>> = BTreeMap::new();

    for record in records {
        let key = StartOrder::from(start_order(&record)?);
        groups.entry(key).or_default().push(record);
    }

    Ok(StartOrderGroups::from_map(groups))
}

/// The bundles of a feature, in declaration order. Not thread-safe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundles {
    artifacts: Artifacts,
}

impl Bundles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bundle: Artifact) {
        self.artifacts.push(bundle);
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Artifact> {
        self.artifacts.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    /// Get the bundles grouped by start order
    ///
    /// Iterating the result visits start orders ascending; bundles without a
    /// start order (value `0`) come last. The groups borrow the bundles, so
    /// this list cannot change while they are in use.
    pub fn by_start_order(&self) -> Result<StartOrderGroups<&Artifact>> {
        let groups =
            group_by_start_order(self.iter(), |bundle: &&Artifact| bundle.start_order())?;

        tracing::debug!(
            bundles = self.len(),
            groups = groups.len(),
            "Grouped bundles by start order"
        );

        Ok(groups)
    }
}

impl FromIterator<Artifact> for Bundles {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        Self {
            artifacts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Bundles {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}
