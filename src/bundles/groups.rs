//! Read-only start order groups

use std::collections::BTreeMap;
use std::collections::btree_map;

use super::start_order::StartOrder;

/// Records grouped by start order
///
/// Iteration visits non-zero start orders ascending, then the unspecified
/// start order `0`. Within a group, records keep their input order. There is
/// no way to insert, remove or re-key a group once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartOrderGroups<T> {
    groups: BTreeMap<StartOrder, Vec<T>>,
}

impl<T> StartOrderGroups<T> {
    pub(super) fn from_map(groups: BTreeMap<StartOrder, Vec<T>>) -> Self {
        Self { groups }
    }

    /// Number of distinct start orders
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Records with the given start order, in input order
    pub fn get(&self, start_order: i32) -> Option<&[T]> {
        self.groups
            .get(&StartOrder::from(start_order))
            .map(Vec::as_slice)
    }

    pub fn contains_start_order(&self, start_order: i32) -> bool {
        self.groups.contains_key(&StartOrder::from(start_order))
    }

    /// Start orders in iteration order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = i32> + ExactSizeIterator + '_ {
        self.groups.keys().map(|key| key.value())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.groups.iter(),
        }
    }

    pub fn first_key_value(&self) -> Option<(i32, &[T])> {
        self.groups
            .first_key_value()
            .map(|(key, group)| (key.value(), group.as_slice()))
    }

    pub fn last_key_value(&self) -> Option<(i32, &[T])> {
        self.groups
            .last_key_value()
            .map(|(key, group)| (key.value(), group.as_slice()))
    }

    /// Total number of records across all groups
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl<T> Default for StartOrderGroups<T> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

/// Borrowing iterator over `(start_order, records)` pairs
pub struct Iter<'a, T> {
    inner: btree_map::Iter<'a, StartOrder, Vec<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (i32, &'a [T]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, group)| (key.value(), group.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(key, group)| (key.value(), group.as_slice()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over `(start_order, records)` pairs
pub struct IntoIter<T> {
    inner: btree_map::IntoIter<StartOrder, Vec<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (i32, Vec<T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, group)| (key.value(), group))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, group)| (key.value(), group))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a StartOrderGroups<T> {
    type Item = (i32, &'a [T]);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for StartOrderGroups<T> {
    type Item = (i32, Vec<T>);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.groups.into_iter(),
        }
    }
}
