//! Ordered count map over labels.
use std::collections::BTreeMap;

use serde::Serialize;

/// A label multiset backed by an ordered count map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Multiset {
    counts: BTreeMap<String, usize>,
}

impl Multiset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Total number of elements, multiplicity included.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Size of the multiset intersection: sum of per-label minimum counts.
    pub fn intersection_size(&self, other: &Multiset) -> usize {
        self.counts
            .iter()
            .map(|(label, count)| (*count).min(other.count(label)))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(l, c)| (l.as_str(), *c))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Multiset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label.as_ref());
        }
        set
    }
}
