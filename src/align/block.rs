//! Alignment blocks and ordered block lists.
use std::collections::BTreeSet;

use serde::Serialize;

/// Sentence indices of one talk side, ordered.
pub type IndexSet = BTreeSet<usize>;

/// A pair of sentence-index sets judged mutually corresponding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentBlock {
    side_a: IndexSet,
    side_b: IndexSet,
}

impl AlignmentBlock {
    pub fn new(side_a: IndexSet, side_b: IndexSet) -> Self {
        Self { side_a, side_b }
    }

    /// Builds a block from the index lists of the alignment file.
    /// Order within a list is insignificant.
    pub fn from_indices(side_a: &[usize], side_b: &[usize]) -> Self {
        Self {
            side_a: side_a.iter().copied().collect(),
            side_b: side_b.iter().copied().collect(),
        }
    }

    pub fn side_a(&self) -> &IndexSet {
        &self.side_a
    }

    pub fn side_b(&self) -> &IndexSet {
        &self.side_b
    }

    /// Smallest index on side A. Blocks are never empty in a well-formed
    /// list, so this is only [None] on degenerate input.
    pub fn min_a(&self) -> Option<usize> {
        self.side_a.iter().next().copied()
    }

    pub fn swapped(&self) -> Self {
        Self {
            side_a: self.side_b.clone(),
            side_b: self.side_a.clone(),
        }
    }
}

/// An ordered list of alignment blocks for one directed language pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentList {
    blocks: Vec<AlignmentBlock>,
}

impl AlignmentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: AlignmentBlock) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[AlignmentBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<AlignmentBlock> {
        self.blocks.iter()
    }

    /// Mirror direction: every block swapped, same order.
    pub fn swapped(&self) -> Self {
        Self {
            blocks: self.blocks.iter().map(AlignmentBlock::swapped).collect(),
        }
    }
}

impl FromIterator<AlignmentBlock> for AlignmentList {
    fn from_iter<I: IntoIterator<Item = AlignmentBlock>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AlignmentList {
    type Item = &'a AlignmentBlock;
    type IntoIter = std::slice::Iter<'a, AlignmentBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
