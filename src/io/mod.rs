/*! Corpus loading.

Reads a dataset directory into the in-memory corpus model: one JSON file
per (talk, language) pair plus the English-pivot alignment file. Loading is
memoized per dataset location by [loader::CorpusLoader].
!*/
mod loader;

pub use loader::{Corpus, CorpusLoader, ALIGNMENT_FILE};
