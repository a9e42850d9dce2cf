/*! Sentence-group alignments.

An [block::AlignmentBlock] pairs two sentence-index sets judged mutually
corresponding; [block::AlignmentList] keeps blocks in increasing English
order for one directed language pair. [compose::compose] derives the list
for two non-English languages from their English-pivot lists.
!*/
pub mod block;
pub mod compose;

pub use block::{AlignmentBlock, AlignmentList, IndexSet};
pub use compose::{compose, Composition};
