/*! Corpus model.

Strongly-typed, immutable view of the annotated corpus: [Sentence]s with
their relation bags, language-specific [Talk]s, and [MultilingualTalk]s
holding every language version of a talk together with its pairwise
alignment table.
!*/
pub mod multilingual;
pub mod relation;
pub mod sentence;
pub mod talk;

pub use multilingual::{AlignedRelations, MultilingualTalk, RawAlignments};
pub use relation::{RawAnnotation, Relation, RelationKind, SenseClass, NA};
pub use sentence::{RawSentence, Sentence};
pub use talk::Talk;
