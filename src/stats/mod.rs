/*! Match statistics.

Cross-lingual relation-preservation scores ([accuracy]), association-rule
mining over first-level senses ([rules]) and label-translation contingency
tables ([patterns]), all computed from the aligned relation bags of the
corpus model.
!*/
pub mod accuracy;
pub mod multiset;
pub mod patterns;
pub mod rules;

pub use accuracy::{pairwise_relation_preservation, talk_relation_preservation, CategoryScores};
pub use multiset::Multiset;
pub use patterns::{translation_patterns, PatternTable};
pub use rules::{mine_association_rules, Rule};
