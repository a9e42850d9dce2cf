//! Relation extraction over aligned sentence groups.
//!
//! An aligned block names sentence indices; this module turns them into the
//! bag of discourse relations anchored there. A sentence contributes its
//! intra-sentential relations and the inter-sentential relations where it is
//! argument 1. Arg2 attachments are skipped: every inter relation sits on
//! exactly one sentence as arg1, so counting it there once is enough.
use std::sync::Arc;

use serde::Serialize;

use crate::align::IndexSet;
use crate::error::Error;
use crate::model::{Relation, Sentence};

/// Label categories compared across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelCategory {
    Type,
    First,
    Second,
    FirstAndSecond,
    AllThree,
}

impl LabelCategory {
    pub const ALL: [LabelCategory; 5] = [
        LabelCategory::Type,
        LabelCategory::First,
        LabelCategory::Second,
        LabelCategory::FirstAndSecond,
        LabelCategory::AllThree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelCategory::Type => "type",
            LabelCategory::First => "first",
            LabelCategory::Second => "second",
            LabelCategory::FirstAndSecond => "first_and_second",
            LabelCategory::AllThree => "all_three",
        }
    }
}

impl std::fmt::Display for LabelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five parallel label sequences decomposed from one relation bag.
///
/// All sequences have the bag's length and preserve its order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelBundle {
    types: Vec<String>,
    first: Vec<String>,
    second: Vec<String>,
    first_and_second: Vec<String>,
    all_three: Vec<String>,
}

impl LabelBundle {
    pub fn from_relations(relations: &[Arc<Relation>]) -> Self {
        let mut bundle = Self::default();
        for r in relations {
            let sense = r.sense();
            bundle.types.push(r.relation_type().to_string());
            bundle.first.push(sense.first().to_string());
            bundle.second.push(sense.second().to_string());
            bundle.first_and_second.push(sense.joined());
            bundle
                .all_three
                .push(format!("{}.{}", r.relation_type(), sense.joined()));
        }
        bundle
    }

    pub fn category(&self, category: LabelCategory) -> &[String] {
        match category {
            LabelCategory::Type => &self.types,
            LabelCategory::First => &self.first,
            LabelCategory::Second => &self.second,
            LabelCategory::FirstAndSecond => &self.first_and_second,
            LabelCategory::AllThree => &self.all_three,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Collects the relations anchored on one side of an aligned block,
/// in ascending sentence order.
pub fn relations_for_block(
    indices: &IndexSet,
    sentences: &[Sentence],
) -> Result<Vec<Arc<Relation>>, Error> {
    let mut relations = Vec::new();
    for &index in indices {
        let sentence = sentences.get(index).ok_or_else(|| {
            Error::AlignmentInvariant(format!(
                "aligned block references sentence {index}, talk has {}",
                sentences.len()
            ))
        })?;
        relations.extend(sentence.intra().iter().cloned());
        relations.extend(sentence.inter_as_arg1().iter().cloned());
    }
    Ok(relations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::talk::tests::gen_talk;

    #[test]
    fn test_relations_for_block_skips_arg2() {
        // fixture: intra on sentence 0, inter from 1 to 2
        let talk = gen_talk("talk_1927", "German");

        let all: IndexSet = [0, 1, 2].into_iter().collect();
        let relations = relations_for_block(&all, talk.sentences()).unwrap();
        // sentence 2 hosts the inter relation as arg2 only, so the relation
        // appears once
        assert_eq!(relations.len(), 2);
        assert_eq!(relations[0].relation_type(), "Implicit");
        assert_eq!(relations[1].relation_type(), "Explicit");

        let tail: IndexSet = [2].into_iter().collect();
        assert!(relations_for_block(&tail, talk.sentences())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_relations_for_block_out_of_range() {
        let talk = gen_talk("talk_1927", "German");
        let bad: IndexSet = [7].into_iter().collect();
        let res = relations_for_block(&bad, talk.sentences());
        assert!(matches!(res, Err(Error::AlignmentInvariant(_))));
    }

    #[test]
    fn test_label_bundle() {
        let talk = gen_talk("talk_1927", "German");
        let all: IndexSet = [0, 1, 2].into_iter().collect();
        let relations = relations_for_block(&all, talk.sentences()).unwrap();
        let bundle = LabelBundle::from_relations(&relations);

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.category(LabelCategory::Type), ["Implicit", "Explicit"]);
        assert_eq!(
            bundle.category(LabelCategory::First),
            ["Expansion", "Comparison"]
        );
        assert_eq!(
            bundle.category(LabelCategory::FirstAndSecond),
            ["Expansion.Conjunction", "Comparison.Contrast"]
        );
        assert_eq!(
            bundle.category(LabelCategory::AllThree),
            ["Implicit.Expansion.Conjunction", "Explicit.Comparison.Contrast"]
        );
    }
}
