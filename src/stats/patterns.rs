//! Cross-lingual label-translation patterns.
//!
//! Counts, for aligned blocks whose two sides carry the same number of
//! relations, how often a label on one side co-occurs positionally with
//! each label on the other side. Only blocks of equal relation count are
//! considered; unequal blocks give no positional correspondence.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Error;
use crate::io::Corpus;
use crate::relations::LabelCategory;

use super::multiset::Multiset;

/// Categories the pattern tables are built for.
pub const PATTERN_CATEGORIES: [LabelCategory; 3] = [
    LabelCategory::Type,
    LabelCategory::First,
    LabelCategory::FirstAndSecond,
];

/// Source label → counts of target labels, per category.
pub type PatternCounts = BTreeMap<LabelCategory, BTreeMap<String, Multiset>>;

/// Label-translation contingency counts for one language pair, in both
/// directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatternTable {
    forward: PatternCounts,
    backward: PatternCounts,
}

impl PatternTable {
    /// Counts from `lang_a` labels to `lang_b` labels.
    pub fn forward(&self) -> &PatternCounts {
        &self.forward
    }

    /// Counts from `lang_b` labels to `lang_a` labels.
    pub fn backward(&self) -> &PatternCounts {
        &self.backward
    }

    fn record(&mut self, category: LabelCategory, xx: &str, yy: &str) {
        self.forward
            .entry(category)
            .or_default()
            .entry(xx.to_string())
            .or_default()
            .insert(yy);
        self.backward
            .entry(category)
            .or_default()
            .entry(yy.to_string())
            .or_default()
            .insert(xx);
    }
}

/// Builds the pattern table for a language pair across every talk
/// containing both languages.
pub fn translation_patterns(
    corpus: &Corpus,
    lang_a: &str,
    lang_b: &str,
) -> Result<PatternTable, Error> {
    let mut table = PatternTable::default();
    for mtalk in corpus.values() {
        if !mtalk.has_language(lang_a) || !mtalk.has_language(lang_b) {
            continue;
        }
        for (xx, yy) in mtalk.aligned_relation_labels(lang_a, lang_b)? {
            if xx.len() != yy.len() {
                continue;
            }
            for category in PATTERN_CATEGORIES {
                let xx_labels = xx.category(category);
                let yy_labels = yy.category(category);
                for (xx_label, yy_label) in xx_labels.iter().zip(yy_labels) {
                    table.record(category, xx_label, yy_label);
                }
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_pairs(table: &mut PatternTable, pairs: &[(&str, &str)]) {
        for (xx, yy) in pairs {
            table.record(LabelCategory::First, xx, yy);
        }
    }

    #[test]
    fn test_counts_both_directions() {
        let mut table = PatternTable::default();
        record_pairs(
            &mut table,
            &[
                ("Comparison", "Comparison"),
                ("Comparison", "Expansion"),
                ("Expansion", "Expansion"),
            ],
        );

        let forward = &table.forward()[&LabelCategory::First];
        assert_eq!(forward["Comparison"].count("Comparison"), 1);
        assert_eq!(forward["Comparison"].count("Expansion"), 1);
        assert_eq!(forward["Expansion"].count("Expansion"), 1);

        let backward = &table.backward()[&LabelCategory::First];
        assert_eq!(backward["Expansion"].count("Comparison"), 1);
        assert_eq!(backward["Expansion"].count("Expansion"), 1);
    }

    #[test]
    fn test_unequal_blocks_ignored() {
        use crate::model::multilingual::tests::gen_mtalk;

        // every German-Polish block of the fixture pairs unequal relation
        // counts (1 vs 2, 1 vs 0), so nothing is recorded
        let mtalk = gen_mtalk();
        let mut corpus = Corpus::new();
        corpus.insert(mtalk.talk_id().to_string(), mtalk);
        let table = translation_patterns(&corpus, "German", "Polish").unwrap();
        assert!(table.forward().is_empty());
        assert!(table.backward().is_empty());
    }
}
