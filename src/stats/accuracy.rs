//! Relation-preservation accuracy.
//!
//! For each aligned block, the two label sequences of a category are treated
//! as multisets and scored with a Dice-style overlap coefficient;
//! per-talk-pair results are macro-averaged over blocks, then over talks.
use std::collections::BTreeMap;

use crate::error::Error;
use crate::io::Corpus;
use crate::model::MultilingualTalk;
use crate::relations::{LabelBundle, LabelCategory};

use super::multiset::Multiset;

/// Accuracy per label category, in [0, 1]. Categories that never had a
/// non-empty sequence on both sides are absent, not zero.
pub type CategoryScores = BTreeMap<LabelCategory, f64>;

/// Dice overlap of one block, per category. A category is skipped when
/// either side's sequence is empty.
fn block_scores(xx: &LabelBundle, yy: &LabelBundle) -> CategoryScores {
    let mut scores = CategoryScores::new();
    for category in LabelCategory::ALL {
        let xx_labels = xx.category(category);
        let yy_labels = yy.category(category);
        if xx_labels.is_empty() || yy_labels.is_empty() {
            continue;
        }
        let xx_set: Multiset = xx_labels.iter().collect();
        let yy_set: Multiset = yy_labels.iter().collect();
        let matched = xx_set.intersection_size(&yy_set);
        let accuracy = (2 * matched) as f64 / (xx_labels.len() + yy_labels.len()) as f64;
        scores.insert(category, accuracy);
    }
    scores
}

/// Macro-average: per category, the mean over the results where the
/// category contributed at all.
fn merge_scores(results: &[CategoryScores]) -> CategoryScores {
    let mut sums: BTreeMap<LabelCategory, (f64, usize)> = BTreeMap::new();
    for result in results {
        for (&category, &score) in result {
            let entry = sums.entry(category).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(category, (total, n))| (category, total / n as f64))
        .collect()
}

/// Accuracy of one talk for one language pair, averaged over its blocks.
pub fn talk_relation_preservation(
    mtalk: &MultilingualTalk,
    lang_a: &str,
    lang_b: &str,
) -> Result<CategoryScores, Error> {
    let per_block: Vec<CategoryScores> = mtalk
        .aligned_relation_labels(lang_a, lang_b)?
        .iter()
        .map(|(xx, yy)| block_scores(xx, yy))
        .collect();
    Ok(merge_scores(&per_block))
}

/// Accuracy for one language pair across every talk containing both
/// languages.
pub fn pairwise_relation_preservation(
    corpus: &Corpus,
    lang_a: &str,
    lang_b: &str,
) -> Result<CategoryScores, Error> {
    let mut per_talk = Vec::new();
    for mtalk in corpus.values() {
        if !mtalk.has_language(lang_a) || !mtalk.has_language(lang_b) {
            continue;
        }
        per_talk.push(talk_relation_preservation(mtalk, lang_a, lang_b)?);
    }
    Ok(merge_scores(&per_talk))
}
