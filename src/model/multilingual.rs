//! All language versions of one talk, plus its alignment table.
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use itertools::Itertools;
use log::debug;

use crate::align::{compose, AlignmentBlock, AlignmentList};
use crate::error::Error;
use crate::lang::PIVOT;
use crate::relations::{relations_for_block, LabelBundle};

use super::relation::Relation;
use super::talk::Talk;

/// Index-list pairs as read from the alignment file, per target language.
pub type RawAlignments = BTreeMap<String, Vec<(Vec<usize>, Vec<usize>)>>;

/// Pairs of relation bags, one entry per aligned block.
pub type AlignedRelations = Vec<(Vec<Arc<Relation>>, Vec<Arc<Relation>>)>;

/// One [Talk] per language of a talk_id, with the pairwise alignment table.
///
/// English-pivot alignments come from the corpus; all other directions are
/// derived from them when [MultilingualTalk::set_pairwise_alignments] is
/// called, and the table is read-only from then on. Both orderings of every
/// pair are stored, mirrored element for element.
#[derive(Debug, Clone, Default)]
pub struct MultilingualTalk {
    talk_id: String,
    talks: BTreeMap<String, Talk>,
    pairwise_alignments: HashMap<(String, String), AlignmentList>,
}

impl MultilingualTalk {
    pub fn new(talk_id: String) -> Self {
        Self {
            talk_id,
            ..Default::default()
        }
    }

    pub fn add_talk(&mut self, talk: Talk) {
        self.talks.insert(talk.language().to_string(), talk);
    }

    pub fn talk_id(&self) -> &str {
        &self.talk_id
    }

    pub fn talk(&self, language: &str) -> Option<&Talk> {
        self.talks.get(language)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.talks.contains_key(language)
    }

    /// Languages with a loaded talk, sorted.
    pub fn languages(&self) -> Vec<&str> {
        self.talks.keys().map(String::as_str).collect()
    }

    /// Populates the whole alignment table from the English-pivot data:
    /// the English↔XX lists as given, then every XX↔YY direction derived by
    /// pivot merge, then the mirror of everything.
    pub fn set_pairwise_alignments(&mut self, en_to_xx: &RawAlignments) {
        for (language, pairs) in en_to_xx {
            let list: AlignmentList = pairs
                .iter()
                .map(|(ens, xxs)| AlignmentBlock::from_indices(ens, xxs))
                .collect();
            self.pairwise_alignments
                .insert((PIVOT.to_string(), language.clone()), list);
        }

        for (xx, yy) in en_to_xx.keys().tuple_combinations() {
            let composed = compose(
                &self.pairwise_alignments[&(PIVOT.to_string(), xx.clone())],
                &self.pairwise_alignments[&(PIVOT.to_string(), yy.clone())],
            );
            if composed.dropped_blocks > 0 {
                debug!(
                    "{}: {}-{}: dropped {} block(s) during pivot merge",
                    self.talk_id, xx, yy, composed.dropped_blocks
                );
            }
            self.pairwise_alignments
                .insert((xx.clone(), yy.clone()), composed.alignments);
        }

        let mirrored: Vec<_> = self
            .pairwise_alignments
            .iter()
            .map(|((a, b), list)| ((b.clone(), a.clone()), list.swapped()))
            .collect();
        self.pairwise_alignments.extend(mirrored);
    }

    /// Alignment blocks for a language pair, falling back to the mirrored
    /// direction before giving up.
    pub fn alignments(&self, lang_a: &str, lang_b: &str) -> Result<AlignmentList, Error> {
        let key = (lang_a.to_string(), lang_b.to_string());
        if let Some(list) = self.pairwise_alignments.get(&key) {
            return Ok(list.clone());
        }
        let mirror = (lang_b.to_string(), lang_a.to_string());
        if let Some(list) = self.pairwise_alignments.get(&mirror) {
            return Ok(list.swapped());
        }
        Err(Error::MissingLanguagePair(
            lang_a.to_string(),
            lang_b.to_string(),
        ))
    }

    /// Relation bags of both languages for every aligned block, in block
    /// order.
    pub fn aligned_relations(
        &self,
        lang_a: &str,
        lang_b: &str,
    ) -> Result<AlignedRelations, Error> {
        let alignments = self.alignments(lang_a, lang_b)?;
        let talk_a = self.require_talk(lang_a, lang_b)?;
        let talk_b = self.require_talk(lang_b, lang_a)?;

        let mut paired = Vec::with_capacity(alignments.len());
        for block in &alignments {
            paired.push((
                relations_for_block(block.side_a(), talk_a.sentences())?,
                relations_for_block(block.side_b(), talk_b.sentences())?,
            ));
        }

        // one relation pair per block, always
        if paired.len() != alignments.len() {
            return Err(Error::AlignmentInvariant(format!(
                "{}: {lang_a}-{lang_b}: {} aligned blocks but {} relation pairs",
                self.talk_id,
                alignments.len(),
                paired.len()
            )));
        }
        Ok(paired)
    }

    /// [MultilingualTalk::aligned_relations], decomposed into the five label
    /// sequences per side.
    pub fn aligned_relation_labels(
        &self,
        lang_a: &str,
        lang_b: &str,
    ) -> Result<Vec<(LabelBundle, LabelBundle)>, Error> {
        Ok(self
            .aligned_relations(lang_a, lang_b)?
            .iter()
            .map(|(a, b)| {
                (
                    LabelBundle::from_relations(a),
                    LabelBundle::from_relations(b),
                )
            })
            .collect())
    }

    fn require_talk(&self, language: &str, other: &str) -> Result<&Talk, Error> {
        self.talks.get(language).ok_or_else(|| {
            Error::MissingLanguagePair(language.to_string(), other.to_string())
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::talk::tests::gen_talk;

    /// A talk in English, German and Polish where German merges English
    /// sentences 0 and 1 on one side.
    pub(crate) fn gen_mtalk() -> MultilingualTalk {
        let mut mtalk = MultilingualTalk::new("talk_1927".to_string());
        for language in ["English", "German", "Polish"] {
            mtalk.add_talk(gen_talk("talk_1927", language));
        }

        let mut raw = RawAlignments::new();
        raw.insert(
            "German".to_string(),
            vec![(vec![0, 1], vec![0]), (vec![2], vec![1, 2])],
        );
        raw.insert(
            "Polish".to_string(),
            vec![(vec![0], vec![0]), (vec![1], vec![1]), (vec![2], vec![2])],
        );
        mtalk.set_pairwise_alignments(&raw);
        mtalk
    }

    #[test]
    fn test_pivot_lists_kept_verbatim() {
        let mtalk = gen_mtalk();
        let en_de = mtalk.alignments("English", "German").unwrap();
        assert_eq!(
            en_de.blocks(),
            &[
                AlignmentBlock::from_indices(&[0, 1], &[0]),
                AlignmentBlock::from_indices(&[2], &[1, 2]),
            ]
        );
    }

    #[test]
    fn test_derived_pair_present() {
        let mtalk = gen_mtalk();
        let de_pl = mtalk.alignments("German", "Polish").unwrap();
        assert_eq!(
            de_pl.blocks(),
            &[
                AlignmentBlock::from_indices(&[0], &[0, 1]),
                AlignmentBlock::from_indices(&[1, 2], &[2]),
            ]
        );
    }

    #[test]
    fn test_mirror_symmetry() {
        let mtalk = gen_mtalk();
        let langs = mtalk.languages();
        for (a, b) in langs.iter().tuple_combinations() {
            let forward = mtalk.alignments(a, b).unwrap();
            let backward = mtalk.alignments(b, a).unwrap();
            assert_eq!(forward.swapped(), backward, "{a}-{b}");
        }
    }

    #[test]
    fn test_missing_pair() {
        let mtalk = gen_mtalk();
        let res = mtalk.alignments("German", "Turkish");
        assert!(matches!(res, Err(Error::MissingLanguagePair(_, _))));
    }

    #[test]
    fn test_aligned_relations_one_pair_per_block() {
        let mtalk = gen_mtalk();
        let alignments = mtalk.alignments("German", "Polish").unwrap();
        let paired = mtalk.aligned_relations("German", "Polish").unwrap();
        assert_eq!(paired.len(), alignments.len());

        // fixture talks: intra on sentence 0, inter anchored on sentence 1
        let (de, pl) = &paired[0];
        assert_eq!(de.len(), 1); // German block {0}
        assert_eq!(pl.len(), 2); // Polish block {0, 1}
        let (de, pl) = &paired[1];
        assert_eq!(de.len(), 1); // German block {1, 2}: inter as arg1 on 1
        assert_eq!(pl.len(), 0); // Polish block {2}: arg2 only
    }

    #[test]
    fn test_aligned_labels_shapes() {
        let mtalk = gen_mtalk();
        let labels = mtalk.aligned_relation_labels("German", "Polish").unwrap();
        assert_eq!(labels.len(), 2);
        let (de, pl) = &labels[0];
        assert_eq!(de.len(), 1);
        assert_eq!(pl.len(), 2);
    }
}
