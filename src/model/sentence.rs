//! Sentences and their relation bags.
use std::sync::Arc;

use serde::Deserialize;

use super::relation::Relation;

/// Sentence record as found in a corpus file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSentence {
    pub sentence: String,
    pub language: String,
    pub en_translation: String,
}

/// One sentence of a language-specific talk.
///
/// Holds the raw text, its reference English translation (identity when the
/// language is English itself) and three relation bags: intra-sentential
/// relations hosted here, inter-sentential relations where this sentence is
/// argument 1, and those where it is argument 2. The bags are filled once at
/// talk construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct Sentence {
    text: String,
    language: String,
    en_translation: String,
    intra: Vec<Arc<Relation>>,
    inter_as_arg1: Vec<Arc<Relation>>,
    inter_as_arg2: Vec<Arc<Relation>>,
}

impl Sentence {
    pub(crate) fn from_raw(raw: RawSentence) -> Self {
        Self {
            text: raw.sentence,
            language: raw.language,
            en_translation: raw.en_translation,
            intra: Vec::new(),
            inter_as_arg1: Vec::new(),
            inter_as_arg2: Vec::new(),
        }
    }

    pub(crate) fn attach_intra(&mut self, relation: Arc<Relation>) {
        self.intra.push(relation);
    }

    pub(crate) fn attach_inter_as_arg1(&mut self, relation: Arc<Relation>) {
        self.inter_as_arg1.push(relation);
    }

    pub(crate) fn attach_inter_as_arg2(&mut self, relation: Arc<Relation>) {
        self.inter_as_arg2.push(relation);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn en_translation(&self) -> &str {
        &self.en_translation
    }

    /// Intra-sentential relations hosted by this sentence.
    pub fn intra(&self) -> &[Arc<Relation>] {
        &self.intra
    }

    /// Inter-sentential relations where this sentence is argument 1.
    pub fn inter_as_arg1(&self) -> &[Arc<Relation>] {
        &self.inter_as_arg1
    }

    /// Inter-sentential relations where this sentence is argument 2.
    pub fn inter_as_arg2(&self) -> &[Arc<Relation>] {
        &self.inter_as_arg2
    }
}
