//! Language-specific talks.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::Error;

use super::relation::{RawAnnotation, Relation, RelationKind};
use super::sentence::{RawSentence, Sentence};

/// On-disk shape of one (talk, language) file.
#[derive(Debug, Deserialize)]
struct RawTalk {
    talk_id: String,
    language: String,
    sentences: Vec<RawSentence>,
    annotations: Vec<RawAnnotation>,
}

/// An index-stable sequence of sentences for one (talk_id, language) pair,
/// with every annotation of the file attached to its host sentence(s).
#[derive(Debug, Clone)]
pub struct Talk {
    talk_id: String,
    language: String,
    sentences: Vec<Sentence>,
    relations: Vec<Arc<Relation>>,
}

impl Talk {
    /// Loads and validates one corpus file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let raw: RawTalk = serde_json::from_reader(BufReader::new(f))?;
        Self::from_raw(raw)
    }

    /// Attaches every annotation by sentence index: intra relations to their
    /// single host, inter relations to their arg1 host and arg2 host.
    /// Out-of-range indices are rejected, not skipped.
    fn from_raw(raw: RawTalk) -> Result<Self, Error> {
        let mut sentences: Vec<Sentence> =
            raw.sentences.into_iter().map(Sentence::from_raw).collect();
        let mut relations = Vec::with_capacity(raw.annotations.len());

        for annotation in raw.annotations {
            let relation = Arc::new(Relation::from_raw(annotation)?);
            let arg1 = relation.arg1_sentence_index();
            let arg2 = relation.arg2_sentence_index();
            let bound = sentences.len();
            if arg1 >= bound || arg2 >= bound {
                return Err(Error::MalformedAnnotation(format!(
                    "talk {} ({}): annotation arguments ({arg1}, {arg2}) outside 0..{bound}",
                    raw.talk_id, raw.language,
                )));
            }

            match relation.kind() {
                RelationKind::Intra => sentences[arg1].attach_intra(relation.clone()),
                RelationKind::Inter => {
                    sentences[arg1].attach_inter_as_arg1(relation.clone());
                    sentences[arg2].attach_inter_as_arg2(relation.clone());
                }
            }
            relations.push(relation);
        }

        Ok(Self {
            talk_id: raw.talk_id,
            language: raw.language,
            sentences,
            relations,
        })
    }

    pub fn talk_id(&self) -> &str {
        &self.talk_id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Full unfiltered annotation list of the file.
    pub fn relations(&self) -> &[Arc<Relation>] {
        &self.relations
    }
}
