//! Discourse-relation annotations.
//!
//! Annotations come out of the corpus files as loosely-typed records; they
//! are validated here into immutable [Relation] values that the sentences of
//! a talk share by reference.
use serde::Deserialize;

use crate::error::Error;

/// Sentinel used by the corpus for missing sense segments and connectives.
pub const NA: &str = "N/A";

/// Whether a relation holds within one sentence or across two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Inter,
    Intra,
}

/// Annotation record as found in a corpus file, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAnnotation {
    pub relation_type: String,
    pub inter_or_intra: RelationKind,
    pub arg1_sentence_index: usize,
    pub arg2_sentence_index: usize,
    #[serde(default)]
    pub sclass1a: Option<String>,
    #[serde(default)]
    pub conn1: Option<String>,
    #[serde(default)]
    pub conn_spanlist_text: Option<String>,
}

/// First two levels of the dot-separated sense taxonomy.
///
/// Only those two levels take part in cross-lingual matching. A string with
/// a single segment gets its second level padded with [NA]; an absent string
/// yields [NA] on both levels. A present string with no non-empty segment is
/// malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenseClass {
    first: String,
    second: String,
}

impl SenseClass {
    pub fn parse(raw: Option<&str>) -> Result<Self, Error> {
        let raw = match raw {
            None => return Ok(Self::na()),
            Some(r) => r,
        };

        let mut segments = raw.split('.').filter(|seg| !seg.is_empty());
        match (segments.next(), segments.next()) {
            (None, _) => Err(Error::MalformedAnnotation(format!(
                "sense classification {raw:?} has no usable segment"
            ))),
            (Some(first), None) => Ok(Self {
                first: first.to_string(),
                second: NA.to_string(),
            }),
            (Some(first), Some(second)) => Ok(Self {
                first: first.to_string(),
                second: second.to_string(),
            }),
        }
    }

    pub fn na() -> Self {
        Self {
            first: NA.to_string(),
            second: NA.to_string(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// `first.second`, the joint two-level label.
    pub fn joined(&self) -> String {
        format!("{}.{}", self.first, self.second)
    }
}

/// A validated, immutable discourse-relation annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    relation_type: String,
    sense: SenseClass,
    kind: RelationKind,
    arg1_sentence_index: usize,
    arg2_sentence_index: usize,
    connective: Option<String>,
}

impl Relation {
    /// Validates a raw record.
    ///
    /// Inter-sentential relations keep a connective: the span-list text when
    /// present, the fallback connective token otherwise. Intra relations
    /// carry none.
    pub fn from_raw(raw: RawAnnotation) -> Result<Self, Error> {
        let sense = SenseClass::parse(raw.sclass1a.as_deref())?;
        let connective = match raw.inter_or_intra {
            RelationKind::Intra => None,
            RelationKind::Inter => raw
                .conn_spanlist_text
                .filter(|c| c.as_str() != NA)
                .or(raw.conn1.filter(|c| c.as_str() != NA)),
        };

        Ok(Self {
            relation_type: raw.relation_type,
            sense,
            kind: raw.inter_or_intra,
            arg1_sentence_index: raw.arg1_sentence_index,
            arg2_sentence_index: raw.arg2_sentence_index,
            connective,
        })
    }

    pub fn relation_type(&self) -> &str {
        &self.relation_type
    }

    pub fn sense(&self) -> &SenseClass {
        &self.sense
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn arg1_sentence_index(&self) -> usize {
        self.arg1_sentence_index
    }

    pub fn arg2_sentence_index(&self) -> usize {
        self.arg2_sentence_index
    }

    pub fn connective(&self) -> Option<&str> {
        self.connective.as_deref()
    }
}
