//! Memoizing dataset loader.
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::model::{MultilingualTalk, RawAlignments, Talk};

/// English-pivot alignment file, keyed by talk_id then target language.
pub const ALIGNMENT_FILE: &str = "cross-lingual_sentence-level_alignments.json";

/// A fully loaded dataset: talk_id to [MultilingualTalk].
pub type Corpus = BTreeMap<String, MultilingualTalk>;

/// Loads datasets at most once per location.
///
/// The corpus is read-only after load, so cached corpora are shared behind
/// [Arc]. [CorpusLoader::reset] drops the cache, mainly for tests.
#[derive(Debug, Default)]
pub struct CorpusLoader {
    cache: HashMap<PathBuf, Arc<Corpus>>,
}

impl CorpusLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the dataset at `dataset_dir`, returning the cached corpus when
    /// the location has been loaded before.
    pub fn load(&mut self, dataset_dir: &Path) -> Result<Arc<Corpus>, Error> {
        let key = dataset_dir.canonicalize()?;
        if let Some(corpus) = self.cache.get(&key) {
            debug!("cache hit for {key:?}");
            return Ok(corpus.clone());
        }

        let corpus = Arc::new(load_corpus(&key)?);
        self.cache.insert(key, corpus.clone());
        Ok(corpus)
    }

    /// Forgets every cached corpus.
    pub fn reset(&mut self) {
        self.cache.clear();
    }
}

/// Reads the alignment file and every talk directory it names.
/// Talks load in parallel; each is independent of the others.
fn load_corpus(dataset_dir: &Path) -> Result<Corpus, Error> {
    let alignment_path = dataset_dir.join(ALIGNMENT_FILE);
    info!("loading dataset from {dataset_dir:?}");
    let f = File::open(&alignment_path)?;
    let alignments: BTreeMap<String, RawAlignments> =
        serde_json::from_reader(BufReader::new(f))?;

    let talks: Result<Vec<(String, MultilingualTalk)>, Error> = alignments
        .par_iter()
        .map(|(talk_id, talk_alignments)| {
            debug!("loading {talk_id}..");
            let mut mtalk = MultilingualTalk::new(talk_id.clone());
            for path in talk_paths(dataset_dir, talk_id)? {
                mtalk.add_talk(Talk::from_path(&path)?);
            }
            mtalk.set_pairwise_alignments(talk_alignments);
            Ok((talk_id.clone(), mtalk))
        })
        .collect();

    Ok(talks?.into_iter().collect())
}

/// `{dataset}/{talk_id}/{talk_id}_*.json`, one file per language.
fn talk_paths(dataset_dir: &Path, talk_id: &str) -> Result<Vec<PathBuf>, Error> {
    let pattern = dataset_dir
        .join(talk_id)
        .join(format!("{talk_id}_*.json"));
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("non-utf8 dataset path {pattern:?}")))?;

    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        paths.push(entry?);
    }
    Ok(paths)
}
