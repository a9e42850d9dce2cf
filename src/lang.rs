//! Language inventory of the dataset.
//!
//! The corpus ships one annotated file per (talk, language) pair, and every
//! cross-lingual alignment is given against English only. [PIVOT] names the
//! pivot side of those alignments; [LANGUAGES] lists the languages present
//! in the released talks, in the display order used when reporting scores
//! over every pair.
use lazy_static::lazy_static;

/// Pivot language of the alignment tables.
pub const PIVOT: &str = "English";

lazy_static! {

    /// Languages available in the corpus, in report order.
    pub static ref LANGUAGES: Vec<&'static str> = vec![
        "Russian",
        "Portuguese",
        "Polish",
        "German",
        "English",
        "Turkish",
        "Lithuanian",
        "Chinese",
    ];
}
