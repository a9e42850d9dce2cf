//! Error enum
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// Requested language pair is absent from a talk's alignment table,
    /// even after trying the mirrored direction.
    MissingLanguagePair(String, String),
    /// An annotation references a sentence index outside the talk,
    /// or carries an empty sense classification.
    MalformedAnnotation(String),
    /// An alignment list and a structure derived from it disagree on
    /// block count. Internal consistency failure, not recoverable.
    AlignmentInvariant(String),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
