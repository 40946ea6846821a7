use thiserror::Error;

use super::verbosity::Verbosity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("More than two verbosity flags specified!")]
    DuplicateVerbosity,

    #[error("More than two file names specified!")]
    DuplicateFileName,

    #[error("More than two destination directory names specified!")]
    DuplicateDirectory,

    #[error("More than two template types specified!")]
    DuplicateTemplate,

    #[error("Unknown template type: {0}")]
    UnknownTemplate(String),
}

/// A rejected argument list, together with the verbosity that was in
/// effect when the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub verbosity: Verbosity,
    pub kind: ParseErrorKind,
}
