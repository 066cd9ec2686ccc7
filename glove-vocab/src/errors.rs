// src/errors.rs
use std::error;
use std::fmt;
use std::io;

/// The placeholder token that later pipeline stages reserve for unknown words.
pub const RESERVED_TOKEN: &str = "<unk>";

/// Errors that abort a vocabulary run.
#[derive(Debug)]
pub enum VocabError {
    /// A setting is missing, out of range, or the config file is unusable.
    Configuration(String),
    /// The reserved placeholder appeared in the corpus as a standalone token.
    ReservedToken {
        /// 1-based index of the offending token in the corpus.
        position: u64,
    },
    Io(io::Error),
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(info) => write!(f, "Configuration error: {info}"),
            Self::ReservedToken { position } => write!(
                f,
                "{RESERVED_TOKEN} vector found in corpus at token {position}. \
                 Please remove {RESERVED_TOKEN}s from your corpus \
                 (e.g. cat text8 | sed -e 's/<unk>/<raw_unk>/g' > text8.new)"
            ),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl error::Error for VocabError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Configuration(_) | Self::ReservedToken { .. } => None,
        }
    }
}

impl From<io::Error> for VocabError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
