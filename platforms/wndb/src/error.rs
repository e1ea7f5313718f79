use std::io;

use thiserror::Error;
use wndb_assembler::{MappingError, SynsetCreateError};
use wndb_parser::ParseError;
use wndb_protocol::{PartOfSpeech, SynsetOffset};
use wndb_store::StoreError;

#[derive(Debug, Error)]
pub enum WordNetError {
    /// Data-integrity failures of a line store. Store I/O failures are
    /// reported as [`WordNetError::Io`].
    #[error(transparent)]
    Store(StoreError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Synset(#[from] SynsetCreateError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("part of speech {0} is not opened")]
    MissingCategory(PartOfSpeech),

    #[error("synset {offset} in the {expected} file is a {found} record")]
    CategoryMismatch {
        offset: SynsetOffset,
        expected: PartOfSpeech,
        found: PartOfSpeech,
    },

    #[error("index entry '{lemma}' in the {expected} file is a {found} entry")]
    IndexCategoryMismatch {
        lemma: String,
        expected: PartOfSpeech,
        found: PartOfSpeech,
    },

    #[error("synset {offset} has no word number {number}")]
    UnknownTargetWord { offset: SynsetOffset, number: u8 },
}

impl From<StoreError> for WordNetError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(io) => WordNetError::Io(io),
            other => WordNetError::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, WordNetError>;
