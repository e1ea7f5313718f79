use thiserror::Error;
use wndb_protocol::{PartOfSpeech, SynsetOffset};

use crate::distributor::OutOfRangeError;
use crate::mapper::MappingError;

/// Why a single record could not be turned into a synonym set.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),

    #[error("there should not be any frames for part of speech {part_of_speech} ({count} given)")]
    InvalidFramesForCategory {
        part_of_speech: PartOfSpeech,
        count: usize,
    },

    /// Zero, or past the last frame template.
    #[error("{0} is not a verb frame number")]
    InvalidFrameNumber(u8),

    #[error("word '{lemma}' has a position marker, only adjectives take one ({part_of_speech})")]
    UnexpectedMarker {
        lemma: String,
        part_of_speech: PartOfSpeech,
    },
}

/// The one error [`crate::SynsetAssembler::assemble`] returns; the cause is kept as source.
#[derive(Debug, Error)]
#[error("create synset {offset} failed: {source}")]
pub struct SynsetCreateError {
    pub offset: SynsetOffset,
    #[source]
    pub source: AssembleError,
}

impl SynsetCreateError {
    pub fn cause(&self) -> &AssembleError {
        &self.source
    }
}
