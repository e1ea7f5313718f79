//! Line tokenizer for the data and index files of the lexical database.

pub mod data;
pub mod error;
mod fields;
pub mod index;
pub mod record;

pub use data::parse_synset_line;
pub use error::ParseError;
pub use index::parse_index_line;
pub use record::{ParsedFrame, ParsedPointer, ParsedSynsetData, ParsedWord, ParsedWordIndex};
