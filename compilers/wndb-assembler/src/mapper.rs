use thiserror::Error;
use wndb_protocol::{
    AdjectiveCategory, AdjectivePosition, AdverbCategory, NounCategory, PartOfSpeech,
    RelationPointerType, VerbCategory,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("unknown part of speech code '{0}'")]
    UnknownPartOfSpeech(char),

    #[error("lexicographer file {number} does not belong to category {part_of_speech}")]
    UnknownLexFile {
        part_of_speech: PartOfSpeech,
        number: u8,
    },

    #[error("unknown pointer symbol '{symbol}' for category {part_of_speech}")]
    UnknownPointerSymbol {
        symbol: String,
        part_of_speech: PartOfSpeech,
    },

    #[error("unknown adjective marker '({0})'")]
    UnknownAdjectiveMarker(String),
}

/// Turns the raw codes of a tokenized record into typed values.
pub trait SynsetDataMapper {
    fn map_part_of_speech(&self, code: char) -> Result<PartOfSpeech, MappingError>;

    fn map_adjective_category(&self, lex_file: u8) -> Result<AdjectiveCategory, MappingError>;

    fn map_adverb_category(&self, lex_file: u8) -> Result<AdverbCategory, MappingError>;

    fn map_noun_category(&self, lex_file: u8) -> Result<NounCategory, MappingError>;

    fn map_verb_category(&self, lex_file: u8) -> Result<VerbCategory, MappingError>;

    fn map_relation_pointer_type(
        &self,
        symbol: &str,
        source: PartOfSpeech,
    ) -> Result<RelationPointerType, MappingError>;

    fn map_adjective_position(&self, marker: &str) -> Result<AdjectivePosition, MappingError>;
}

/// Code tables of the Princeton distribution format.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNetMapper;

impl SynsetDataMapper for WordNetMapper {
    fn map_part_of_speech(&self, code: char) -> Result<PartOfSpeech, MappingError> {
        PartOfSpeech::from_code(code).ok_or(MappingError::UnknownPartOfSpeech(code))
    }

    fn map_adjective_category(&self, lex_file: u8) -> Result<AdjectiveCategory, MappingError> {
        AdjectiveCategory::from_lex_file(lex_file).ok_or(MappingError::UnknownLexFile {
            part_of_speech: PartOfSpeech::Adjective,
            number: lex_file,
        })
    }

    fn map_adverb_category(&self, lex_file: u8) -> Result<AdverbCategory, MappingError> {
        AdverbCategory::from_lex_file(lex_file).ok_or(MappingError::UnknownLexFile {
            part_of_speech: PartOfSpeech::Adverb,
            number: lex_file,
        })
    }

    fn map_noun_category(&self, lex_file: u8) -> Result<NounCategory, MappingError> {
        NounCategory::from_lex_file(lex_file).ok_or(MappingError::UnknownLexFile {
            part_of_speech: PartOfSpeech::Noun,
            number: lex_file,
        })
    }

    fn map_verb_category(&self, lex_file: u8) -> Result<VerbCategory, MappingError> {
        VerbCategory::from_lex_file(lex_file).ok_or(MappingError::UnknownLexFile {
            part_of_speech: PartOfSpeech::Verb,
            number: lex_file,
        })
    }

    fn map_relation_pointer_type(
        &self,
        symbol: &str,
        source: PartOfSpeech,
    ) -> Result<RelationPointerType, MappingError> {
        RelationPointerType::from_symbol(symbol, source).ok_or_else(|| {
            MappingError::UnknownPointerSymbol {
                symbol: symbol.to_string(),
                part_of_speech: source,
            }
        })
    }

    fn map_adjective_position(&self, marker: &str) -> Result<AdjectivePosition, MappingError> {
        AdjectivePosition::from_marker(marker)
            .ok_or_else(|| MappingError::UnknownAdjectiveMarker(marker.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let mapper = WordNetMapper;

        assert_eq!(mapper.map_part_of_speech('v'), Ok(PartOfSpeech::Verb));
        assert_eq!(
            mapper.map_part_of_speech('q'),
            Err(MappingError::UnknownPartOfSpeech('q'))
        );
        assert_eq!(mapper.map_noun_category(3), Ok(NounCategory::Tops));
        assert_eq!(
            mapper.map_verb_category(3),
            Err(MappingError::UnknownLexFile {
                part_of_speech: PartOfSpeech::Verb,
                number: 3
            })
        );
        assert_eq!(
            mapper.map_relation_pointer_type("&", PartOfSpeech::Adjective),
            Ok(RelationPointerType::SimilarTo)
        );
        assert!(mapper.map_relation_pointer_type("&", PartOfSpeech::Noun).is_err());
        assert_eq!(
            mapper.map_adjective_position("ip"),
            Ok(AdjectivePosition::Postnominal)
        );
        assert!(mapper.map_adjective_position("x").is_err());
    }
}
