#![no_std] // The data model stays usable from embedded/WASM consumers

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod category;
pub mod ids;
pub mod model;
pub mod relation;

// Re-export core types for convenience
pub use category::*;
pub use ids::{FrameNumber, LexId, SynsetOffset};
pub use model::*;
pub use relation::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    fn entity() -> Synset {
        let hyponym = RelationPointer::new(
            RelationPointerType::Hyponym,
            PartOfSpeech::Noun,
            SynsetOffset::new(1930),
            None,
        );
        Synset::Noun(NounSynset::new(
            SynsetOffset::new(30),
            "that which is perceived or known or inferred to have its own distinct existence",
            vec![Noun {
                word: Word::new("entity", LexId::new(0), Relations::new(vec![hyponym])),
            }],
            NounCategory::Tops,
        ))
    }

    #[test]
    fn test_part_of_speech_codes() {
        assert_eq!(PartOfSpeech::from_code('n'), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_code('s'), Some(PartOfSpeech::Adjective));
        assert_eq!(PartOfSpeech::from_code('r'), Some(PartOfSpeech::Adverb));
        assert_eq!(PartOfSpeech::from_code('x'), None);
        assert_eq!(PartOfSpeech::from_file_suffix("adv"), Some(PartOfSpeech::Adverb));
    }

    #[test]
    fn test_lex_file_tables() {
        assert_eq!(AdjectiveCategory::from_lex_file(44), Some(AdjectiveCategory::Participles));
        assert_eq!(AdverbCategory::from_lex_file(2), Some(AdverbCategory::All));
        assert_eq!(NounCategory::from_lex_file(5), Some(NounCategory::Animal));
        assert_eq!(NounCategory::Animal.file_name(), "noun.animal");
        assert_eq!(VerbCategory::from_lex_file(43), Some(VerbCategory::Weather));
        assert_eq!(VerbCategory::Weather.lex_file_number(), 43);

        // Numbers belonging to another category are rejected
        assert_eq!(NounCategory::from_lex_file(29), None);
        assert_eq!(VerbCategory::from_lex_file(3), None);
        assert_eq!(AdjectiveCategory::from_lex_file(2), None);
    }

    #[test]
    fn test_pointer_symbols_depend_on_category() {
        assert_eq!(
            RelationPointerType::from_symbol("\\", PartOfSpeech::Adjective),
            Some(RelationPointerType::Pertainym)
        );
        assert_eq!(
            RelationPointerType::from_symbol("\\", PartOfSpeech::Adverb),
            Some(RelationPointerType::DerivedFromAdjective)
        );
        assert_eq!(
            RelationPointerType::from_symbol("!", PartOfSpeech::Verb),
            Some(RelationPointerType::Antonym)
        );
        assert_eq!(RelationPointerType::from_symbol("@i", PartOfSpeech::Verb), None);
        assert_eq!(RelationPointerType::from_symbol("?", PartOfSpeech::Noun), None);
        assert_eq!(RelationPointerType::InstanceHyponym.symbol(), "~i");
    }

    #[test]
    fn test_relation_set_matches_discriminants() {
        assert_eq!(RelationPointerType::Antonym.flag(), RelationSet::ANTONYM);
        assert_eq!(RelationPointerType::Hyponym.flag(), RelationSet::HYPONYM);
        assert_eq!(
            RelationPointerType::DerivedFromAdjective.flag(),
            RelationSet::DERIVED_FROM_ADJECTIVE
        );
        assert_eq!(entity().relation_kinds(), RelationSet::HYPONYM);
    }

    #[test]
    fn test_frame_templates() {
        assert_eq!(FrameNumber::new(1).template(), Some("Something ----s"));
        assert_eq!(FrameNumber::new(35).template(), Some("Something ----s INFINITIVE"));
        assert_eq!(FrameNumber::new(0).template(), None);
        assert_eq!(FrameNumber::new(36).template(), None);
    }

    #[test]
    fn test_pointer_target_word() {
        let lexical = RelationPointer::new(
            RelationPointerType::Antonym,
            PartOfSpeech::Adjective,
            SynsetOffset::new(2098),
            Some(2),
        );
        assert!(lexical.is_lexical());
        assert_eq!(lexical.target_word_index(), Some(1));

        let semantic = RelationPointer { target_word_number: None, ..lexical };
        assert_eq!(semantic.target_word_index(), None);
    }

    #[test]
    fn test_synset_serialization() {
        // Simulate writing a snapshot to disk and loading it back
        let original = entity();
        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Synset");
        let deserialized: Synset = from_bytes(&bytes).expect("Failed to deserialize Synset");

        assert_eq!(original, deserialized);
        assert_eq!(deserialized.offset().get(), 30);
        assert_eq!(deserialized.word(0).map(|w| w.lemma.as_str()), Some("entity"));
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<SynsetOffset>(), 4);
        assert_eq!(core::mem::size_of::<LexId>(), 1);
    }
}
