use tracing::trace;
use wndb_parser::{ParsedFrame, ParsedPointer, ParsedSynsetData, ParsedWord};
use wndb_protocol::{
    Adjective, AdjectiveSynset, Adverb, AdverbSynset, FrameNumber, LexId, Noun, NounSynset,
    PartOfSpeech, RelationPointer, Relations, Synset, SynsetCategory, SynsetOffset, Verb,
    VerbSynset, Word,
};

use crate::distributor::{PositionalDistributor, WordSlot};
use crate::error::{AssembleError, SynsetCreateError};
use crate::mapper::{SynsetDataMapper, WordNetMapper};

/// Builds typed synonym sets out of tokenized `data.*` records.
#[derive(Debug, Clone, Default)]
pub struct SynsetAssembler<M = WordNetMapper> {
    mapper: M,
}

impl SynsetAssembler<WordNetMapper> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: SynsetDataMapper> SynsetAssembler<M> {
    pub fn with_mapper(mapper: M) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn assemble(&self, record: &ParsedSynsetData) -> Result<Synset, SynsetCreateError> {
        let offset = SynsetOffset::new(record.synset_offset);
        self.try_assemble(offset, record)
            .map_err(|source| SynsetCreateError { offset, source })
    }

    fn try_assemble(
        &self,
        offset: SynsetOffset,
        record: &ParsedSynsetData,
    ) -> Result<Synset, AssembleError> {
        let part_of_speech = self.mapper.map_part_of_speech(record.part_of_speech)?;

        // Checked before anything else is built
        if part_of_speech != PartOfSpeech::Verb && !record.frames.is_empty() {
            return Err(AssembleError::InvalidFramesForCategory {
                part_of_speech,
                count: record.frames.len(),
            });
        }

        let category = self.map_category(part_of_speech, record.lex_file_number)?;
        let word_count = record.words.len();
        let pointers = self.create_pointers(part_of_speech, &record.pointers, word_count)?;
        let frames = create_frames(&record.frames, word_count)?;

        let words: Vec<Word> = record
            .words
            .iter()
            .zip(pointers.into_slots())
            .map(|(data, pointers)| {
                Word::new(data.lemma.as_str(), LexId::new(data.lex_id), Relations::new(pointers))
            })
            .collect();

        let synset = match category {
            SynsetCategory::Adjective(category) => {
                let adjectives = record
                    .words
                    .iter()
                    .zip(words)
                    .map(|(data, word)| -> Result<Adjective, AssembleError> {
                        let position = data
                            .marker
                            .as_deref()
                            .map(|marker| self.mapper.map_adjective_position(marker))
                            .transpose()?;
                        Ok(Adjective { word, position })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Synset::Adjective(AdjectiveSynset::new(offset, record.gloss.as_str(), adjectives, category))
            }
            SynsetCategory::Adverb(category) => {
                reject_markers(part_of_speech, &record.words)?;
                let adverbs = words.into_iter().map(|word| Adverb { word }).collect();
                Synset::Adverb(AdverbSynset::new(offset, record.gloss.as_str(), adverbs, category))
            }
            SynsetCategory::Noun(category) => {
                reject_markers(part_of_speech, &record.words)?;
                let nouns = words.into_iter().map(|word| Noun { word }).collect();
                Synset::Noun(NounSynset::new(offset, record.gloss.as_str(), nouns, category))
            }
            SynsetCategory::Verb(category) => {
                reject_markers(part_of_speech, &record.words)?;
                let verbs = words
                    .into_iter()
                    .zip(frames.into_slots())
                    .map(|(word, frames)| Verb { word, frames })
                    .collect();
                Synset::Verb(VerbSynset::new(offset, record.gloss.as_str(), verbs, category))
            }
        };

        trace!(%offset, %part_of_speech, words = word_count, "assembled synset");
        Ok(synset)
    }

    fn map_category(
        &self,
        part_of_speech: PartOfSpeech,
        lex_file_number: u8,
    ) -> Result<SynsetCategory, AssembleError> {
        let category = match part_of_speech {
            PartOfSpeech::Adjective => {
                SynsetCategory::Adjective(self.mapper.map_adjective_category(lex_file_number)?)
            }
            PartOfSpeech::Adverb => {
                SynsetCategory::Adverb(self.mapper.map_adverb_category(lex_file_number)?)
            }
            PartOfSpeech::Noun => {
                SynsetCategory::Noun(self.mapper.map_noun_category(lex_file_number)?)
            }
            PartOfSpeech::Verb => {
                SynsetCategory::Verb(self.mapper.map_verb_category(lex_file_number)?)
            }
        };
        Ok(category)
    }

    fn create_pointers(
        &self,
        source: PartOfSpeech,
        pointers_data: &[ParsedPointer],
        word_count: usize,
    ) -> Result<PositionalDistributor<RelationPointer>, AssembleError> {
        let mut pointers = PositionalDistributor::new(word_count);

        for data in pointers_data {
            let pointer_type = self.mapper.map_relation_pointer_type(&data.symbol, source)?;
            let target_part_of_speech = self.mapper.map_part_of_speech(data.part_of_speech)?;
            let target_word_number = match data.target_word {
                0 => None,
                n => Some(n),
            };

            let pointer = RelationPointer::new(
                pointer_type,
                target_part_of_speech,
                SynsetOffset::new(data.synset_offset),
                target_word_number,
            );
            pointers.add(WordSlot::from_word_number(data.source_word), pointer)?;
        }

        Ok(pointers)
    }
}

fn create_frames(
    frames_data: &[ParsedFrame],
    word_count: usize,
) -> Result<PositionalDistributor<FrameNumber>, AssembleError> {
    let mut frames = PositionalDistributor::new(word_count);

    for data in frames_data {
        let frame = FrameNumber::new(data.frame_number);
        // Only the numbered frames 1..=35 exist
        if frame.template().is_none() {
            return Err(AssembleError::InvalidFrameNumber(data.frame_number));
        }
        frames.add(WordSlot::from_word_number(data.word_index), frame)?;
    }

    Ok(frames)
}

fn reject_markers(part_of_speech: PartOfSpeech, words: &[ParsedWord]) -> Result<(), AssembleError> {
    match words.iter().find(|word| word.marker.is_some()) {
        Some(word) => Err(AssembleError::UnexpectedMarker {
            lemma: word.lemma.clone(),
            part_of_speech,
        }),
        None => Ok(()),
    }
}
