//! Raw record shapes produced by the line tokenizer. Codes are kept as they
//! appear in the files; mapping them to typed values is the assembler's job.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWord {
    pub lemma: String,
    pub lex_id: u8,
    /// Adjective position marker without parentheses (`a`, `p`, `ip`).
    pub marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPointer {
    pub symbol: String,
    pub synset_offset: u32,
    pub part_of_speech: char,
    /// 1-based, 0 = every word of the source synset.
    pub source_word: u8,
    /// 1-based, 0 = the whole target synset.
    pub target_word: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
    pub frame_number: u8,
    /// 1-based, 0 = every word of the synset.
    pub word_index: u8,
}

/// One line of a `data.*` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSynsetData {
    pub synset_offset: u32,
    pub lex_file_number: u8,
    pub part_of_speech: char,
    pub words: Vec<ParsedWord>,
    pub pointers: Vec<ParsedPointer>,
    pub frames: Vec<ParsedFrame>,
    pub gloss: String,
}

/// One line of an `index.*` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWordIndex {
    pub lemma: String,
    pub part_of_speech: char,
    pub pointer_symbols: Vec<String>,
    pub sense_count: u32,
    pub tagged_sense_count: u32,
    pub synset_offsets: Vec<u32>,
}
