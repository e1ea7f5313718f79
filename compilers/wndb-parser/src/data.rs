use nom::{
    character::complete::{char, space0, space1},
    combinator::opt,
    multi::count,
    sequence::{preceded, tuple},
    Finish, IResult,
};

use crate::error::ParseError;
use crate::fields::{code, decimal, field, hex_pair, hex_u8};
use crate::record::{ParsedFrame, ParsedPointer, ParsedSynsetData, ParsedWord};

/// Tokenizes one line of a `data.*` file.
pub fn parse_synset_line(line: &str) -> Result<ParsedSynsetData, ParseError> {
    synset_record(line)
        .finish()
        .map(|(_, record)| record)
        .map_err(|e| ParseError::malformed(line, e))
}

fn synset_record(input: &str) -> IResult<&str, ParsedSynsetData> {
    let (input, synset_offset) = decimal::<u32>(input)?;
    let (input, lex_file_number) = preceded(space1, decimal::<u8>)(input)?;
    let (input, part_of_speech) = preceded(space1, code)(input)?;
    let (input, word_count) = preceded(space1, hex_u8)(input)?;
    let (input, words) = count(word(part_of_speech), usize::from(word_count))(input)?;
    let (input, pointer_count) = preceded(space1, decimal::<usize>)(input)?;
    let (input, pointers) = count(pointer, pointer_count)(input)?;

    // Only verb records carry a frame block; its absence is not an error here.
    let (input, frames) = opt(preceded(space1, frames))(input)?;
    let (gloss, _) = preceded(space0, char('|'))(input)?;

    Ok((
        "",
        ParsedSynsetData {
            synset_offset,
            lex_file_number,
            part_of_speech,
            words,
            pointers,
            frames: frames.unwrap_or_default(),
            gloss: gloss.trim().to_string(),
        },
    ))
}

fn word(part_of_speech: char) -> impl FnMut(&str) -> IResult<&str, ParsedWord> {
    move |input| {
        let (input, (raw, lex_id)) =
            tuple((preceded(space1, field), preceded(space1, hex_u8)))(input)?;

        let (lemma, marker) = match part_of_speech {
            'a' | 's' => split_marker(raw),
            _ => (raw, None),
        };

        Ok((
            input,
            ParsedWord {
                lemma: lemma.to_string(),
                lex_id,
                marker: marker.map(str::to_string),
            },
        ))
    }
}

/// `long(a)` -> (`long`, `a`)
fn split_marker(raw: &str) -> (&str, Option<&str>) {
    if let Some(stripped) = raw.strip_suffix(')') {
        if let Some(open) = stripped.rfind('(') {
            if open > 0 {
                return (&stripped[..open], Some(&stripped[open + 1..]));
            }
        }
    }
    (raw, None)
}

fn pointer(input: &str) -> IResult<&str, ParsedPointer> {
    let (input, (symbol, synset_offset, part_of_speech, source_word, target_word)) = tuple((
        preceded(space1, field),
        preceded(space1, decimal::<u32>),
        preceded(space1, code),
        preceded(space1, hex_pair),
        hex_pair,
    ))(input)?;

    Ok((
        input,
        ParsedPointer {
            symbol: symbol.to_string(),
            synset_offset,
            part_of_speech,
            source_word,
            target_word,
        },
    ))
}

fn frames(input: &str) -> IResult<&str, Vec<ParsedFrame>> {
    let (input, frame_count) = decimal::<usize>(input)?;
    count(frame, frame_count)(input)
}

fn frame(input: &str) -> IResult<&str, ParsedFrame> {
    let (input, (_, frame_number, word_index)) = tuple((
        preceded(space1, char('+')),
        preceded(space1, decimal::<u8>),
        preceded(space1, hex_u8),
    ))(input)?;

    Ok((
        input,
        ParsedFrame {
            frame_number,
            word_index,
        },
    ))
}
