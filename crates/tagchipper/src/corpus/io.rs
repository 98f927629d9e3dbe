//! # Tagged Corpus IO
//!
//! One sentence per line; tokens are whitespace separated ``word/TAG`` pairs,
//! split at the last ``/`` so words may themselves contain slashes:
//!
//! ```text
//! The/DT dog/NN barks/VBZ ./.
//! 1/2/CD cup/NN
//! ```
//!
//! Blank lines are skipped.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use compact_str::CompactString;

use crate::errors::{TCResult, TagchipperError};

/// A sentence of `(word, tag)` pairs.
pub type TaggedSentence = Vec<(CompactString, CompactString)>;

/// Parse one ``word/TAG`` token.
pub fn parse_tagged_token(token: &str) -> Option<(CompactString, CompactString)> {
    let (word, tag) = token.rsplit_once('/')?;
    if word.is_empty() || tag.is_empty() {
        return None;
    }
    Some((word.into(), tag.into()))
}

/// Read tagged sentences from a [`BufRead`] stream.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_tagged_sentences<R: BufRead>(reader: R) -> TCResult<Vec<TaggedSentence>> {
    let mut sentences = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let sentence = line
            .split_whitespace()
            .map(|token| {
                parse_tagged_token(token).ok_or_else(|| TagchipperError::Parse {
                    line: idx + 1,
                    message: format!("expected word/TAG, found {token:?}"),
                })
            })
            .collect::<TCResult<TaggedSentence>>()?;

        sentences.push(sentence);
    }
    Ok(sentences)
}

/// Load tagged sentences from a file.
///
/// # Arguments
/// * `path` - the path to the corpus file.
pub fn load_tagged_sentences_path<P: AsRef<Path>>(path: P) -> TCResult<Vec<TaggedSentence>> {
    let reader = BufReader::new(File::open(path)?);
    read_tagged_sentences(reader)
}

/// Write tagged sentences to a [`Write`] writer.
pub fn write_tagged_sentences<W: Write>(
    sentences: &[TaggedSentence],
    writer: &mut W,
) -> TCResult<()> {
    for sentence in sentences {
        let mut first = true;
        for (word, tag) in sentence {
            if !first {
                write!(writer, " ")?;
            }
            write!(writer, "{word}/{tag}")?;
            first = false;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Save tagged sentences to a file.
///
/// # Arguments
/// * `sentences` - the sentences to save.
/// * `path` - the path to save the corpus to.
pub fn save_tagged_sentences_path<P: AsRef<Path>>(
    sentences: &[TaggedSentence],
    path: P,
) -> TCResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_tagged_sentences(sentences, &mut writer)
}
