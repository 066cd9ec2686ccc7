// src/core/tokenizer.rs
use std::io::{self, BufRead};

mod clip;

pub use clip::clip;

/// One step of tokenizer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    Word(Vec<u8>),
    /// A newline: the end of a document.
    Boundary,
    /// End of stream with no word pending.
    End,
}

/// Splits a byte stream into words separated by spaces, tabs and newlines.
///
/// Carriage returns are dropped wherever they appear. A newline that ends a word
/// is left in the stream, so the word and the document boundary after it come
/// back from separate calls. Words longer than `max_token_bytes` are cut with
/// [`clip`].
pub struct Tokenizer<R> {
    reader: R,
    max_token_bytes: usize,
    documents: u64,
}

impl<R: BufRead> Tokenizer<R> {
    #[must_use]
    pub const fn new(reader: R, max_token_bytes: usize) -> Self {
        Self {
            reader,
            max_token_bytes,
            documents: 0,
        }
    }

    /// Number of document boundaries returned so far.
    #[must_use]
    pub const fn documents(&self) -> u64 {
        self.documents
    }

    /// Reads the next word or boundary.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying reader.
    pub fn next_lexeme(&mut self) -> io::Result<Lexeme> {
        let mut word: Vec<u8> = Vec::new();
        let mut started = false;

        loop {
            let buf = self.reader.fill_buf()?;
            let Some(&first) = buf.first() else {
                break;
            };

            if !started {
                match first {
                    b'\r' | b' ' | b'\t' => {
                        self.reader.consume(1);
                        continue;
                    }
                    b'\n' => {
                        self.reader.consume(1);
                        self.documents = self.documents.saturating_add(1);
                        return Ok(Lexeme::Boundary);
                    }
                    _ => started = true,
                }
            }

            let end = buf
                .iter()
                .position(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
                .unwrap_or(buf.len());
            let (run, rest) = buf.split_at(end);
            let room = self.max_token_bytes.saturating_sub(word.len());
            word.extend_from_slice(run.get(..room).unwrap_or(run));
            let stop = rest.first().copied();

            match stop {
                // word continues past this buffer
                None => self.reader.consume(end),
                Some(b'\r') => self.reader.consume(end.saturating_add(1)),
                Some(b'\n') => {
                    self.reader.consume(end);
                    break;
                }
                Some(_) => {
                    self.reader.consume(end.saturating_add(1));
                    break;
                }
            }
        }

        if word.is_empty() {
            return Ok(Lexeme::End);
        }
        let keep = clip(&word, self.max_token_bytes).len();
        word.truncate(keep);
        Ok(Lexeme::Word(word))
    }
}

/// Yields words only, skipping document boundaries.
impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_lexeme() {
                Ok(Lexeme::Word(word)) => return Some(Ok(word)),
                Ok(Lexeme::Boundary) => {}
                Ok(Lexeme::End) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
