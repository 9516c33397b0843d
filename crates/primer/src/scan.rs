//! Console scanner with three token-reading styles and a delimiter read.
//!
//! All four share one buffered reader, so whatever a read leaves behind is
//! what the next read sees. A token is a run of non-whitespace bytes; the
//! whitespace byte that ends a token is consumed together with it.
//!
//! | Method | Stops at | Leftovers |
//! |--------|----------|-----------|
//! | [`Scanner::scan`] | all targets filled, newlines count as spaces | rest of the line |
//! | [`Scanner::scan_line`] | end of the current line | extra tokens stay unread |
//! | [`Scanner::scan_fmt`] | end of the format | the rest of the line; a mismatching token is consumed |
//! | [`Scanner::read_string`] | the delimiter (included in the result) | nothing from that line |
//!
//! Targets that were not reached keep the value they had before the call.

use std::io::{self, BufRead};

use crate::error::ScanError;

/// A value a scanner can write a token into.
pub trait Scannable {
    /// Whether `%<verb>` may fill this target.
    fn accepts(&self, verb: char) -> bool;

    /// Parses `token` into `self`. On failure `self` is left unchanged.
    fn assign(&mut self, token: &str) -> Result<(), ScanError>;
}

impl Scannable for String {
    fn accepts(&self, verb: char) -> bool {
        matches!(verb, 's' | 'v')
    }

    fn assign(&mut self, token: &str) -> Result<(), ScanError> {
        token.clone_into(self);
        Ok(())
    }
}

impl Scannable for i64 {
    fn accepts(&self, verb: char) -> bool {
        matches!(verb, 'd' | 'v')
    }

    fn assign(&mut self, token: &str) -> Result<(), ScanError> {
        *self = parse_token(token, "integer")?;
        Ok(())
    }
}

impl Scannable for f64 {
    fn accepts(&self, verb: char) -> bool {
        matches!(verb, 'e' | 'f' | 'g' | 'v')
    }

    fn assign(&mut self, token: &str) -> Result<(), ScanError> {
        *self = parse_token(token, "float")?;
        Ok(())
    }
}

impl Scannable for bool {
    fn accepts(&self, verb: char) -> bool {
        matches!(verb, 't' | 'v')
    }

    fn assign(&mut self, token: &str) -> Result<(), ScanError> {
        *self = parse_token(token, "boolean")?;
        Ok(())
    }
}

fn parse_token<T: std::str::FromStr>(token: &str, kind: &'static str) -> Result<T, ScanError> {
    token.parse().map_err(|_| ScanError::InvalidToken {
        kind,
        token: token.to_string(),
    })
}

/// How a token ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    /// Any whitespace byte other than a newline, consumed.
    Blank,
    /// A newline, consumed.
    Newline,
    /// A byte the token could not contain, left unread.
    Other,
    Eof,
}

/// Whitespace other than the newline: space, tab, vertical tab, form feed,
/// carriage return.
fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\x0B' | b'\x0C' | b'\r')
}

fn is_space(byte: u8) -> bool {
    byte == b'\n' || is_blank(byte)
}

pub struct Scanner<R> {
    reader: R,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads whitespace-separated tokens into `targets`, crossing line
    /// boundaries until every target is filled.
    pub fn scan(&mut self, targets: &mut [&mut dyn Scannable]) -> Result<usize, ScanError> {
        for target in targets.iter_mut() {
            if self.skip_blanks(true)?.is_none() {
                return Err(ScanError::UnexpectedEof);
            }
            let (token, _) = self.read_word()?;
            target.assign(&token)?;
        }
        Ok(targets.len())
    }

    /// Reads tokens from the current line only.
    ///
    /// When the line holds more tokens than there are targets, the surplus
    /// stays in the reader and [`ScanError::ExpectedNewline`] is returned
    /// with every target already filled.
    pub fn scan_line(&mut self, targets: &mut [&mut dyn Scannable]) -> Result<usize, ScanError> {
        let count = targets.len();
        let mut terminator = Terminator::Blank;

        for target in targets.iter_mut() {
            match terminator {
                Terminator::Newline => return Err(ScanError::UnexpectedNewline),
                Terminator::Eof => return Err(ScanError::UnexpectedEof),
                Terminator::Blank | Terminator::Other => {}
            }
            match self.skip_blanks(false)? {
                None => return Err(ScanError::UnexpectedEof),
                Some(b'\n') => {
                    self.bump();
                    return Err(ScanError::UnexpectedNewline);
                }
                Some(_) => {}
            }
            let (token, end) = self.read_word()?;
            target.assign(&token)?;
            terminator = end;
        }

        if matches!(terminator, Terminator::Newline | Terminator::Eof) {
            return Ok(count);
        }
        match self.skip_blanks(false)? {
            None => Ok(count),
            Some(b'\n') => {
                self.bump();
                Ok(count)
            }
            Some(_) => {
                tracing::debug!("input left on line after last target");
                Err(ScanError::ExpectedNewline)
            }
        }
    }

    /// Reads tokens as directed by `format`.
    ///
    /// Verbs: `%d` integer, `%s` word, `%f`/`%e`/`%g` float, `%t` boolean,
    /// `%v` any target, `%%` a literal percent sign. A space or tab in the
    /// format matches any run of spaces and tabs; a newline must match a
    /// newline; anything else must match byte for byte.
    pub fn scan_fmt(
        &mut self,
        format: &str,
        targets: &mut [&mut dyn Scannable],
    ) -> Result<usize, ScanError> {
        let mut targets = targets.iter_mut();
        let mut filled = 0;
        // Set when the last token swallowed the end of its line.
        let mut at_line_start = false;
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '%' => {
                    let verb = chars.next().ok_or(ScanError::BadVerb('%'))?;
                    if at_line_start {
                        return Err(ScanError::UnexpectedNewline);
                    }
                    if verb == '%' {
                        self.skip_blanks(false)?;
                        self.expect_literal('%')?;
                        continue;
                    }

                    let target = targets.next().ok_or(ScanError::TooFewTargets)?;
                    if !target.accepts(verb) {
                        return Err(ScanError::BadVerb(verb));
                    }
                    match self.skip_blanks(false)? {
                        None => return Err(ScanError::UnexpectedEof),
                        Some(b'\n') => return Err(ScanError::UnexpectedNewline),
                        Some(_) => {}
                    }

                    let (token, terminator) = self.read_verb(verb)?;
                    if let Err(err) = target.assign(&token) {
                        tracing::debug!(%err, verb = %verb, "format mismatch");
                        return Err(err);
                    }
                    filled += 1;
                    at_line_start = terminator == Terminator::Newline;
                }
                ' ' | '\t' => {
                    while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {}
                    if at_line_start {
                        return Err(ScanError::UnexpectedNewline);
                    }
                    self.skip_blanks(false)?;
                }
                '\n' => {
                    if at_line_start {
                        at_line_start = false;
                        continue;
                    }
                    match self.skip_blanks(false)? {
                        Some(b'\n') => self.bump(),
                        None => {}
                        Some(found) => {
                            return Err(ScanError::Mismatch {
                                expected: '\n',
                                found: char::from(found),
                            });
                        }
                    }
                }
                literal => {
                    if at_line_start {
                        return Err(ScanError::Mismatch {
                            expected: literal,
                            found: '\n',
                        });
                    }
                    self.expect_literal(literal)?;
                }
            }
        }

        Ok(filled)
    }

    /// Reads up to and including `delim`. The delimiter is missing from the
    /// result only when the input ends first.
    pub fn read_string(&mut self, delim: u8) -> Result<String, ScanError> {
        let mut bytes = Vec::new();
        if self.reader.read_until(delim, &mut bytes)? == 0 {
            return Err(ScanError::UnexpectedEof);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn peek(&mut self) -> Result<Option<u8>, ScanError> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn bump(&mut self) {
        self.reader.consume(1);
    }

    /// Skips blanks (and newlines when `newline_is_space`), then
    /// peeks at the next byte.
    fn skip_blanks(&mut self, newline_is_space: bool) -> Result<Option<u8>, ScanError> {
        while let Some(byte) = self.peek()? {
            if is_blank(byte) || (newline_is_space && byte == b'\n') {
                self.bump();
            } else {
                return Ok(Some(byte));
            }
        }
        Ok(None)
    }

    fn read_while(
        &mut self,
        mut accept: impl FnMut(usize, u8) -> bool,
    ) -> Result<(String, Terminator), ScanError> {
        let mut bytes = Vec::new();
        let terminator = loop {
            match self.peek()? {
                None => break Terminator::Eof,
                Some(byte) if accept(bytes.len(), byte) => {
                    bytes.push(byte);
                    self.bump();
                }
                Some(b'\n') => {
                    self.bump();
                    break Terminator::Newline;
                }
                Some(byte) if is_blank(byte) => {
                    self.bump();
                    break Terminator::Blank;
                }
                Some(_) => break Terminator::Other,
            }
        };

        let token = String::from_utf8_lossy(&bytes).into_owned();
        tracing::trace!(%token, ?terminator, "token read");
        Ok((token, terminator))
    }

    fn read_word(&mut self) -> Result<(String, Terminator), ScanError> {
        self.read_while(|_, byte| !is_space(byte))
    }

    fn read_verb(&mut self, verb: char) -> Result<(String, Terminator), ScanError> {
        let (mut token, terminator) = match verb {
            'd' => self.read_while(|i, byte| {
                byte.is_ascii_digit() || (i == 0 && matches!(byte, b'+' | b'-'))
            })?,
            'e' | 'f' | 'g' => self.read_while(|_, byte| {
                byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E')
            })?,
            _ => self.read_word()?,
        };

        // Nothing numeric was read: swallow the offending word so the next
        // read starts after it.
        if terminator == Terminator::Other && !token.bytes().any(|b| b.is_ascii_digit()) {
            let (rest, terminator) = self.read_word()?;
            token.push_str(&rest);
            return Ok((token, terminator));
        }
        Ok((token, terminator))
    }

    fn expect_literal(&mut self, expected: char) -> Result<(), ScanError> {
        let mut buf = [0_u8; 4];
        for &byte in expected.encode_utf8(&mut buf).as_bytes() {
            match self.peek()? {
                Some(found) if found == byte => self.bump(),
                Some(found) => {
                    if !is_space(found) {
                        self.read_word()?;
                    }
                    return Err(ScanError::Mismatch {
                        expected,
                        found: char::from(found),
                    });
                }
                None => return Err(ScanError::UnexpectedEof),
            }
        }
        Ok(())
    }
}
