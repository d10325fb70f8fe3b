//! Forward-only reader over reaction text files
//!
//! The [LineReader] knows nothing about reactions. It hands out one line at a
//! time, with typed helpers that fail with the line number and content
//! attached so that errors can be traced back to the input.
//!
//! Higher level parsers are split by purpose:
//!
//! - [rate] - one parser per rate data variant
//! - [fission] - fission blocks with (Z, A) species and branching factors
//! - [general] - general blocks with named species

pub mod fission;
pub mod general;
pub mod rate;

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use log::{trace, warn};
use nom::IResult;

use crate::error::{Error, Result};
use crate::parsers::{count, float, is_blank, uint32};
use nrates_utils::StringExt;

/// Cursor over the lines of one input source
///
/// Only the most recent line is held. There is no look-ahead and no way to go
/// back, so every read consumes input.
///
/// ```rust
/// # use nrates_reaction::LineReader;
/// let mut reader = LineReader::from_text("2\n1.5e3\n92 235\n");
///
/// assert_eq!(reader.next_int().unwrap(), 2);
/// assert_eq!(reader.next_float().unwrap(), 1500.0);
/// assert_eq!(reader.next_tokens().unwrap(), vec!["92", "235"]);
/// assert!(reader.next_line().is_err());
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    lines: Lines<R>,
    cached_line: String,
    line_number: usize,
}

impl<'a> LineReader<&'a [u8]> {
    /// Read from text already in memory
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl LineReader<BufReader<File>> {
    /// Read from the file at `path`
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Create a new reader over any buffered input
    pub fn new(inner: R) -> Self {
        Self {
            lines: inner.lines(),
            cached_line: String::new(),
            line_number: 0,
        }
    }

    /// Number of the most recently read line, starting at 1
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Advances to the next line, saving it to the cache and returning a ref
    ///
    /// Fails with [Error::EndOfInput] if there are no lines left.
    pub fn next_line(&mut self) -> Result<&str> {
        if !self.advance()? {
            return Err(Error::EndOfInput {
                line: self.line_number,
            });
        }
        Ok(self.cached_line.as_str())
    }

    /// Read a reaction type tag
    ///
    /// Returns `None` for a blank line or the end of input, which both mark
    /// the normal end of a reaction stream.
    pub fn next_tag(&mut self) -> Result<Option<String>> {
        Ok(self.next_content()?.map(|line| line.trim().to_string()))
    }

    /// Read a line holding a single unsigned integer
    pub fn next_int(&mut self) -> Result<usize> {
        self.next_line()?;
        self.parse_line(count)
    }

    /// Read a line holding a single float
    pub fn next_float(&mut self) -> Result<f64> {
        self.next_line()?;
        self.parse_line(float)
    }

    /// Read a line and split it on whitespace
    pub fn next_tokens(&mut self) -> Result<Vec<String>> {
        self.next_fields(None)
    }

    /// Read a line and split it on a delimiter, or whitespace if `None`
    pub fn next_fields(&mut self, delimiter: Option<&str>) -> Result<Vec<String>> {
        let line = self.next_line()?;
        Ok(line
            .split_fields(delimiter)
            .into_iter()
            .map(String::from)
            .collect())
    }

    /// Advance to the next line, returning false at the end of input
    fn advance(&mut self) -> Result<bool> {
        match self.lines.next() {
            Some(line) => {
                self.cached_line = line?;
                self.line_number += 1;
                trace!("{:>6} | {}", self.line_number, self.cached_line);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Read the next line if it has content, or `None` if blank or at the end
    pub(crate) fn next_content(&mut self) -> Result<Option<&str>> {
        if self.advance()? && !is_blank(&self.cached_line) {
            Ok(Some(self.cached_line.as_str()))
        } else {
            Ok(None)
        }
    }

    /// Consume a separator line, tolerating the end of input
    pub(crate) fn skip_separator(&mut self) -> Result<()> {
        if self.advance()? && !is_blank(&self.cached_line) {
            warn!(
                "Line {} expected to be a separator, ignoring {:?}",
                self.line_number, self.cached_line
            );
        }
        Ok(())
    }

    /// Parse a float field taken from the current line
    pub(crate) fn float_field(&self, field: &str) -> Result<f64> {
        self.parse_field(float, field)
    }

    /// Parse an unsigned integer field taken from the current line
    pub(crate) fn uint_field(&self, field: &str) -> Result<u32> {
        self.parse_field(uint32, field)
    }

    /// Error for the current line
    pub(crate) fn format_error(&self) -> Error {
        Error::FormatError {
            line: self.line_number,
            content: self.cached_line.clone(),
        }
    }

    /// Error for the wrong number of fields on the current line
    pub(crate) fn unexpected_length<S: Into<String>>(&self, expected: S, found: usize) -> Error {
        Error::UnexpectedLength {
            line: self.line_number,
            expected: expected.into(),
            found,
        }
    }

    fn parse_line<T>(&self, parser: fn(&str) -> IResult<&str, T>) -> Result<T> {
        parser(&self.cached_line)
            .map(|(_, value)| value)
            .map_err(|_| self.format_error())
    }

    fn parse_field<T>(&self, parser: fn(&str) -> IResult<&str, T>, field: &str) -> Result<T> {
        parser(field)
            .map(|(_, value)| value)
            .map_err(|_| Error::FormatError {
                line: self.line_number,
                content: field.to_string(),
            })
    }
}
