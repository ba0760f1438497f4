//! This module defines the `Reader` struct.
//!
//! See the [`Reader`](struct.Reader.html) for docs.

use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::error::ConvertError;
use super::record::{Edge, FromTokens, TokenError};
use super::stream::Tokens;

/// Line-aware reader of the edge-list format.
///
/// The first line holds the declared number of edges, every following
/// non-empty line holds a `source target` pair:
///
/// ```text
/// 2
/// A B
/// B C
/// ```
///
/// Tokens are separated by any ASCII whitespace. Empty lines between
/// edges are skipped, tokens after the second one on an edge line are ignored.
/// Every failure carries the line number and column, see [`LineError`](struct.LineError.html).
///
/// # Examples
///
/// ```
/// # use edgelist2dot::{Edge, Reader};
/// let mut r = Reader::new(&b"2\nA B\n\nB C extra\n"[..]);
/// assert_eq!(r.declared_count().unwrap(), 2);
/// assert_eq!(r.next_edge().unwrap(), Some(Edge::new("A", "B")));
/// assert_eq!(r.next_edge().unwrap(), Some(Edge::new("B", "C")));
/// assert_eq!(r.line_number(), 4);
/// assert_eq!(r.next_edge().unwrap(), None);
/// ```
pub struct Reader<B: io::BufRead> {
    buf: B,
    row: u64,
    line: String,
    col: usize,
}

/// # Constructors
impl<B: io::BufRead> Reader<B> {
    /// Wraps a BufRead.
    ///
    /// Note that you don't have to pass an owned buffered reader, it could be also `&mut`.
    pub fn new(buf: B) -> Reader<B> {
        Reader {
            buf,
            row: 0,
            line: String::new(),
            col: 0,
        }
    }
}

impl Reader<io::BufReader<fs::File>> {
    /// Opens a file and wraps in Reader
    ///
    /// Shortcut for opening a file, wrapping it in a `BufReader` and then in a `Reader`.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Reader<io::BufReader<fs::File>>> {
        let file = fs::File::open(path)?;
        Ok(Reader::new(io::BufReader::new(file)))
    }
}

/// # Parsing
impl<B: io::BufRead> Reader<B> {
    fn read_line(&mut self) -> io::Result<bool> {
        self.row += 1;
        self.line.clear();
        self.col = 0;
        let n_bytes = self.buf.read_line(&mut self.line)?;
        Ok(n_bytes > 0)
    }

    /// Current line without its line terminator.
    fn content(&self) -> &str {
        self.line.trim_end_matches(['\n', '\r'])
    }

    fn continue_line<T: FromTokens>(&mut self) -> Result<T, LineError> {
        let mut tokens = Tokens::from_parts(&self.line, self.col);
        let result = T::read(&mut tokens);
        self.col = tokens.position();
        result.map_err(|e| self.error_here(e))
    }

    fn finish_line(&mut self) -> Result<(), LineError> {
        let mut tokens = Tokens::from_parts(&self.line, self.col);
        if tokens.next().is_some() {
            self.col = tokens.position();
            Err(self.error_here(TokenError::Leftovers))
        } else {
            Ok(())
        }
    }

    fn error_here(&self, error: TokenError) -> LineError {
        LineError {
            error,
            line: self.line.as_str().into(),
            row: self.row,
            col: self.col,
        }
    }

    /// Reads the first line and parses it as the declared edge count.
    ///
    /// ### Errors
    ///
    /// `MalformedCount` when the line is missing, isn't a non-negative
    /// integer or carries anything after the number.
    pub fn declared_count(&mut self) -> Result<usize, ConvertError> {
        if !self.read_line()? {
            let missing = TokenError::TooShort { expected: 1, found: 0 };
            return Err(ConvertError::MalformedCount(self.error_here(missing)));
        }
        let count = self.continue_line().map_err(ConvertError::MalformedCount)?;
        self.finish_line().map_err(ConvertError::MalformedCount)?;
        Ok(count)
    }

    /// Reads the next edge, or `None` at the end of input.
    ///
    /// ### Errors
    ///
    /// `MalformedLine` when a non-empty line has fewer than two tokens.
    pub fn next_edge(&mut self) -> Result<Option<Edge>, ConvertError> {
        loop {
            if !self.read_line()? {
                return Ok(None);
            }
            if self.content().is_empty() {
                debug!(line = self.row, "skipping empty line");
                continue;
            }
            let edge: Edge = self.continue_line().map_err(ConvertError::MalformedLine)?;
            if !Tokens::from_parts(&self.line, self.col).is_exhausted() {
                debug!(line = self.row, "ignoring tokens after the edge target");
            }
            return Ok(Some(edge));
        }
    }

    /// Iterates over the remaining edges.
    ///
    /// The iterator stops after the first error.
    pub fn edges(&mut self) -> Edges<'_, B> {
        Edges {
            reader: self,
            failed: false,
        }
    }
}

/// # Additional methods
impl<B: io::BufRead> Reader<B> {
    /// 1-indexed number of the line read most recently (0 before the first read).
    pub fn line_number(&self) -> u64 {
        self.row
    }

    /// Gets underlying buffer back.
    pub fn into_inner(self) -> B {
        self.buf
    }
}

/// Iterator returned by [`Reader::edges`](struct.Reader.html#method.edges).
pub struct Edges<'r, B: io::BufRead> {
    reader: &'r mut Reader<B>,
    failed: bool,
}

impl<'r, B: io::BufRead> Iterator for Edges<'r, B> {
    type Item = Result<Edge, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.reader.next_edge().transpose();
        if let Some(Err(_)) = item {
            self.failed = true;
        }
        item
    }
}

/// An error with a lineinfo.
///
/// It contains the underlying [`TokenError`](../record/enum.TokenError.html)
/// and the location of the failure (line and column) together with a copy of the line.
///
/// The displayed error provides a line number and a column marker:
///
/// ```text
/// expected 2 tokens, found 1 at
/// 3| A
///     ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    error: TokenError,
    line: Box<str>,
    row: u64,
    col: usize,
}

impl LineError {
    /// Obtains an underlying error, by stripping the location info.
    pub fn into_inner(self) -> TokenError {
        self.error
    }

    /// The underlying error.
    pub fn kind(&self) -> &TokenError {
        &self.error
    }

    /// The offending line, without its line terminator.
    pub fn line(&self) -> &str {
        self.line.trim_end_matches(['\n', '\r'])
    }

    /// Obtains a location (line, column) of the error.
    ///
    /// ### Return value
    ///
    /// The tuple contains a 1-indexed number of line
    /// and a 1-indexed number of column (counted in bytes).
    /// For invalid or excessive tokens the column points at the last byte of the token,
    /// for missing tokens it points just past the end of the line.
    pub fn location(&self) -> (u64, usize) {
        (self.row, self.marker_offset() + 1)
    }

    fn marker_offset(&self) -> usize {
        let line = self.line();
        let mut col = self.col.min(line.len());
        if self.error.points_at_token() && col > 0 {
            col -= 1;
        }
        while !line.is_char_boundary(col) {
            col -= 1;
        }
        col
    }
}

impl StdError for LineError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

impl AsRef<TokenError> for LineError {
    fn as_ref(&self) -> &TokenError {
        &self.error
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)?;
        let line = self.line();
        let col = self.marker_offset();

        if line.len() <= 120 {
            writeln!(f, " at")?;
            let number = self.row.to_string();
            write!(f, "{}| ", number)?;
            writeln!(f, "{}", line)?;
            for _ in 0..number.len() + 2 {
                write!(f, " ")?;
            }
            for c in line[..col].chars() {
                if c <= ' ' {
                    write!(f, "{}", c)?;
                } else {
                    write!(f, " ")?;
                }
            }
            write!(f, "^")?;
        } else {
            write!(f, " at line {}, column {}", self.row, col + 1)?;
        }
        Ok(())
    }
}
