//! This module defines the `TokenStream` trait and the whitespace splitter
//! used to cut a line into tokens.

use std::str::SplitWhitespace;

/// A streaming iterator yielding borrowed tokens.
pub trait TokenStream {
    fn next_token(&mut self) -> Option<&str>;
}

impl<'a> TokenStream for SplitWhitespace<'a> {
    fn next_token(&mut self) -> Option<&str> {
        Iterator::next(self)
    }
}

/// Fast version of std::str::SplitWhitespace which remembers where it stopped.
///
/// It considers to be whitespace everything with codepoint <= 0x20
/// (this includes " \t\n\r", but also some other unprintable characters).
/// It doesn't consider to be whitespace any of non-ascii UTF whitespace characters
/// (such as non-breaking space), so those end up inside tokens.
///
/// The byte offset reached so far is available through [`position`](#method.position),
/// which the reader uses to point at the failing column.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    s: &'a str,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(s: &'a str) -> Self {
        Tokens { s, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn from_parts(s: &'a str, position: usize) -> Self {
        Tokens { s, position }
    }

    /// Checks whether anything but whitespace is left.
    pub fn is_exhausted(&self) -> bool {
        self.clone().next().is_none()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.s.as_bytes();
        let mut start = self.position;
        while let Some(&c) = bytes.get(start) {
            if c > b' ' {
                break;
            }
            start += 1;
        }
        let mut end = start;
        while let Some(&c) = bytes.get(end) {
            if c <= b' ' {
                break;
            }
            end += 1;
        }
        self.position = end;
        if start != end {
            Some(&self.s[start..end])
        } else {
            None
        }
    }
}

impl<'a> TokenStream for Tokens<'a> {
    fn next_token(&mut self) -> Option<&str> {
        Iterator::next(self)
    }
}

/// Extends a `str` with a `tokens` method.
pub trait StrExt {
    fn tokens(&self) -> Tokens<'_>;
}

impl StrExt for str {
    fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }
}
