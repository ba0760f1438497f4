//! This module defines the `FromTokens` trait and the records of the edge-list format.

use std::fmt;
use std::num::ParseIntError;
use std::result;
use std::slice;
use std::vec;

use thiserror::Error;

use super::stream::TokenStream;

/// Trait for records that can be parsed from a stream of whitespace-separated tokens.
///
/// Implementations consume tokens from the left, advancing the stream.
/// Tokens left over after a record are not looked at; it's up to the caller
/// to decide whether they are an error (see [`Reader`](../reader/struct.Reader.html)).
///
/// # Examples
///
/// ```
/// use edgelist2dot::{Edge, FromTokens};
/// let mut stream = "a b".split_whitespace();
/// let edge = Edge::read(&mut stream).unwrap();
/// assert_eq!(edge, Edge::new("a", "b"));
/// ```
pub trait FromTokens: Sized {
    fn read<I: TokenStream>(it: &mut I) -> Result<Self>;
}

pub type Result<T> = result::Result<T, TokenError>;

/// Error which can occur while parsing a record from tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// There were not enough tokens to build the record.
    #[error("expected {expected} tokens, found {found}")]
    TooShort { expected: usize, found: usize },

    /// Excessive input was provided where none is allowed.
    #[error("unexpected input after the edge count")]
    Leftovers,

    /// The edge count is not a non-negative decimal integer.
    #[error("edge count is not a non-negative integer")]
    Invalid(#[source] ParseIntError),
}

impl TokenError {
    pub fn is_too_short(&self) -> bool {
        matches!(self, TokenError::TooShort { .. })
    }

    /// Whether the error points past a token rather than at the end of input.
    pub fn points_at_token(&self) -> bool {
        matches!(self, TokenError::Leftovers | TokenError::Invalid(_))
    }
}

/// The edge count declared on the first line.
impl FromTokens for usize {
    fn read<I: TokenStream>(it: &mut I) -> Result<usize> {
        let token = it
            .next_token()
            .ok_or(TokenError::TooShort { expected: 1, found: 0 })?;
        token.parse().map_err(TokenError::Invalid)
    }
}

/// A directed edge between two opaque node identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Edge {
        Edge {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl FromTokens for Edge {
    fn read<I: TokenStream>(it: &mut I) -> Result<Edge> {
        let source = it
            .next_token()
            .ok_or(TokenError::TooShort { expected: 2, found: 0 })?
            .to_owned();
        let target = it
            .next_token()
            .ok_or(TokenError::TooShort { expected: 2, found: 1 })?
            .to_owned();
        Ok(Edge { source, target })
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Edges in the order they appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList(Vec<Edge>);

impl EdgeList {
    pub fn new() -> EdgeList {
        EdgeList(Vec::new())
    }

    pub fn push(&mut self, edge: Edge) {
        self.0.push(edge)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Edge> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Edge> {
        self.0
    }
}

impl FromIterator<Edge> for EdgeList {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> EdgeList {
        EdgeList(iter.into_iter().collect())
    }
}

impl IntoIterator for EdgeList {
    type Item = Edge;
    type IntoIter = vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
