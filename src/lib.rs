//! Converts an edge list into a Graphviz DOT digraph.
//!
//! The input is a count line followed by one `source target` pair per line:
//!
//! ```text
//! 2
//! A B
//! B C
//! ```
//!
//! and the output is a `digraph` named after the input path, with one
//! tab-indented statement per edge, in input order:
//!
//! ```text
//! digraph "graph.txt" {
//! 	A -> B;
//! 	B -> C;
//! }
//! ```
//!
//! # Examples
//!
//! Converting files.
//!
//! ```no_run
//! # use edgelist2dot::convert;
//! let summary = convert("graph.txt", "graph.dot").unwrap();
//! assert_eq!(summary.edges, summary.declared);
//! ```
//!
//! Parsing without converting.
//!
//! ```
//! # use edgelist2dot::{parse_edge_list, Edge};
//! let (declared, edges) = parse_edge_list("2\nA B\nB C\n").unwrap();
//! assert_eq!(declared, 2);
//! assert_eq!(edges.iter().next(), Some(&Edge::new("A", "B")));
//! ```
//!
//! The token rules are described in [`Reader`](reader/struct.Reader.html),
//! the quoting of names in [`IdPolicy`](dot/enum.IdPolicy.html).

pub mod stream;
pub use self::stream::{StrExt, TokenStream, Tokens};

pub mod record;
pub use self::record::{Edge, EdgeList, FromTokens, TokenError};

pub mod reader;
pub use self::reader::{LineError, Reader};

pub mod dot;
pub use self::dot::{dot_id, DotWriter, IdPolicy};

pub mod convert;
pub use self::convert::{
    convert, convert_with, to_dot_string, translate, CountPolicy, Options, Summary,
};

pub mod error;
pub use self::error::ConvertError;

// Helpers -----------------------------------------------------------------------------------------

/// Reads the declared count and every edge from a string.
///
/// Empty lines are skipped and tokens after the target are ignored,
/// exactly as during a conversion.
///
/// # Examples
/// ```
/// # use edgelist2dot::{parse_edge_list, ConvertError};
/// let (n, edges) = parse_edge_list("5\n1 2\n").unwrap();
/// assert_eq!((n, edges.len()), (5, 1));
///
/// let err = parse_edge_list("1\n1\n").unwrap_err();
/// assert!(matches!(err, ConvertError::MalformedLine(_)));
/// ```
pub fn parse_edge_list(input: &str) -> Result<(usize, EdgeList), ConvertError> {
    let mut reader = Reader::new(input.as_bytes());
    let declared = reader.declared_count()?;
    let edges = reader.edges().collect::<Result<EdgeList, _>>()?;
    Ok((declared, edges))
}
