//! DOT output: identifier quoting and the `DotWriter`.

use std::borrow::Cow;
use std::io::{self, Write};

use super::record::Edge;

/// How node and graph names are written into the DOT output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Names that aren't valid DOT IDs are put in double quotes.
    #[default]
    Quoted,
    /// Names are copied byte-for-byte, even when that produces invalid DOT.
    Verbatim,
}

const KEYWORDS: [&str; 6] = ["graph", "digraph", "subgraph", "node", "edge", "strict"];

/// An ID which DOT accepts without quotes: `[A-Za-z_\x80-\xff][A-Za-z0-9_\x80-\xff]*`,
/// minus the keywords (which are case-insensitive).
pub fn is_plain_id(s: &str) -> bool {
    let mut bytes = s.bytes();
    let first_ok = match bytes.next() {
        Some(b) => b.is_ascii_alphabetic() || b == b'_' || b >= 0x80,
        None => false,
    };
    first_ok
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80)
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(s))
}

/// A DOT numeral: `-?(\.[0-9]+|[0-9]+(\.[0-9]*)?)`.
pub fn is_numeral(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match unsigned.split_once('.') {
        None => !unsigned.is_empty() && all_digits(unsigned),
        Some((int, frac)) => {
            (!int.is_empty() || !frac.is_empty()) && all_digits(int) && all_digits(frac)
        }
    }
}

/// Renders `raw` as a DOT ID according to `policy`.
///
/// ```
/// # use edgelist2dot::{dot_id, IdPolicy};
/// assert_eq!(dot_id("A", IdPolicy::Quoted), "A");
/// assert_eq!(dot_id("graph.txt", IdPolicy::Quoted), "\"graph.txt\"");
/// assert_eq!(dot_id("graph.txt", IdPolicy::Verbatim), "graph.txt");
/// ```
pub fn dot_id(raw: &str, policy: IdPolicy) -> Cow<'_, str> {
    if policy == IdPolicy::Verbatim || is_plain_id(raw) || is_numeral(raw) {
        return Cow::Borrowed(raw);
    }
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Writes a `digraph` one statement at a time.
///
/// ```
/// # use edgelist2dot::{DotWriter, Edge, IdPolicy};
/// let mut dot = DotWriter::new(Vec::new(), IdPolicy::Quoted);
/// dot.begin("g").unwrap();
/// dot.edge(&Edge::new("a", "b")).unwrap();
/// let out = dot.finish().unwrap();
/// assert_eq!(out, b"digraph g {\n\ta -> b;\n}\n");
/// ```
pub struct DotWriter<W: Write> {
    out: W,
    policy: IdPolicy,
    edges: usize,
}

impl<W: Write> DotWriter<W> {
    pub fn new(out: W, policy: IdPolicy) -> DotWriter<W> {
        DotWriter {
            out,
            policy,
            edges: 0,
        }
    }

    /// Writes the `digraph <name> {` header.
    pub fn begin(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "digraph {} {{", dot_id(name, self.policy))
    }

    /// Writes one tab-indented `source -> target;` statement.
    pub fn edge(&mut self, edge: &Edge) -> io::Result<()> {
        writeln!(
            self.out,
            "\t{} -> {};",
            dot_id(&edge.source, self.policy),
            dot_id(&edge.target, self.policy)
        )?;
        self.edges += 1;
        Ok(())
    }

    pub fn edges_written(&self) -> usize {
        self.edges
    }

    /// Writes the closing brace, flushes and gives the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "}}")?;
        self.out.flush()?;
        Ok(self.out)
    }
}
