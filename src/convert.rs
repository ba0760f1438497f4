//! The conversion itself: edge list in, DOT digraph out.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use super::dot::{DotWriter, IdPolicy};
use super::error::ConvertError;
use super::reader::Reader;

/// What to do when the number of edges differs from the declared count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountPolicy {
    /// Convert every line anyway and log a warning.
    #[default]
    Lenient,
    /// Fail with `CountMismatch` before the closing brace is written.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub count_policy: CountPolicy,
    pub id_policy: IdPolicy,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// The count from the first line.
    pub declared: usize,
    /// Number of edge statements written.
    pub edges: usize,
}

/// Converts the edge list at `input` into a DOT digraph at `output`, with default options.
///
/// See [`convert_with`](fn.convert_with.html).
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<Summary, ConvertError> {
    convert_with(input, output, &Options::default())
}

/// Converts the edge list at `input` into a DOT digraph at `output`.
///
/// The output file is created or truncated. The graph is named after the
/// input path exactly as given.
///
/// # Examples
///
/// ```no_run
/// # use edgelist2dot::{convert_with, Options, CountPolicy};
/// let options = Options { count_policy: CountPolicy::Strict, ..Options::default() };
/// let summary = convert_with("graph.txt", "graph.dot", &options).unwrap();
/// println!("{} edges", summary.edges);
/// ```
pub fn convert_with<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &Options,
) -> Result<Summary, ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let mut reader = Reader::open(input).map_err(|e| ConvertError::open(input, e))?;
    let file = File::create(output).map_err(|e| ConvertError::open(output, e))?;

    let name = input.to_string_lossy();
    let summary = translate(&name, &mut reader, BufWriter::new(file), options)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        edges = summary.edges,
        "converted edge list"
    );
    Ok(summary)
}

/// Streams edges from `reader` into `writer` as a digraph called `name`.
///
/// Nothing is written when the count line is malformed. Any later failure
/// leaves whatever was written so far.
pub fn translate<B: BufRead, W: Write>(
    name: &str,
    reader: &mut Reader<B>,
    writer: W,
    options: &Options,
) -> Result<Summary, ConvertError> {
    let declared = reader.declared_count()?;

    let mut dot = DotWriter::new(writer, options.id_policy);
    dot.begin(name)?;
    while let Some(edge) = reader.next_edge()? {
        dot.edge(&edge)?;
    }

    let found = dot.edges_written();
    if found != declared {
        match options.count_policy {
            CountPolicy::Strict => return Err(ConvertError::CountMismatch { declared, found }),
            CountPolicy::Lenient => {
                warn!(declared, found, "edge count differs from the declared count")
            }
        }
    }
    dot.finish()?;

    Ok(Summary {
        declared,
        edges: found,
    })
}

/// Converts an in-memory edge list and returns the DOT text.
///
/// ```
/// # use edgelist2dot::{to_dot_string, Options};
/// let dot = to_dot_string("g", "1\nA B\n", &Options::default()).unwrap();
/// assert_eq!(dot, "digraph g {\n\tA -> B;\n}\n");
/// ```
pub fn to_dot_string(name: &str, input: &str, options: &Options) -> Result<String, ConvertError> {
    let mut reader = Reader::new(input.as_bytes());
    let mut out = Vec::new();
    translate(name, &mut reader, &mut out, options)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
