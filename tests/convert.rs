use std::fs;
use std::path::Path;

use edgelist2dot::{convert, convert_with, ConvertError, CountPolicy, IdPolicy, Options, Summary};
use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn header(path: &Path) -> String {
    format!("digraph \"{}\" {{\n", path.display())
}

#[test]
fn converts_file_and_reports_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "graph.txt", "2\nA B\nB C\n");
    let output = dir.path().join("graph.dot");

    let summary = convert(&input, &output).unwrap();

    assert_eq!(summary, Summary { declared: 2, edges: 2 });
    let expected = header(&input)
        + indoc! {"
            \tA -> B;
            \tB -> C;
            }
        "};
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn preserves_order_and_duplicates() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "order.txt",
        indoc! {"
            5
            c a
            a b
            c a
            b b
            1 2
        "},
    );
    let output = dir.path().join("order.dot");
    let options = Options {
        id_policy: IdPolicy::Verbatim,
        ..Options::default()
    };

    convert_with(&input, &output, &options).unwrap();

    let dot = fs::read_to_string(&output).unwrap();
    let body: Vec<&str> = dot.lines().skip(1).collect();
    assert_eq!(
        body,
        ["\tc -> a;", "\ta -> b;", "\tc -> a;", "\tb -> b;", "\t1 -> 2;", "}"]
    );
}

#[test]
fn rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "again.txt", "3\nx y\ny z\nz x\n");
    let output = dir.path().join("again.dot");

    convert(&input, &output).unwrap();
    let first = fs::read(&output).unwrap();
    convert(&input, &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn output_is_truncated() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "small.txt", "0\n");
    let output = dir.path().join("small.dot");
    fs::write(&output, "x".repeat(4096)).unwrap();

    convert(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), header(&input) + "}\n");
}

#[test]
fn quotes_awkward_names() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "my graph {1}.txt", "1\nsrc-1 node\n");
    let output = dir.path().join("awkward.dot");

    convert(&input, &output).unwrap();

    let dot = fs::read_to_string(&output).unwrap();
    assert_eq!(dot, header(&input) + "\t\"src-1\" -> \"node\";\n}\n");
}

#[test]
fn missing_input_is_file_not_found() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nope.txt");
    let output = dir.path().join("nope.dot");

    let err = convert(&input, &output).unwrap_err();

    match err {
        ConvertError::FileNotFound { path } => assert_eq!(path, input),
        other => panic!("unexpected error: {}", other),
    }
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ok.txt", "0\n");
    let output = dir.path().join("no-such-dir").join("out.dot");

    let err = convert(&input, &output).unwrap_err();

    assert!(matches!(err, ConvertError::FileNotFound { ref path } if *path == output));
}

#[test]
fn malformed_count_leaves_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad.txt", "lots\nA B\n");
    let output = dir.path().join("bad.dot");

    let err = convert(&input, &output).unwrap_err();

    assert!(matches!(err, ConvertError::MalformedCount(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn malformed_line_names_the_line() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "short.txt", "3\nA B\nB\nC D\n");
    let output = dir.path().join("short.dot");

    let err = convert(&input, &output).unwrap_err();

    assert!(matches!(err, ConvertError::MalformedLine(_)));
    assert_eq!(err.line_error().unwrap().location(), (3, 2));
    assert_eq!(
        err.to_string(),
        "malformed edge line: expected 2 tokens, found 1 at\n3| B\n    ^"
    );
}

#[test]
fn strict_count_fails_on_mismatch() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "count.txt", "1\nA B\nB C\n");
    let output = dir.path().join("count.dot");
    let options = Options {
        count_policy: CountPolicy::Strict,
        ..Options::default()
    };

    let err = convert_with(&input, &output, &options).unwrap_err();
    assert!(matches!(err, ConvertError::CountMismatch { declared: 1, found: 2 }));

    let summary = convert(&input, &output).unwrap();
    assert_eq!(summary, Summary { declared: 1, edges: 2 });
}
