use std::fs;
use std::process::{Command, Output};

use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_edgelist2dot"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn converts_the_example_verbatim() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("graph.txt"), "2\nA B\nB C\n").unwrap();

    let out = run(&dir, &["--verbatim-ids", "graph.txt", "graph.dot"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let dot = fs::read_to_string(dir.path().join("graph.dot")).unwrap();
    assert_eq!(
        dot,
        indoc! {"
            digraph graph.txt {
            \tA -> B;
            \tB -> C;
            }
        "}
    );
}

#[test]
fn quotes_the_header_by_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("graph.txt"), "2\nA B\nB C\n").unwrap();

    let out = run(&dir, &["graph.txt", "graph.dot"]);

    assert!(out.status.success());
    let dot = fs::read_to_string(dir.path().join("graph.dot")).unwrap();
    assert_eq!(dot.lines().next(), Some("digraph \"graph.txt\" {"));
    assert_eq!(dot.lines().last(), Some("}"));
}

#[test]
fn failure_goes_to_stderr_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.txt"), "1\nlonely\n").unwrap();

    let out = run(&dir, &["bad.txt", "bad.dot"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: malformed edge line"), "{}", stderr);
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();

    let out = run(&dir, &["absent.txt", "absent.dot"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("absent.txt: file not found"), "{}", stderr);
}

#[test]
fn strict_count_flag() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("g.txt"), "5\na b\n").unwrap();

    assert!(run(&dir, &["g.txt", "g.dot"]).status.success());
    let out = run(&dir, &["--strict-count", "g.txt", "g.dot"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("declared 5 edges, found 1"));
}

#[test]
fn wrong_arity_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    let out = run(&dir, &["only-one.txt"]);

    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(2));
}
