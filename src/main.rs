use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use edgelist2dot::{convert_with, CountPolicy, IdPolicy, Options};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Converts an edge list into a Graphviz DOT digraph", long_about = None)]
struct Args {
    /// Edge list: a count line followed by `source target` lines
    input: PathBuf,

    /// Where to write the digraph (created or truncated)
    output: PathBuf,

    /// Fail when the number of edges differs from the declared count
    #[arg(long)]
    strict_count: bool,

    /// Copy names into the output as they are, without quoting
    #[arg(long)]
    verbatim_ids: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            count_policy: if self.strict_count {
                CountPolicy::Strict
            } else {
                CountPolicy::Lenient
            },
            id_policy: if self.verbatim_ids {
                IdPolicy::Verbatim
            } else {
                IdPolicy::Quoted
            },
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match convert_with(&args.input, &args.output, &args.options()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[test]
fn test_args() {
    let args = Args::parse_from(["edgelist2dot", "in.txt", "out.dot", "--strict-count"]);
    assert_eq!(args.input, PathBuf::from("in.txt"));
    assert_eq!(
        args.options(),
        Options {
            count_policy: CountPolicy::Strict,
            id_policy: IdPolicy::Quoted,
        }
    );
    assert!(Args::try_parse_from(["edgelist2dot", "in.txt"]).is_err());
}
