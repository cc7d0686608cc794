//! CLI entry point for lstree

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use lstree::{Error, PlainFormatter, TreeWalker};

#[derive(Parser, Debug)]
#[command(name = "lstree")]
#[command(about = "ls as a tree: directories bracketed, files plain")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Paths to list (defaults to the current directory)
    #[arg(allow_hyphen_values = true)]
    roots: Vec<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let stdout = io::stdout();
    let mut formatter = PlainFormatter::new(stdout.lock());

    let result = TreeWalker::new()
        .run(&args.roots, &mut formatter)
        .and_then(|()| formatter.finish().map_err(Error::from));

    if let Err(e) = result {
        eprintln!("lstree: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_no_roots() {
        let args = Args::try_parse_from(["lstree"]).unwrap();
        assert!(args.roots.is_empty());
    }

    #[test]
    fn test_roots_keep_order() {
        let args = Args::try_parse_from(["lstree", "b", "a", "c"]).unwrap();
        assert_eq!(
            args.roots,
            vec![PathBuf::from("b"), PathBuf::from("a"), PathBuf::from("c")]
        );
    }

    #[test]
    fn test_help_is_treated_as_a_path() {
        let args = Args::try_parse_from(["lstree", "--help"]).unwrap();
        assert_eq!(args.roots, vec![PathBuf::from("--help")]);
    }

    #[test]
    fn test_hyphen_leading_path_accepted() {
        let args = Args::try_parse_from(["lstree", "-V", "dir"]).unwrap();
        assert_eq!(args.roots, vec![PathBuf::from("-V"), PathBuf::from("dir")]);
    }
}
