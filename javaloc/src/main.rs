//! # javaloc
//!
//! A CLI tool that counts non-blank, non-comment lines of Java source.
//!
//! ## Overview
//!
//! javaloc is built on top of javaloclib. Given one `.java` file or a
//! directory, it prints one line per entry: the root first, then the rest of
//! the tree with every directory listed before its contents and indented by
//! depth. Each directory shows the total of every file beneath it.
//!
//! ## Usage
//!
//! ```bash
//! # Count a directory tree
//! javaloc src/
//!
//! # Count a single file
//! javaloc src/main/java/App.java
//!
//! # Output as JSON
//! javaloc src/ --output json
//!
//! # Filter files with glob patterns
//! javaloc . --include "**/main/**" --exclude "**/generated/**"
//!
//! # Fail on unterminated block comments
//! javaloc src/ --strict
//! ```

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use javaloclib::{count_path, render_text, CountOptions, FilterConfig};
use tracing::debug;

use crate::logging::Verbosity;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("javaloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Counts non-blank, non-comment lines of Java source per file and directory")
        .arg(
            Arg::new("path")
                .help("A .java file or a directory to count")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail on block comments that are never closed"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more diagnostics to stderr (repeat for more)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let patterns = |id: &str| -> Vec<String> {
        matches
            .get_many::<String>(id)
            .map(|v| v.cloned().collect())
            .unwrap_or_default()
    };

    let filter = FilterConfig::new()
        .include_many(&patterns("include"))?
        .exclude_many(&patterns("exclude"))?;
    Ok(filter)
}

/// Count the requested path and render the report.
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<PathBuf>("path")
        .context("missing path argument")?;

    let options = CountOptions::new()
        .filter(build_filter(matches)?)
        .strict(matches.get_flag("strict"));
    debug!(?options, path = %path.display(), "starting count");

    let report = count_path(path, options)?;

    let output = match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        _ => render_text(&report.entries),
    };
    Ok(output)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    logging::init(Verbosity::from_flags(
        matches.get_count("verbose"),
        matches.get_flag("quiet"),
    ));

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn path_is_required() {
        let result = build_command().try_get_matches_from(["javaloc"]);
        assert!(result.is_err());
    }

    #[test]
    fn only_one_path_accepted() {
        let result = build_command().try_get_matches_from(["javaloc", "a", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn filter_from_flags() {
        let matches = build_command()
            .try_get_matches_from(["javaloc", ".", "-e", "**/gen/**", "-i", "**/src/**"])
            .unwrap();
        let filter = build_filter(&matches).unwrap();

        assert_eq!(filter.include.len(), 1);
        assert_eq!(filter.exclude.len(), 1);
    }

    #[test]
    fn bad_glob_is_an_error() {
        let matches = build_command()
            .try_get_matches_from(["javaloc", ".", "--include", "[oops"])
            .unwrap();

        assert!(build_filter(&matches).is_err());
    }
}
