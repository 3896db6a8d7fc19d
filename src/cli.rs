use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_CONTENT_DIR, DEFAULT_DIST_DIR};

pub const TARGET_FLAGS: [&str; 2] = ["-t", "--target"];
pub const FILE_FLAGS: [&str; 2] = ["-f", "--file"];

/// Options clap parses that take a value.
const VALUE_OPTIONS: [&str; 2] = ["--content-dir", "--dist-dir"];
/// Options clap parses that stand alone.
const SWITCHES: [&str; 7] = [
    "--no-highlight",
    "-v",
    "--verbose",
    "-h",
    "--help",
    "-V",
    "--version",
];

/// Convert Markdown contents to JSON documents
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Selectors:\n  -t, --target <TARGET>...  Target folders to convert (all known targets when omitted)\n  -f, --file <FILE>...      Only convert files with these names"
)]
pub struct Cli {
    #[arg(skip)]
    pub targets: Vec<String>,

    #[arg(skip)]
    pub files: Vec<String>,

    /// Folder holding one sub folder per target
    #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
    pub content_dir: PathBuf,

    /// Output folder for the generated JSON files
    #[arg(long, default_value = DEFAULT_DIST_DIR)]
    pub dist_dir: PathBuf,

    /// Emit code blocks escaped but without syntax highlighting
    #[arg(long)]
    pub no_highlight: bool,

    /// Print a line for every written file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, exiting with clap's usage error on failure.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::try_parse_args(args).unwrap_or_else(|err| err.exit())
    }

    /// `args` starts with the binary name.
    ///
    /// Selector values are scanned from the whole list; clap only sees the
    /// options it owns, so unknown flags and stray words are ignored.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let bin = args.next().unwrap_or_else(|| "mdjson".to_string());
        let rest: Vec<String> = args.collect();

        let mut cli = Self::try_parse_from(std::iter::once(bin).chain(owned_options(&rest)))?;
        cli.targets = flag_values(&rest, &TARGET_FLAGS);
        cli.files = flag_values(&rest, &FILE_FLAGS);
        Ok(cli)
    }
}

/// Values following any of `flags`, up to the next token starting with `-`.
///
/// Every occurrence of the flag contributes its run, in order.
pub fn flag_values(args: &[String], flags: &[&str]) -> Vec<String> {
    let mut extracting = false;
    args.iter()
        .filter(|arg| {
            if arg.starts_with('-') {
                extracting = flags.contains(&arg.as_str());
                false
            } else {
                extracting
            }
        })
        .cloned()
        .collect()
}

fn owned_options(args: &[String]) -> Vec<String> {
    let mut owned = Vec::new();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if VALUE_OPTIONS.contains(&arg.as_str()) {
            owned.push(arg.clone());
            owned.extend(args.next().cloned());
        } else if SWITCHES.contains(&arg.as_str())
            || VALUE_OPTIONS
                .iter()
                .any(|opt| arg.strip_prefix(opt).is_some_and(|v| v.starts_with('=')))
        {
            owned.push(arg.clone());
        }
    }
    owned
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            content_dir: cli.content_dir,
            dist_dir: cli.dist_dir,
            targets: cli.targets,
            files: cli.files,
            highlight: !cli.no_highlight,
            verbose: cli.verbose,
            ..Config::default()
        }
    }
}
