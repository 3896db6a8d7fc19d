use std::path::PathBuf;

/// Target folders known to the converter, in conversion order.
pub const DEFAULT_TARGETS: [&str; 2] = ["pages", "slides"];
pub const DEFAULT_CONTENT_DIR: &str = "contents";
pub const DEFAULT_DIST_DIR: &str = "static/contents";

/// Settings for a single run, fixed once the command line is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Holds one sub folder per target.
    pub content_dir: PathBuf,
    /// Receives `<target>/<name>.json`.
    pub dist_dir: PathBuf,
    /// Allow-list for `targets`.
    pub known_targets: Vec<String>,
    /// Requested targets; empty means every known target.
    pub targets: Vec<String>,
    /// Requested bare file names; empty means every file.
    pub files: Vec<String>,
    pub highlight: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: DEFAULT_CONTENT_DIR.into(),
            dist_dir: DEFAULT_DIST_DIR.into(),
            known_targets: DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect(),
            targets: Vec::new(),
            files: Vec::new(),
            highlight: true,
            verbose: false,
        }
    }
}
