use std::path::{Path, PathBuf};

use clap::ArgMatches;

/// Holds the resolved command line options for one invocation.
///
/// All flag state lives here; nothing downstream reaches back into the
/// argument parser.
#[derive(Debug, Clone)]
pub struct Config {
    template: PathBuf,
    data: Option<PathBuf>,
    inline_json: Option<String>,
    set_vars: Vec<String>,
    output: Option<PathBuf>,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Config {
        Config {
            template: matches
                .get_one::<PathBuf>("template")
                .expect("template is required")
                .clone(),
            data: matches.get_one::<PathBuf>("data").cloned(),
            inline_json: matches.get_one::<String>("json").cloned(),
            set_vars: matches
                .get_many::<String>("set")
                .unwrap_or_default()
                .cloned()
                .collect(),
            output: matches.get_one::<PathBuf>("output").cloned(),
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template
    }

    pub fn data_path(&self) -> Option<&Path> {
        self.data.as_deref()
    }

    pub fn inline_json(&self) -> Option<&str> {
        self.inline_json.as_deref()
    }

    /// The raw `key=value` entries in command line order.
    pub fn set_vars(&self) -> &[String] {
        &self.set_vars
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}
