//! Extraction defaults: which fixture file to read and how to parse it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vecbin_core::FixtureGrammar;

use crate::error::ConfigError;

/// Fixture file read when none is given on the command line.
fn default_input() -> PathBuf {
    PathBuf::from("tests.txt")
}

const fn default_grammar() -> FixtureGrammar {
    FixtureGrammar::Bcrypt
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Fixture file, relative paths resolve against the working directory.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Grammar of the fixture file (`bcrypt`, `block-cipher`, `digest`).
    #[serde(default = "default_grammar")]
    pub grammar: FixtureGrammar,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            grammar: default_grammar(),
        }
    }
}

impl ExtractConfig {
    /// Reject values that cannot name a fixture file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extract.input".to_string(),
                reason: "fixture path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
