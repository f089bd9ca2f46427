//! Error types for vecbin-core.
//!
//! Every error aborts the whole run. Nothing is rolled back: artifacts
//! written before the failure stay on disk.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::grammar::FixtureGrammar;

/// A field literal does not conform to its expected shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty byte token at position {position}")]
    EmptyToken { position: usize },

    #[error("invalid byte literal '{token}': only digits of its radix are allowed")]
    InvalidDigits { token: String },

    #[error("invalid byte literal '{token}': {source}")]
    InvalidByte {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid hex string '{literal}': {source}")]
    InvalidHex {
        literal: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("invalid escape sequence '{escape}' in text literal")]
    InvalidEscape { escape: String },
}

/// The grammar pattern could not be built or applied.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("pattern for grammar '{grammar}' failed to compile: {source}")]
    Pattern {
        grammar: FixtureGrammar,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("grammar '{grammar}' pattern has no capture slot named '{slot}'")]
    MissingSlot {
        grammar: FixtureGrammar,
        slot: &'static str,
    },
}

/// Top-level error for an extraction run.
#[derive(Debug, Error)]
pub enum VecbinError {
    /// The fixture file is missing or unreadable.
    #[error("failed to read fixture file '{}': {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output root already exists. Refusing to overwrite a previous run.
    #[error("output directory '{}' already exists", path.display())]
    DirectoryExists { path: PathBuf },

    /// The output root could not be created for any other reason.
    #[error("failed to create output directory '{}': {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("case {index}, field '{role}': {source}")]
    Decode {
        index: usize,
        role: &'static str,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("failed to write artifact '{}': {source}", path.display())]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VecbinError {
    /// Whether the error came from the output-directory guard.
    #[must_use]
    pub const fn is_output_directory(&self) -> bool {
        matches!(
            self,
            Self::DirectoryExists { .. } | Self::DirectoryCreate { .. }
        )
    }
}
