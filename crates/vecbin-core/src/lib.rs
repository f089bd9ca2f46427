//! # vecbin-core
//!
//! Converts literal test-vector definitions embedded in Rust-like fixture
//! text into raw binary artifacts, one file per field of every test case.
//!
//! The pipeline is strictly linear:
//! 1. **Load** the whole fixture file.
//! 2. **Normalize** it with the grammar's noise rules ([`normalize`]).
//! 3. **Extract** every case the grammar's pattern matches ([`CaseExtractor`]).
//! 4. **Decode** each field literal ([`decode_literal`]) and **write** it
//!    under the output root ([`ArtifactWriter`]).
//!
//! Grammars form a closed set ([`FixtureGrammar`]); each one carries its
//! field roles, literal shapes and artifact naming layout.
//!
//! ```no_run
//! use vecbin_core::{ExtractionRequest, FixtureGrammar, run_extraction};
//!
//! let request = ExtractionRequest::new("tests.txt", "data", FixtureGrammar::Bcrypt);
//! let report = run_extraction(&request).expect("extraction");
//! println!("{}", report.identifier_line());
//! ```

mod decode;
mod error;
mod extract;
mod grammar;
mod normalize;
mod pipeline;
mod writer;

pub use decode::decode_literal;
pub use error::{DecodeError, ExtractError, VecbinError};
pub use extract::{CaseExtractor, CaseField, TestCase};
pub use grammar::{
    ArtifactLayout, FieldSpec, FixtureGrammar, IdentifierStyle, LiteralShape, Normalization,
};
pub use normalize::normalize;
pub use pipeline::{
    CaseReport, ExtractionEvent, ExtractionReport, ExtractionRequest, run_extraction,
    run_extraction_with,
};
pub use writer::{ArtifactWriter, DecodedField, WrittenArtifact};
