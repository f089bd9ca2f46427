//! Load → Normalize → Extract → (Decode → Write)* → Report.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::decode::decode_literal;
use crate::error::VecbinError;
use crate::extract::{CaseExtractor, CaseField, TestCase};
use crate::grammar::FixtureGrammar;
use crate::normalize::normalize;
use crate::writer::{ArtifactWriter, DecodedField, WrittenArtifact};

/// Inputs of one extraction run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub grammar: FixtureGrammar,
}

impl ExtractionRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        grammar: FixtureGrammar,
    ) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            grammar,
        }
    }
}

/// Everything written for one case.
#[derive(Clone, Debug, Serialize)]
pub struct CaseReport {
    pub index: usize,
    pub identifier: String,
    pub fields: Vec<CaseField>,
    pub artifacts: Vec<WrittenArtifact>,
}

/// Outcome of a completed run.
#[derive(Clone, Debug, Serialize)]
pub struct ExtractionReport {
    pub grammar: FixtureGrammar,
    pub root: PathBuf,
    pub cases: Vec<CaseReport>,
}

impl ExtractionReport {
    /// Quoted case identifiers joined by `, `, ready to paste into a test
    /// harness list.
    #[must_use]
    pub fn identifier_line(&self) -> String {
        self.cases
            .iter()
            .map(|case| format!("\"{}\"", case.identifier))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Diagnostic rendering of the extracted literal tuples.
    #[must_use]
    pub fn tuples_line(&self) -> String {
        let tuples = self
            .cases
            .iter()
            .map(|case| {
                let literals = case
                    .fields
                    .iter()
                    .map(|field| format!("{:?}", field.literal))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({literals})")
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{tuples}]")
    }

    #[must_use]
    pub fn artifact_count(&self) -> usize {
        self.cases.iter().map(|case| case.artifacts.len()).sum()
    }
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug)]
pub enum ExtractionEvent<'a> {
    /// Extraction finished; this many cases will be written.
    CasesFound(usize),
    CaseWritten(&'a CaseReport),
}

/// Run a full extraction.
///
/// # Errors
///
/// See [`run_extraction_with`].
pub fn run_extraction(request: &ExtractionRequest) -> Result<ExtractionReport, VecbinError> {
    run_extraction_with(request, |_| {})
}

/// Run a full extraction, reporting progress to `on_event`.
///
/// The fixture file is read first, then the output root is created, so an
/// existing root fails the run before anything is extracted or decoded.
///
/// # Errors
///
/// Fails fast on a missing input, an existing or uncreatable output root,
/// the first literal that does not decode, or the first artifact that
/// cannot be written.
pub fn run_extraction_with<F>(
    request: &ExtractionRequest,
    mut on_event: F,
) -> Result<ExtractionReport, VecbinError>
where
    F: FnMut(ExtractionEvent<'_>),
{
    let grammar = request.grammar;

    let text = fs::read_to_string(&request.input).map_err(|source| VecbinError::InputNotFound {
        path: request.input.clone(),
        source,
    })?;

    let writer = ArtifactWriter::create(&request.output_dir, grammar.layout())?;

    let normalized = normalize(&text, &grammar.normalization());
    tracing::debug!(
        input = %request.input.display(),
        raw_len = text.len(),
        normalized_len = normalized.len(),
        "normalized fixture text"
    );

    let cases = CaseExtractor::new(grammar)?.extract(&normalized)?;
    on_event(ExtractionEvent::CasesFound(cases.len()));

    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        let fields = decode_case(&case)?;
        let artifacts = writer.write_case(case.index, &fields)?;
        let report = CaseReport {
            index: case.index,
            identifier: writer.identifier(case.index),
            fields: case.fields,
            artifacts,
        };
        on_event(ExtractionEvent::CaseWritten(&report));
        reports.push(report);
    }

    tracing::info!(
        grammar = %grammar,
        root = %writer.root().display(),
        cases = reports.len(),
        "extraction complete"
    );

    Ok(ExtractionReport {
        grammar,
        root: writer.root().to_path_buf(),
        cases: reports,
    })
}

fn decode_case(case: &TestCase) -> Result<Vec<DecodedField>, VecbinError> {
    case.fields
        .iter()
        .map(|field| {
            let bytes = decode_literal(&field.literal, field.spec.shape).map_err(|source| {
                VecbinError::Decode {
                    index: case.index,
                    role: field.role(),
                    source,
                }
            })?;
            Ok(DecodedField {
                role: field.role(),
                bytes,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_input_creates_nothing() {
        let tmp = TempDir::new().expect("tempdir");
        let request = ExtractionRequest::new(
            tmp.path().join("absent.txt"),
            tmp.path().join("out"),
            FixtureGrammar::Bcrypt,
        );

        let error = run_extraction(&request).unwrap_err();
        assert!(matches!(error, VecbinError::InputNotFound { .. }));
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn events_arrive_in_order() {
        let tmp = TempDir::new().expect("tempdir");
        let input = tmp.path().join("tests.txt");
        fs::write(
            &input,
            "Test { input: \"a\", output_str: \"00\" }\nTest { input: \"b\", output_str: \"01\" }",
        )
        .expect("write fixture");
        let request = ExtractionRequest::new(&input, tmp.path().join("out"), FixtureGrammar::Digest);

        let mut seen = Vec::new();
        let report = run_extraction_with(&request, |event| match event {
            ExtractionEvent::CasesFound(count) => seen.push(format!("found {count}")),
            ExtractionEvent::CaseWritten(case) => seen.push(format!("wrote {}", case.index)),
        })
        .expect("extraction");

        assert_eq!(seen, vec!["found 2", "wrote 1", "wrote 2"]);
        assert_eq!(report.artifact_count(), 4);
        assert_eq!(report.tuples_line(), r#"[("a", "00"), ("b", "01")]"#);
    }
}
