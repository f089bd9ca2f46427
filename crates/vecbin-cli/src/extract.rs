use anyhow::Context;
use vecbin_core::{ExtractionEvent, ExtractionRequest, run_extraction_with};

use crate::cli::GlobalFlags;
use crate::output;
use crate::progress::Progress;

/// Run one extraction and print its report.
pub fn handle(request: &ExtractionRequest, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut progress = Progress::hidden();

    let result = run_extraction_with(request, |event| match event {
        ExtractionEvent::CasesFound(total) => {
            progress = Progress::bar(u64::try_from(total).unwrap_or(u64::MAX), "writing");
        }
        ExtractionEvent::CaseWritten(case) => {
            progress.set_message(&case.identifier);
            progress.inc(1);
        }
    });

    let report = match result {
        Ok(report) => {
            progress.finish_clear();
            report
        }
        Err(error) => {
            progress.finish_err("aborted");
            return Err(error).with_context(|| {
                format!(
                    "extraction from '{}' into '{}' failed",
                    request.input.display(),
                    request.output_dir.display()
                )
            });
        }
    };

    if report.cases.is_empty() {
        tracing::warn!(
            input = %request.input.display(),
            grammar = %request.grammar,
            "no test cases matched"
        );
    }

    output::output(&report, flags.format)
}
