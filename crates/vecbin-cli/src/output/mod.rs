use serde::Serialize;
use vecbin_core::ExtractionReport;

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ExtractionReport,
    identifiers: String,
}

/// Render a finished extraction in the requested format.
pub fn render(report: &ExtractionReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "result: {}\n{}",
            report.tuples_line(),
            report.identifier_line()
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonReport {
            report,
            identifiers: report.identifier_line(),
        })?),
    }
}

/// Print a finished extraction to stdout.
pub fn output(report: &ExtractionReport, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(report, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use vecbin_core::{ExtractionRequest, FixtureGrammar, run_extraction};

    use super::*;

    fn block_cipher_report(tmp: &TempDir) -> ExtractionReport {
        let input = tmp.path().join("tests.txt");
        fs::write(
            &input,
            "Test { key: vec![0x00, 0x01], plaintext: vec![0xff], ciphertext: vec![0x10] }",
        )
        .expect("write fixture");
        let request =
            ExtractionRequest::new(&input, tmp.path().join("out"), FixtureGrammar::BlockCipher);
        run_extraction(&request).expect("extraction")
    }

    #[test]
    fn text_report_prints_tuples_then_identifiers() {
        let tmp = TempDir::new().expect("tempdir");
        let report = block_cipher_report(&tmp);

        let rendered = render(&report, OutputFormat::Text).expect("render");
        assert_eq!(
            rendered,
            "result: [(\"0x00,0x01\", \"0xff\", \"0x10\")]\n\"1\""
        );
    }

    #[test]
    fn json_report_lists_artifacts() {
        let tmp = TempDir::new().expect("tempdir");
        let report = block_cipher_report(&tmp);

        let rendered = render(&report, OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value["grammar"], "block-cipher");
        assert_eq!(value["identifiers"], "\"1\"");
        assert_eq!(value["cases"][0]["artifacts"][0]["role"], "key");
        assert_eq!(value["cases"][0]["artifacts"][0]["size"], 2);
        assert_eq!(value["cases"][0]["fields"][1]["literal"], "0xff");
        assert_eq!(value["cases"][0]["fields"][1]["role"], "input");
    }
}
