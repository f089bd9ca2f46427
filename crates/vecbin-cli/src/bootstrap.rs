use anyhow::Context;
use vecbin_config::VecbinConfig;
use vecbin_core::{ExtractionRequest, FixtureGrammar};

use crate::cli::Cli;

pub fn load_config() -> anyhow::Result<VecbinConfig> {
    VecbinConfig::load_with_dotenv().context("failed to load vecbin configuration")
}

/// Command-line flags win over configured values.
pub fn resolve_request(cli: &Cli, config: &VecbinConfig) -> ExtractionRequest {
    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| config.extract.input.clone());
    let grammar = cli
        .grammar
        .map_or(config.extract.grammar, FixtureGrammar::from);

    tracing::debug!(
        input = %input.display(),
        dest = %cli.dest.display(),
        %grammar,
        "resolved extraction request"
    );

    ExtractionRequest::new(input, cli.dest.clone(), grammar)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use pretty_assertions::assert_eq;
    use vecbin_config::ExtractConfig;

    use super::*;

    fn config(input: &str, grammar: FixtureGrammar) -> VecbinConfig {
        VecbinConfig {
            extract: ExtractConfig {
                input: PathBuf::from(input),
                grammar,
            },
        }
    }

    #[test]
    fn config_fills_missing_flags() {
        let cli = Cli::try_parse_from(["vecbin", "out"]).expect("cli should parse");
        let request = resolve_request(&cli, &config("md5.txt", FixtureGrammar::Digest));

        assert_eq!(
            request,
            ExtractionRequest::new("md5.txt", "out", FixtureGrammar::Digest)
        );
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["vecbin", "-i", "bf.txt", "-g", "block-cipher", "out"])
            .expect("cli should parse");
        let request = resolve_request(&cli, &config("md5.txt", FixtureGrammar::Digest));

        assert_eq!(request.input, PathBuf::from("bf.txt"));
        assert_eq!(request.grammar, FixtureGrammar::BlockCipher);
    }
}
