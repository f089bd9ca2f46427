use clap::ValueEnum;
use vecbin_core::FixtureGrammar;

/// Report format on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Tuple list and quoted identifier list, one line each.
    Text,
    Json,
}

/// Fixture grammar selectable on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum GrammarArg {
    /// `Test { input: vec![..], cost: 5, salt: vec![..], output: vec![..] }`
    Bcrypt,
    /// `Test { key: vec![..], plaintext: vec![..], ciphertext: vec![..] }`
    BlockCipher,
    /// `Test { input: "..", output_str: "<hex>" }`
    Digest,
}

impl From<GrammarArg> for FixtureGrammar {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::Bcrypt => Self::Bcrypt,
            GrammarArg::BlockCipher => Self::BlockCipher,
            GrammarArg::Digest => Self::Digest,
        }
    }
}

/// Flags shared by the handler, output and progress layers.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}
