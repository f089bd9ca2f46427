//! The closed set of fixture grammars.
//!
//! A grammar fixes everything that differs between fixture families: the
//! noise removed before matching, the case pattern, the literal shape of each
//! captured field, and how artifacts and case identifiers are named.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a captured field literal encodes its bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralShape {
    /// Comma-separated byte tokens: `0x1a,0x2bu8,7`.
    NumericList,
    /// Contiguous hex digit pairs: `deadbeef`.
    HexString,
    /// Body of a Rust string literal; the field is its UTF-8 encoding.
    Text,
}

/// One captured field of a test case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name of the capture slot in the grammar pattern.
    pub slot: &'static str,
    /// Role used when naming the artifact file.
    pub role: &'static str,
    pub shape: LiteralShape,
}

impl FieldSpec {
    const fn new(slot: &'static str, role: &'static str, shape: LiteralShape) -> Self {
        Self { slot, role, shape }
    }
}

/// Noise removed from fixture text before pattern matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Normalization {
    /// Remove every whitespace character.
    pub strip_whitespace: bool,
    /// Literal tokens removed everywhere, in order.
    pub tokens: &'static [&'static str],
}

impl Normalization {
    pub const NONE: Self = Self {
        strip_whitespace: false,
        tokens: &[],
    };

    /// Returns `true` when no token contains another, so removal order
    /// cannot change the result.
    #[must_use]
    pub fn is_order_independent(&self) -> bool {
        self.tokens.iter().enumerate().all(|(i, outer)| {
            self.tokens
                .iter()
                .enumerate()
                .all(|(j, inner)| i == j || !outer.contains(inner))
        })
    }
}

/// How the case identifier list is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierStyle {
    /// The bare 1-based index: `1`.
    Index,
    /// The output root joined with the artifact stem: `<root>/test1`.
    RootedStem,
}

/// Naming template for artifacts: `<root>/<prefix><index>.<role>[.<extension>]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArtifactLayout {
    pub prefix: &'static str,
    pub extension: Option<&'static str>,
    pub identifier: IdentifierStyle,
}

impl ArtifactLayout {
    /// File stem shared by every artifact of one case.
    #[must_use]
    pub fn stem(&self, index: usize) -> String {
        format!("{}{index}", self.prefix)
    }

    #[must_use]
    pub fn file_name(&self, index: usize, role: &str) -> String {
        match self.extension {
            Some(extension) => format!("{}.{role}.{extension}", self.stem(index)),
            None => format!("{}.{role}", self.stem(index)),
        }
    }
}

const BCRYPT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("salt", "salt", LiteralShape::NumericList),
    FieldSpec::new("input", "input", LiteralShape::NumericList),
    FieldSpec::new("output", "output", LiteralShape::NumericList),
];

const BLOCK_CIPHER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("key", "key", LiteralShape::NumericList),
    FieldSpec::new("plaintext", "input", LiteralShape::NumericList),
    FieldSpec::new("ciphertext", "output", LiteralShape::NumericList),
];

const DIGEST_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("input", "input", LiteralShape::Text),
    FieldSpec::new("output", "output", LiteralShape::HexString),
];

const BCRYPT_PATTERN: &str = concat!(
    r"Test\{input:\[(?P<input>[\w,]*)\],cost:5,",
    r"salt:\[(?P<salt>[\w,]*)\],",
    r"output:\[(?P<output>[\w,]*)\],?\}",
);

const BLOCK_CIPHER_PATTERN: &str = concat!(
    r"Test\{key:\[(?P<key>[\w,]*)\],",
    r"plaintext:\[(?P<plaintext>[\w,]*)\],",
    r"ciphertext:\[(?P<ciphertext>[\w,]*)\],?\}",
);

// Whitespace is kept for this grammar so text inputs survive; the pattern
// tolerates it instead. An optional `output: [..]` array before
// `output_str` is skipped.
const DIGEST_PATTERN: &str = concat!(
    r#"Test\s*\{\s*input:\s*"(?P<input>(?:[^"\\]|\\(?s:.))*)"\s*,\s*"#,
    r"(?:output:\s*(?:vec!\s*)?\[[^\]]*\]\s*,\s*)?",
    r#"output_str:\s*"(?P<output>[^"]*)"\s*,?\s*\}"#,
);

/// A fixture family understood by vecbin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixtureGrammar {
    /// `Test { input: vec![..], cost: 5, salt: vec![..], output: vec![..] }`
    Bcrypt,
    /// `Test { key: vec![..], plaintext: vec![..], ciphertext: vec![..] }`
    BlockCipher,
    /// `Test { input: "..", output_str: ".." }`
    Digest,
}

impl FixtureGrammar {
    pub const ALL: [Self; 3] = [Self::Bcrypt, Self::BlockCipher, Self::Digest];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bcrypt => "bcrypt",
            Self::BlockCipher => "block-cipher",
            Self::Digest => "digest",
        }
    }

    /// Captured fields in artifact write order.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Bcrypt => BCRYPT_FIELDS,
            Self::BlockCipher => BLOCK_CIPHER_FIELDS,
            Self::Digest => DIGEST_FIELDS,
        }
    }

    #[must_use]
    pub const fn normalization(self) -> Normalization {
        match self {
            Self::Bcrypt | Self::BlockCipher => Normalization {
                strip_whitespace: true,
                tokens: &["vec!"],
            },
            Self::Digest => Normalization::NONE,
        }
    }

    /// Case pattern, applied to normalized text.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Bcrypt => BCRYPT_PATTERN,
            Self::BlockCipher => BLOCK_CIPHER_PATTERN,
            Self::Digest => DIGEST_PATTERN,
        }
    }

    #[must_use]
    pub const fn layout(self) -> ArtifactLayout {
        match self {
            Self::Bcrypt | Self::BlockCipher => ArtifactLayout {
                prefix: "",
                extension: Some("bin"),
                identifier: IdentifierStyle::Index,
            },
            Self::Digest => ArtifactLayout {
                prefix: "test",
                extension: None,
                identifier: IdentifierStyle::RootedStem,
            },
        }
    }
}

impl fmt::Display for FixtureGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
