//! Pattern-based case extraction.
//!
//! Matches are collected left to right without overlap. Text that matches
//! nothing yields an empty case list, never an error.

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::ExtractError;
use crate::grammar::{FieldSpec, FixtureGrammar};

/// One captured field literal of a test case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CaseField {
    #[serde(rename = "role", serialize_with = "serialize_role")]
    pub spec: FieldSpec,
    pub literal: String,
}

impl CaseField {
    #[must_use]
    pub const fn role(&self) -> &'static str {
        self.spec.role
    }
}

fn serialize_role<S: Serializer>(spec: &FieldSpec, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(spec.role)
}

/// A matched test case with fields in the grammar's write order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestCase {
    /// 1-based position in document order.
    pub index: usize,
    pub fields: Vec<CaseField>,
}

impl TestCase {
    /// The captured literal for `role`, if the grammar has that role.
    #[must_use]
    pub fn literal(&self, role: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.role() == role)
            .map(|field| field.literal.as_str())
    }
}

/// Compiled case pattern for one grammar.
#[derive(Debug)]
pub struct CaseExtractor {
    grammar: FixtureGrammar,
    pattern: Regex,
}

impl CaseExtractor {
    /// Compile the pattern of `grammar`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Pattern`] if the pattern does not compile.
    pub fn new(grammar: FixtureGrammar) -> Result<Self, ExtractError> {
        let pattern = Regex::new(grammar.pattern()).map_err(|source| ExtractError::Pattern {
            grammar,
            source: Box::new(source),
        })?;
        Ok(Self { grammar, pattern })
    }

    #[must_use]
    pub const fn grammar(&self) -> FixtureGrammar {
        self.grammar
    }

    /// Collect every case in `normalized`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MissingSlot`] if a field slot of the grammar
    /// did not participate in a match.
    pub fn extract(&self, normalized: &str) -> Result<Vec<TestCase>, ExtractError> {
        let mut cases = Vec::new();

        for captures in self.pattern.captures_iter(normalized) {
            let mut fields = Vec::with_capacity(self.grammar.fields().len());
            for spec in self.grammar.fields() {
                let literal = captures
                    .name(spec.slot)
                    .ok_or(ExtractError::MissingSlot {
                        grammar: self.grammar,
                        slot: spec.slot,
                    })?
                    .as_str()
                    .to_owned();
                fields.push(CaseField {
                    spec: *spec,
                    literal,
                });
            }
            cases.push(TestCase {
                index: cases.len() + 1,
                fields,
            });
        }

        tracing::debug!(grammar = %self.grammar, cases = cases.len(), "extracted fixture cases");
        Ok(cases)
    }
}
