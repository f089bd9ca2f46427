use crate::grammar::Normalization;

/// Apply a grammar's noise rules to raw fixture text.
///
/// Whitespace goes first, then each token in order. Token sets are expected
/// to be order independent (see [`Normalization::is_order_independent`]).
#[must_use]
pub fn normalize(text: &str, rules: &Normalization) -> String {
    let mut normalized: String = if rules.strip_whitespace {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        text.to_owned()
    };

    for token in rules.tokens.iter().filter(|token| !token.is_empty()) {
        if normalized.contains(token) {
            normalized = normalized.replace(token, "");
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grammar::FixtureGrammar;

    #[test]
    fn strips_whitespace_and_vec_markers() {
        let raw = "Test {\n    key: vec![0x00, 0x01],\r\n\tplaintext: vec![0xff],\n}";
        let normalized = normalize(raw, &FixtureGrammar::BlockCipher.normalization());
        assert_eq!(normalized, "Test{key:[0x00,0x01],plaintext:[0xff],}");
    }

    #[test]
    fn empty_rules_are_a_no_op() {
        let raw = "input: \"The quick brown fox\",\n";
        assert_eq!(normalize(raw, &Normalization::NONE), raw);
    }

    #[test]
    fn empty_tokens_are_ignored() {
        let rules = Normalization {
            strip_whitespace: false,
            tokens: &["", "u8"],
        };
        assert_eq!(normalize("0x01u8, 0x02u8", &rules), "0x01, 0x02");
    }
}
