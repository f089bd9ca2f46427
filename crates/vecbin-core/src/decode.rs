//! Field literal decoding.

use crate::error::DecodeError;
use crate::grammar::LiteralShape;

const TYPE_SUFFIXES: [&str; 2] = ["_u8", "u8"];

/// Decode one captured field literal into raw bytes.
///
/// The shape comes from the grammar and is never guessed from the literal.
/// Output byte order follows token (or digit pair) order.
///
/// # Errors
///
/// Returns a [`DecodeError`] if any part of the literal does not conform to
/// `shape`.
///
/// # Examples
///
/// ```
/// use vecbin_core::{LiteralShape, decode_literal};
///
/// let bytes = decode_literal("0x1a, 0x2b, 0x3c", LiteralShape::NumericList).unwrap();
/// assert_eq!(bytes, [0x1a, 0x2b, 0x3c]);
///
/// assert!(decode_literal("abc", LiteralShape::HexString).is_err());
/// ```
pub fn decode_literal(literal: &str, shape: LiteralShape) -> Result<Vec<u8>, DecodeError> {
    match shape {
        LiteralShape::NumericList => decode_numeric_list(literal),
        LiteralShape::HexString => decode_hex_string(literal),
        LiteralShape::Text => decode_text(literal),
    }
}

fn decode_numeric_list(literal: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    // A single trailing comma is valid list syntax.
    let body = trimmed.strip_suffix(',').unwrap_or(trimmed);

    body.split(',')
        .enumerate()
        .map(|(position, token)| decode_numeric_token(token.trim(), position))
        .collect()
}

fn decode_numeric_token(token: &str, position: usize) -> Result<u8, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::EmptyToken { position });
    }

    let unsuffixed = TYPE_SUFFIXES
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token);

    let (digits, radix) = match unsuffixed
        .strip_prefix("0x")
        .or_else(|| unsuffixed.strip_prefix("0X"))
    {
        Some(hex_digits) => (hex_digits, 16),
        None => (unsuffixed, 10),
    };

    let digits = digits.replace('_', "");
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(DecodeError::InvalidDigits {
            token: token.to_owned(),
        });
    }
    u8::from_str_radix(&digits, radix).map_err(|source| DecodeError::InvalidByte {
        token: token.to_owned(),
        source,
    })
}

fn decode_hex_string(literal: &str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(literal).map_err(|source| DecodeError::InvalidHex {
        literal: literal.to_owned(),
        source,
    })
}

/// Resolve the escapes of a Rust string literal body.
fn decode_text(literal: &str) -> Result<Vec<u8>, DecodeError> {
    let mut text = String::with_capacity(literal.len());
    let mut chars = literal.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }

        let escape = chars.next().ok_or_else(|| DecodeError::InvalidEscape {
            escape: "\\".to_owned(),
        })?;
        match escape {
            'n' => text.push('\n'),
            'r' => text.push('\r'),
            't' => text.push('\t'),
            '0' => text.push('\0'),
            '\\' | '\'' | '"' => text.push(escape),
            'x' => {
                let digits: String = chars.by_ref().take(2).collect();
                let value = (digits.len() == 2)
                    .then(|| u8::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .filter(u8::is_ascii)
                    .ok_or_else(|| DecodeError::InvalidEscape {
                        escape: format!("\\x{digits}"),
                    })?;
                text.push(char::from(value));
            }
            'u' => text.push(decode_unicode_escape(&mut chars)?),
            '\n' => {
                while chars.next_if(|next| next.is_whitespace()).is_some() {}
            }
            other => {
                return Err(DecodeError::InvalidEscape {
                    escape: format!("\\{other}"),
                });
            }
        }
    }

    Ok(text.into_bytes())
}

fn decode_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<char, DecodeError> {
    let mut body = String::new();
    let mut closed = false;

    if chars.next_if_eq(&'{').is_some() {
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            body.push(c);
        }
    }

    let invalid = || DecodeError::InvalidEscape {
        escape: format!("\\u{{{body}}}"),
    };
    if !closed {
        return Err(invalid());
    }

    u32::from_str_radix(&body.replace('_', ""), 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0x1a, 0x2b, 0x3c", &[0x1a, 0x2b, 0x3c])]
    #[case("0x1a,0x2b,0x3c", &[0x1a, 0x2b, 0x3c])]
    #[case("0xffu8,0x00_u8", &[0xff, 0x00])]
    #[case("0XAB", &[0xab])]
    #[case("255, 0, 10", &[255, 0, 10])]
    #[case("0x0_1", &[0x01])]
    #[case("0x01,0x02,", &[0x01, 0x02])]
    #[case("", &[])]
    fn numeric_lists_decode_in_order(#[case] literal: &str, #[case] expected: &[u8]) {
        let bytes = decode_literal(literal, LiteralShape::NumericList).expect("decodes");
        assert_eq!(bytes, expected);
    }

    #[rstest]
    #[case("0x100")]
    #[case("256")]
    #[case("0xzz")]
    #[case("ff")]
    #[case("-1")]
    #[case("0x01,,0x02")]
    #[case("0x+f")]
    #[case("+5")]
    fn malformed_numeric_lists_fail(#[case] literal: &str) {
        assert!(decode_literal(literal, LiteralShape::NumericList).is_err());
    }

    #[test]
    fn empty_token_reports_position() {
        let error = decode_literal("0x01,,0x02", LiteralShape::NumericList).unwrap_err();
        assert!(matches!(error, DecodeError::EmptyToken { position: 1 }));
    }

    #[test]
    fn signed_tokens_are_rejected_as_non_digits() {
        let error = decode_literal("0x+f", LiteralShape::NumericList).unwrap_err();
        assert!(matches!(error, DecodeError::InvalidDigits { token } if token == "0x+f"));
    }

    #[test]
    fn hex_string_round_trips() {
        let bytes = decode_literal("deadbeef", LiteralShape::HexString).expect("decodes");
        assert_eq!(bytes, [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex::encode(&bytes), "deadbeef");

        let upper = decode_literal("DEADBEEF", LiteralShape::HexString).expect("decodes");
        assert_eq!(upper, bytes);
    }

    #[test]
    fn odd_length_hex_string_fails() {
        let error = decode_literal("abc", LiteralShape::HexString).unwrap_err();
        assert!(matches!(
            error,
            DecodeError::InvalidHex {
                source: hex::FromHexError::OddLength,
                ..
            }
        ));
    }

    #[test]
    fn non_hex_string_fails() {
        assert!(decode_literal("zz", LiteralShape::HexString).is_err());
    }

    #[test]
    fn empty_hex_string_is_empty() {
        assert_eq!(
            decode_literal("", LiteralShape::HexString).expect("decodes"),
            Vec::<u8>::new()
        );
    }

    #[rstest]
    #[case("abc", b"abc".as_slice())]
    #[case("", b"".as_slice())]
    #[case(r#"say \"hi\""#, br#"say "hi""#.as_slice())]
    #[case(r"a\nb\t\\", b"a\nb\t\\".as_slice())]
    #[case(r"\x41\0", b"A\0".as_slice())]
    #[case(r"\u{e9}", "\u{e9}".as_bytes())]
    #[case("line \\\n     continued", b"line continued".as_slice())]
    fn text_literals_resolve_escapes(#[case] literal: &str, #[case] expected: &[u8]) {
        let bytes = decode_literal(literal, LiteralShape::Text).expect("decodes");
        assert_eq!(bytes, expected);
    }

    #[rstest]
    #[case(r"\q")]
    #[case(r"\xff")]
    #[case(r"\x4")]
    #[case(r"\u{110000}")]
    #[case(r"\u{41")]
    #[case("trailing\\")]
    fn malformed_text_escapes_fail(#[case] literal: &str) {
        assert!(matches!(
            decode_literal(literal, LiteralShape::Text),
            Err(DecodeError::InvalidEscape { .. })
        ));
    }
}
