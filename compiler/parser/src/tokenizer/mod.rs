// Copyright (C) 2019-2022 The Sparkling Developers.
// This file is part of the Sparkling library.

// The Sparkling library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Sparkling library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Sparkling library. If not, see <https://www.gnu.org/licenses/>.

//! The tokenizer to convert Sparkling code text into tokens.
//!
//! This module contains the [`tokenize()`] method which breaks down string
//! text into spanned tokens, separated by whitespace.

pub(crate) mod token;

pub use self::token::KEYWORD_TOKENS;
pub(crate) use self::token::*;

pub(crate) mod lexer;
pub(crate) use self::lexer::*;

use sparkling_errors::Result;
use sparkling_span::Span;

use std::iter;

/// Creates a new vector of spanned tokens from the given source code text.
///
/// Whitespace is dropped here; comments survive as tokens and are stripped
/// by the parser context, so that a lone comment still counts as input.
pub(crate) fn tokenize(input: &str) -> Result<Vec<SpannedToken>> {
    tokenize_iter(input).collect()
}

/// Yields spanned tokens from the given source code text.
///
/// Lines and columns are counted here, over every consumed character, so a
/// token's span starts at the token's first character and multi-line tokens
/// (comments, strings) advance the line counter. After an error the
/// iterator is fused; the first error is the only one.
pub(crate) fn tokenize_iter(input: &str) -> impl '_ + Iterator<Item = Result<SpannedToken>> {
    let mut index = 0usize;
    let mut line = 1u32;
    let mut col = 1u32;
    iter::from_fn(move || {
        while input.len() > index {
            let start = Span::new(line, line, col, col);
            let (token_len, token) = match Token::eat(&input[index..], start) {
                Err(e) => {
                    index = input.len();
                    return Some(Err(e));
                }
                Ok(t) => t,
            };

            let consumed = &input[index..index + token_len];
            index += token_len;
            for c in consumed.chars() {
                if c == '\n' {
                    line += 1;
                    col = 1;
                } else {
                    col += 1;
                }
            }

            match token {
                Token::WhiteSpace => continue,
                _ => {
                    let span = Span::new(start.line_start, line, start.col_start, col);
                    return Some(Ok(SpannedToken { token, span }));
                }
            }
        }

        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkling_errors::{ParserError, SparklingError};

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("tokenizing failed")
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    fn lex_err(source: &str) -> SparklingError {
        tokenize(source).expect_err("tokenizing should have failed")
    }

    #[test]
    fn test_symbols_and_keywords() {
        let raw = r#"
    test_ident
    12345
    as break continue do else false for foreach function if in nan nil return
    sizeof true typeof var while
    ! != && ( ) [ ] { } @[ @{ * + , - -> . .. ..= / % : ; < <= << <<= = ==
    > >= >> >>= ? ~ # & && | || ^ ++ -- += -= *= /= %= &= |= ^=
    /* comment */
    "#;
        let expected = "test_ident 12345 as break continue do else false for foreach function \
                        if in nan nil return sizeof true typeof var while \
                        ! != && ( ) [ ] { } @[ @{ * + , - -> . .. ..= / % : ; < <= << <<= = == \
                        > >= >> >>= ? ~ # & && | || ^ ++ -- += -= *= /= %= &= |= ^= \
                        /* comment */";
        let output = tokens(raw)
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_keyword_aliases() {
        assert_eq!(tokens("and or not null"), vec![Token::And, Token::Or, Token::Not, Token::Nil]);
        assert_eq!(tokens("&& || ! nil"), vec![Token::And, Token::Or, Token::Not, Token::Nil]);
    }

    #[test]
    fn test_keyword_tokens_are_keywords() {
        for token in KEYWORD_TOKENS {
            assert!(token.is_keyword(), "{token} should be a keyword");
        }
        assert!(!Token::Ident("x".into()).is_keyword());
    }

    #[test]
    fn test_integer_bases() {
        assert_eq!(tokens("42"), vec![Token::Int(42)]);
        assert_eq!(tokens("0"), vec![Token::Int(0)]);
        assert_eq!(tokens("0755"), vec![Token::Int(0o755)]);
        assert_eq!(tokens("0x1F"), vec![Token::Int(0x1F)]);
        assert_eq!(tokens("0Xab"), vec![Token::Int(0xAB)]);
    }

    #[test]
    fn test_floats() {
        assert_eq!(tokens("3.25"), vec![Token::Float(3.25)]);
        assert_eq!(tokens(".5"), vec![Token::Float(0.5)]);
        assert_eq!(tokens("5."), vec![Token::Float(5.0)]);
        assert_eq!(tokens("2.5e3"), vec![Token::Float(2500.0)]);
        assert_eq!(tokens("2.5E-1"), vec![Token::Float(0.25)]);
        assert_eq!(tokens("5.e2"), vec![Token::Float(500.0)]);
    }

    #[test]
    fn test_float_requires_fraction() {
        // No fractional group means no float: `1e5` is an int and an ident.
        assert_eq!(tokens("1e5"), vec![Token::Int(1), Token::Ident("e5".into())]);
        // A dangling `e` stays outside the literal.
        assert_eq!(tokens("1.e"), vec![Token::Float(1.0), Token::Ident("e".into())]);
    }

    #[test]
    fn test_dots_after_integers_are_concat() {
        assert_eq!(tokens("1..2"), vec![Token::Int(1), Token::DotDot, Token::Int(2)]);
        assert_eq!(tokens("s ..= t"), vec![
            Token::Ident("s".into()),
            Token::ConcatAssign,
            Token::Ident("t".into())
        ]);
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(tokens(r#""""#), vec![Token::StringLit(String::new())]);
        assert_eq!(
            tokens(r#""a\tb\n\"q\" \\ \/ \' \x41""#),
            vec![Token::StringLit("a\tb\n\"q\" \\ / ' A".into())]
        );
        assert_eq!(tokens(r#""\a\b\f\r\0""#), vec![Token::StringLit(
            "\x07\x08\x0C\r\0".into()
        )]);
    }

    #[test]
    fn test_character_literals_pack_big_endian() {
        assert_eq!(tokens("'a'"), vec![Token::Int(0x61)]);
        assert_eq!(tokens("'AB'"), vec![Token::Int(0x4142)]);
        assert_eq!(tokens("'abcdefgh'"), vec![Token::Int(0x6162636465666768)]);
        assert_eq!(tokens(r"'\x01\x02'"), vec![Token::Int(0x0102)]);
        assert_eq!(tokens(r"'\''"), vec![Token::Int(0x27)]);
    }

    #[test]
    fn test_lexical_errors() {
        assert!(matches!(
            lex_err("\"abc"),
            SparklingError::ParserError(ParserError::LexerStringNotClosed { .. })
        ));
        assert!(matches!(
            lex_err("'abc"),
            SparklingError::ParserError(ParserError::LexerCharNotClosed { .. })
        ));
        assert!(matches!(
            lex_err("''"),
            SparklingError::ParserError(ParserError::LexerCharEmpty { .. })
        ));
        assert!(matches!(
            lex_err("'abcdefghi'"),
            SparklingError::ParserError(ParserError::LexerCharTooLong { len: 9, .. })
        ));
        assert!(matches!(
            lex_err(r#""\q""#),
            SparklingError::ParserError(ParserError::LexerInvalidEscape { found: 'q', .. })
        ));
        assert!(matches!(
            lex_err(r#""\xG1""#),
            SparklingError::ParserError(ParserError::LexerInvalidHexEscape { .. })
        ));
        assert!(matches!(
            lex_err("/* no end"),
            SparklingError::ParserError(ParserError::LexerCommentNotClosed { .. })
        ));
        assert!(matches!(
            lex_err("0x"),
            SparklingError::ParserError(ParserError::LexerExpectedHexDigits { .. })
        ));
        assert!(matches!(
            lex_err("0788"),
            SparklingError::ParserError(ParserError::LexerInvalidOctalDigit { found: '8', .. })
        ));
        assert!(matches!(
            lex_err("99999999999999999999"),
            SparklingError::ParserError(ParserError::LexerIntegerOverflow { .. })
        ));
        assert!(matches!(
            lex_err("@x"),
            SparklingError::ParserError(ParserError::LexerExpectedBracketAfterAt { .. })
        ));
        assert!(matches!(
            lex_err("`"),
            SparklingError::ParserError(ParserError::LexerUnexpectedCharacter { found: '`', .. })
        ));
    }

    #[test]
    fn test_line_attribution() {
        let toks = tokenize("a\n  b /* c\nc */ d\n").expect("tokenizing failed");
        let lines: Vec<(String, u32)> = toks
            .iter()
            .map(|t| (t.token.to_string(), t.span.line_start))
            .collect();
        assert_eq!(lines, vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("/* c\nc */".to_string(), 2),
            ("d".to_string(), 3),
        ]);
        // The comment spans two lines.
        assert_eq!(toks[2].span.line_stop, 3);
    }

    #[test]
    fn test_unterminated_string_reports_start_line() {
        let err = lex_err("a;\n\n\"open\nno end");
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_non_ascii_only_in_strings_and_comments() {
        assert_eq!(tokens("\"héllo\""), vec![Token::StringLit("héllo".into())]);
        assert_eq!(tokens("/* héllo */ x").len(), 2);
        assert!(matches!(
            lex_err("héllo"),
            SparklingError::ParserError(ParserError::LexerUnexpectedCharacter { .. })
        ));
    }
}
