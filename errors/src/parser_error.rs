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

use sparkling_span::Span;

use std::fmt::Display;
use thiserror::Error;

/// A lexical or syntactic error, attributed to the span it was detected at.
///
/// The variant messages are the diagnostic suffix after the
/// `Sparkling: syntax error near line N: ` prefix. Their wording is stable
/// enough to grep for but is not part of the API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    // Lexical errors.
    #[error("no input remaining")]
    LexerEmptyInput { span: Span },

    #[error("unexpected character '{found}'")]
    LexerUnexpectedCharacter { found: char, span: Span },

    #[error("unterminated string literal")]
    LexerStringNotClosed { span: Span },

    #[error("unterminated character literal")]
    LexerCharNotClosed { span: Span },

    #[error("empty character literal")]
    LexerCharEmpty { span: Span },

    #[error("character literal spans {len} bytes -- at most 8 are allowed")]
    LexerCharTooLong { len: usize, span: Span },

    #[error("invalid escape sequence `\\{found}`")]
    LexerInvalidEscape { found: char, span: Span },

    #[error("expected two hexadecimal digits after `\\x`")]
    LexerInvalidHexEscape { span: Span },

    #[error("unterminated block comment")]
    LexerCommentNotClosed { span: Span },

    #[error("expected hexadecimal digits after `0x`")]
    LexerExpectedHexDigits { span: Span },

    #[error("invalid digit `{found}` in octal literal")]
    LexerInvalidOctalDigit { found: char, span: Span },

    #[error("integer literal `{text}` is too large")]
    LexerIntegerOverflow { text: String, span: Span },

    #[error("invalid float literal `{text}`")]
    LexerInvalidFloat { text: String, span: Span },

    #[error("expected `[` or `{{` after `@`")]
    LexerExpectedBracketAfterAt { span: Span },

    // Syntactic errors.
    #[error("expected {expected} -- found `{found}`")]
    Unexpected {
        found: String,
        expected: String,
        span: Span,
    },

    #[error("unexpected token `{found}`")]
    UnexpectedToken { found: String, span: Span },

    #[error("expected a block or another `if` after `else` -- found `{found}`")]
    UnexpectedElseClause { found: String, span: Span },

    #[error("function expressions cannot be named -- remove the name `{name}` or declare the function at file scope")]
    NamedFunctionExpression { name: String, span: Span },
}

impl ParserError {
    pub fn lexer_empty_input(span: Span) -> Self {
        Self::LexerEmptyInput { span }
    }

    pub fn lexer_unexpected_character(found: char, span: Span) -> Self {
        Self::LexerUnexpectedCharacter { found, span }
    }

    pub fn lexer_string_not_closed(span: Span) -> Self {
        Self::LexerStringNotClosed { span }
    }

    pub fn lexer_char_not_closed(span: Span) -> Self {
        Self::LexerCharNotClosed { span }
    }

    pub fn lexer_char_empty(span: Span) -> Self {
        Self::LexerCharEmpty { span }
    }

    pub fn lexer_char_too_long(len: usize, span: Span) -> Self {
        Self::LexerCharTooLong { len, span }
    }

    pub fn lexer_invalid_escape(found: char, span: Span) -> Self {
        Self::LexerInvalidEscape { found, span }
    }

    pub fn lexer_invalid_hex_escape(span: Span) -> Self {
        Self::LexerInvalidHexEscape { span }
    }

    pub fn lexer_comment_not_closed(span: Span) -> Self {
        Self::LexerCommentNotClosed { span }
    }

    pub fn lexer_expected_hex_digits(span: Span) -> Self {
        Self::LexerExpectedHexDigits { span }
    }

    pub fn lexer_invalid_octal_digit(found: char, span: Span) -> Self {
        Self::LexerInvalidOctalDigit { found, span }
    }

    pub fn lexer_integer_overflow(text: impl Display, span: Span) -> Self {
        Self::LexerIntegerOverflow {
            text: text.to_string(),
            span,
        }
    }

    pub fn lexer_invalid_float(text: impl Display, span: Span) -> Self {
        Self::LexerInvalidFloat {
            text: text.to_string(),
            span,
        }
    }

    pub fn lexer_expected_bracket_after_at(span: Span) -> Self {
        Self::LexerExpectedBracketAfterAt { span }
    }

    pub fn unexpected(found: impl Display, expected: impl Display, span: Span) -> Self {
        Self::Unexpected {
            found: found.to_string(),
            expected: expected.to_string(),
            span,
        }
    }

    pub fn unexpected_token(found: impl Display, span: Span) -> Self {
        Self::UnexpectedToken {
            found: found.to_string(),
            span,
        }
    }

    pub fn unexpected_else_clause(found: impl Display, span: Span) -> Self {
        Self::UnexpectedElseClause {
            found: found.to_string(),
            span,
        }
    }

    pub fn named_function_expression(name: impl Display, span: Span) -> Self {
        Self::NamedFunctionExpression {
            name: name.to_string(),
            span,
        }
    }

    /// The span the error is attributed to.
    pub fn span(&self) -> Span {
        use ParserError::*;
        match self {
            LexerEmptyInput { span }
            | LexerUnexpectedCharacter { span, .. }
            | LexerStringNotClosed { span }
            | LexerCharNotClosed { span }
            | LexerCharEmpty { span }
            | LexerCharTooLong { span, .. }
            | LexerInvalidEscape { span, .. }
            | LexerInvalidHexEscape { span }
            | LexerCommentNotClosed { span }
            | LexerExpectedHexDigits { span }
            | LexerInvalidOctalDigit { span, .. }
            | LexerIntegerOverflow { span, .. }
            | LexerInvalidFloat { span, .. }
            | LexerExpectedBracketAfterAt { span }
            | Unexpected { span, .. }
            | UnexpectedToken { span, .. }
            | UnexpectedElseClause { span, .. }
            | NamedFunctionExpression { span, .. } => *span,
        }
    }

    /// The source line the error is attributed to.
    pub fn line(&self) -> u32 {
        self.span().line()
    }
}
