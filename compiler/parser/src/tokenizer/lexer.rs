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

use crate::tokenizer::Token;
use sparkling_errors::{ParserError, Result, SparklingError};
use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{
    fmt,
    iter::{from_fn, Peekable},
};

/// Eat an identifier, that is, a string matching '[a-zA-Z_][a-zA-Z0-9_]*', if any.
fn eat_identifier(input: &mut Peekable<impl Iterator<Item = char>>) -> Option<String> {
    input.peek().filter(|c| c.is_ascii_alphabetic() || **c == '_')?;
    Some(from_fn(|| input.next_if(|c| c.is_ascii_alphanumeric() || c == &'_')).collect())
}

/// Eats the escape sequence after a consumed backslash and decodes it to a
/// single byte. Returns the source length consumed, counting the backslash.
///
/// `in_string` selects the unterminated-literal error to report when the
/// input ends mid-escape.
fn eat_escaped_byte(
    input: &mut Peekable<impl Iterator<Item = char>>,
    span: Span,
    in_string: bool,
) -> Result<(usize, u8)> {
    let not_closed = || -> SparklingError {
        if in_string {
            ParserError::lexer_string_not_closed(span).into()
        } else {
            ParserError::lexer_char_not_closed(span).into()
        }
    };

    match input.next() {
        None => Err(not_closed()),
        Some('\\') => Ok((2, b'\\')),
        Some('/') => Ok((2, b'/')),
        Some('\'') => Ok((2, b'\'')),
        Some('"') => Ok((2, b'"')),
        Some('a') => Ok((2, 0x07)),
        Some('b') => Ok((2, 0x08)),
        Some('f') => Ok((2, 0x0C)),
        Some('n') => Ok((2, b'\n')),
        Some('r') => Ok((2, b'\r')),
        Some('t') => Ok((2, b'\t')),
        Some('0') => Ok((2, 0x00)),
        Some('x') => {
            // Exactly two hex digits; anything shorter or longer is refused.
            let hi = input.next().ok_or_else(not_closed)?;
            let lo = input.next().ok_or_else(not_closed)?;
            match (hi.to_digit(16), lo.to_digit(16)) {
                (Some(hi), Some(lo)) => Ok((4, (hi * 16 + lo) as u8)),
                _ => Err(ParserError::lexer_invalid_hex_escape(span).into()),
            }
        }
        Some(c) => Err(ParserError::lexer_invalid_escape(c, span).into()),
    }
}

impl Token {
    /// Returns a tuple: [(number length, number token)] if a number can be
    /// eaten from the front of `input`, otherwise returns an error.
    ///
    /// Handles hex (`0x1F`), octal (`0755`, a lone `0` included), decimal,
    /// and floats with at least one fractional group (`1.5`, `.5`, `5.`)
    /// and an optional exponent. A `.` directly followed by another `.`
    /// belongs to the concat operator and ends the number.
    fn eat_number(input: &str, span: Span) -> Result<(usize, Token)> {
        let bytes = input.as_bytes();

        if bytes[0] == b'0' && matches!(bytes.get(1), Some(&b'x') | Some(&b'X')) {
            let mut pos = 2;
            while pos < bytes.len() && bytes[pos].is_ascii_hexdigit() {
                pos += 1;
            }
            if pos == 2 {
                return Err(ParserError::lexer_expected_hex_digits(span).into());
            }
            let value = i64::from_str_radix(&input[2..pos], 16)
                .map_err(|_| ParserError::lexer_integer_overflow(&input[..pos], span))?;
            return Ok((pos, Token::Int(value)));
        }

        let mut pos = 0;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let int_end = pos;

        let dotted = matches!(bytes.get(pos), Some(&b'.')) && !matches!(bytes.get(pos + 1), Some(&b'.'));
        if dotted {
            pos += 1;
            let frac_start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            let frac_end = pos;

            // An `e` is only an exponent if digits follow it; `1.e` is the
            // float `1.` and then an identifier.
            let mut exponent = "";
            if matches!(bytes.get(pos), Some(&b'e') | Some(&b'E')) {
                let mut end = pos + 1;
                if matches!(bytes.get(end), Some(&b'+') | Some(&b'-')) {
                    end += 1;
                }
                let digits_start = end;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if end > digits_start {
                    exponent = &input[pos..end];
                    pos = end;
                }
            }

            // Normalize empty groups so the text always parses as a float.
            let int_part = if int_end > 0 { &input[..int_end] } else { "0" };
            let frac_part = if frac_end > frac_start {
                &input[frac_start..frac_end]
            } else {
                "0"
            };
            let normalized = format!("{int_part}.{frac_part}{exponent}");
            let value: f64 = normalized
                .parse()
                .map_err(|_| ParserError::lexer_invalid_float(&input[..pos], span))?;
            return Ok((pos, Token::Float(value)));
        }

        if bytes[0] == b'0' && int_end > 1 {
            if let Some(bad) = input[..int_end].bytes().find(|b| !(b'0'..=b'7').contains(b)) {
                return Err(ParserError::lexer_invalid_octal_digit(char::from(bad), span).into());
            }
            let value = i64::from_str_radix(&input[..int_end], 8)
                .map_err(|_| ParserError::lexer_integer_overflow(&input[..int_end], span))?;
            return Ok((int_end, Token::Int(value)));
        }

        let value: i64 = input[..int_end]
            .parse()
            .map_err(|_| ParserError::lexer_integer_overflow(&input[..int_end], span))?;
        Ok((int_end, Token::Int(value)))
    }

    /// Returns a tuple: [(token length, token)] if the next token can be eaten, otherwise returns an error.
    /// The next token can be eaten if the bytes at the front of the given `input` string can be scanned into a token.
    ///
    /// `span` points at the first character and is attributed to any error.
    pub(crate) fn eat(input: &str, span: Span) -> Result<(usize, Token)> {
        if input.is_empty() {
            return Err(ParserError::lexer_empty_input(span).into());
        }

        let source = input;
        let bytes = input.as_bytes();
        let mut input = input.chars().peekable();

        // Consumes a single character token.
        let single = |input: &mut Peekable<_>, token| {
            input.next();
            Ok((1, token))
        };
        // Consumes a character followed by `on` with `then` if found or `els` otherwise.
        let followed_by = |input: &mut Peekable<_>, on, then, els| {
            input.next();
            Ok(if input.next_if_eq(&on).is_some() {
                (2, then)
            } else {
                (1, els)
            })
        };
        // Consumes a character followed by `on_1`, `on_2` or none. Outputs case_1, case_2, or els.
        let three_cases = |input: &mut Peekable<_>, on_1, case_1, on_2, case_2, els| {
            input.next();
            Ok(if input.next_if_eq(&on_1).is_some() {
                (2, case_1)
            } else if input.next_if_eq(&on_2).is_some() {
                (2, case_2)
            } else {
                (1, els)
            })
        };

        match *input.peek().ok_or_else(|| ParserError::lexer_empty_input(span))? {
            x if x.is_ascii_whitespace() => return single(&mut input, Token::WhiteSpace),
            '"' => {
                input.next();
                let mut len = 1;
                let mut string = String::new();

                loop {
                    match input.next() {
                        None => return Err(ParserError::lexer_string_not_closed(span).into()),
                        Some('"') => {
                            len += 1;
                            break;
                        }
                        Some('\\') => {
                            let (elen, byte) = eat_escaped_byte(&mut input, span, true)?;
                            len += elen;
                            string.push(char::from(byte));
                        }
                        Some(c) => {
                            len += c.len_utf8();
                            string.push(c);
                        }
                    }
                }

                return Ok((len, Token::StringLit(string)));
            }
            '\'' => {
                input.next();
                let mut len = 1;
                let mut packed: SmallVec<[u8; 8]> = SmallVec::new();

                loop {
                    match input.next() {
                        None => return Err(ParserError::lexer_char_not_closed(span).into()),
                        Some('\'') => {
                            len += 1;
                            break;
                        }
                        Some('\\') => {
                            let (elen, byte) = eat_escaped_byte(&mut input, span, false)?;
                            len += elen;
                            packed.push(byte);
                        }
                        Some(c) => {
                            len += c.len_utf8();
                            let mut buf = [0u8; 4];
                            packed.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                        }
                    }
                }

                if packed.is_empty() {
                    return Err(ParserError::lexer_char_empty(span).into());
                }
                if packed.len() > 8 {
                    return Err(ParserError::lexer_char_too_long(packed.len(), span).into());
                }

                // Pack big-endian; a full 8-byte literal may wrap the sign bit.
                let mut value = 0u64;
                for byte in &packed {
                    value = (value << 8) | u64::from(*byte);
                }
                return Ok((len, Token::Int(value as i64)));
            }
            x if x.is_ascii_digit() => return Self::eat_number(source, span),
            '.' if matches!(bytes.get(1), Some(b) if b.is_ascii_digit()) => return Self::eat_number(source, span),
            '.' => {
                input.next();
                return Ok(if input.next_if_eq(&'.').is_some() {
                    if input.next_if_eq(&'=').is_some() {
                        (3, Token::ConcatAssign)
                    } else {
                        (2, Token::DotDot)
                    }
                } else {
                    (1, Token::Dot)
                });
            }
            '@' => {
                input.next();
                return match input.next() {
                    Some('[') => Ok((2, Token::AtLeftSquare)),
                    Some('{') => Ok((2, Token::AtLeftCurly)),
                    _ => Err(ParserError::lexer_expected_bracket_after_at(span).into()),
                };
            }
            '(' => return single(&mut input, Token::LeftParen),
            ')' => return single(&mut input, Token::RightParen),
            '[' => return single(&mut input, Token::LeftSquare),
            ']' => return single(&mut input, Token::RightSquare),
            '{' => return single(&mut input, Token::LeftCurly),
            '}' => return single(&mut input, Token::RightCurly),
            ',' => return single(&mut input, Token::Comma),
            ';' => return single(&mut input, Token::Semicolon),
            ':' => return single(&mut input, Token::Colon),
            '?' => return single(&mut input, Token::Question),
            '~' => return single(&mut input, Token::BitNot),
            '#' => return single(&mut input, Token::Hash),
            '+' => {
                return three_cases(&mut input, '+', Token::Increment, '=', Token::AddAssign, Token::Add)
            }
            '-' => {
                input.next();
                return Ok(if input.next_if_eq(&'-').is_some() {
                    (2, Token::Decrement)
                } else if input.next_if_eq(&'=').is_some() {
                    (2, Token::SubAssign)
                } else if input.next_if_eq(&'>').is_some() {
                    (2, Token::Arrow)
                } else {
                    (1, Token::Minus)
                });
            }
            '*' => return followed_by(&mut input, '=', Token::MulAssign, Token::Mul),
            '/' => {
                input.next();
                if input.next_if_eq(&'*').is_some() {
                    let mut comment = String::from("/*");
                    let mut len = 2;

                    loop {
                        match input.next() {
                            None => return Err(ParserError::lexer_comment_not_closed(span).into()),
                            Some('*') if input.next_if_eq(&'/').is_some() => {
                                comment.push_str("*/");
                                len += 2;
                                break;
                            }
                            Some(c) => {
                                comment.push(c);
                                len += c.len_utf8();
                            }
                        }
                    }
                    return Ok((len, Token::CommentBlock(comment)));
                } else if input.next_if_eq(&'=').is_some() {
                    return Ok((2, Token::DivAssign));
                }
                return Ok((1, Token::Div));
            }
            '%' => return followed_by(&mut input, '=', Token::RemAssign, Token::Rem),
            '=' => return followed_by(&mut input, '=', Token::Eq, Token::Assign),
            '!' => return followed_by(&mut input, '=', Token::NotEq, Token::Not),
            '<' => {
                input.next();
                return Ok(if input.next_if_eq(&'<').is_some() {
                    if input.next_if_eq(&'=').is_some() {
                        (3, Token::ShlAssign)
                    } else {
                        (2, Token::Shl)
                    }
                } else if input.next_if_eq(&'=').is_some() {
                    (2, Token::LtEq)
                } else {
                    (1, Token::Lt)
                });
            }
            '>' => {
                input.next();
                return Ok(if input.next_if_eq(&'>').is_some() {
                    if input.next_if_eq(&'=').is_some() {
                        (3, Token::ShrAssign)
                    } else {
                        (2, Token::Shr)
                    }
                } else if input.next_if_eq(&'=').is_some() {
                    (2, Token::GtEq)
                } else {
                    (1, Token::Gt)
                });
            }
            '&' => {
                return three_cases(&mut input, '&', Token::And, '=', Token::BitAndAssign, Token::BitAnd)
            }
            '|' => return three_cases(&mut input, '|', Token::Or, '=', Token::BitOrAssign, Token::BitOr),
            '^' => return followed_by(&mut input, '=', Token::BitXorAssign, Token::BitXor),
            _ => (),
        }

        if let Some(ident) = eat_identifier(&mut input) {
            let len = ident.len();
            let token = match &*ident {
                // `and`, `or`, `not` and `null` are spelling aliases and
                // canonicalize to the operator/`nil` tokens.
                "and" => Token::And,
                "as" => Token::As,
                "break" => Token::Break,
                "continue" => Token::Continue,
                "do" => Token::Do,
                "else" => Token::Else,
                "false" => Token::False,
                "for" => Token::For,
                "foreach" => Token::Foreach,
                "function" => Token::Function,
                "if" => Token::If,
                "in" => Token::In,
                "nan" => Token::Nan,
                "nil" | "null" => Token::Nil,
                "not" => Token::Not,
                "or" => Token::Or,
                "return" => Token::Return,
                "sizeof" => Token::SizeOf,
                "true" => Token::True,
                "typeof" => Token::TypeOf,
                "var" => Token::Var,
                "while" => Token::While,
                _ => Token::Ident(ident),
            };
            return Ok((len, token));
        }

        match input.peek() {
            Some(&c) => Err(ParserError::lexer_unexpected_character(c, span).into()),
            None => Err(ParserError::lexer_empty_input(span).into()),
        }
    }
}

/// A token together with the span it was scanned from.
#[derive(Clone, Serialize, Deserialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    /// Returns a dummy token at a dummy span.
    ///
    /// The dummy token is deliberately not `Eof` so the parser's stuck-loop
    /// check never fires on a freshly initialized context.
    pub const fn dummy() -> Self {
        Self {
            token: Token::Question,
            span: Span::dummy(),
        }
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ ", self.token.to_string().trim())?;
        self.span.fmt(f)
    }
}

impl fmt::Debug for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <SpannedToken as fmt::Display>::fmt(self, f)
    }
}
