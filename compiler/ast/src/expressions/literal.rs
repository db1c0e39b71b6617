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

use super::*;

/// The payload of a literal expression.
///
/// Character literals do not appear here: the lexer packs them into
/// integers, so by the time the tree is built they are `Integer` values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    /// A machine-word integer literal, decimal, octal, hex, or a packed
    /// character literal.
    Integer(i64),
    /// A double-precision float literal; `nan` produces a quiet NaN here.
    Float(f64),
    /// A boolean literal, `true` or `false`.
    Boolean(bool),
    /// A string literal with escapes already decoded.
    Str(String),
    /// The `nil` (or `null`) literal.
    Nil,
}

/// A literal expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpression {
    /// The literal payload, moved out of the token that carried it.
    pub value: LiteralValue,
    /// The span of the literal token.
    pub span: Span,
}

/// Writes `s` as a double-quoted literal, re-escaping what the lexer decoded.
pub(crate) fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\x07' => write!(f, "\\a")?,
            '\x08' => write!(f, "\\b")?,
            '\x0C' => write!(f, "\\f")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            '\0' => write!(f, "\\0")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "\"")
}

impl fmt::Display for LiteralExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            LiteralValue::Integer(n) => write!(f, "{n}"),
            LiteralValue::Float(v) if v.is_nan() => write!(f, "nan"),
            // `{:?}` keeps a decimal point, so the text re-lexes as a float.
            LiteralValue::Float(v) => write!(f, "{v:?}"),
            LiteralValue::Boolean(b) => write!(f, "{b}"),
            LiteralValue::Str(s) => write_escaped(f, s),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

crate::simple_node_impl!(LiteralExpression);
