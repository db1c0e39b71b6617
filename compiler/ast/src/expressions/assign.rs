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

/// An assignment operator.
///
/// Compound assignments are kept as distinct operations rather than being
/// rewritten into a binary expression plus a plain assignment; the compiler
/// consumes them as-is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOperation {
    /// Plain assignment, i.e. `=`.
    Assign,
    /// Add and assign, i.e. `+=`.
    Add,
    /// Subtract and assign, i.e. `-=`.
    Sub,
    /// Multiply and assign, i.e. `*=`.
    Mul,
    /// Divide and assign, i.e. `/=`.
    Div,
    /// Modulo and assign, i.e. `%=`.
    Rem,
    /// Bitwise-and and assign, i.e. `&=`.
    BitAnd,
    /// Bitwise-or and assign, i.e. `|=`.
    BitOr,
    /// Bitwise-xor and assign, i.e. `^=`.
    BitXor,
    /// Shift left and assign, i.e. `<<=`.
    Shl,
    /// Shift right and assign, i.e. `>>=`.
    Shr,
    /// Concatenate and assign, i.e. `..=`.
    Concat,
}

impl AsRef<str> for AssignOperation {
    fn as_ref(&self) -> &'static str {
        match self {
            AssignOperation::Assign => "=",
            AssignOperation::Add => "+=",
            AssignOperation::Sub => "-=",
            AssignOperation::Mul => "*=",
            AssignOperation::Div => "/=",
            AssignOperation::Rem => "%=",
            AssignOperation::BitAnd => "&=",
            AssignOperation::BitOr => "|=",
            AssignOperation::BitXor => "^=",
            AssignOperation::Shl => "<<=",
            AssignOperation::Shr => ">>=",
            AssignOperation::Concat => "..=",
        }
    }
}

impl fmt::Display for AssignOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// An assignment expression `place op value`, e.g. `x = 1` or `x ..= "s"`.
///
/// Assignments are expressions in Sparkling and associate to the right, so
/// `a = b = c` assigns `c` to both places.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignExpression {
    /// The place the value is assigned to.
    pub place: Box<Expression>,
    /// The value produced and stored.
    pub value: Box<Expression>,
    /// The operation performed.
    pub op: AssignOperation,
    /// The span from `place` to `value`.
    pub span: Span,
}

impl fmt::Display for AssignExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.place, self.op, self.value)
    }
}

crate::simple_node_impl!(AssignExpression);
