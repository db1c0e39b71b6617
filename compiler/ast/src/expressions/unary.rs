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

/// A unary operator, prefix or postfix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperation {
    /// Unary plus, i.e. `+` in `+x`.
    Plus,
    /// Arithmetic negation, i.e. `-` in `-x`.
    Negate,
    /// Logical negation, i.e. `!` (keyword alias `not`).
    Not,
    /// Bitwise complement, i.e. `~`.
    BitNot,
    /// Pre-increment, i.e. `++x`.
    PreIncrement,
    /// Pre-decrement, i.e. `--x`.
    PreDecrement,
    /// Post-increment, i.e. `x++`.
    PostIncrement,
    /// Post-decrement, i.e. `x--`.
    PostDecrement,
    /// The `sizeof` operator.
    SizeOf,
    /// The `typeof` operator.
    TypeOf,
    /// The `#` operator, yielding the n-th call argument.
    NthArg,
}

impl UnaryOperation {
    /// Returns `true` if the operator is written after its operand.
    pub fn is_postfix(&self) -> bool {
        matches!(self, UnaryOperation::PostIncrement | UnaryOperation::PostDecrement)
    }
}

impl AsRef<str> for UnaryOperation {
    fn as_ref(&self) -> &'static str {
        match self {
            UnaryOperation::Plus => "+",
            UnaryOperation::Negate => "-",
            UnaryOperation::Not => "!",
            UnaryOperation::BitNot => "~",
            UnaryOperation::PreIncrement | UnaryOperation::PostIncrement => "++",
            UnaryOperation::PreDecrement | UnaryOperation::PostDecrement => "--",
            UnaryOperation::SizeOf => "sizeof",
            UnaryOperation::TypeOf => "typeof",
            UnaryOperation::NthArg => "#",
        }
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// An unary expression applying an operator to an operand.
/// For example, `-x` or `x++`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    /// The operand the operation is applied to.
    pub receiver: Box<Expression>,
    /// The operation applied to the operand.
    pub op: UnaryOperation,
    /// The span covering operator and operand.
    pub span: Span,
}

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            op if op.is_postfix() => write!(f, "({}{})", self.receiver, op),
            UnaryOperation::SizeOf | UnaryOperation::TypeOf => write!(f, "({} {})", self.op, self.receiver),
            _ => write!(f, "({}{})", self.op, self.receiver),
        }
    }
}

crate::simple_node_impl!(UnaryExpression);
