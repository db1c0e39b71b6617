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

/// A binary operator.
///
/// Precedence and associativity are defined in the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperation {
    /// String concatenation, i.e. `..`.
    Concat,
    /// Logical-or, i.e. `||` (keyword alias `or`).
    Or,
    /// Logical-and, i.e. `&&` (keyword alias `and`).
    And,
    /// Equality relation, i.e. `==`.
    Eq,
    /// In-equality relation, i.e. `!=`.
    Ne,
    /// Lesser-than relation, i.e. `<`.
    Lt,
    /// Greater-than relation, i.e. `>`.
    Gt,
    /// Lesser-or-equal relation, i.e. `<=`.
    Le,
    /// Greater-or-equal relation, i.e. `>=`.
    Ge,
    /// Bitwise inclusive or, i.e. `|`.
    BitOr,
    /// Bitwise exclusive or, i.e. `^`.
    BitXor,
    /// Bitwise and, i.e. `&`.
    BitAnd,
    /// Shift left, i.e. `<<`.
    Shl,
    /// Shift right, i.e. `>>`.
    Shr,
    /// Addition, i.e. `+`.
    Add,
    /// Subtraction, i.e. `-`.
    Sub,
    /// Multiplication, i.e. `*`.
    Mul,
    /// Division, i.e. `/`.
    Div,
    /// Modulo, i.e. `%`.
    Rem,
}

impl AsRef<str> for BinaryOperation {
    fn as_ref(&self) -> &'static str {
        match self {
            BinaryOperation::Concat => "..",
            BinaryOperation::Or => "||",
            BinaryOperation::And => "&&",
            BinaryOperation::Eq => "==",
            BinaryOperation::Ne => "!=",
            BinaryOperation::Lt => "<",
            BinaryOperation::Gt => ">",
            BinaryOperation::Le => "<=",
            BinaryOperation::Ge => ">=",
            BinaryOperation::BitOr => "|",
            BinaryOperation::BitXor => "^",
            BinaryOperation::BitAnd => "&",
            BinaryOperation::Shl => "<<",
            BinaryOperation::Shr => ">>",
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mul => "*",
            BinaryOperation::Div => "/",
            BinaryOperation::Rem => "%",
        }
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// A binary expression `left op right` of two operands separated by some operator.
/// For example, `foo + bar`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    /// The left operand of the expression.
    pub left: Box<Expression>,
    /// The right operand of the expression.
    pub right: Box<Expression>,
    /// The operand defining the meaning of the resulting binary expression.
    pub op: BinaryOperation,
    /// The span from `left` to `right`.
    pub span: Span,
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

crate::simple_node_impl!(BinaryExpression);
