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

use crate::{Identifier, Node};

use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

mod access;
pub use access::*;
mod assign;
pub use assign::*;
mod binary;
pub use binary::*;
mod call;
pub use call::*;
mod dictionary;
pub use dictionary::*;
mod function;
pub use function::*;
mod literal;
pub use literal::*;
mod sequence;
pub use sequence::*;
mod ternary;
pub use ternary::*;
mod unary;
pub use unary::*;

/// Expression that evaluates to a value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// An identifier expression.
    Identifier(Identifier),
    /// A literal expression.
    Literal(LiteralExpression),
    /// A binary expression, e.g., `42 + 24`.
    Binary(BinaryExpression),
    /// An unary expression, prefix or postfix.
    Unary(UnaryExpression),
    /// An assignment expression, simple or compound, e.g., `x = 1` or `x += 1`.
    Assign(AssignExpression),
    /// A ternary conditional expression `cond ? if_true : if_false`.
    Ternary(TernaryExpression),
    /// An access expression, e.g., `array[idx]` or `foo.bar`.
    Access(AccessExpression),
    /// A call expression like `f(args)`.
    Call(CallExpression),
    /// An anonymous function expression.
    Function(FunctionExpression),
    /// A sequence literal `@[ ... ]`.
    Sequence(SequenceExpression),
    /// A dictionary literal `@{ ... }`.
    Dictionary(DictionaryExpression),
}

impl Node for Expression {
    fn span(&self) -> Span {
        use Expression::*;
        match self {
            Identifier(n) => n.span(),
            Literal(n) => n.span(),
            Binary(n) => n.span(),
            Unary(n) => n.span(),
            Assign(n) => n.span(),
            Ternary(n) => n.span(),
            Access(n) => n.span(),
            Call(n) => n.span(),
            Function(n) => n.span(),
            Sequence(n) => n.span(),
            Dictionary(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            Identifier(n) => n.set_span(span),
            Literal(n) => n.set_span(span),
            Binary(n) => n.set_span(span),
            Unary(n) => n.set_span(span),
            Assign(n) => n.set_span(span),
            Ternary(n) => n.set_span(span),
            Access(n) => n.set_span(span),
            Call(n) => n.set_span(span),
            Function(n) => n.set_span(span),
            Sequence(n) => n.set_span(span),
            Dictionary(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expression::*;
        match self {
            Identifier(n) => n.fmt(f),
            Literal(n) => n.fmt(f),
            Binary(n) => n.fmt(f),
            Unary(n) => n.fmt(f),
            Assign(n) => n.fmt(f),
            Ternary(n) => n.fmt(f),
            Access(n) => n.fmt(f),
            Call(n) => n.fmt(f),
            Function(n) => n.fmt(f),
            Sequence(n) => n.fmt(f),
            Dictionary(n) => n.fmt(f),
        }
    }
}
