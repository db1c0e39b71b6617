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

/// A subscript expression `array[index]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayAccess {
    /// The expression being indexed.
    pub array: Box<Expression>,
    /// The index into the array or dictionary.
    pub index: Box<Expression>,
    /// The span from the array to the closing `]`.
    pub span: Span,
}

impl fmt::Display for ArrayAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.array, self.index)
    }
}

crate::simple_node_impl!(ArrayAccess);

/// A member access expression `inner.name`.
///
/// Both `.` and `->` produce this node; the two spellings are
/// interchangeable and the distinction is deliberately not preserved, so
/// the compiler must not depend on which one was written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberAccess {
    /// The expression the member is accessed on.
    pub inner: Box<Expression>,
    /// The name of the member.
    pub name: Identifier,
    /// The span from the inner expression to the member name.
    pub span: Span,
}

impl fmt::Display for MemberAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.inner, self.name)
    }
}

crate::simple_node_impl!(MemberAccess);

/// An access expression of some sort.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AccessExpression {
    /// A subscript, e.g. `xs[0]`.
    Array(ArrayAccess),
    /// A member access, e.g. `point.x` or `point->x`.
    Member(MemberAccess),
}

impl Node for AccessExpression {
    fn span(&self) -> Span {
        match self {
            AccessExpression::Array(n) => n.span(),
            AccessExpression::Member(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            AccessExpression::Array(n) => n.set_span(span),
            AccessExpression::Member(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for AccessExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessExpression::Array(n) => n.fmt(f),
            AccessExpression::Member(n) => n.fmt(f),
        }
    }
}
