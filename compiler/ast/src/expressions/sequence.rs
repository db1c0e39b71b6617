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

/// A sequence literal `@[ 1, 2, 3 ]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceExpression {
    /// The element expressions, in source order.
    pub elements: Vec<Expression>,
    /// The span from `@[` to `]`.
    pub span: Span,
}

impl fmt::Display for SequenceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            element.fmt(f)?;
        }
        write!(f, "]")
    }
}

crate::simple_node_impl!(SequenceExpression);
