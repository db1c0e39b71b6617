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

/// A function call expression, e.g. `fib(n - 1)`.
///
/// The callee is a full expression; chains like `f(x)(y)` call the result
/// of the first call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    /// The expression evaluating to the called function.
    pub function: Box<Expression>,
    /// The arguments passed to the call, in source order.
    pub arguments: Vec<Expression>,
    /// The span from the callee to the closing `)`.
    pub span: Span,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            arg.fmt(f)?;
        }
        write!(f, ")")
    }
}

crate::simple_node_impl!(CallExpression);
