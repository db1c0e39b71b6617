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

use crate::Block;

/// An anonymous function expression, e.g. `function(x) { return x + 1; }`.
///
/// Function expressions carry no name; a named function is a statement and
/// only valid at file scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionExpression {
    /// The formal parameter names, in source order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub block: Block,
    /// The span from the `function` keyword to the closing `}`.
    pub span: Span,
}

impl fmt::Display for FunctionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function(")?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            parameter.fmt(f)?;
        }
        write!(f, ") {}", self.block)
    }
}

crate::simple_node_impl!(FunctionExpression);
