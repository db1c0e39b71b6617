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

use crate::{Expression, Node};
use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `return` statement `return [expr];`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    /// The returned value; a bare `return;` carries none.
    pub expression: Option<Expression>,
    /// The span from `return` to `;`.
    pub span: Span,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "return {expression};"),
            None => write!(f, "return;"),
        }
    }
}

crate::simple_node_impl!(ReturnStatement);
