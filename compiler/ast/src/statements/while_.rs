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

use crate::{Block, Expression, Node};
use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `while` loop `while cond block`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    /// The loop condition, checked before each iteration.
    pub condition: Expression,
    /// The loop body.
    pub body: Block,
    /// The span from `while` to the end of the body.
    pub span: Span,
}

impl fmt::Display for WhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while {} {}", self.condition, self.body)
    }
}

crate::simple_node_impl!(WhileStatement);
