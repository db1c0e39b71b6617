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

/// A `do ... while` loop `do block while cond;`.
///
/// The body runs before the condition is first checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStatement {
    /// The loop condition, checked after each iteration.
    pub condition: Expression,
    /// The loop body.
    pub body: Block,
    /// The span from `do` to the terminating `;`.
    pub span: Span,
}

impl fmt::Display for DoWhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "do {} while {};", self.body, self.condition)
    }
}

crate::simple_node_impl!(DoWhileStatement);
