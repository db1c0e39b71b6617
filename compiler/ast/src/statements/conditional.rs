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

use crate::{Block, Expression, Node, Statement};
use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An `if` statement `if cond block [else (block | if)]`.
///
/// The parser only admits a block or another conditional after `else`, so
/// `otherwise` is never a bare statement; else-if chains nest to the right.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionalStatement {
    /// The condition deciding which branch runs.
    pub condition: Expression,
    /// The branch taken when the condition holds.
    pub then: Block,
    /// An optional `else` branch, a `Block` or a nested `Conditional`.
    pub otherwise: Option<Box<Statement>>,
    /// The span from `if` to the end of the last branch.
    pub span: Span,
}

impl fmt::Display for ConditionalStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if {} {}", self.condition, self.then)?;
        match &self.otherwise {
            Some(otherwise) => write!(f, " else {otherwise}"),
            None => Ok(()),
        }
    }
}

crate::simple_node_impl!(ConditionalStatement);
