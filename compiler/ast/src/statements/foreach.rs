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

use crate::{Block, Expression, Identifier, Node};
use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `foreach` loop `foreach key as value in iterable block`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForeachStatement {
    /// The name bound to each key (or index).
    pub key: Identifier,
    /// The name bound to each value.
    pub value: Identifier,
    /// The sequence or dictionary iterated over.
    pub iterable: Expression,
    /// The loop body.
    pub body: Block,
    /// The span from `foreach` to the end of the body.
    pub span: Span,
}

impl fmt::Display for ForeachStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "foreach {} as {} in {} {}",
            self.key, self.value, self.iterable, self.body
        )
    }
}

crate::simple_node_impl!(ForeachStatement);
