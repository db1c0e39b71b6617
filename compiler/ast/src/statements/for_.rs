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

/// A C-style loop `for init; cond; step block`.
///
/// All three header parts are full expressions; the header admits no
/// declarations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForStatement {
    /// The expression evaluated once before the first iteration.
    pub init: Expression,
    /// The condition checked before each iteration.
    pub condition: Expression,
    /// The expression evaluated after each iteration.
    pub step: Expression,
    /// The loop body.
    pub body: Block,
    /// The span from `for` to the end of the body.
    pub span: Span,
}

impl fmt::Display for ForStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "for {}; {}; {} {}",
            self.init, self.condition, self.step, self.body
        )
    }
}

crate::simple_node_impl!(ForStatement);
