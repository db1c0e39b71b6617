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

use crate::{Node, Statement};
use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed translation unit: the statements of a program in source order.
///
/// An empty source text parses to an empty program with a dummy span.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// The top-level statements, including function declarations.
    pub statements: Vec<Statement>,
    /// The span from the first statement to the last.
    pub span: Span,
}

impl Program {
    /// Returns `true` if the program has no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            statement.fmt(f)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(Program);
