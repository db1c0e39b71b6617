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

use crate::{Block, Identifier, Node};
use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named function declaration `function IDENT(params?) block`.
///
/// Only valid at file scope; inside an expression the anonymous form must
/// be used instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionStatement {
    /// The name the function is declared under.
    pub identifier: Identifier,
    /// The formal parameter names, in source order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub block: Block,
    /// The span from `function` to the closing `}`.
    pub span: Span,
}

impl fmt::Display for FunctionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}(", self.identifier)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            parameter.fmt(f)?;
        }
        write!(f, ") {}", self.block)
    }
}

crate::simple_node_impl!(FunctionStatement);
