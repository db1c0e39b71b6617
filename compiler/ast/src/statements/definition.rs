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

use crate::{Expression, Identifier, Node};
use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One declared variable of a `var` statement, with an optional initializer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// The name being declared.
    pub identifier: Identifier,
    /// The initializing expression of `name = expr`, if present.
    pub initializer: Option<Expression>,
    /// The span of the declarator.
    pub span: Span,
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.initializer {
            Some(initializer) => write!(f, "{} = {}", self.identifier, initializer),
            None => self.identifier.fmt(f),
        }
    }
}

crate::simple_node_impl!(VariableDeclaration);

/// A `var` statement `var IDENT [= expr] (, IDENT [= expr])* ;` declaring
/// one or more variables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefinitionStatement {
    /// The declared variables, in source order.
    pub declarations: Vec<VariableDeclaration>,
    /// The span from `var` to `;`.
    pub span: Span,
}

impl fmt::Display for DefinitionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var ")?;
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            declaration.fmt(f)?;
        }
        write!(f, ";")
    }
}

crate::simple_node_impl!(DefinitionStatement);
