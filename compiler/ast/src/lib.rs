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

//! The abstract syntax tree (ast) for a Sparkling translation unit.
//!
//! This module contains the [`Ast`] type, a wrapper around the [`Program`]
//! type. The [`Ast`] is produced by the parser and consumed by the bytecode
//! compiler. Every node carries the [`Span`](sparkling_span::Span) it was
//! parsed from, and the whole tree serializes to and from JSON.

#![forbid(unsafe_code)]

pub mod common;
pub use self::common::*;

pub mod expressions;
pub use self::expressions::*;

pub mod statements;
pub use self::statements::*;

pub mod program;
pub use self::program::*;

/// The abstract syntax tree of one translation unit.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ast {
    ast: Program,
}

impl Ast {
    /// Creates a new AST from a given program tree.
    pub fn new(program: Program) -> Self {
        Self { ast: program }
    }

    /// Returns a reference to the inner program AST representation.
    pub fn as_repr(&self) -> &Program {
        &self.ast
    }

    /// Consumes the AST and returns the inner program.
    pub fn into_repr(self) -> Program {
        self.ast
    }

    /// Serializes the ast into a JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.ast)
    }

    /// Deserializes the JSON string into an ast.
    pub fn from_json_string(json: &str) -> Result<Self, serde_json::Error> {
        let ast: Program = serde_json::from_str(json)?;
        Ok(Self { ast })
    }
}

impl AsRef<Program> for Ast {
    fn as_ref(&self) -> &Program {
        &self.ast
    }
}
