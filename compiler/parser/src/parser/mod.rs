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

//! The parser to convert Sparkling code text into a [`Program`] AST type.
//!
//! This module contains the [`parse()`] method which calls the underlying
//! [`tokenize()`](crate::tokenizer::tokenize) method to create a new program AST.

use crate::tokenizer::*;

use sparkling_ast::*;
use sparkling_errors::emitter::Handler;
use sparkling_errors::Result;

mod context;
pub use context::*;

pub mod expression;
pub mod file;
pub mod statement;

/// Creates a new program from the given source code text.
///
/// On failure, one diagnostic line is emitted through `handler` and the
/// same error is returned; the handler retains it for later inspection.
pub fn parse(handler: &Handler, source: &str) -> Result<Program> {
    let tokens = handler.extend_if_error(crate::tokenize(source))?;
    tracing::debug!(tokens = tokens.len(), "tokenized translation unit");

    let mut context = ParserContext::new(handler, tokens);
    let result = context.parse_program();
    let program = context.handler.extend_if_error(result)?;
    tracing::debug!(statements = program.statements.len(), "parsed translation unit");
    Ok(program)
}
