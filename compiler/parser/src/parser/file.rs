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

use super::*;

use sparkling_errors::Result;

impl ParserContext<'_> {
    /// Returns a [`Program`] AST if all tokens can be consumed and represent
    /// a valid Sparkling translation unit.
    ///
    /// An empty token stream yields an empty program. The first failing
    /// statement aborts the parse; on success the cursor is at EOF.
    pub fn parse_program(&mut self) -> Result<Program> {
        let mut statements = Vec::new();
        while self.has_next() {
            statements.push(self.parse_statement(true)?);
        }

        let span = statements
            .iter()
            .map(|s| s.span())
            .reduce(|a, b| a + b)
            .unwrap_or_default();
        Ok(Program { statements, span })
    }

    /// Returns a [`FunctionStatement`] AST node if the next tokens represent
    /// a named function declaration.
    ///
    /// The statement dispatch only routes here at file scope.
    pub(super) fn parse_function_statement(&mut self) -> Result<FunctionStatement> {
        // Parse `function IDENT`.
        let start = self.expect(&Token::Function)?;
        let identifier = self.expect_identifier()?;

        // Parse parameters.
        let (parameters, ..) = self.parse_paren_comma_list(|p| p.expect_identifier().map(Some))?;

        // Parse the function body.
        let block = self.parse_block()?;

        let span = start + block.span;
        Ok(FunctionStatement {
            identifier,
            parameters,
            block,
            span,
        })
    }
}
