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

use sparkling_errors::{ParserError, Result};

impl ParserContext<'_> {
    /// Returns a [`Statement`] AST node if the next tokens represent a statement.
    ///
    /// `is_global` is true at file scope only; it gates the named function
    /// form. Anywhere else a `function` keyword falls through to the
    /// expression statement path and must be anonymous.
    pub(crate) fn parse_statement(&mut self, is_global: bool) -> Result<Statement> {
        match &self.token.token {
            Token::If => Ok(Statement::Conditional(self.parse_conditional_statement()?)),
            Token::While => Ok(Statement::While(self.parse_while_statement()?)),
            Token::Do => Ok(Statement::DoWhile(self.parse_do_while_statement()?)),
            Token::For => Ok(Statement::For(Box::new(self.parse_for_statement()?))),
            Token::Foreach => Ok(Statement::Foreach(Box::new(self.parse_foreach_statement()?))),
            Token::Break => Ok(Statement::Break(self.parse_break_statement()?)),
            Token::Continue => Ok(Statement::Continue(self.parse_continue_statement()?)),
            Token::Return => Ok(Statement::Return(self.parse_return_statement()?)),
            Token::Var => Ok(Statement::Definition(self.parse_definition_statement()?)),
            Token::Function if is_global => Ok(Statement::Function(self.parse_function_statement()?)),
            Token::Semicolon => Ok(Statement::Empty(self.parse_empty_statement()?)),
            Token::LeftCurly => {
                let block = self.parse_block()?;
                // An empty block in statement position is the empty statement.
                Ok(if block.statements.is_empty() {
                    Statement::Empty(EmptyStatement { span: block.span })
                } else {
                    Statement::Block(block)
                })
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// Returns a [`Block`] AST node if the next tokens represent a block of statements.
    pub(super) fn parse_block(&mut self) -> Result<Block> {
        self.parse_list(Token::LeftCurly, Token::RightCurly, None, |p| {
            p.parse_statement(false).map(Some)
        })
        .map(|(statements, _, span)| Block { statements, span })
    }

    /// Returns a [`ConditionalStatement`] AST node if the next tokens represent
    /// an `if` statement.
    fn parse_conditional_statement(&mut self) -> Result<ConditionalStatement> {
        let start = self.expect(&Token::If)?;
        let condition = self.parse_expression()?;
        let then = self.parse_block()?;

        let otherwise = if self.eat(&Token::Else) {
            // Only a block or another `if` may follow `else`.
            Some(Box::new(match &self.token.token {
                Token::If => Statement::Conditional(self.parse_conditional_statement()?),
                Token::LeftCurly => Statement::Block(self.parse_block()?),
                token => {
                    return Err(ParserError::unexpected_else_clause(token, self.token.span).into())
                }
            }))
        } else {
            None
        };

        let span = start + otherwise.as_ref().map(|s| s.span()).unwrap_or(then.span);
        Ok(ConditionalStatement {
            condition,
            then,
            otherwise,
            span,
        })
    }

    /// Returns a [`WhileStatement`] AST node if the next tokens represent a
    /// `while` loop.
    fn parse_while_statement(&mut self) -> Result<WhileStatement> {
        let start = self.expect(&Token::While)?;
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(WhileStatement {
            condition,
            body,
            span,
        })
    }

    /// Returns a [`DoWhileStatement`] AST node if the next tokens represent a
    /// `do ... while` loop.
    fn parse_do_while_statement(&mut self) -> Result<DoWhileStatement> {
        let start = self.expect(&Token::Do)?;
        let body = self.parse_block()?;
        self.expect(&Token::While)?;
        let condition = self.parse_expression()?;
        let end = self.expect(&Token::Semicolon)?;
        Ok(DoWhileStatement {
            condition,
            body,
            span: start + end,
        })
    }

    /// Returns a [`ForStatement`] AST node if the next tokens represent a
    /// C-style `for` loop.
    ///
    /// All three header parts are mandatory full expressions.
    fn parse_for_statement(&mut self) -> Result<ForStatement> {
        let start = self.expect(&Token::For)?;
        let init = self.parse_expression()?;
        self.expect(&Token::Semicolon)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::Semicolon)?;
        let step = self.parse_expression()?;
        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(ForStatement {
            init,
            condition,
            step,
            body,
            span,
        })
    }

    /// Returns a [`ForeachStatement`] AST node if the next tokens represent a
    /// `foreach` loop.
    fn parse_foreach_statement(&mut self) -> Result<ForeachStatement> {
        let start = self.expect(&Token::Foreach)?;
        let key = self.expect_identifier()?;
        self.expect(&Token::As)?;
        let value = self.expect_identifier()?;
        self.expect(&Token::In)?;
        let iterable = self.parse_expression()?;
        let body = self.parse_block()?;
        let span = start + body.span;
        Ok(ForeachStatement {
            key,
            value,
            iterable,
            body,
            span,
        })
    }

    /// Returns a [`BreakStatement`] AST node if the next tokens represent a
    /// `break;`.
    fn parse_break_statement(&mut self) -> Result<BreakStatement> {
        let start = self.expect(&Token::Break)?;
        let end = self.expect(&Token::Semicolon)?;
        Ok(BreakStatement { span: start + end })
    }

    /// Returns a [`ContinueStatement`] AST node if the next tokens represent a
    /// `continue;`.
    fn parse_continue_statement(&mut self) -> Result<ContinueStatement> {
        let start = self.expect(&Token::Continue)?;
        let end = self.expect(&Token::Semicolon)?;
        Ok(ContinueStatement { span: start + end })
    }

    /// Returns a [`ReturnStatement`] AST node if the next tokens represent a
    /// `return [expr];`.
    fn parse_return_statement(&mut self) -> Result<ReturnStatement> {
        let start = self.expect(&Token::Return)?;
        let expression = match &self.token.token {
            Token::Semicolon => None,
            _ => Some(self.parse_expression()?),
        };
        let end = self.expect(&Token::Semicolon)?;
        Ok(ReturnStatement {
            expression,
            span: start + end,
        })
    }

    /// Returns a [`DefinitionStatement`] AST node if the next tokens represent
    /// a `var` declaration list.
    fn parse_definition_statement(&mut self) -> Result<DefinitionStatement> {
        let start = self.expect(&Token::Var)?;

        let mut declarations = Vec::new();
        loop {
            let identifier = self.expect_identifier()?;
            let initializer = if self.eat(&Token::Assign) {
                Some(self.parse_expression()?)
            } else {
                None
            };
            let span = initializer
                .as_ref()
                .map(|init| identifier.span + init.span())
                .unwrap_or(identifier.span);
            declarations.push(VariableDeclaration {
                identifier,
                initializer,
                span,
            });

            if !self.eat(&Token::Comma) {
                break;
            }
        }

        let end = self.expect(&Token::Semicolon)?;
        Ok(DefinitionStatement {
            declarations,
            span: start + end,
        })
    }

    /// Returns an [`EmptyStatement`] AST node if the next token is a bare `;`.
    fn parse_empty_statement(&mut self) -> Result<EmptyStatement> {
        let span = self.expect(&Token::Semicolon)?;
        Ok(EmptyStatement { span })
    }

    /// Returns an [`ExpressionStatement`] AST node if the next tokens
    /// represent an expression followed by `;`.
    fn parse_expression_statement(&mut self) -> Result<Statement> {
        let expression = self.parse_expression()?;
        let end = self.expect(&Token::Semicolon)?;
        Ok(Statement::Expression(ExpressionStatement {
            span: expression.span() + end,
            expression,
        }))
    }
}
