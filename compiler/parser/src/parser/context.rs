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

use crate::tokenizer::*;

use sparkling_ast::Identifier;
use sparkling_errors::emitter::Handler;
use sparkling_errors::{ParserError, Result};
use sparkling_span::Span;

use std::fmt::Display;
use std::mem;

/// Stores a program in tokenized format plus additional context.
/// May be converted into a [`Program`](sparkling_ast::Program) AST by
/// parsing all tokens.
pub struct ParserContext<'a> {
    /// Handler used to side-channel emit errors from the parser.
    pub(crate) handler: &'a Handler,
    /// All un-bumped tokens.
    tokens: Vec<SpannedToken>,
    /// The current token, i.e., if `p.tokens = ['3', *, '4']`,
    /// then after a `p.bump()`, we'll have `p.token = '3'`.
    pub(crate) token: SpannedToken,
    /// The previous token, i.e., if `p.tokens = ['3', *, '4']`,
    /// then after two `p.bump()`s, we'll have `p.token = '*'` and `p.prev_token = '3'`.
    pub(crate) prev_token: SpannedToken,
}

impl<'a> ParserContext<'a> {
    /// Returns a new [`ParserContext`] type given a vector of tokens.
    pub fn new(handler: &'a Handler, mut tokens: Vec<SpannedToken>) -> Self {
        // Strip out comments.
        tokens.retain(|x| !matches!(x.token, Token::CommentBlock(_)));
        // For performance we reverse so that we get cheap `.pop()`s.
        tokens.reverse();

        let token = SpannedToken::dummy();
        let mut p = Self {
            handler,
            prev_token: token.clone(),
            token,
            tokens,
        };
        p.bump();
        p
    }

    /// Advances the parser cursor by one token.
    ///
    /// So e.g., if we had `previous = A`, `current = B`, and `tokens = [C, D, E]`,
    /// then after `p.bump()`, the state will be `previous = B`, `current = C`, and `tokens = [D, E]`.
    pub fn bump(&mut self) {
        // Probably a bug (infinite loop), as the previous token was already EOF.
        if let Token::Eof = self.prev_token.token {
            panic!("attempted to bump the parser past EOF (may be stuck in a loop)");
        }

        // Extract next token, or `Eof` if there was none.
        let next_token = self.tokens.pop().unwrap_or_else(|| SpannedToken {
            token: Token::Eof,
            span: self.token.span,
        });

        // Set the new token.
        self.prev_token = mem::replace(&mut self.token, next_token);
    }

    /// Checks whether the current token is `token`.
    pub fn check(&self, tok: &Token) -> bool {
        &self.token.token == tok
    }

    /// Removes the next token if it equals `token` and returns `true`,
    /// or does nothing and returns `false` otherwise.
    pub fn eat(&mut self, token: &Token) -> bool {
        self.check(token).then(|| self.bump()).is_some()
    }

    /// Returns true if the next token exists.
    pub fn has_next(&self) -> bool {
        !matches!(self.token.token, Token::Eof)
    }

    /// Eats the next token if it is an identifier and returns it.
    ///
    /// The identifier's name is transferred out of the token into the
    /// returned node.
    pub fn eat_identifier(&mut self) -> Option<Identifier> {
        if let Token::Ident(name) = &self.token.token {
            let name = name.clone();
            self.bump();
            return Some(Identifier {
                name,
                span: self.prev_token.span,
            });
        }
        None
    }

    /// Expects an [`Identifier`], or errors.
    pub fn expect_identifier(&mut self) -> Result<Identifier> {
        self.eat_identifier().ok_or_else(|| {
            ParserError::unexpected(&self.token.token, "identifier", self.token.span).into()
        })
    }

    /// Eats any of the given `tokens`, returning `true` if anything was eaten.
    pub fn eat_any(&mut self, tokens: &[Token]) -> bool {
        tokens.iter().any(|x| self.check(x)).then(|| self.bump()).is_some()
    }

    /// Returns an unexpected error at the current token.
    pub(crate) fn unexpected<T>(&self, expected: impl Display) -> Result<T> {
        Err(ParserError::unexpected(&self.token.token, expected, self.token.span).into())
    }

    /// Eats the expected `token`, or errors.
    pub fn expect(&mut self, token: &Token) -> Result<Span> {
        if self.eat(token) {
            Ok(self.prev_token.span)
        } else {
            self.unexpected(format!("'{token}'"))
        }
    }

    /// Parses a list of `T`s using `inner`.
    /// The opening and closing delimiters are `open` and `close`. When
    /// `sep` is given, elements are separated by it and a trailing
    /// separator is tolerated; `(list, true)` is returned when `sep` was a
    /// terminator.
    pub(super) fn parse_list<T>(
        &mut self,
        open: Token,
        close: Token,
        sep: Option<Token>,
        mut inner: impl FnMut(&mut Self) -> Result<Option<T>>,
    ) -> Result<(Vec<T>, bool, Span)> {
        let mut list = Vec::new();
        let mut trailing = false;

        // Parse opening delimiter.
        let open_span = self.expect(&open)?;

        while !self.check(&close) {
            // Parse the element. We allow inner parser recovery through the `Option`.
            if let Some(elem) = inner(self)? {
                list.push(elem);
            }
            // Parse the separator, if any.
            if let Some(sep) = &sep {
                if !self.eat(sep) {
                    trailing = false;
                    break;
                }
                trailing = true;
            }
        }

        // Parse closing delimiter.
        let span = open_span + self.expect(&close)?;

        Ok((list, trailing, span))
    }

    /// Parse a list separated by `,` and delimited by parens.
    pub(super) fn parse_paren_comma_list<T>(
        &mut self,
        f: impl FnMut(&mut Self) -> Result<Option<T>>,
    ) -> Result<(Vec<T>, bool, Span)> {
        self.parse_list(Token::LeftParen, Token::RightParen, Some(Token::Comma), f)
    }
}
