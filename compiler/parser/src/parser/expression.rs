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
use sparkling_span::Span;

use smallvec::SmallVec;

const ASSIGN_TOKENS: &[Token] = &[
    Token::Assign,
    Token::AddAssign,
    Token::SubAssign,
    Token::MulAssign,
    Token::DivAssign,
    Token::RemAssign,
    Token::BitAndAssign,
    Token::BitOrAssign,
    Token::BitXorAssign,
    Token::ShlAssign,
    Token::ShrAssign,
    Token::ConcatAssign,
];

const UNARY_TOKENS: &[Token] = &[
    Token::Add,
    Token::Minus,
    Token::Not,
    Token::BitNot,
    Token::Increment,
    Token::Decrement,
    Token::Hash,
    Token::SizeOf,
    Token::TypeOf,
];

impl ParserContext<'_> {
    /// Returns an [`Expression`] AST node if the next tokens represent an
    /// expression.
    ///
    /// This is the lowest rung of the precedence ladder; assignments live
    /// here and associate to the right.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        let expr = self.parse_concat_expression()?;

        if self.eat_any(ASSIGN_TOKENS) {
            let op = match &self.prev_token.token {
                Token::Assign => AssignOperation::Assign,
                Token::AddAssign => AssignOperation::Add,
                Token::SubAssign => AssignOperation::Sub,
                Token::MulAssign => AssignOperation::Mul,
                Token::DivAssign => AssignOperation::Div,
                Token::RemAssign => AssignOperation::Rem,
                Token::BitAndAssign => AssignOperation::BitAnd,
                Token::BitOrAssign => AssignOperation::BitOr,
                Token::BitXorAssign => AssignOperation::BitXor,
                Token::ShlAssign => AssignOperation::Shl,
                Token::ShrAssign => AssignOperation::Shr,
                Token::ConcatAssign => AssignOperation::Concat,
                _ => unreachable!("`parse_expression` shouldn't produce this"),
            };

            // Right-recurse, so `a = b = c` assigns `c` to both places.
            let value = self.parse_expression()?;
            let span = expr.span() + value.span();
            return Ok(Expression::Assign(AssignExpression {
                place: Box::new(expr),
                value: Box::new(value),
                op,
                span,
            }));
        }

        Ok(expr)
    }

    /// Constructs a binary expression `left op right`.
    fn bin_expr(left: Expression, right: Expression, op: BinaryOperation) -> Expression {
        let span = left.span() + right.span();
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            right: Box::new(right),
            op,
            span,
        })
    }

    /// Parses a left-associative binary expression `<left> token <right>` using `f` for left/right.
    /// The `token` is translated to `op` in the AST.
    fn parse_bin_expr(
        &mut self,
        tokens: &[Token],
        mut f: impl FnMut(&mut Self) -> Result<Expression>,
    ) -> Result<Expression> {
        let mut expr = f(self)?;
        while let Some(op) = self.eat_bin_op(tokens) {
            expr = Self::bin_expr(expr, f(self)?, op);
        }
        Ok(expr)
    }

    /// Eats one of binary operators matching any in `tokens`.
    fn eat_bin_op(&mut self, tokens: &[Token]) -> Option<BinaryOperation> {
        self.eat_any(tokens).then(|| match &self.prev_token.token {
            Token::DotDot => BinaryOperation::Concat,
            Token::Or => BinaryOperation::Or,
            Token::And => BinaryOperation::And,
            Token::Eq => BinaryOperation::Eq,
            Token::NotEq => BinaryOperation::Ne,
            Token::Lt => BinaryOperation::Lt,
            Token::Gt => BinaryOperation::Gt,
            Token::LtEq => BinaryOperation::Le,
            Token::GtEq => BinaryOperation::Ge,
            Token::BitOr => BinaryOperation::BitOr,
            Token::BitXor => BinaryOperation::BitXor,
            Token::BitAnd => BinaryOperation::BitAnd,
            Token::Shl => BinaryOperation::Shl,
            Token::Shr => BinaryOperation::Shr,
            Token::Add => BinaryOperation::Add,
            Token::Minus => BinaryOperation::Sub,
            Token::Mul => BinaryOperation::Mul,
            Token::Div => BinaryOperation::Div,
            Token::Rem => BinaryOperation::Rem,
            _ => unreachable!("`eat_bin_op` shouldn't produce this"),
        })
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// concatenation expression.
    ///
    /// Otherwise, tries to parse the next token using [`parse_conditional_expression`].
    fn parse_concat_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::DotDot], Self::parse_conditional_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// ternary expression.
    ///
    /// The true branch restarts at the full expression level, the false
    /// branch re-enters here, so `a ? b : c ? d : e` nests to the right.
    ///
    /// Otherwise, tries to parse the next token using [`parse_boolean_or_expression`].
    pub(super) fn parse_conditional_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_boolean_or_expression()?;

        if self.eat(&Token::Question) {
            let if_true = self.parse_expression()?;
            self.expect(&Token::Colon)?;
            let if_false = self.parse_conditional_expression()?;
            let span = expr.span() + if_false.span();
            expr = Expression::Ternary(TernaryExpression {
                condition: Box::new(expr),
                if_true: Box::new(if_true),
                if_false: Box::new(if_false),
                span,
            });
        }
        Ok(expr)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary OR expression.
    ///
    /// Otherwise, tries to parse the next token using [`parse_boolean_and_expression`].
    fn parse_boolean_or_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Or], Self::parse_boolean_and_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary AND expression.
    ///
    /// Otherwise, tries to parse the next token using [`parse_comparison_expression`].
    fn parse_boolean_and_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::And], Self::parse_comparison_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// comparison expression. All six comparison operators share one level
    /// and chain to the left.
    ///
    /// Otherwise, tries to parse the next token using [`parse_bitwise_inclusive_or_expression`].
    fn parse_comparison_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(
            &[
                Token::Eq,
                Token::NotEq,
                Token::Lt,
                Token::Gt,
                Token::LtEq,
                Token::GtEq,
            ],
            Self::parse_bitwise_inclusive_or_expression,
        )
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// bitwise inclusive or expression.
    ///
    /// Otherwise, tries to parse the next token using [`parse_bitwise_exclusive_or_expression`].
    fn parse_bitwise_inclusive_or_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::BitOr], Self::parse_bitwise_exclusive_or_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// bitwise exclusive or expression.
    ///
    /// Otherwise, tries to parse the next token using [`parse_bitwise_and_expression`].
    fn parse_bitwise_exclusive_or_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::BitXor], Self::parse_bitwise_and_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// bitwise and expression.
    ///
    /// Otherwise, tries to parse the next token using [`parse_shift_expression`].
    fn parse_bitwise_and_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::BitAnd], Self::parse_shift_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// shift left or a shift right expression.
    ///
    /// Otherwise, tries to parse the next token using [`parse_additive_expression`].
    fn parse_shift_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Shl, Token::Shr], Self::parse_additive_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary addition or subtraction expression.
    ///
    /// Otherwise, tries to parse the next token using [`parse_multiplicative_expression`].
    fn parse_additive_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Add, Token::Minus], Self::parse_multiplicative_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary multiplication, division, or modulo expression.
    ///
    /// Otherwise, tries to parse the next token using [`parse_unary_expression`].
    fn parse_multiplicative_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Mul, Token::Div, Token::Rem], Self::parse_unary_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// prefix operator expression.
    ///
    /// Prefix operators are collected first and applied to the operand in
    /// reverse, which makes them right-associative without right recursion.
    ///
    /// Otherwise, tries to parse the next token using [`parse_postfix_expression`].
    pub(super) fn parse_unary_expression(&mut self) -> Result<Expression> {
        let mut ops: SmallVec<[(UnaryOperation, Span); 4]> = SmallVec::new();
        while self.eat_any(UNARY_TOKENS) {
            let operation = match &self.prev_token.token {
                Token::Add => UnaryOperation::Plus,
                Token::Minus => UnaryOperation::Negate,
                Token::Not => UnaryOperation::Not,
                Token::BitNot => UnaryOperation::BitNot,
                Token::Increment => UnaryOperation::PreIncrement,
                Token::Decrement => UnaryOperation::PreDecrement,
                Token::Hash => UnaryOperation::NthArg,
                Token::SizeOf => UnaryOperation::SizeOf,
                Token::TypeOf => UnaryOperation::TypeOf,
                _ => unreachable!("`parse_unary_expression` shouldn't produce this"),
            };
            ops.push((operation, self.prev_token.span));
        }

        let mut inner = self.parse_postfix_expression()?;
        for (op, op_span) in ops.into_iter().rev() {
            let span = op_span + inner.span();
            inner = Expression::Unary(UnaryExpression {
                receiver: Box::new(inner),
                op,
                span,
            });
        }
        Ok(inner)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// subscript, call, member access, or postfix increment/decrement
    /// expression.
    ///
    /// Postfix operators iterate, each wrapping the expression so far, so
    /// chains like `f(x)[i].m` associate to the left.
    ///
    /// Otherwise, tries to parse the next token using [`parse_primary_expression`].
    fn parse_postfix_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_primary_expression()?;
        loop {
            match &self.token.token {
                Token::LeftSquare => {
                    self.bump();
                    let index = self.parse_expression()?;
                    let end = self.expect(&Token::RightSquare)?;
                    let span = expr.span() + end;
                    expr = Expression::Access(AccessExpression::Array(ArrayAccess {
                        array: Box::new(expr),
                        index: Box::new(index),
                        span,
                    }));
                }
                Token::LeftParen => {
                    let (arguments, _, call_span) =
                        self.parse_paren_comma_list(|p| p.parse_expression().map(Some))?;
                    let span = expr.span() + call_span;
                    expr = Expression::Call(CallExpression {
                        function: Box::new(expr),
                        arguments,
                        span,
                    });
                }
                // `.` and `->` are interchangeable and collapse to one node.
                Token::Dot | Token::Arrow => {
                    self.bump();
                    let name = self.expect_identifier()?;
                    let span = expr.span() + name.span;
                    expr = Expression::Access(AccessExpression::Member(MemberAccess {
                        inner: Box::new(expr),
                        name,
                        span,
                    }));
                }
                Token::Increment => {
                    self.bump();
                    let span = expr.span() + self.prev_token.span;
                    expr = Expression::Unary(UnaryExpression {
                        receiver: Box::new(expr),
                        op: UnaryOperation::PostIncrement,
                        span,
                    });
                }
                Token::Decrement => {
                    self.bump();
                    let span = expr.span() + self.prev_token.span;
                    expr = Expression::Unary(UnaryExpression {
                        receiver: Box::new(expr),
                        op: UnaryOperation::PostDecrement,
                        span,
                    });
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent an
    /// anonymous function expression.
    pub(super) fn parse_function_expression(&mut self) -> Result<Expression> {
        let start = self.expect(&Token::Function)?;

        // Only the statement form carries a name, and only at file scope.
        if let Some(name) = self.eat_identifier() {
            return Err(ParserError::named_function_expression(&name.name, name.span).into());
        }

        let (parameters, _, _) = self.parse_paren_comma_list(|p| p.expect_identifier().map(Some))?;
        let block = self.parse_block()?;
        let span = start + block.span;
        Ok(Expression::Function(FunctionExpression {
            parameters,
            block,
            span,
        }))
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// sequence literal `@[ ... ]`.
    fn parse_sequence_expression(&mut self) -> Result<Expression> {
        let (elements, _, span) = self.parse_list(
            Token::AtLeftSquare,
            Token::RightSquare,
            Some(Token::Comma),
            |p| p.parse_expression().map(Some),
        )?;
        Ok(Expression::Sequence(SequenceExpression { elements, span }))
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// dictionary literal `@{ key: value, ... }`.
    fn parse_dictionary_expression(&mut self) -> Result<Expression> {
        let (entries, _, span) = self.parse_list(
            Token::AtLeftCurly,
            Token::RightCurly,
            Some(Token::Comma),
            |p| {
                let key = p.parse_expression()?;
                p.expect(&Token::Colon)?;
                let value = p.parse_expression()?;
                Ok(Some(DictionaryEntry { key, value }))
            },
        )?;
        Ok(Expression::Dictionary(DictionaryExpression { entries, span }))
    }

    /// Returns an [`Expression`] AST node if the next token is a primary expression:
    /// - Literals: integer, float, string, boolean, `nil`, `nan`
    /// - Identifiers
    /// - Parenthesized expressions
    /// - Anonymous function expressions
    /// - Sequence and dictionary literals
    ///
    /// Returns an expression error if the token cannot be matched.
    fn parse_primary_expression(&mut self) -> Result<Expression> {
        match &self.token.token {
            Token::LeftParen => {
                self.bump();
                let expr = self.parse_expression()?;
                self.expect(&Token::RightParen)?;
                return Ok(expr);
            }
            Token::Function => return self.parse_function_expression(),
            Token::AtLeftSquare => return self.parse_sequence_expression(),
            Token::AtLeftCurly => return self.parse_dictionary_expression(),
            _ => {}
        }

        let SpannedToken { token, span } = self.token.clone();
        self.bump();

        Ok(match token {
            Token::Ident(name) => Expression::Identifier(Identifier { name, span }),
            Token::Int(value) => Expression::Literal(LiteralExpression {
                value: LiteralValue::Integer(value),
                span,
            }),
            Token::Float(value) => Expression::Literal(LiteralExpression {
                value: LiteralValue::Float(value),
                span,
            }),
            Token::StringLit(value) => Expression::Literal(LiteralExpression {
                value: LiteralValue::Str(value),
                span,
            }),
            Token::True => Expression::Literal(LiteralExpression {
                value: LiteralValue::Boolean(true),
                span,
            }),
            Token::False => Expression::Literal(LiteralExpression {
                value: LiteralValue::Boolean(false),
                span,
            }),
            Token::Nil => Expression::Literal(LiteralExpression {
                value: LiteralValue::Nil,
                span,
            }),
            // `nan` is a float literal with `0.0 / 0.0` semantics.
            Token::Nan => Expression::Literal(LiteralExpression {
                value: LiteralValue::Float(f64::NAN),
                span,
            }),
            token => {
                return Err(ParserError::unexpected_token(token, span).into());
            }
        })
    }
}
