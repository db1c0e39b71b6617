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

pub mod block;
pub use block::*;

pub mod break_;
pub use break_::*;

pub mod conditional;
pub use conditional::*;

pub mod continue_;
pub use continue_::*;

pub mod definition;
pub use definition::*;

pub mod do_while;
pub use do_while::*;

pub mod empty;
pub use empty::*;

pub mod expression;
pub use expression::*;

pub mod for_;
pub use for_::*;

pub mod foreach;
pub use foreach::*;

pub mod function;
pub use function::*;

pub mod return_;
pub use return_::*;

pub mod while_;
pub use while_::*;

use crate::Node;

use sparkling_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Program statement that defines some action (or expression) to be carried out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// A block statement.
    Block(Block),
    /// A `break` statement.
    Break(BreakStatement),
    /// An `if` statement.
    Conditional(ConditionalStatement),
    /// A `continue` statement.
    Continue(ContinueStatement),
    /// A `var` declaration list.
    Definition(DefinitionStatement),
    /// A `do ... while` loop.
    DoWhile(DoWhileStatement),
    /// An empty statement, a bare `;`.
    Empty(EmptyStatement),
    /// An expression statement.
    Expression(ExpressionStatement),
    /// A C-style `for` loop.
    For(Box<ForStatement>),
    /// A `foreach` loop over a sequence or dictionary.
    Foreach(Box<ForeachStatement>),
    /// A named function declaration, file scope only.
    Function(FunctionStatement),
    /// A `return` statement.
    Return(ReturnStatement),
    /// A `while` loop.
    While(WhileStatement),
}

impl Node for Statement {
    fn span(&self) -> Span {
        use Statement::*;
        match self {
            Block(n) => n.span(),
            Break(n) => n.span(),
            Conditional(n) => n.span(),
            Continue(n) => n.span(),
            Definition(n) => n.span(),
            DoWhile(n) => n.span(),
            Empty(n) => n.span(),
            Expression(n) => n.span(),
            For(n) => n.span(),
            Foreach(n) => n.span(),
            Function(n) => n.span(),
            Return(n) => n.span(),
            While(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Statement::*;
        match self {
            Block(n) => n.set_span(span),
            Break(n) => n.set_span(span),
            Conditional(n) => n.set_span(span),
            Continue(n) => n.set_span(span),
            Definition(n) => n.set_span(span),
            DoWhile(n) => n.set_span(span),
            Empty(n) => n.set_span(span),
            Expression(n) => n.set_span(span),
            For(n) => n.set_span(span),
            Foreach(n) => n.set_span(span),
            Function(n) => n.set_span(span),
            Return(n) => n.set_span(span),
            While(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Statement::*;
        match self {
            Block(n) => n.fmt(f),
            Break(n) => n.fmt(f),
            Conditional(n) => n.fmt(f),
            Continue(n) => n.fmt(f),
            Definition(n) => n.fmt(f),
            DoWhile(n) => n.fmt(f),
            Empty(n) => n.fmt(f),
            Expression(n) => n.fmt(f),
            For(n) => n.fmt(f),
            Foreach(n) => n.fmt(f),
            Function(n) => n.fmt(f),
            Return(n) => n.fmt(f),
            While(n) => n.fmt(f),
        }
    }
}
