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

/// A ternary conditional expression, that is, `condition ? if_true : if_false`.
///
/// The conditional nests into its false branch, so `a ? b : c ? d : e`
/// reads as `a ? b : (c ? d : e)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TernaryExpression {
    /// The condition determining the branch to pick.
    pub condition: Box<Expression>,
    /// The expression the ternary evaluates to when the condition holds.
    pub if_true: Box<Expression>,
    /// The expression the ternary evaluates to otherwise.
    pub if_false: Box<Expression>,
    /// The span from the condition to the false branch.
    pub span: Span,
}

impl fmt::Display for TernaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} ? {} : {})", self.condition, self.if_true, self.if_false)
    }
}

crate::simple_node_impl!(TernaryExpression);
