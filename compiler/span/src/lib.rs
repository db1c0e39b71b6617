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

//! Source positions for the Sparkling compiler.
//!
//! A [`Span`] records where a token or AST node came from so that
//! diagnostics and debug info can point back into the source text.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// The region of source code a token or AST node was produced from.
///
/// Lines and columns are 1-based; columns count characters, not bytes.
/// `col_stop` points one past the last character of the region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// The line the region starts on.
    pub line_start: u32,
    /// The line the region ends on.
    pub line_stop: u32,
    /// The column of the first character.
    pub col_start: u32,
    /// The column one past the last character.
    pub col_stop: u32,
}

impl Span {
    /// Returns a new `Span` from the given positions.
    pub fn new(line_start: u32, line_stop: u32, col_start: u32, col_stop: u32) -> Self {
        Self {
            line_start,
            line_stop,
            col_start,
            col_stop,
        }
    }

    /// Returns a dummy span, used for generated nodes with no source location.
    pub const fn dummy() -> Self {
        Self {
            line_start: 0,
            line_stop: 0,
            col_start: 0,
            col_stop: 0,
        }
    }

    /// Returns `true` if the span is the dummy span.
    pub fn is_dummy(&self) -> bool {
        self == &Self::dummy()
    }

    /// The line diagnostics attribute this region to.
    pub fn line(&self) -> u32 {
        self.line_start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line_start == self.line_stop {
            write!(f, "{}:{}-{}", self.line_start, self.col_start, self.col_stop)
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.line_start, self.col_start, self.line_stop, self.col_stop
            )
        }
    }
}

impl Add for Span {
    type Output = Self;

    /// Joins two spans into the smallest span covering both.
    fn add(self, other: Self) -> Self {
        if self.is_dummy() {
            return other;
        }
        if other.is_dummy() {
            return self;
        }

        let (line_start, col_start) = if (self.line_start, self.col_start) <= (other.line_start, other.col_start) {
            (self.line_start, self.col_start)
        } else {
            (other.line_start, other.col_start)
        };
        let (line_stop, col_stop) = if (self.line_stop, self.col_stop) >= (other.line_stop, other.col_stop) {
            (self.line_stop, self.col_stop)
        } else {
            (other.line_stop, other.col_stop)
        };

        Self {
            line_start,
            line_stop,
            col_start,
            col_stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_same_line() {
        let left = Span::new(3, 3, 1, 4);
        let right = Span::new(3, 3, 8, 12);
        assert_eq!(left + right, Span::new(3, 3, 1, 12));
        // Join is commutative.
        assert_eq!(right + left, Span::new(3, 3, 1, 12));
    }

    #[test]
    fn test_join_across_lines() {
        let left = Span::new(1, 1, 5, 9);
        let right = Span::new(4, 6, 1, 2);
        assert_eq!(left + right, Span::new(1, 6, 5, 2));
    }

    #[test]
    fn test_join_with_dummy() {
        let span = Span::new(2, 2, 1, 3);
        assert_eq!(span + Span::dummy(), span);
        assert_eq!(Span::dummy() + span, span);
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(7, 7, 2, 5).to_string(), "7:2-5");
        assert_eq!(Span::new(1, 3, 4, 2).to_string(), "1:4-3:2");
    }
}
