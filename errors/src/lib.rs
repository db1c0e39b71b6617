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

//! Error types of the Sparkling compiler.
//!
//! All front-end failures are [`ParserError`]s wrapped into the top-level
//! [`SparklingError`] enum. A formatted error renders as one line:
//!
//! ```text
//! Sparkling: syntax error near line N: <diagnostic>
//! ```
//!
//! Errors reach the user through the [`emitter::Handler`], which also
//! retains the last diagnostic for programmatic inspection.

#![forbid(unsafe_code)]

pub mod emitter;

pub mod parser_error;
pub use self::parser_error::*;

use thiserror::Error;

/// The top-level error enum, one variant per compiler phase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparklingError {
    /// A lexical or syntactic error from the parser front-end.
    #[error("Sparkling: syntax error near line {line}: {err}", line = .0.line(), err = .0)]
    ParserError(#[from] ParserError),
}

impl SparklingError {
    /// The source line the error is attributed to.
    pub fn line(&self) -> u32 {
        match self {
            SparklingError::ParserError(err) => err.line(),
        }
    }
}

/// A result type whose error defaults to [`SparklingError`].
pub type Result<T, E = SparklingError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use sparkling_span::Span;

    #[test]
    fn test_formatting_contract() {
        let err: SparklingError = ParserError::unexpected_token("=", Span::new(3, 3, 5, 6)).into();
        assert_eq!(
            err.to_string(),
            "Sparkling: syntax error near line 3: unexpected token `=`"
        );
    }

    #[test]
    fn test_line_attribution() {
        let err: SparklingError = ParserError::lexer_string_not_closed(Span::new(12, 14, 1, 1)).into();
        assert_eq!(err.line(), 12);
        assert!(err.to_string().starts_with("Sparkling: syntax error near line 12: "));
    }
}
