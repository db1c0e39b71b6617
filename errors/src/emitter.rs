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

//! The error sink the parser reports through.

use crate::{Result, SparklingError};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Types that are sinks for compiler errors.
pub trait Emitter {
    /// Emit the error `err`.
    fn emit_err(&mut self, err: &SparklingError);
}

/// A sink that writes one formatted diagnostic line per error to stderr.
pub struct StderrEmitter;

impl Emitter for StderrEmitter {
    fn emit_err(&mut self, err: &SparklingError) {
        eprintln!("{err}");
    }
}

/// A buffer of formatted diagnostic lines.
#[derive(Clone, Debug, Default)]
pub struct Buffer(Vec<String>);

impl Buffer {
    /// Push `line` to the buffer.
    pub fn push(&mut self, line: String) {
        self.0.push(line);
    }

    /// The last diagnostic pushed, if any.
    pub fn last(&self) -> Option<&String> {
        self.0.last()
    }

    /// Returns `true` if no diagnostics were pushed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.0 {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A sink that captures diagnostics in a shared buffer, for tests and for
/// callers that inspect errors programmatically.
#[derive(Clone, Default)]
pub struct BufferEmitter(Rc<RefCell<Buffer>>);

impl BufferEmitter {
    /// Returns a new buffered sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts a snapshot of all diagnostics emitted so far.
    pub fn extract_errs(&self) -> Buffer {
        self.0.borrow().clone()
    }
}

impl Emitter for BufferEmitter {
    fn emit_err(&mut self, err: &SparklingError) {
        self.0.borrow_mut().push(err.to_string());
    }
}

struct HandlerInner {
    /// Number of errors emitted so far.
    err_count: usize,
    /// The last error emitted, for programmatic inspection.
    last_err: Option<SparklingError>,
    /// The formatted message of the last error.
    last_msg: Option<String>,
    /// The sink errors are written to.
    emitter: Box<dyn Emitter>,
}

impl HandlerInner {
    fn emit_err(&mut self, err: SparklingError) {
        self.err_count = self.err_count.saturating_add(1);
        self.emitter.emit_err(&err);
        self.last_msg = Some(err.to_string());
        self.last_err = Some(err);
    }
}

/// A handler deals with errors and other compiler output.
///
/// The parser holds a shared reference to a `Handler` and side-channels
/// errors through it; the handler forwards them to its [`Emitter`] and
/// retains the most recent diagnostic.
pub struct Handler {
    inner: RefCell<HandlerInner>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(Box::new(StderrEmitter))
    }
}

impl Handler {
    /// Construct a `Handler` using the given `emitter`.
    pub fn new(emitter: Box<dyn Emitter>) -> Self {
        Self {
            inner: RefCell::new(HandlerInner {
                err_count: 0,
                last_err: None,
                last_msg: None,
                emitter,
            }),
        }
    }

    /// Construct a `Handler` that writes to a buffer, returning the buffer's
    /// other handle alongside it.
    pub fn new_with_buf() -> (Self, BufferEmitter) {
        let buf = BufferEmitter::new();
        let handler = Self::new(Box::new(buf.clone()));
        (handler, buf)
    }

    /// Emit the error `err`.
    pub fn emit_err(&self, err: SparklingError) {
        self.inner.borrow_mut().emit_err(err);
    }

    /// Emits the error if `res` holds one, then passes `res` through.
    pub fn extend_if_error<T>(&self, res: Result<T>) -> Result<T> {
        if let Err(err) = &res {
            self.emit_err(err.clone());
        }
        res
    }

    /// Returns `true` if any errors were emitted.
    pub fn had_errors(&self) -> bool {
        self.inner.borrow().err_count > 0
    }

    /// The number of errors emitted so far.
    pub fn err_count(&self) -> usize {
        self.inner.borrow().err_count
    }

    /// The last error emitted, if any.
    pub fn last_err(&self) -> Option<SparklingError> {
        self.inner.borrow().last_err.clone()
    }

    /// The formatted diagnostic of the last error emitted, if any.
    pub fn last_message(&self) -> Option<String> {
        self.inner.borrow().last_msg.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserError;
    use sparkling_span::Span;

    #[test]
    fn test_buffered_emission() {
        let (handler, buf) = Handler::new_with_buf();
        assert!(!handler.had_errors());

        handler.emit_err(ParserError::unexpected_token(";", Span::new(2, 2, 1, 2)).into());

        assert!(handler.had_errors());
        assert_eq!(handler.err_count(), 1);
        assert_eq!(
            buf.extract_errs().last().map(String::as_str),
            Some("Sparkling: syntax error near line 2: unexpected token `;`")
        );
        assert_eq!(handler.last_message(), buf.extract_errs().last().cloned());
    }

    #[test]
    fn test_extend_if_error() {
        let (handler, _buf) = Handler::new_with_buf();

        let ok: Result<u32> = Ok(1);
        assert_eq!(handler.extend_if_error(ok), Ok(1));
        assert!(!handler.had_errors());

        let err: Result<u32> = Err(ParserError::lexer_comment_not_closed(Span::new(5, 7, 1, 1)).into());
        assert!(handler.extend_if_error(err).is_err());
        assert_eq!(handler.err_count(), 1);
        assert_eq!(handler.last_err().map(|e| e.line()), Some(5));
    }
}
