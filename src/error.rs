use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::object::Object;
use crate::token::{Token, TokenKind};

/// Accumulates "did this stage see an error" state for one pipeline run and
/// formats every diagnostic the pipeline can produce, writing each report
/// through the same output sink the interpreter prints to rather than to
/// stderr — the pipeline's whole external contract (`print` output and
/// diagnostics alike) goes through one sink the driver owns. Passed by
/// `&mut` reference to each stage instead of the sticky `static mut` flags
/// an earlier generation of this crate relied on.
pub struct Diagnostics<'out> {
    out: Rc<RefCell<&'out mut dyn Write>>,
    had_error: bool,
    had_runtime_error: bool,
}

impl<'out> Diagnostics<'out> {
    pub fn new(out: Rc<RefCell<&'out mut dyn Write>>) -> Self {
        Diagnostics {
            out,
            had_error: false,
            had_runtime_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    pub fn report_scan(&mut self, error: &ScanError) {
        let _ = writeln!(self.out.borrow_mut(), "[line {}] {}", error.line, error.message);
        self.had_error = true;
    }

    pub fn report_parse(&mut self, error: &ParseError) {
        self.report_at(&error.token, &error.message);
    }

    pub fn report_resolve(&mut self, error: &ResolveError) {
        self.report_at(&error.token, &error.message);
    }

    fn report_at(&mut self, token: &Token, message: &str) {
        if token.kind == TokenKind::Eof {
            let _ = writeln!(self.out.borrow_mut(), "[line {}] Error at end: {message}.", token.line);
        } else {
            let _ = writeln!(self.out.borrow_mut(), "[line {}] Error at '{}': {message}.", token.line, token.lexeme);
        }
        self.had_error = true;
    }

    pub fn report_runtime(&mut self, error: &RuntimeError) {
        let _ = writeln!(self.out.borrow_mut(), "{}", error.message);
        let _ = writeln!(self.out.borrow_mut(), "[line {}]", error.token.line);
        self.had_runtime_error = true;
    }
}

/// Reported by the scanner; carries only a line since lexing errors have no
/// token yet (the character itself may be what's unexpected).
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

/// Reported by the parser at the offending token (or at `Eof`).
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

/// Reported by the resolver; same wire format as `ParseError`.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

/// Propagates out of evaluation via `?`, caught once at the top of
/// `Interpreter::interpret`.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

/// The non-local control flow that statement execution can produce: either
/// a genuine runtime error, or a `return` unwinding to the nearest
/// user-function call boundary. `Return` is never reported to the user.
#[derive(Debug)]
pub enum Unwind {
    Error(RuntimeError),
    Return(Object),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
