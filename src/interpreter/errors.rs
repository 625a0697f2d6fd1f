//! Execution error types for the interpreter
//!
//! This module defines [`InterpreterError`], which represents errors raised
//! while dispatching program steps (as opposed to codec decode errors).
//!
//! A dispatch error fails the current `step()`/`run()` but never corrupts
//! state: the program counter does not advance past a failed step.

use std::fmt;

/// Errors that can occur while executing a program.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpreterError {
    /// A step's command token has no registered handler.
    UnknownCommand { command: String },
}

impl fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpreterError::UnknownCommand { command } => {
                write!(f, "Unknown command '{}'", command)
            }
        }
    }
}

impl std::error::Error for InterpreterError {}
