//! Step-driven program execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`engine::Interpreter`], its control handle, and the
//!   running-state machine
//! - [`errors`]: execution error types
//!
//! # Execution Model
//!
//! The interpreter executes one command token per step. A step dispatches
//! to every handler registered for that token, waits for all of them to
//! complete jointly, then advances the program counter. `run()` drives
//! steps strictly in sequence and reports each step boundary to the host
//! through a running-state listener. Cancellation is cooperative: `stop()`
//! and `pause()` take effect at the next step boundary, never mid-handler.

pub mod engine;
pub mod errors;

pub use engine::{
    CommandFuture, Interpreter, InterpreterControl, RunningState, RunningStateChange,
};
pub use errors::InterpreterError;
