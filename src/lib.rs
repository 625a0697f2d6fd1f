//! # Introduction
//!
//! Pathsteps is the UI-independent core of a block-based movement
//! programming environment: children compose short programs of movement
//! tokens (`forward1`, `left90`, ...) that drive an on-screen character,
//! and optionally a physical robot, one step at a time.
//!
//! ## Execution pipeline
//!
//! ```text
//! URL/query text → Codecs → ProgramSequence → Interpreter → handlers
//!                                 ↑                             |
//!                           host edits                  CharacterState
//! ```
//!
//! 1. [`model`] — the immutable value types: [`model::ProgramSequence`]
//!    (ordered command tokens plus a program counter) and
//!    [`model::CharacterState`] (position, heading, drawn path).
//! 2. [`interpreter`] — the async step engine: per-command handler
//!    registry, run/pause/stop/resume, running-state notifications.
//! 3. [`codec`] — compact text encodings for persistence and share URLs:
//!    program text, character-state text, and query parameters.
//! 4. [`math`] — the wrap/approximate-equality primitives the model uses.
//!
//! ## What lives elsewhere
//!
//! Rendering, accessibility wiring, drag-and-drop, audio, speech input,
//! and device transports are host concerns. The host owns the canonical
//! `ProgramSequence` and `CharacterState`, registers command handlers that
//! apply movements to them, and persists both through the codecs.

pub mod codec;
pub mod interpreter;
pub mod math;
pub mod model;

pub use interpreter::{Interpreter, InterpreterControl, InterpreterError, RunningState};
pub use model::{CharacterState, PathSegment, ProgramSequence};
