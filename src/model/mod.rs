//! Core program and character data model
//!
//! This module provides the two immutable value types at the heart of the
//! environment:
//! - [`character`]: the character's kinematic state (position, heading,
//!   drawn path)
//! - [`sequence`]: the program itself (ordered command tokens plus a
//!   program counter)
//!
//! # Value Semantics
//!
//! Both types are persistent: every transform or edit returns a new value
//! and never mutates the receiver. The host keeps the canonical "current"
//! instance and replaces it wholesale on each change, which is what makes
//! undo, sharing via URL, and mid-run edits safe without any locking.

pub mod character;
pub mod sequence;

pub use character::{CharacterState, PathSegment};
pub use sequence::ProgramSequence;
