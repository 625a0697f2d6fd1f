//! Program sequence: ordered command tokens plus a program counter
//!
//! [`ProgramSequence`] is the in-memory representation of a user's program.
//! Command tokens are opaque strings (`"forward1"`, `"left90"`, ...); the
//! sequence stores and rearranges them without interpreting them.
//!
//! # Counter Consistency
//!
//! Structural edits keep the program counter pointing at the same logical
//! step wherever possible: inserting at or before the counter shifts it
//! right, deleting before the counter shifts it left. This is what keeps
//! the active-step highlight stable while a user edits a paused program.

/// Persistent ordered list of command tokens with a program counter.
///
/// Every edit operation returns a new `ProgramSequence`; the receiver is
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSequence {
    program: Vec<String>,
    program_counter: usize,
}

impl ProgramSequence {
    pub fn new(program: Vec<String>, program_counter: usize) -> Self {
        ProgramSequence {
            program,
            program_counter,
        }
    }

    /// An empty program with the counter at 0.
    pub fn empty() -> Self {
        ProgramSequence {
            program: Vec::new(),
            program_counter: 0,
        }
    }

    pub fn program(&self) -> &[String] {
        &self.program
    }

    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    /// Number of steps in the program.
    pub fn step_count(&self) -> usize {
        self.program.len()
    }

    /// Token at `index`, or `None` if out of range.
    pub fn get_step(&self, index: usize) -> Option<&str> {
        self.program.get(index).map(|s| s.as_str())
    }

    /// Token at the current program counter, or `None` if the counter is
    /// at or past the end of the program.
    pub fn current_step(&self) -> Option<&str> {
        self.get_step(self.program_counter)
    }

    /// Splice `command` in at `index` (clamped to the program length).
    ///
    /// If the insertion point is at or before the counter, the counter
    /// shifts right so it still points at the same logical step.
    pub fn insert_step(&self, index: usize, command: &str) -> ProgramSequence {
        let index = index.min(self.program.len());
        let mut program = self.program.clone();
        program.insert(index, command.to_string());

        let program_counter = if index <= self.program_counter {
            self.program_counter + 1
        } else {
            self.program_counter
        };

        ProgramSequence {
            program,
            program_counter,
        }
    }

    /// Remove the step at `index`; returns the sequence unchanged if the
    /// index is out of range.
    ///
    /// If the removed step was before the counter and the program is still
    /// non-empty, the counter shifts left to track the same logical step.
    pub fn delete_step(&self, index: usize) -> ProgramSequence {
        if index >= self.program.len() {
            return self.clone();
        }
        let mut program = self.program.clone();
        program.remove(index);

        let program_counter = if index < self.program_counter && !program.is_empty() {
            self.program_counter - 1
        } else {
            self.program_counter
        };

        ProgramSequence {
            program,
            program_counter,
        }
    }

    /// Replace the token at `index` in place; counter unchanged. Returns
    /// the sequence unchanged if the index is out of range.
    pub fn overwrite_step(&self, index: usize, command: &str) -> ProgramSequence {
        if index >= self.program.len() {
            return self.clone();
        }
        let mut program = self.program.clone();
        program[index] = command.to_string();

        ProgramSequence {
            program,
            program_counter: self.program_counter,
        }
    }

    /// Exchange the tokens at the two indices; counter unchanged. No-op if
    /// either index is out of range.
    pub fn swap_step(&self, index_from: usize, index_to: usize) -> ProgramSequence {
        if index_from >= self.program.len() || index_to >= self.program.len() {
            return self.clone();
        }
        let mut program = self.program.clone();
        program.swap(index_from, index_to);

        ProgramSequence {
            program,
            program_counter: self.program_counter,
        }
    }

    /// Advance the counter by one; program unchanged.
    pub fn increment_program_counter(&self) -> ProgramSequence {
        ProgramSequence {
            program: self.program.clone(),
            program_counter: self.program_counter + 1,
        }
    }

    /// Replace the counter outright.
    pub fn update_program_counter(&self, program_counter: usize) -> ProgramSequence {
        ProgramSequence {
            program: self.program.clone(),
            program_counter,
        }
    }

    /// Replace the program outright, keeping the counter.
    pub fn update_program(&self, program: Vec<String>) -> ProgramSequence {
        ProgramSequence {
            program,
            program_counter: self.program_counter,
        }
    }

    /// Replace both program and counter.
    pub fn update_program_and_program_counter(
        &self,
        program: Vec<String>,
        program_counter: usize,
    ) -> ProgramSequence {
        ProgramSequence {
            program,
            program_counter,
        }
    }
}
