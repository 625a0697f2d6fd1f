// Step execution engine for program sequences

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use futures_util::future::join_all;
use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::interpreter::errors::InterpreterError;
use crate::model::ProgramSequence;

/// Completion signal returned by a command handler.
///
/// Boxed and non-`Send`: execution is single-threaded and cooperative, so
/// handlers may freely capture `Rc`/`RefCell` host state.
pub type CommandFuture = Pin<Box<dyn Future<Output = ()>>>;

type CommandHandler = Box<dyn Fn(InterpreterControl, u64) -> CommandFuture>;

type RunningStateListener = Box<dyn FnMut(RunningStateChange)>;

/// Phase of one execution of a program.
///
/// `PauseRequested` and `StopRequested` are transient: they are set by
/// [`Interpreter::pause`]/[`Interpreter::stop`] while a step is in flight
/// and resolved to `Paused`/`Stopped` at the next step boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningState {
    Stopped,
    Running,
    Paused,
    PauseRequested,
    StopRequested,
}

/// Step-boundary notification delivered to the host's listener.
///
/// `active_step` is the index of the step about to execute, or `None` in
/// the final notification of a `run()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningStateChange {
    pub is_running: bool,
    pub active_step: Option<usize>,
}

struct ControlState {
    running_state: RunningState,
    step_time_ms: u64,
}

/// Cloneable handle shared between the interpreter and its command
/// handlers.
///
/// Handlers receive a handle with every invocation, which is how a handler
/// (for example, a robot driver that loses its connection) can request a
/// stop or pause of the run that invoked it.
#[derive(Clone)]
pub struct InterpreterControl {
    inner: Rc<RefCell<ControlState>>,
}

impl InterpreterControl {
    fn new(step_time_ms: u64) -> Self {
        InterpreterControl {
            inner: Rc::new(RefCell::new(ControlState {
                running_state: RunningState::Stopped,
                step_time_ms,
            })),
        }
    }

    pub fn running_state(&self) -> RunningState {
        self.inner.borrow().running_state
    }

    /// Duration passed to handlers invoked after this point.
    pub fn step_time_ms(&self) -> u64 {
        self.inner.borrow().step_time_ms
    }

    /// Request that the current run not proceed past the step in flight.
    pub fn stop(&self) {
        let mut state = self.inner.borrow_mut();
        state.running_state = match state.running_state {
            RunningState::Running | RunningState::PauseRequested => RunningState::StopRequested,
            RunningState::Paused => RunningState::Stopped,
            other => other,
        };
    }

    /// Request that the current run pause at the next step boundary.
    pub fn pause(&self) {
        let mut state = self.inner.borrow_mut();
        if state.running_state == RunningState::Running {
            state.running_state = RunningState::PauseRequested;
        }
    }

    fn set_running_state(&self, running_state: RunningState) {
        self.inner.borrow_mut().running_state = running_state;
    }

    fn set_step_time(&self, step_time_ms: u64) {
        self.inner.borrow_mut().step_time_ms = step_time_ms;
    }
}

/// The interpreter that executes a program sequence step by step.
///
/// Hosts register one handler per (command, source) pair; every handler
/// registered for a command runs when that command executes, and the step
/// completes only once all of them have completed. The interpreter owns
/// the [`ProgramSequence`] snapshot it executes; the host replaces it via
/// [`set_program_sequence`](Interpreter::set_program_sequence) on edit.
pub struct Interpreter {
    /// Command token -> handlers tagged by source name
    handlers: FxHashMap<String, Vec<(String, CommandHandler)>>,

    /// Running state and step time, shared with handler invocations
    control: InterpreterControl,

    /// The program being executed
    sequence: ProgramSequence,

    /// Host callback fired at every step boundary during `run()`
    on_running_state_change: RunningStateListener,
}

impl Interpreter {
    /// Create an interpreter with an empty program.
    ///
    /// `step_time_ms` is the duration passed to handlers; the listener is
    /// invoked at every step boundary of a `run()`.
    pub fn new<F>(step_time_ms: u64, on_running_state_change: F) -> Self
    where
        F: FnMut(RunningStateChange) + 'static,
    {
        Interpreter {
            handlers: FxHashMap::default(),
            control: InterpreterControl::new(step_time_ms),
            sequence: ProgramSequence::empty(),
            on_running_state_change: Box::new(on_running_state_change),
        }
    }

    /// Register `handler` for `command` under `source`.
    ///
    /// Independent subsystems register under distinct source names and all
    /// fire for the same command; re-registering an existing
    /// (command, source) pair replaces its handler.
    pub fn add_command_handler<F>(&mut self, command: &str, source: &str, handler: F)
    where
        F: Fn(InterpreterControl, u64) -> CommandFuture + 'static,
    {
        let entries = self.handlers.entry(command.to_string()).or_default();
        let handler: CommandHandler = Box::new(handler);
        if let Some(entry) = entries.iter_mut().find(|(name, _)| name.as_str() == source) {
            entry.1 = handler;
        } else {
            entries.push((source.to_string(), handler));
        }
    }

    /// Change the duration passed to subsequently invoked handlers.
    /// In-flight invocations keep the value they were called with.
    pub fn set_step_time(&mut self, step_time_ms: u64) {
        self.control.set_step_time(step_time_ms);
    }

    /// Replace the program to execute. The counter comes with the
    /// sequence, so a host can hand over a partially executed program.
    pub fn set_program_sequence(&mut self, sequence: ProgramSequence) {
        self.sequence = sequence;
    }

    pub fn program_sequence(&self) -> &ProgramSequence {
        &self.sequence
    }

    pub fn running_state(&self) -> RunningState {
        self.control.running_state()
    }

    /// A control handle the host can keep or pass to other subsystems.
    pub fn control(&self) -> InterpreterControl {
        self.control.clone()
    }

    /// See [`InterpreterControl::stop`].
    pub fn stop(&self) {
        self.control.stop();
    }

    /// See [`InterpreterControl::pause`].
    pub fn pause(&self) {
        self.control.pause();
    }

    /// Execute the step at the current program counter and advance past it.
    ///
    /// A counter at or past the end of the program is a completed no-op.
    /// An unknown command fails the step and leaves the counter in place.
    pub async fn step(&mut self) -> Result<(), InterpreterError> {
        let command = match self.sequence.current_step() {
            Some(command) => command.to_string(),
            None => return Ok(()),
        };
        self.call_handlers(&command).await?;
        self.sequence = self.sequence.increment_program_counter();
        Ok(())
    }

    /// Execute one command's handlers outside of program playback: the
    /// program counter and running state are untouched.
    pub async fn do_command(&self, command: &str) -> Result<(), InterpreterError> {
        self.call_handlers(command).await
    }

    /// Run from the current program counter to the end of the program.
    ///
    /// The listener fires before each step with the step's index, and
    /// exactly once more after the loop exits — on normal completion, on
    /// `stop()`/`pause()`, on the empty program, and on an unknown-command
    /// failure (which is then returned). Calling `run()` on a paused
    /// interpreter resumes from the current counter.
    pub async fn run(&mut self) -> Result<(), InterpreterError> {
        self.control.set_running_state(RunningState::Running);
        debug!(
            "run: starting at step {} of {}",
            self.sequence.program_counter(),
            self.sequence.step_count()
        );

        let mut result = Ok(());
        while self.sequence.current_step().is_some()
            && self.control.running_state() == RunningState::Running
        {
            self.emit(RunningStateChange {
                is_running: true,
                active_step: Some(self.sequence.program_counter()),
            });
            if let Err(err) = self.step().await {
                result = Err(err);
                break;
            }
        }

        // Resolve any transient request state at the step boundary.
        let final_state = match self.control.running_state() {
            RunningState::PauseRequested => RunningState::Paused,
            _ => RunningState::Stopped,
        };
        self.control.set_running_state(final_state);
        debug!("run: finished as {:?}", final_state);

        self.emit(RunningStateChange {
            is_running: false,
            active_step: None,
        });
        result
    }

    async fn call_handlers(&self, command: &str) -> Result<(), InterpreterError> {
        let entries = match self.handlers.get(command) {
            Some(entries) if !entries.is_empty() => entries,
            _ => {
                warn!("no handler registered for command '{}'", command);
                return Err(InterpreterError::UnknownCommand {
                    command: command.to_string(),
                });
            }
        };
        let step_time_ms = self.control.step_time_ms();
        let futures: Vec<CommandFuture> = entries
            .iter()
            .map(|(_, handler)| handler(self.control.clone(), step_time_ms))
            .collect();
        join_all(futures).await;
        Ok(())
    }

    fn emit(&mut self, change: RunningStateChange) {
        (self.on_running_state_change)(change);
    }
}
