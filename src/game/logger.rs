//! Report channel for observable game messages
//!
//! Every operation on the game state reports what happened through this
//! logger. Reports are side effects distinct from return values: the shell
//! renders them to stdout, while tests capture them in memory and assert
//! on the exact text.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Verbosity level for report output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum VerbosityLevel {
    /// No output
    Silent = 0,
    /// Warnings only (e.g. a location closing)
    Minimal = 1,
    /// All action reports (default)
    #[default]
    Normal = 2,
    /// Everything, including trace detail
    Verbose = 3,
}

/// Output destination for report messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to the in-memory buffer (no stdout)
    Memory,
    /// Both stdout and the in-memory buffer
    Both,
}

/// A captured report line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Verbosity level of this entry
    pub level: VerbosityLevel,
    /// Report text
    pub message: String,
}

/// Guard type providing read-only access to captured entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl LogGuard<'_> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl Deref for LogGuard<'_> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Centralized report logger
///
/// The capture buffer sits behind a `RefCell` so reporting methods take
/// `&self`; read-only operations on the game state can still report.
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,

    /// Captured report lines
    buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a logger with default verbosity (Normal)
    pub fn new() -> Self {
        GameLogger {
            verbosity: VerbosityLevel::default(),
            output_mode: OutputMode::default(),
            buffer: RefCell::new(Vec::new()),
        }
    }

    /// Create a logger with the given verbosity
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_mode: OutputMode::default(),
            buffer: RefCell::new(Vec::new()),
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Capture to the in-memory buffer, suppressing stdout
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.output_mode, OutputMode::Memory | OutputMode::Both)
    }

    /// Access the captured entries. The guard derefs to `[LogEntry]`.
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.buffer.borrow(),
        }
    }

    /// Clear the capture buffer
    pub fn clear_logs(&mut self) {
        self.buffer.borrow_mut().clear();
    }

    /// Log at Minimal level (warnings)
    #[inline]
    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, message);
    }

    /// Log at Normal level (action reports)
    #[inline]
    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, message);
    }

    /// Log at Verbose level (trace detail)
    #[inline]
    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, message);
    }

    fn log(&self, level: VerbosityLevel, message: &str) {
        let should_capture = matches!(self.output_mode, OutputMode::Memory | OutputMode::Both);
        let should_output = matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both);

        // Early exit if the message won't be used
        if level > self.verbosity && !should_capture {
            return;
        }

        if should_capture {
            self.buffer.borrow_mut().push(LogEntry {
                level,
                message: message.to_string(),
            });
        }

        if should_output && level <= self.verbosity {
            println!("{message}");
        }
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.buffer.borrow().len())
            .finish()
    }
}

// Cloning copies the configuration, not the captured buffer.
impl Clone for GameLogger {
    fn clone(&self) -> Self {
        GameLogger {
            verbosity: self.verbosity,
            output_mode: self.output_mode,
            buffer: RefCell::new(Vec::new()),
        }
    }
}
