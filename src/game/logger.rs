//! Game logger with verbosity levels and in-memory capture
//!
//! Messages go to stdout, to an in-memory buffer, or both. Tests switch the
//! logger into capture mode and inspect the entries afterwards.

use crate::game::{GameEvent, VerbosityLevel};
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
    /// Optional category (e.g. "game_event", "controller_choice")
    pub category: Option<String>,
}

/// Read-only access to captured entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Centralized logger owned by the state machine
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,

    /// Interior mutability lets read-only views (controllers) log choices
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Capture to memory only, suppressing stdout
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn disable_capture(&mut self) {
        self.output_mode = OutputMode::Stdout;
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.output_mode, OutputMode::Memory | OutputMode::Both)
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    pub fn clear_logs(&mut self) {
        self.log_buffer.borrow_mut().clear();
    }

    /// Print captured entries the current verbosity allows, then clear them
    pub fn flush_buffer(&mut self) {
        for entry in self.log_buffer.borrow().iter() {
            if entry.level <= self.verbosity {
                Self::print(entry.level, &entry.message);
            }
        }
        self.clear_logs();
    }

    fn print(level: VerbosityLevel, message: &str) {
        if level == VerbosityLevel::Minimal {
            println!("{}", message);
        } else {
            println!("  {}", message);
        }
    }

    fn log(&self, level: VerbosityLevel, category: Option<&str>, message: &str) {
        // Silent entries are never printed or captured
        if level == VerbosityLevel::Silent {
            return;
        }

        // Capture ignores verbosity so tests see everything
        if self.is_capturing() {
            self.log_buffer.borrow_mut().push(LogEntry {
                level,
                message: message.to_string(),
                category: category.map(str::to_string),
            });
        }

        let to_stdout = matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both);
        if to_stdout && level <= self.verbosity {
            Self::print(level, message);
        }
    }

    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, None, message);
    }

    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, None, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, None, message);
    }

    /// Log a game event; outcomes are Minimal, everything else Normal
    pub fn event(&self, event: &GameEvent) {
        let level = match event {
            GameEvent::Won { .. } | GameEvent::NewGame => VerbosityLevel::Minimal,
            _ => VerbosityLevel::Normal,
        };
        self.log(level, Some("game_event"), &event.to_string());
    }

    /// Log a controller decision at Verbose level
    pub fn controller_choice(&self, controller_name: &str, message: &str) {
        self.log(
            VerbosityLevel::Verbose,
            Some("controller_choice"),
            &format!("{controller_name}: {message}"),
        );
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
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}

/// Clones share settings but start with an empty buffer
impl Clone for GameLogger {
    fn clone(&self) -> Self {
        GameLogger {
            verbosity: self.verbosity,
            output_mode: self.output_mode,
            log_buffer: RefCell::new(Vec::new()),
        }
    }
}
