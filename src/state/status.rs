/// The single status line shown to the user
///
/// Only one value is live at a time. Setting a new status silently
/// replaces the previous one: there is no queue and no history.

use std::fmt;

/// Observable state of the workflow
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading(String),
    Error(String),
    Success(String),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }

    /// Text for the status line (empty when idle)
    pub fn message(&self) -> &str {
        match self {
            Status::Idle => "",
            Status::Loading(msg) | Status::Error(msg) | Status::Success(msg) => msg,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => f.write_str("idle"),
            Status::Loading(msg) => write!(f, "loading({msg})"),
            Status::Error(msg) => write!(f, "error({msg})"),
            Status::Success(msg) => write!(f, "success({msg})"),
        }
    }
}

/// Single-slot holder of the current [`Status`]
#[derive(Debug, Default)]
pub struct StatusProjector {
    current: Status,
}

impl StatusProjector {
    pub fn current(&self) -> &Status {
        &self.current
    }

    pub fn set(&mut self, status: Status) {
        tracing::debug!(from = %self.current, to = %status, "status transition");
        self.current = status;
    }

    pub fn loading(&mut self, message: impl Into<String>) {
        self.set(Status::Loading(message.into()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.set(Status::Error(message.into()));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.set(Status::Success(message.into()));
    }

    /// Drop an `Error` back to `Idle`; any other status is left alone.
    pub fn clear_error(&mut self) {
        if self.current.is_error() {
            self.set(Status::Idle);
        }
    }
}
