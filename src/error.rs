//! Error Types
//!
//! The three failure kinds the state manager distinguishes, plus the
//! action-specific notices shown to the user.

use thiserror::Error;

/// Failure kinds for inventory operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Local, pre-submission validation failure; never reaches the network
    #[error("{0}")]
    Validation(String),
    /// The service answered with a non-success status
    #[error("server rejected the request (status {status})")]
    Rejected { status: u16 },
    /// Network or decoding fault while talking to the service
    #[error("network error: {0}")]
    Transport(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        InventoryError::Validation(msg.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, InventoryError::Transport(_))
    }
}

/// The user-triggered operation that failed, for action-specific notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Delete,
    Restore,
    Purge,
}

impl Action {
    fn failure_text(self) -> &'static str {
        match self {
            Action::Add => "Add failed",
            Action::Update => "Update failed",
            Action::Delete => "Delete failed",
            Action::Restore => "Restore failed",
            Action::Purge => "Permanent delete failed",
        }
    }
}

/// A user-visible failure notice for a specific attempted action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub action: Action,
    pub text: String,
}

impl Notice {
    pub fn failure(action: Action, err: &InventoryError) -> Self {
        let text = match err {
            InventoryError::Validation(msg) => format!("{}: {}", action.failure_text(), msg),
            InventoryError::Rejected { .. } => action.failure_text().to_string(),
            InventoryError::Transport(_) => format!("{} (network error)", action.failure_text()),
        };
        Notice { action, text }
    }
}
