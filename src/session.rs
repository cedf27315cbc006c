//! Project session lifecycle.
//!
//! Everything is blocked behind the name dialog until a non-empty project
//! name is submitted. The transition is one-shot: once active, there is no
//! way back to the naming state.

/// The active project context. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSession {
    name: String,
}

impl ProjectSession {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Session state machine: `AwaitingName` -> `Active`, never backwards.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    AwaitingName,
    Active(ProjectSession),
}

impl SessionState {
    /// Attempt the one-shot naming transition.
    ///
    /// The input is trimmed; whitespace-only input leaves the state
    /// untouched and returns `false` (the dialog stays open, no message).
    /// Returns `false` on an already-active session as well.
    pub fn submit_name(&mut self, input: &str) -> bool {
        match self {
            SessionState::AwaitingName => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    return false;
                }
                *self = SessionState::Active(ProjectSession {
                    name: trimmed.to_string(),
                });
                true
            }
            SessionState::Active(_) => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }

    pub fn project(&self) -> Option<&ProjectSession> {
        match self {
            SessionState::AwaitingName => None,
            SessionState::Active(session) => Some(session),
        }
    }
}
