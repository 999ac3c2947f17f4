//! Transient status line messages

/// Severity of a status message, used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A status message with an implicit expiry.
///
/// `generation` identifies which `StatusExpired` timer may clear it; a newer
/// message replaces the old one and invalidates its pending timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub generation: u64,
}

impl StatusMessage {
    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}
