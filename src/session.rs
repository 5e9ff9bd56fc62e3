//! Per-session conversational state.
//!
//! The only mutable state in the whole program: the user's name, set at most
//! once and read-only afterwards. It is an explicit context value passed to
//! the chat loop, not a process-wide global.

/// Conversation-scoped state.
#[derive(Debug, Default)]
pub struct Session {
    user_name: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the user's name. Only the first non-empty name is kept; later
    /// calls are ignored.
    pub fn set_name(&mut self, name: &str) {
        let name = name.trim();
        if self.user_name.is_none() && !name.is_empty() {
            self.user_name = Some(name.to_string());
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Farewell line, decorated with the name when one is known.
    pub fn farewell(&self) -> String {
        match &self.user_name {
            Some(name) => format!("Goodbye, {name}! Have a great day!"),
            None => "Goodbye! Have a great day!".to_string(),
        }
    }
}
