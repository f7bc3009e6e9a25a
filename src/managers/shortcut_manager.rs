//! Shortcut Manager for Aurora.
//!
//! Small keyboard-binding table with conflict detection and
//! platform-specific modifier adaptation. The only default binding is the
//! global "open command bar" shortcut.

use std::collections::HashMap;

use crate::types::errors::ShortcutError;

/// Action name for opening the command bar in create mode.
pub const OPEN_COMMAND_BAR: &str = "open_command_bar";

pub struct ShortcutManager {
    shortcuts: HashMap<String, String>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let mut shortcuts = HashMap::new();
        shortcuts.insert(
            OPEN_COMMAND_BAR.to_string(),
            Self::adapt_for_platform("Ctrl+K"),
        );
        Self { shortcuts }
    }

    /// Adapts modifier keys for the current platform.
    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }

    /// Binds an action to a key combination, rejecting conflicts with
    /// bindings for other actions.
    pub fn bind(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError> {
        if keys.is_empty() {
            return Err(ShortcutError::InvalidKeys("keys cannot be empty".to_string()));
        }
        let adapted = Self::adapt_for_platform(keys);
        if let Some(existing) = self.action_for(&adapted) {
            if existing != action {
                return Err(ShortcutError::Conflict(format!(
                    "'{}' is already bound to '{}'",
                    adapted, existing
                )));
            }
        }
        self.shortcuts.insert(action.to_string(), adapted);
        Ok(())
    }

    pub fn keys_for(&self, action: &str) -> Option<&str> {
        self.shortcuts.get(action).map(|s| s.as_str())
    }

    /// Reverse lookup used by the key handler: which action, if any, is
    /// bound to this combination.
    pub fn action_for(&self, keys: &str) -> Option<&str> {
        self.shortcuts
            .iter()
            .find(|(_, bound)| bound.as_str() == keys)
            .map(|(action, _)| action.as_str())
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}
