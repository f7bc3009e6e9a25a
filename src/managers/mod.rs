// Aurora state managers
// Managers handle stateful operations: collection sync, the command bar
// modal, and keyboard shortcuts.

pub mod command_bar;
pub mod shortcut_manager;
pub mod sync_manager;
