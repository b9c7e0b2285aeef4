//! Static action configuration for known tool/command pairs
//!
//! Maps a `(tool, command)` pair to the labels and icon used by the status
//! line. The table is fixed at build time; extending coverage to a new tool
//! or command means adding an entry here.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Icon for tools without a configured entry
const GENERIC_TOOL_ICON: &str = "⚙️";

/// Presentation rule for one tool/command pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// Label while the invocation is in flight (e.g., "Viewing")
    pub pending_label: String,
    /// Label once a result has arrived (e.g., "Viewed")
    pub completed_label: String,
    /// Unicode icon for the action
    pub icon: &'static str,
}

impl ActionConfig {
    fn new(pending: &str, completed: &str, icon: &'static str) -> Self {
        Self {
            pending_label: pending.to_string(),
            completed_label: completed.to_string(),
            icon,
        }
    }

    /// Fallback for unconfigured tools: the raw tool name as both labels
    fn fallback(tool_name: &str) -> Self {
        Self::new(tool_name, tool_name, GENERIC_TOOL_ICON)
    }
}

/// Two-level lookup table: tool name -> command -> config
///
/// Initialized once, never mutated.
static ACTION_CONFIGS: Lazy<HashMap<&'static str, HashMap<&'static str, ActionConfig>>> =
    Lazy::new(|| {
        let mut str_replace_editor = HashMap::new();
        str_replace_editor.insert("view", ActionConfig::new("Viewing", "Viewed", "📄"));
        str_replace_editor.insert("create", ActionConfig::new("Creating", "Created", "📝"));
        str_replace_editor.insert("str_replace", ActionConfig::new("Editing", "Edited", "✏️"));
        str_replace_editor.insert("insert", ActionConfig::new("Editing", "Edited", "✏️"));

        let mut file_manager = HashMap::new();
        file_manager.insert("rename", ActionConfig::new("Renaming", "Renamed", "📝"));
        file_manager.insert("delete", ActionConfig::new("Deleting", "Deleted", "🗑️"));

        let mut configs = HashMap::new();
        configs.insert("str_replace_editor", str_replace_editor);
        configs.insert("file_manager", file_manager);
        configs
    });

/// Resolve the action config for a tool/command pair
///
/// Exact string equality only - no aliasing, no case normalization. Any
/// miss (unknown tool, absent command, unknown command under a known tool)
/// degrades to a readable fallback keyed by the tool name rather than
/// failing.
pub fn resolve_action(tool_name: &str, command: Option<&str>) -> ActionConfig {
    if let Some(commands) = ACTION_CONFIGS.get(tool_name) {
        if let Some(config) = command.and_then(|c| commands.get(c)) {
            return config.clone();
        }
    }
    tracing::debug!("no action config for tool '{tool_name}', using fallback");
    ActionConfig::fallback(tool_name)
}
