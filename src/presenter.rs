//! Presentation mapping for one tool invocation snapshot
//!
//! [`present`] is the single entry point of the core: it combines the
//! action table lookup, the filename reducer, and the lifecycle fold into
//! the tuple the UI draws. Pure and idempotent - the same snapshot always
//! maps to the same output.

use crate::actions::resolve_action;
use crate::models::ToolInvocation;
use crate::paths::display_filename;

/// Everything the UI needs to draw one status line
///
/// Derived and transient: recomputed on every render, never cached or
/// diffed against a previous value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPresentation {
    /// Icon for the resolved action
    pub icon: &'static str,
    /// Pending or completed label, depending on lifecycle state
    pub label: String,
    /// Whether the completion marker renders as done (vs animated)
    pub is_complete: bool,
    /// Display filename extracted from the path argument
    pub filename: String,
}

/// Map an invocation snapshot to its presentation tuple
pub fn present(invocation: &ToolInvocation) -> StatusPresentation {
    let config = resolve_action(&invocation.tool_name, invocation.command());
    let is_complete = invocation.state.is_complete();
    let label = if is_complete {
        config.completed_label
    } else {
        config.pending_label
    };

    StatusPresentation {
        icon: config.icon,
        label,
        is_complete,
        filename: display_filename(invocation.path()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvocationState;
    use serde_json::json;

    fn invocation(
        tool_name: &str,
        state: InvocationState,
        args: serde_json::Value,
    ) -> ToolInvocation {
        ToolInvocation {
            tool_call_id: "test-call".to_string(),
            tool_name: tool_name.to_string(),
            state,
            args,
        }
    }

    #[test]
    fn test_pending_view_presents_viewing() {
        let inv = invocation(
            "str_replace_editor",
            InvocationState::Call,
            json!({ "command": "view", "path": "/src/App.tsx" }),
        );
        let status = present(&inv);

        assert_eq!(status.label, "Viewing");
        assert_eq!(status.filename, "App.tsx");
        assert!(!status.is_complete);
    }

    #[test]
    fn test_completed_view_presents_viewed() {
        let inv = invocation(
            "str_replace_editor",
            InvocationState::Result,
            json!({ "command": "view", "path": "/src/App.tsx" }),
        );
        let status = present(&inv);

        assert_eq!(status.label, "Viewed");
        assert_eq!(status.filename, "App.tsx");
        assert!(status.is_complete);
    }

    #[test]
    fn test_partial_call_folds_into_pending() {
        let inv = invocation(
            "str_replace_editor",
            InvocationState::PartialCall,
            json!({ "command": "create", "path": "/src/new.tsx" }),
        );
        let status = present(&inv);

        assert_eq!(status.label, "Creating");
        assert!(!status.is_complete);
    }

    #[test]
    fn test_pending_delete_presents_deleting() {
        let inv = invocation(
            "file_manager",
            InvocationState::Call,
            json!({ "command": "delete", "path": "/src/unused.tsx" }),
        );
        let status = present(&inv);

        assert_eq!(status.label, "Deleting");
        assert_eq!(status.filename, "unused.tsx");
    }

    #[test]
    fn test_unknown_tool_presents_raw_name() {
        let inv = invocation("unknown_tool", InvocationState::Call, json!({}));
        let status = present(&inv);

        assert_eq!(status.label, "unknown_tool");
        assert_eq!(status.filename, "file");
    }

    #[test]
    fn test_missing_path_presents_placeholder() {
        let inv = invocation(
            "str_replace_editor",
            InvocationState::Call,
            json!({ "command": "create" }),
        );
        let status = present(&inv);

        assert_eq!(status.label, "Creating");
        assert_eq!(status.filename, "file");
    }

    #[test]
    fn test_present_is_idempotent() {
        let inv = invocation(
            "file_manager",
            InvocationState::Result,
            json!({ "command": "rename", "path": "/src/old.tsx", "new_path": "/src/new.tsx" }),
        );

        assert_eq!(present(&inv), present(&inv));
    }
}
