//! Wire types for tool invocation snapshots
//!
//! A [`ToolInvocation`] is the read-only input to the status line: one
//! snapshot of an agent-controlled action, re-delivered by the host whenever
//! its lifecycle state changes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle state of a tool invocation, as serialized by the chat backend
///
/// The wire format carries no success/failure distinction: an invocation
/// whose tool errored still arrives as `Result` and renders identically to
/// one that succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationState {
    /// Tool call requested, arguments fully streamed
    #[serde(rename = "call")]
    Call,
    /// Tool call still streaming arguments
    #[serde(rename = "partial-call")]
    PartialCall,
    /// A result has arrived
    #[serde(rename = "result")]
    Result,
}

impl InvocationState {
    /// Whether a result has arrived
    ///
    /// `Call` and `PartialCall` both fold into the pending presentation
    /// state; only `Result` counts as complete.
    pub fn is_complete(&self) -> bool {
        matches!(self, InvocationState::Result)
    }
}

/// A snapshot of one tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// The tool call ID from the backend (carried for host bookkeeping,
    /// never consulted by the status line)
    #[serde(rename = "toolCallId")]
    pub tool_call_id: String,
    /// Name of the tool (e.g., "str_replace_editor", "file_manager")
    #[serde(rename = "toolName")]
    pub tool_name: String,
    /// Current lifecycle state
    pub state: InvocationState,
    /// Untyped argument bag; only "command" and "path" are read
    #[serde(default)]
    pub args: Value,
}

impl ToolInvocation {
    /// The "command" argument, if present and a string
    pub fn command(&self) -> Option<&str> {
        self.args.get("command").and_then(Value::as_str)
    }

    /// The "path" argument, if present and a string
    pub fn path(&self) -> Option<&str> {
        self.args.get("path").and_then(Value::as_str)
    }
}
