//! tui-tool-status - inline status line for AI agent tool invocations
//!
//! Renders a one-line status indicator for a single tool invocation emitted
//! by a chat agent: "Viewing App.tsx" with an animated spinner while a
//! file-read is in flight, "Viewed App.tsx" with a solid dot once the result
//! arrives.
//!
//! The crate is a pure presentation mapper: the host delivers a fresh
//! [`ToolInvocation`] snapshot on every state change, and
//! [`render_status_line`] turns it into a ratatui [`Line`] in one
//! synchronous pass. No tools are executed here, no history is tracked, and
//! nothing is cached between renders.
//!
//! [`Line`]: ratatui::text::Line

pub mod actions;
pub mod models;
pub mod paths;
pub mod presenter;
pub mod ui;

pub use models::{InvocationState, ToolInvocation};
pub use presenter::{present, StatusPresentation};
pub use ui::{render_status_line, LayoutContext};
