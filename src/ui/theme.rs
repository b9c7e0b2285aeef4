//! Color constants for the status line
//!
//! Minimal dark palette matching agent-CLI tool output conventions.

use ratatui::style::Color;

/// Tool icon color - blue #007ACC
pub const COLOR_TOOL_ICON: Color = Color::Rgb(0, 122, 204);

/// Tool running state - gray
pub const COLOR_TOOL_RUNNING: Color = Color::Rgb(128, 128, 128);

/// Tool success state - green #04B575
pub const COLOR_TOOL_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Dim text for less important info (the filename token)
pub const COLOR_DIM: Color = Color::DarkGray;
