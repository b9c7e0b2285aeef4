//! UI rendering for the tool status line
//!
//! The renderer is tick-driven: the host re-renders with an advancing
//! `tick_count` (one tick ~100ms) and the spinner animates by selecting a
//! frame from the count. No timers or state live in this module.

mod helpers;
mod status_line;
mod theme;

pub use helpers::{find_char_boundary, truncate_string, LayoutContext, SPINNER_FRAMES};
pub use status_line::render_status_line;
pub use theme::{COLOR_DIM, COLOR_TOOL_ICON, COLOR_TOOL_RUNNING, COLOR_TOOL_SUCCESS};
