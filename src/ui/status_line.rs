//! Status line rendering
//!
//! Renders one tool invocation as a single ratatui [`Line`]: icon,
//! completion marker (animated spinner vs solid dot), label, and the
//! filename token.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::models::ToolInvocation;
use crate::presenter::present;

use super::helpers::{truncate_string, LayoutContext, SPINNER_FRAMES};
use super::theme::{COLOR_DIM, COLOR_TOOL_ICON, COLOR_TOOL_RUNNING, COLOR_TOOL_SUCCESS};

/// Render a tool invocation as a status line
///
/// Uses `LayoutContext` for responsive filename truncation and `tick_count`
/// to select the spinner frame (~100ms per frame at 10 ticks/sec).
///
/// # Display format
/// - Pending:  `[icon] [spinner] [label] [filename]` (gray)
/// - Complete: `[icon] ● [label] [filename]` (green)
pub fn render_status_line(
    invocation: &ToolInvocation,
    tick_count: u64,
    ctx: &LayoutContext,
) -> Line<'static> {
    let status = present(invocation);

    // Budget for padding (2), icon (2), marker (2), label, and a space
    let max_filename_len = ctx
        .content_width(4)
        .saturating_sub(status.label.len() as u16 + 7) as usize;
    let filename = if status.filename.len() > max_filename_len && max_filename_len > 3 {
        truncate_string(&status.filename, max_filename_len)
    } else {
        status.filename
    };

    if status.is_complete {
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(format!("{} ", status.icon), Style::default().fg(COLOR_TOOL_ICON)),
            Span::styled("\u{25CF} ", Style::default().fg(COLOR_TOOL_SUCCESS)),
            Span::styled(
                format!("{} ", status.label),
                Style::default().fg(COLOR_TOOL_SUCCESS),
            ),
            Span::styled(filename, Style::default().fg(COLOR_DIM)),
        ])
    } else {
        let frame_index = (tick_count % SPINNER_FRAMES.len() as u64) as usize;
        let spinner = SPINNER_FRAMES[frame_index];
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(format!("{} ", status.icon), Style::default().fg(COLOR_TOOL_ICON)),
            Span::styled(format!("{} ", spinner), Style::default().fg(COLOR_TOOL_RUNNING)),
            Span::styled(
                format!("{} ", status.label),
                Style::default().fg(COLOR_TOOL_RUNNING),
            ),
            Span::styled(filename, Style::default().fg(COLOR_DIM)),
        ])
    }
}
