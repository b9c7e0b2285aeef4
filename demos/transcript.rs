//! Scripted transcript playback
//!
//! Replays a fixed sequence of tool invocation snapshots so the status
//! lines can be watched live: each invocation appears pending with an
//! animated spinner, then flips to its completed form on a schedule. No
//! tools actually execute. Press `q` or `Esc` to quit.
//!
//! Run with: cargo run --example transcript

use std::io;
use std::time::Duration;

use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use tui_tool_status::{render_status_line, InvocationState, LayoutContext, ToolInvocation};

/// One scripted entry: the invocation args plus its appearance and
/// completion ticks (10 ticks per second)
struct ScriptEntry {
    tool_name: &'static str,
    args: serde_json::Value,
    starts_at: u64,
    completes_at: u64,
}

fn script() -> Vec<ScriptEntry> {
    vec![
        ScriptEntry {
            tool_name: "str_replace_editor",
            args: json!({ "command": "view", "path": "/src/App.tsx" }),
            starts_at: 0,
            completes_at: 25,
        },
        ScriptEntry {
            tool_name: "str_replace_editor",
            args: json!({ "command": "create", "path": "/src/components/Button.tsx" }),
            starts_at: 15,
            completes_at: 55,
        },
        ScriptEntry {
            tool_name: "str_replace_editor",
            args: json!({ "command": "str_replace", "path": "/src/App.tsx" }),
            starts_at: 40,
            completes_at: 80,
        },
        ScriptEntry {
            tool_name: "file_manager",
            args: json!({ "command": "rename", "path": "/src/old.tsx", "new_path": "/src/new.tsx" }),
            starts_at: 70,
            completes_at: 95,
        },
        ScriptEntry {
            tool_name: "file_manager",
            args: json!({ "command": "delete", "path": "/src/unused.tsx" }),
            starts_at: 90,
            completes_at: 120,
        },
        ScriptEntry {
            tool_name: "run_linter",
            args: json!({}),
            starts_at: 110,
            completes_at: 150,
        },
    ]
}

fn snapshot(entry: &ScriptEntry, index: usize, tick: u64) -> ToolInvocation {
    let state = if tick >= entry.completes_at {
        InvocationState::Result
    } else {
        InvocationState::Call
    };
    ToolInvocation {
        tool_call_id: format!("demo-{index}"),
        tool_name: entry.tool_name.to_string(),
        state,
        args: entry.args.clone(),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let entries = script();
    let mut tick_count: u64 = 0;

    loop {
        terminal.draw(|frame| {
            let ctx = LayoutContext::from_rect(frame.area());
            let mut lines: Vec<Line> = Vec::new();
            for (index, entry) in entries.iter().enumerate() {
                if tick_count < entry.starts_at {
                    continue;
                }
                let invocation = snapshot(entry, index, tick_count);
                lines.push(render_status_line(&invocation, tick_count, &ctx));
            }
            let transcript = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" transcript (q to quit) "),
            );
            frame.render_widget(transcript, frame.area());
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    break;
                }
            }
        }
        tick_count += 1;
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}
