//! DocTree event replay
//!
//! Replays a JSON-lines script of tree view events against a fresh session
//! and prints the visible outline after each step. Useful for reproducing
//! drag-and-drop reports without a browser.
//!
//! # Usage
//!
//! ```bash
//! doctree-replay script.jsonl [doctree.json]
//! ```
//!
//! Each script line is one event:
//!
//! ```json
//! {"type": "drag", "fromIndex": 1, "toIndex": 3, "dropInsideItem": true}
//! {"type": "search", "query": "doc"}
//! {"type": "next"}
//! {"type": "expand_all"}
//! ```
//!
//! The config path may also come from `DOCTREE_CONFIG`; without either the
//! built-in sample documents and default settings are used.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use doctree_core::{DragEvent, TreeSession, TreeViewConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ScriptEvent {
    Drag(DragEvent),
    Search { query: String },
    Next,
    Prev,
    ExpandAll,
    CollapseAll,
    Expand { id: String },
    Collapse { id: String },
}

fn apply(session: &mut TreeSession, event: ScriptEvent) -> anyhow::Result<()> {
    match event {
        ScriptEvent::Drag(mut drag) => {
            if drag.from_component.is_empty() && drag.to_component.is_empty() {
                drag = DragEvent::within(drag.from_index, drag.to_index, drag.drop_inside_item);
            }
            if let Err(e) = session.on_drag_end(&drag) {
                tracing::warn!("Drag rejected: {}", e);
            }
        }
        ScriptEvent::Search { query } => session.on_search_input(&query),
        ScriptEvent::Next => session.next_result(),
        ScriptEvent::Prev => session.prev_result(),
        ScriptEvent::ExpandAll => session.expand_all(),
        ScriptEvent::CollapseAll => session.collapse_all(),
        ScriptEvent::Expand { id } => session.set_expanded(&id, true)?,
        ScriptEvent::Collapse { id } => session.set_expanded(&id, false)?,
    }
    Ok(())
}

fn print_outline(session: &TreeSession) {
    for (row, visible) in session.visible_rows().rows().iter().enumerate() {
        let Some(node) = session.store().get(&visible.id) else {
            continue;
        };
        let marker = if session.search().is_current(&node.id) {
            '*'
        } else {
            ' '
        };
        let toggle = match (session.store().has_children(&node.id), node.expanded) {
            (false, _) => ' ',
            (true, true) => '-',
            (true, false) => '+',
        };
        println!(
            "{:>3} {}{}{} {}",
            row,
            marker,
            "  ".repeat(visible.depth),
            toggle,
            node.name
        );
    }
    println!("    [{}]", session.search().position_label());
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let script_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("Usage: doctree-replay <script.jsonl> [config.json]"))?;
    let config_path = args
        .next()
        .or_else(|| env::var("DOCTREE_CONFIG").ok())
        .map(PathBuf::from);

    let config = match &config_path {
        Some(path) => TreeViewConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => TreeViewConfig::default(),
    };
    tracing::info!("Config: {:?}", config);

    let mut session =
        TreeSession::from_config(config).context("Failed to seed documents")?;
    tracing::info!("Loaded {} documents", session.store().len());

    let script = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {:?}", script_path))?;

    print_outline(&session);
    for (line_no, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event: ScriptEvent = serde_json::from_str(line)
            .with_context(|| format!("Invalid event on line {}", line_no + 1))?;

        println!("\n> {}", line);
        apply(&mut session, event)?;
        print_outline(&session);
    }

    Ok(())
}
