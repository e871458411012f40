//! Tracing setup and debug diagnostics
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=buffer=debug,generation=trace` - scoped filtering
//! - `RUST_LOG=magic_editor::document=debug` - module-level filtering
//!
//! Logs are also written to `~/.config/magic-editor/logs/magic.log` with daily
//! rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "magic.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // try_init: tests and embedders may have installed a subscriber already
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of buffer and cursor state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    pub attached: bool,
    pub len_chars: usize,
    pub embed_count: usize,
    pub bold_range_count: usize,
    pub anchor: usize,
    pub head: usize,
    pub menu_open: bool,
    pub generation: Option<u64>,
}

impl BufferSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            attached: model.buffer.is_attached(),
            len_chars: model.buffer.len_chars(),
            embed_count: model.buffer.attachments().len(),
            bold_range_count: model.buffer.bold_ranges().len(),
            anchor: model.selection.anchor,
            head: model.selection.head,
            menu_open: model.is_menu_open(),
            generation: model.generation.active,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &BufferSnapshot) -> Option<String> {
        if self.attached != other.attached {
            let status = if other.attached { "attached" } else { "detached" };
            return Some(format!("storage {}", status));
        }

        let mut changes = Vec::new();
        if self.len_chars != other.len_chars {
            changes.push(format!("len: {} → {}", self.len_chars, other.len_chars));
        }
        if self.embed_count != other.embed_count {
            changes.push(format!(
                "embeds: {} → {}",
                self.embed_count, other.embed_count
            ));
        }
        if self.bold_range_count != other.bold_range_count {
            changes.push(format!(
                "bold ranges: {} → {}",
                self.bold_range_count, other.bold_range_count
            ));
        }
        if (self.anchor, self.head) != (other.anchor, other.head) {
            changes.push(format!(
                "selection: {}..{} → {}..{}",
                self.anchor, self.head, other.anchor, other.head
            ));
        }
        if self.menu_open != other.menu_open {
            let status = if other.menu_open { "opened" } else { "closed" };
            changes.push(format!("menu {}", status));
        }
        if self.generation != other.generation {
            changes.push(format!(
                "generation: {:?} → {:?}",
                self.generation, other.generation
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
