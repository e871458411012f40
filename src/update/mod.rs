//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod edit;
mod generation;
mod menu;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::BufferSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use edit::update_edit;
pub use generation::update_generation;
pub use menu::update_menu;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Menu(m) => menu::update_menu(model, m),
        Msg::Generation(m) => generation::update_generation(model, m),
    }
}

/// Traced update wrapper - logs message, state diff, and checks invariants
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::GenerationMsg;

    // Deltas arrive per token; logging each one drowns everything else
    let is_noisy = matches!(&msg, Msg::Generation(GenerationMsg::Delta { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = BufferSnapshot::from_model(model);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = BufferSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "buffer", %diff, "state changed");
    }

    debug_assert!(
        model.selection.end() <= model.buffer.len_chars(),
        "{}: selection {:?} past end of buffer ({} chars)",
        msg_name,
        model.selection,
        model.buffer.len_chars()
    );

    result
}

/// Display name for a message, e.g. `Edit::InsertText("x")` or `Menu::MoveDown`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Menu(m) => format!("Menu::{:?}", m),
        Msg::Generation(m) => format!("Generation::{:?}", m),
    }
}
