//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::generation::ChatRequest;

/// Side effects requested by `update`, executed by the runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// The buffer or menu changed and should be redrawn
    Redraw,
    /// Start streaming a completion on a background worker.
    /// Results come back as `Msg::Generation` tagged with `generation_id`.
    StartGeneration {
        generation_id: u64,
        request: ChatRequest,
    },
    /// Stop the worker for `generation_id`; its pending output is discarded
    CancelGeneration { generation_id: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Whether the surface must be redrawn after this command
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::CancelGeneration { .. } => false,
            Cmd::Redraw | Cmd::StartGeneration { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
        }
    }

    /// Build a batch, collapsing trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }
}
