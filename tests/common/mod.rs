//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::mpsc::Receiver;
use std::sync::Mutex;

use magic_editor::config::EditorConfig;
use magic_editor::editable::{Attachment, Selection};
use magic_editor::generation::{ChatRequest, ChunkMode, CompletionClient};
use magic_editor::messages::{EditMsg, GenerationMsg, MenuMsg, Msg};
use magic_editor::model::AppModel;
use magic_editor::update::update;
use magic_editor::Cmd;

/// Create a test model holding plain `text` with the cursor at `cursor`
pub fn test_model(text: &str, cursor: usize) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default());
    model.buffer.set_text(text).unwrap();
    model.selection = Selection::collapsed(cursor);
    model
}

/// Create a test model with the selection `anchor..head`
pub fn test_model_with_selection(text: &str, anchor: usize, head: usize) -> AppModel {
    let mut model = test_model(text, head);
    model.selection = Selection::new(anchor, head);
    model
}

pub fn edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    update(model, Msg::Edit(msg))
}

pub fn menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    update(model, Msg::Menu(msg))
}

pub fn generation(model: &mut AppModel, msg: GenerationMsg) -> Option<Cmd> {
    update(model, Msg::Generation(msg))
}

pub fn type_text(model: &mut AppModel, text: &str) {
    edit(model, EditMsg::InsertText(text.to_string()));
}

pub fn insert_role(model: &mut AppModel, role: &str) {
    edit(model, EditMsg::InsertAttachment(Attachment::role(role)));
}

/// Buffer text with placeholders shown as `[role]`, for readable assertions
pub fn render(model: &AppModel) -> String {
    let text = model.buffer.text().unwrap();
    let mut out = String::new();
    for (offset, ch) in text.chars().enumerate() {
        match model.buffer.attachment_at(offset) {
            Some(attachment) => match attachment.as_role() {
                Some(role) => out.push_str(&format!("[{role}]")),
                None => out.push_str("[article]"),
            },
            None => out.push(ch),
        }
    }
    out
}

/// Backend that replays a fixed list of chunks
pub struct ScriptedClient {
    pub chunks: Vec<String>,
    pub mode: ChunkMode,
    pub fail_with: Option<String>,
    /// When set, each chunk waits for a token from this channel first
    pub gate: Option<Mutex<Receiver<()>>>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedClient {
    pub fn new(chunks: &[&str]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| c.to_string()).collect(),
            mode: ChunkMode::Delta,
            fail_with: None,
            gate: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn cumulative(mut self) -> Self {
        self.mode = ChunkMode::Cumulative;
        self
    }

    pub fn failing(mut self, reason: &str) -> Self {
        self.fail_with = Some(reason.to_string());
        self
    }

    pub fn gated(mut self, gate: Receiver<()>) -> Self {
        self.gate = Some(Mutex::new(gate));
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionClient for ScriptedClient {
    fn chunk_mode(&self) -> ChunkMode {
        self.mode
    }

    fn stream_chat(
        &self,
        request: &ChatRequest,
        on_chunk: &mut dyn FnMut(&str) -> bool,
    ) -> Result<(), String> {
        self.requests.lock().unwrap().push(request.clone());
        for chunk in &self.chunks {
            if let Some(gate) = &self.gate {
                if gate.lock().unwrap().recv().is_err() {
                    return Err("gate closed".to_string());
                }
            }
            if !on_chunk(chunk) {
                return Ok(());
            }
        }
        match &self.fail_with {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }
}
