//! Completion stream handlers
//!
//! Stream events are tagged with the generation id they belong to. Only the
//! active generation may write into the buffer; events from a cancelled or
//! superseded stream are dropped here, so no partial delta from an old
//! stream can land after a new submission.

use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::editable::Attachment;
use crate::error::{EditorError, Result};
use crate::generation::ChatRequest;
use crate::messages::GenerationMsg;
use crate::model::AppModel;

/// Handle generation messages
pub fn update_generation(model: &mut AppModel, msg: GenerationMsg) -> Option<Cmd> {
    match msg {
        GenerationMsg::Submit => submit(model),

        GenerationMsg::Cancel => {
            let generation_id = model.generation.end()?;
            tracing::info!(target: "generation", generation_id, "cancelled");
            model.generation.last_error = Some(EditorError::StreamFailure("cancelled".to_string()));
            Some(Cmd::CancelGeneration { generation_id })
        }

        GenerationMsg::Delta {
            generation_id,
            text,
        } => {
            if !model.generation.is_active(generation_id) {
                tracing::debug!(
                    target: "generation",
                    generation_id,
                    active = ?model.generation.active,
                    "Discarding stale delta"
                );
                return None;
            }
            match model.buffer.append_plain(&text) {
                Ok(_) => Some(Cmd::Redraw),
                Err(e) => abandon(model, generation_id, e),
            }
        }

        GenerationMsg::Finished { generation_id } => {
            if !model.generation.is_active(generation_id) {
                tracing::debug!(target: "generation", generation_id, "Ignoring stale finish");
                return None;
            }
            model.generation.end();
            let role = model.config.next_turn_role.clone();
            if let Err(e) = append_marker(model, &role) {
                return abandon(model, generation_id, e);
            }
            let end = model.buffer.len_chars();
            model.set_cursor(end);
            tracing::info!(target: "generation", generation_id, "reply complete");
            Some(Cmd::Redraw)
        }

        GenerationMsg::Failed {
            generation_id,
            error,
        } => {
            if !model.generation.is_active(generation_id) {
                tracing::debug!(target: "generation", generation_id, %error, "Ignoring stale failure");
                return None;
            }
            model.generation.end();
            tracing::warn!(target: "generation", generation_id, %error, "stream failed");
            // Partial reply stays in the buffer
            model.generation.last_error = Some(EditorError::StreamFailure(error));
            Some(Cmd::Redraw)
        }
    }
}

fn submit(model: &mut AppModel) -> Option<Cmd> {
    let mut cmds = Vec::new();
    if let Some(previous) = model.generation.end() {
        tracing::info!(target: "generation", generation_id = previous, "superseded by new submission");
        cmds.push(Cmd::CancelGeneration {
            generation_id: previous,
        });
    }

    let messages = match model.messages() {
        Ok(messages) => messages,
        Err(e) => {
            tracing::warn!(target: "generation", error = %e, "cannot export buffer");
            return finish(cmds);
        }
    };
    if messages.is_empty() {
        tracing::warn!(target: "generation", "nothing to submit: no role markers in buffer");
        return finish(cmds);
    }

    if let Some(role) = model.config.reply_role.clone() {
        if let Err(e) = append_marker(model, &role) {
            tracing::warn!(target: "generation", error = %e, "cannot open reply turn");
            return finish(cmds);
        }
    }

    let generation_id = model.generation.begin();
    tracing::info!(
        target: "generation",
        generation_id,
        messages = messages.len(),
        "submitting"
    );
    cmds.push(Cmd::StartGeneration {
        generation_id,
        request: ChatRequest::new(&model.config, messages),
    });
    cmds.push(Cmd::Redraw);
    finish(cmds)
}

fn finish(cmds: Vec<Cmd>) -> Option<Cmd> {
    match Cmd::batch(cmds) {
        Cmd::None => None,
        cmd => Some(cmd),
    }
}

/// Append a role marker at the end of the buffer, wrapped in the configured
/// separator and suffix. The separator is skipped when the buffer is empty.
fn append_marker(model: &mut AppModel, role: &str) -> Result<()> {
    let EditorConfig {
        turn_separator,
        marker_suffix,
        ..
    } = &model.config;
    let separator = (!model.buffer.is_empty()).then(|| turn_separator.clone());
    let suffix = marker_suffix.clone();

    if let Some(separator) = separator {
        model.buffer.append_plain(&separator)?;
    }
    model.buffer.append_attachment(Attachment::role(role))?;
    model.buffer.append_plain(&suffix)?;
    Ok(())
}

/// The buffer rejected a stream write: stop the stream and surface the error
fn abandon(model: &mut AppModel, generation_id: u64, error: EditorError) -> Option<Cmd> {
    tracing::warn!(target: "generation", generation_id, error = %error, "abandoning stream");
    model.generation.end();
    model.generation.last_error = Some(EditorError::StreamFailure(error.to_string()));
    Some(Cmd::CancelGeneration { generation_id })
}
