//! Buffer editing message handlers

use crate::commands::Cmd;
use crate::document::decode;
use crate::editable::{Attachment, Selection};
use crate::error::{EditorError, Result};
use crate::messages::EditMsg;
use crate::model::AppModel;

/// Handle editing messages
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    let result = match msg {
        EditMsg::InsertText(text) => insert_text(model, &text),
        EditMsg::InsertAttachment(attachment) => insert_attachment(model, attachment),
        EditMsg::DeleteBackward => delete_backward(model),
        EditMsg::ToggleBold => toggle_bold(model),
        EditMsg::SetCursor(offset) => {
            model.set_cursor(offset);
            Ok(Some(Cmd::Redraw))
        }
        EditMsg::ExtendSelection(offset) => {
            let offset = offset.min(model.buffer.len_chars());
            model.selection.extend_to(offset);
            Ok(Some(Cmd::Redraw))
        }
        EditMsg::SelectAll => {
            model.selection = Selection::new(0, model.buffer.len_chars());
            Ok(Some(Cmd::Redraw))
        }
        EditMsg::LoadText(text) => {
            model.buffer.set_text(&text).map(|()| {
                let end = model.buffer.len_chars();
                model.set_cursor(end);
                Some(Cmd::Redraw)
            })
        }
        EditMsg::LoadDocument(document) => {
            require_buffer(model).map(|()| {
                model.buffer = decode(&document);
                let end = model.buffer.len_chars();
                model.set_cursor(end);
                Some(Cmd::Redraw)
            })
        }
        EditMsg::Detach => {
            model.detach_surface();
            let cancel = model
                .generation
                .end()
                .map(|generation_id| Cmd::CancelGeneration { generation_id });
            Ok(Some(Cmd::batch(cancel.into_iter().chain([Cmd::Redraw]).collect())))
        }
    };

    match result {
        Ok(cmd) => cmd,
        Err(e) => {
            tracing::warn!(target: "buffer", error = %e, "edit ignored");
            None
        }
    }
}

pub(crate) fn require_buffer(model: &AppModel) -> Result<()> {
    if model.buffer.is_attached() {
        Ok(())
    } else {
        Err(EditorError::NoBuffer)
    }
}

/// Remove the selected range, leaving a collapsed cursor at its start
fn delete_selection(model: &mut AppModel) -> Result<usize> {
    let range = model.selection.range();
    if !range.is_empty() {
        model.buffer.delete(range.clone())?;
    }
    model.set_cursor(range.start);
    Ok(range.start)
}

fn insert_text(model: &mut AppModel, text: &str) -> Result<Option<Cmd>> {
    if text.is_empty() {
        return Ok(None);
    }
    require_buffer(model)?;
    let at = delete_selection(model)?;
    let count = model.buffer.insert_text(at, text)?;
    model.set_cursor(at + count);
    Ok(Some(Cmd::Redraw))
}

pub(crate) fn insert_attachment(
    model: &mut AppModel,
    attachment: Attachment,
) -> Result<Option<Cmd>> {
    require_buffer(model)?;
    let at = delete_selection(model)?;
    model.buffer.insert_attachment(at, attachment)?;
    model.set_cursor(at + 1);
    Ok(Some(Cmd::Redraw))
}

fn delete_backward(model: &mut AppModel) -> Result<Option<Cmd>> {
    if !model.selection.is_empty() {
        delete_selection(model)?;
        return Ok(Some(Cmd::Redraw));
    }
    match model.buffer.delete_backward(model.cursor())? {
        Some(cursor) => {
            model.set_cursor(cursor);
            Ok(Some(Cmd::Redraw))
        }
        None => Ok(None),
    }
}

fn toggle_bold(model: &mut AppModel) -> Result<Option<Cmd>> {
    if model.selection.is_empty() {
        return Ok(None);
    }
    let bold = model.buffer.toggle_bold(model.selection.range())?;
    tracing::debug!(target: "buffer", bold, range = ?model.selection.range(), "toggled bold");
    Ok(Some(Cmd::Redraw))
}
