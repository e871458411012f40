//! Editing through the update loop

mod common;

use common::*;
use magic_editor::document::{Attribute, FlatDocument};
use magic_editor::editable::Attachment;
use magic_editor::error::EditorError;
use magic_editor::messages::EditMsg;
use magic_editor::Cmd;

#[test]
fn test_insert_text_at_cursor() {
    let mut model = test_model("Hello world", 5);
    let cmd = edit(&mut model, EditMsg::InsertText(",".to_string()));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.buffer.text().unwrap(), "Hello, world");
    assert_eq!(model.cursor(), 6);
}

#[test]
fn test_insert_replaces_selection() {
    let mut model = test_model_with_selection("Hello world", 6, 11);
    type_text(&mut model, "Rust");
    assert_eq!(model.buffer.text().unwrap(), "Hello Rust");
    assert_eq!(model.cursor(), 10);
    assert!(model.selection.is_empty());
}

#[test]
fn test_reversed_selection_is_replaced() {
    let mut model = test_model_with_selection("abcdef", 4, 1);
    type_text(&mut model, "X");
    assert_eq!(model.buffer.text().unwrap(), "aXef");
    assert_eq!(model.cursor(), 2);
}

#[test]
fn test_role_marker_inserted_at_cursor() {
    let mut model = test_model("HiThere", 2);
    insert_role(&mut model, "assistant");
    assert_eq!(render(&model), "Hi[assistant]There");
    assert_eq!(model.cursor(), 3);
}

#[test]
fn test_backspace_removes_role_marker() {
    let mut model = test_model("", 0);
    insert_role(&mut model, "user");
    type_text(&mut model, "Hi");
    edit(&mut model, EditMsg::SetCursor(1));
    edit(&mut model, EditMsg::DeleteBackward);
    assert_eq!(render(&model), "Hi");
    assert!(model.buffer.attachments().is_empty());
    assert_eq!(model.cursor(), 0);
}

#[test]
fn test_backspace_at_start_does_nothing() {
    let mut model = test_model("abc", 0);
    assert_eq!(edit(&mut model, EditMsg::DeleteBackward), None);
    assert_eq!(model.buffer.text().unwrap(), "abc");
}

#[test]
fn test_backspace_deletes_selection() {
    let mut model = test_model("", 0);
    type_text(&mut model, "ab");
    insert_role(&mut model, "user");
    type_text(&mut model, "cd");
    edit(&mut model, EditMsg::SetCursor(1));
    edit(&mut model, EditMsg::ExtendSelection(4));
    edit(&mut model, EditMsg::DeleteBackward);
    assert_eq!(render(&model), "ad");
    assert!(model.buffer.attachments().is_empty());
    assert_eq!(model.cursor(), 1);
}

#[test]
fn test_typing_after_bold_stays_bold() {
    let mut model = test_model("bold", 4);
    edit(&mut model, EditMsg::SelectAll);
    edit(&mut model, EditMsg::ToggleBold);
    edit(&mut model, EditMsg::SetCursor(4));
    type_text(&mut model, "er");
    assert_eq!(model.buffer.bold_ranges(), &[0..6]);
}

#[test]
fn test_typing_after_marker_is_plain() {
    let mut model = test_model("", 0);
    insert_role(&mut model, "user");
    type_text(&mut model, "x");
    assert!(!model.buffer.is_bold(1));
}

#[test]
fn test_toggle_bold_twice_clears() {
    let mut model = test_model_with_selection("Hello world", 0, 5);
    edit(&mut model, EditMsg::ToggleBold);
    assert_eq!(model.buffer.bold_ranges(), &[0..5]);
    edit(&mut model, EditMsg::ToggleBold);
    assert!(model.buffer.bold_ranges().is_empty());
}

#[test]
fn test_partial_bold_selection_becomes_all_bold() {
    let mut model = test_model_with_selection("Hello world", 0, 3);
    edit(&mut model, EditMsg::ToggleBold);
    model.selection = magic_editor::editable::Selection::new(0, 5);
    edit(&mut model, EditMsg::ToggleBold);
    assert_eq!(model.buffer.bold_ranges(), &[0..5]);
}

#[test]
fn test_toggle_bold_without_selection_is_noop() {
    let mut model = test_model("abc", 1);
    assert_eq!(edit(&mut model, EditMsg::ToggleBold), None);
    assert!(model.buffer.bold_ranges().is_empty());
}

#[test]
fn test_cursor_and_selection_clamped() {
    let mut model = test_model("abc", 0);
    edit(&mut model, EditMsg::SetCursor(99));
    assert_eq!(model.cursor(), 3);
    edit(&mut model, EditMsg::SetCursor(1));
    edit(&mut model, EditMsg::ExtendSelection(99));
    assert_eq!(model.selection.range(), 1..3);
}

#[test]
fn test_load_document_replaces_buffer() {
    let mut model = test_model("old", 3);
    let document = FlatDocument::new("\u{FFFC}new", vec![Attribute::role("system", 0)]);
    edit(&mut model, EditMsg::LoadDocument(document));
    assert_eq!(render(&model), "[system]new");
    assert_eq!(model.cursor(), 4);
}

#[test]
fn test_load_text_drops_formatting() {
    let mut model = test_model_with_selection("abc", 0, 3);
    edit(&mut model, EditMsg::ToggleBold);
    insert_role(&mut model, "user");
    edit(&mut model, EditMsg::LoadText("plain".to_string()));
    assert_eq!(render(&model), "plain");
    assert!(model.buffer.bold_ranges().is_empty());
    assert!(model.buffer.attachments().is_empty());
}

#[test]
fn test_edits_after_detach_are_ignored() {
    let mut model = test_model("abc", 3);
    edit(&mut model, EditMsg::Detach);
    assert!(!model.buffer.is_attached());

    assert_eq!(edit(&mut model, EditMsg::InsertText("x".to_string())), None);
    assert_eq!(
        edit(
            &mut model,
            EditMsg::InsertAttachment(Attachment::role("user"))
        ),
        None
    );
    assert_eq!(edit(&mut model, EditMsg::DeleteBackward), None);
    assert_eq!(model.export(), Err(EditorError::NoBuffer));
}

#[test]
fn test_multibyte_text_uses_char_offsets() {
    let mut model = test_model("héllo 🌍", 7);
    insert_role(&mut model, "user");
    type_text(&mut model, "ü");
    assert_eq!(render(&model), "héllo 🌍[user]ü");
    assert_eq!(model.buffer.len_chars(), 9);
}
