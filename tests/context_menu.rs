//! Insert-role context menu driven through the update loop

mod common;

use common::*;
use magic_editor::messages::{EditMsg, MenuMsg};
use magic_editor::Cmd;

#[test]
fn test_open_starts_at_first_option() {
    let mut model = test_model("", 0);
    assert_eq!(menu(&mut model, MenuMsg::Open), Some(Cmd::Redraw));
    let opened = model.menu.as_ref().unwrap();
    let labels: Vec<_> = opened.options().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["System", "User", "Assistant"]);
    assert_eq!(opened.selection(), 0);
}

#[test]
fn test_move_down_clamps() {
    let mut model = test_model("", 0);
    menu(&mut model, MenuMsg::Open);
    let mut seen = vec![model.menu.as_ref().unwrap().selection()];
    for _ in 0..4 {
        menu(&mut model, MenuMsg::MoveDown);
        seen.push(model.menu.as_ref().unwrap().selection());
    }
    assert_eq!(seen, vec![0, 1, 2, 2, 2]);
}

#[test]
fn test_reopen_resets_selection() {
    let mut model = test_model("", 0);
    menu(&mut model, MenuMsg::Open);
    menu(&mut model, MenuMsg::MoveDown);
    menu(&mut model, MenuMsg::Close);
    menu(&mut model, MenuMsg::Open);
    assert_eq!(model.menu.as_ref().unwrap().selection(), 0);
}

#[test]
fn test_select_inserts_role_and_closes() {
    let mut model = test_model("Hi", 0);
    menu(&mut model, MenuMsg::Open);
    menu(&mut model, MenuMsg::MoveDown);
    menu(&mut model, MenuMsg::Select);
    assert!(model.menu.is_none());
    assert_eq!(render(&model), "[user]Hi");
    assert_eq!(model.cursor(), 1);
}

#[test]
fn test_hover_then_select() {
    let mut model = test_model("", 0);
    menu(&mut model, MenuMsg::Open);
    menu(&mut model, MenuMsg::Hover(7));
    assert_eq!(model.menu.as_ref().unwrap().selection(), 2);
    menu(&mut model, MenuMsg::Select);
    assert_eq!(render(&model), "[assistant]");
}

#[test]
fn test_select_replaces_selection() {
    let mut model = test_model_with_selection("abc", 1, 2);
    menu(&mut model, MenuMsg::Open);
    menu(&mut model, MenuMsg::Select);
    assert_eq!(render(&model), "a[system]c");
}

#[test]
fn test_closed_menu_ignores_navigation() {
    let mut model = test_model("", 0);
    assert_eq!(menu(&mut model, MenuMsg::MoveDown), None);
    assert_eq!(menu(&mut model, MenuMsg::Select), None);
    assert_eq!(menu(&mut model, MenuMsg::Close), None);
    assert_eq!(render(&model), "");
}

#[test]
fn test_no_roles_no_menu() {
    let mut model = test_model("", 0);
    model.config.roles.clear();
    assert_eq!(menu(&mut model, MenuMsg::Open), None);
    assert!(model.menu.is_none());
}

#[test]
fn test_custom_roles_from_config() {
    let mut model = test_model("", 0);
    model.config.roles = vec!["narrator".to_string()];
    menu(&mut model, MenuMsg::Open);
    menu(&mut model, MenuMsg::Select);
    assert_eq!(render(&model), "[narrator]");
    // Extraction passes unknown roles through
    let messages = model.messages().unwrap();
    assert_eq!(messages[0].role, "narrator");
    assert_eq!(messages[0].chat_role(), None);
}

#[test]
fn test_select_on_detached_buffer_closes_menu() {
    let mut model = test_model("", 0);
    menu(&mut model, MenuMsg::Open);
    edit(&mut model, EditMsg::Detach);
    assert!(model.menu.is_none());
}
