//! Insert-role context menu handlers

use crate::commands::Cmd;
use crate::editable::Attachment;
use crate::menu::{ContextMenu, MenuAction};
use crate::messages::MenuMsg;
use crate::model::AppModel;

use super::edit::insert_attachment;

/// Handle context menu messages
pub fn update_menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    match msg {
        MenuMsg::Open => {
            if model.config.roles.is_empty() {
                tracing::debug!(target: "menu", "no roles configured, menu not shown");
                return None;
            }
            // A fresh menu always starts on the first option
            model.menu = Some(ContextMenu::for_roles(&model.config.roles));
            Some(Cmd::Redraw)
        }
        MenuMsg::Close => model.menu.take().map(|_| Cmd::Redraw),
        MenuMsg::MoveUp => {
            let menu = model.menu.as_mut()?;
            menu.move_up();
            Some(Cmd::Redraw)
        }
        MenuMsg::MoveDown => {
            let menu = model.menu.as_mut()?;
            menu.move_down();
            Some(Cmd::Redraw)
        }
        MenuMsg::Hover(index) => {
            let menu = model.menu.as_mut()?;
            menu.set_selection(index);
            Some(Cmd::Redraw)
        }
        MenuMsg::Select => {
            let menu = model.menu.take()?;
            let Some(action) = menu.select().cloned() else {
                return Some(Cmd::Redraw);
            };
            match action {
                MenuAction::InsertRole(role) => {
                    tracing::debug!(target: "menu", %role, at = model.cursor(), "inserting role");
                    match insert_attachment(model, Attachment::role(role)) {
                        Ok(_) => Some(Cmd::Redraw),
                        Err(e) => {
                            tracing::warn!(target: "menu", error = %e, "role not inserted");
                            Some(Cmd::Redraw)
                        }
                    }
                }
            }
        }
    }
}
