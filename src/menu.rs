//! Context menu selector for inserting attachments
//!
//! Selection clamps at both ends (no wraparound). The menu is only shown
//! while it has options; on an empty option list every transition is a
//! no-op and `select` yields nothing.

/// What happens when an option is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Insert a role marker with this role at the cursor
    InsertRole(String),
}

/// A labelled menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub action: MenuAction,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    /// Role option labelled with the capitalised role, e.g. "Assistant"
    pub fn role(role: &str) -> Self {
        let mut chars = role.chars();
        let label = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self::new(label, MenuAction::InsertRole(role.to_string()))
    }
}

/// Ordered options plus the highlighted index
#[derive(Debug, Clone, Default)]
pub struct ContextMenu {
    options: Vec<MenuOption>,
    selection: usize,
}

impl ContextMenu {
    pub fn new(options: Vec<MenuOption>) -> Self {
        Self {
            options,
            selection: 0,
        }
    }

    /// One option per role, in the given order
    pub fn for_roles<S: AsRef<str>>(roles: &[S]) -> Self {
        Self::new(roles.iter().map(|r| MenuOption::role(r.as_ref())).collect())
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Replace the options and reset the selection
    pub fn set_options(&mut self, options: Vec<MenuOption>) {
        self.options = options;
        self.selection = 0;
    }

    /// Called when the menu opens
    pub fn reset(&mut self) {
        self.selection = 0;
    }

    pub fn move_up(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let max_index = self.options.len().saturating_sub(1);
        self.selection = self.selection.saturating_add(1).min(max_index);
    }

    /// Point the selection at `index` (mouse hover/click), clamped
    pub fn set_selection(&mut self, index: usize) {
        self.selection = index.min(self.options.len().saturating_sub(1));
    }

    /// Action of the highlighted option. Does not move the selection.
    pub fn select(&self) -> Option<&MenuAction> {
        self.options.get(self.selection).map(|o| &o.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles_menu() -> ContextMenu {
        ContextMenu::for_roles(&["system", "user", "assistant"])
    }

    #[test]
    fn test_move_down_clamps_at_bottom() {
        let mut menu = roles_menu();
        let mut seen = vec![menu.selection()];
        for _ in 0..4 {
            menu.move_down();
            seen.push(menu.selection());
        }
        assert_eq!(seen, vec![0, 1, 2, 2, 2]);
    }

    #[test]
    fn test_move_up_clamps_at_top() {
        let mut menu = roles_menu();
        menu.move_down();
        menu.move_up();
        menu.move_up();
        assert_eq!(menu.selection(), 0);
    }

    #[test]
    fn test_select_returns_action_without_moving() {
        let mut menu = roles_menu();
        menu.move_down();
        assert_eq!(
            menu.select(),
            Some(&MenuAction::InsertRole("user".to_string()))
        );
        assert_eq!(menu.selection(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_option() {
        let mut menu = roles_menu();
        menu.move_down();
        menu.move_down();
        menu.reset();
        assert_eq!(menu.selection(), 0);
    }

    #[test]
    fn test_role_labels_are_capitalised() {
        let labels: Vec<_> = roles_menu().options().iter().map(|o| o.label.clone()).collect();
        assert_eq!(labels, vec!["System", "User", "Assistant"]);
    }

    #[test]
    fn test_empty_menu_is_inert() {
        let mut menu = ContextMenu::default();
        menu.move_down();
        menu.move_up();
        assert_eq!(menu.selection(), 0);
        assert_eq!(menu.select(), None);
    }

    #[test]
    fn test_set_selection_clamps() {
        let mut menu = roles_menu();
        menu.set_selection(9);
        assert_eq!(menu.selection(), 2);
    }
}
