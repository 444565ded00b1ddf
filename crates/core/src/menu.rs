//! Main menu model: a wrap-around cursor over a fixed list of actions.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    NewGame,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 2] = [MenuAction::NewGame, MenuAction::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::NewGame => "New Game",
            MenuAction::Quit => "Quit",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MainMenu {
    cursor: usize,
}

impl MainMenu {
    pub fn entries(&self) -> &'static [MenuAction] {
        &MenuAction::ALL
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = MenuAction::ALL.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn selected(&self) -> MenuAction {
        MenuAction::ALL[self.cursor % MenuAction::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut menu = MainMenu::default();
        assert_eq!(menu.selected(), MenuAction::NewGame);
        menu.move_cursor(-1);
        assert_eq!(menu.selected(), MenuAction::Quit);
        menu.move_cursor(1);
        assert_eq!(menu.cursor(), 0);
        menu.move_cursor(3);
        assert_eq!(menu.selected(), MenuAction::Quit);
    }
}
