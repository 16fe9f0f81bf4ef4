//! Properties screen input handler.

use crate::action::Action;
use crate::app::App;
use crate::app::input::{SearchKey, search_key};
use crossterm::event::KeyEvent;

impl App {
    pub fn handle_properties_input(&mut self, key: KeyEvent) -> Option<Action> {
        if !self.properties.searching {
            return None;
        }
        match search_key(&mut self.properties.search, key) {
            SearchKey::Leave => self.properties.searching = false,
            SearchKey::MoveDown => self.properties.select_next(),
            SearchKey::MoveUp => self.properties.select_previous(),
            SearchKey::Edited => self.properties.reset_selection(),
            SearchKey::Ignored => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CurrentScreen;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_search_matches_address() {
        let mut app = App::default();
        app.walkthrough = None;
        app.update(Action::SwitchToScreen(CurrentScreen::Properties));
        for c in "/ocean".chars() {
            app.update(Action::Input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        assert!(app.properties.searching);
        assert!(!app.properties.visible().is_empty());
        assert!(app.properties.visible().iter().all(|p| {
            let needle = "ocean";
            p.name.to_lowercase().contains(needle) || p.address.to_lowercase().contains(needle)
        }));

        app.update(Action::Input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!app.properties.searching);
    }

    #[test]
    fn test_tab_still_switches_screen_while_searching() {
        let mut app = App::default();
        app.walkthrough = None;
        app.update(Action::SwitchToScreen(CurrentScreen::Properties));
        app.properties.searching = true;
        app.update(Action::Input(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
        assert_eq!(app.current_screen, CurrentScreen::Dashboard);
        assert!(!app.properties.searching);
    }
}
