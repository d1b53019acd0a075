use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::event::events::Event;
use crate::ui::router::Page;

/// Global keymap. Views get first pick; whatever they do not consume lands
/// here, so typing into an input field never triggers a page switch.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<Event> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Event::Quit),
            (KeyCode::Char(' '), _) => Some(Event::PlayPause),
            (KeyCode::Char('t'), _) => Some(Event::ToggleTheme),
            (KeyCode::Esc, _) => Some(Event::Navigate(Page::Home.into())),
            (KeyCode::Char('1'), _) => Some(Event::Navigate(Page::Home.into())),
            (KeyCode::Char('2'), _) => Some(Event::Navigate(Page::Search.into())),
            (KeyCode::Char('3'), _) => Some(Event::Navigate(Page::Library.into())),
            (KeyCode::Char('4'), _) => Some(Event::Navigate(Page::Account.into())),
            (KeyCode::Char('5'), _) => Some(Event::Navigate(Page::Admin.into())),
            (KeyCode::Char('6'), _) => Some(Event::Navigate(Page::ArtistDashboard.into())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::handle_key(key), Some(Event::Quit));
    }

    #[test]
    fn unmapped_keys_produce_nothing() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(InputHandler::handle_key(key), None);
    }
}
