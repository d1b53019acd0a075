use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::event::events::Event;
use crate::library::catalog;
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};

/// Your library: mock playlists plus the upload entry point.
pub struct Library {
    list_state: ListState,
}

impl Default for Library {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

#[async_trait]
impl View for Library {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let palette = state.session.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);

        let header = Paragraph::new("Your library    (u: upload a track)")
            .style(Style::new().fg(palette.text_secondary))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::new().fg(palette.border)),
            );
        f.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = catalog::PLAYLISTS
            .iter()
            .map(|playlist| {
                ListItem::new(format!("  {}  ({} tracks)", playlist.title, playlist.tracks))
                    .style(Style::new().fg(palette.text_primary))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::new()
                    .fg(palette.accent_hover)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char('u') => {
                let _ = ctx.event_tx.send(Event::OpenUpload);
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.list_state.selected().unwrap_or(0);
                if i + 1 < catalog::PLAYLISTS.len() {
                    self.list_state.select(Some(i + 1));
                }
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.list_state.selected().unwrap_or(0);
                if i > 0 {
                    self.list_state.select(Some(i - 1));
                }
                Some(Action::None)
            }
            _ => None,
        }
    }
}
