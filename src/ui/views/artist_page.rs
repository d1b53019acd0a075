use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::event::events::Event;
use crate::library::{self, Artist, Song};
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};

/// Artist profile. Built from the artist id the router recorded; an unknown
/// or missing id renders a placeholder instead of erroring.
pub struct ArtistPage {
    artist: Option<&'static Artist>,
    songs: Vec<&'static Song>,
    list_state: ListState,
}

impl ArtistPage {
    pub fn new(artist_id: Option<u64>) -> Self {
        let artist = artist_id.and_then(library::artist);
        let songs = artist
            .map(|artist| library::songs_by_artist(artist.id))
            .unwrap_or_default();

        let mut list_state = ListState::default();
        if !songs.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            artist,
            songs,
            list_state,
        }
    }
}

#[async_trait]
impl View for ArtistPage {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let palette = state.session.palette();

        let Some(artist) = self.artist else {
            let placeholder = Paragraph::new("Artist not found. Esc to go home.")
                .style(Style::new().fg(palette.text_secondary));
            f.render_widget(placeholder, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(1)])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                artist.name,
                Style::new()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} · {} followers", artist.genre, artist.followers),
                Style::new().fg(palette.text_secondary),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::new().fg(palette.border)),
        );
        f.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .songs
            .iter()
            .map(|song| {
                ListItem::new(format!("  {}  {}", song.title, song.duration))
                    .style(Style::new().fg(palette.text_primary))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::NONE)
                    .title(Span::styled("Songs", Style::new().fg(palette.accent_primary))),
            )
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
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.list_state.selected().unwrap_or(0);
                if i + 1 < self.songs.len() {
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
            KeyCode::Enter => {
                if let Some(song) = self.list_state.selected().and_then(|i| self.songs.get(i)) {
                    let _ = ctx.event_tx.send(Event::Play(song.id));
                }
                Some(Action::None)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_artist_renders_a_placeholder() {
        let page = ArtistPage::new(Some(999));
        assert!(page.artist.is_none());
        assert!(page.songs.is_empty());

        let page = ArtistPage::new(None);
        assert!(page.artist.is_none());
    }

    #[test]
    fn known_artist_lists_their_songs() {
        let page = ArtistPage::new(Some(2));
        assert_eq!(page.artist.map(|a| a.name), Some("Echo Theory"));
        assert_eq!(page.songs.len(), 2);
    }
}
