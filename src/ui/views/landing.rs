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
use crate::library::catalog;
use crate::ui::router::NavigationTarget;
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Featured,
    Recent,
}

/// The home page: hero copy, featured artists, recent uploads.
pub struct Landing {
    section: Section,
    list_state: ListState,
}

impl Default for Landing {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            section: Section::Featured,
            list_state,
        }
    }
}

impl Landing {
    fn section_len(&self) -> usize {
        match self.section {
            Section::Featured => catalog::ARTISTS.len(),
            Section::Recent => catalog::SONGS.len(),
        }
    }
}

#[async_trait]
impl View for Landing {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let palette = state.session.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(1)])
            .split(area);

        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                "Discover independent music",
                Style::new()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Stream, share and support artists outside the mainstream.",
                Style::new().fg(palette.text_secondary),
            )),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::new().fg(palette.border)));
        f.render_widget(hero, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let section_style = |section: Section| {
            if section == self.section {
                Style::new().fg(palette.accent_primary).add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(palette.text_secondary)
            }
        };

        let artists: Vec<ListItem> = catalog::ARTISTS
            .iter()
            .map(|artist| {
                ListItem::new(format!("  {}  ({}, {} followers)", artist.name, artist.genre, artist.followers))
                    .style(Style::new().fg(palette.text_primary))
            })
            .collect();
        let featured = List::new(artists)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::new().fg(palette.border))
                    .title(Span::styled("Featured artists", section_style(Section::Featured))),
            )
            .highlight_style(Style::new().fg(palette.accent_hover).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let songs: Vec<ListItem> = catalog::SONGS
            .iter()
            .map(|song| {
                ListItem::new(format!("  {} - {}  {}", song.title, song.artist, song.duration))
                    .style(Style::new().fg(palette.text_primary))
            })
            .collect();
        let recent = List::new(songs)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::new().fg(palette.border))
                    .title(Span::styled("Recent uploads", section_style(Section::Recent))),
            )
            .highlight_style(Style::new().fg(palette.accent_hover).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        match self.section {
            Section::Featured => {
                f.render_stateful_widget(featured, columns[0], &mut self.list_state);
                f.render_widget(recent, columns[1]);
            }
            Section::Recent => {
                f.render_widget(featured, columns[0]);
                f.render_stateful_widget(recent, columns[1], &mut self.list_state);
            }
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Tab | KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.section = match self.section {
                    Section::Featured => Section::Recent,
                    Section::Recent => Section::Featured,
                };
                self.list_state.select(Some(0));
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.list_state.selected().unwrap_or(0);
                if i + 1 < self.section_len() {
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
                let i = self.list_state.selected().unwrap_or(0);
                match self.section {
                    Section::Featured => {
                        if let Some(artist) = catalog::ARTISTS.get(i) {
                            let _ = ctx
                                .event_tx
                                .send(Event::Navigate(NavigationTarget::artist(artist.id)));
                        }
                    }
                    Section::Recent => {
                        if let Some(song) = catalog::SONGS.get(i) {
                            let _ = ctx.event_tx.send(Event::Play(song.id));
                        }
                    }
                }
                Some(Action::None)
            }
            _ => None,
        }
    }
}
