use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};
use unicode_width::UnicodeWidthStr;

use crate::event::events::Event;
use crate::library::{self, GENRES};
use crate::ui::router::NavigationTarget;
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultsTab {
    Songs,
    Artists,
}

impl ResultsTab {
    fn as_str(&self) -> &str {
        match self {
            ResultsTab::Songs => "Songs",
            ResultsTab::Artists => "Artists",
        }
    }

    fn other(&self) -> Self {
        match self {
            ResultsTab::Songs => ResultsTab::Artists,
            ResultsTab::Artists => ResultsTab::Songs,
        }
    }
}

pub struct Search {
    input: String,
    is_editing: bool,
    // index into GENRES; None means all genres
    genre: Option<usize>,
    active_tab: ResultsTab,
    list_state: ListState,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            input: String::new(),
            is_editing: true,
            genre: None,
            active_tab: ResultsTab::Songs,
            list_state: ListState::default(),
        }
    }
}

impl Search {
    fn genre_name(&self) -> Option<&'static str> {
        self.genre.map(|i| GENRES[i])
    }

    fn cycle_genre(&mut self) {
        self.genre = match self.genre {
            None => Some(0),
            Some(i) if i + 1 < GENRES.len() => Some(i + 1),
            Some(_) => None,
        };
        self.list_state.select(Some(0));
    }
}

#[async_trait]
impl View for Search {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let palette = state.session.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(area);

        let input_area = chunks[0];
        let tabs_area = chunks[1];
        let results_area = chunks[2];

        let input_style = if self.is_editing {
            Style::new().fg(palette.accent_primary)
        } else {
            Style::new().fg(palette.border)
        };
        let genre_label = self.genre_name().unwrap_or("All");
        let input_block = Block::default()
            .borders(Borders::ALL)
            .title("Search (/ to edit, g to cycle genre)")
            .title_style(Style::new().fg(palette.text_secondary))
            .border_style(input_style);
        let input_text = Paragraph::new(format!("{}  [genre: {}]", self.input, genre_label))
            .style(Style::new().fg(palette.text_primary))
            .block(input_block);
        f.render_widget(input_text, input_area);

        if self.is_editing {
            let x = input_area.x + 1 + self.input.width() as u16;
            f.set_cursor_position((x, input_area.y + 1));
        }

        let titles = [ResultsTab::Songs, ResultsTab::Artists];
        let tabs_widget = Tabs::new(titles.iter().map(|t| t.as_str()))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::new().fg(palette.border)),
            )
            .style(Style::new().fg(palette.text_secondary))
            .select(titles.iter().position(|t| *t == self.active_tab).unwrap_or(0))
            .highlight_style(
                Style::new()
                    .fg(palette.accent_primary)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs_widget, tabs_area);

        let items: Vec<ListItem> = match self.active_tab {
            ResultsTab::Songs => library::search_songs(&self.input, self.genre_name())
                .iter()
                .map(|song| {
                    ListItem::new(format!(
                        "  {} - {}  [{}]  {}",
                        song.title, song.artist, song.genre, song.duration
                    ))
                    .style(Style::new().fg(palette.text_primary))
                })
                .collect(),
            ResultsTab::Artists => library::search_artists(&self.input)
                .iter()
                .map(|artist| {
                    ListItem::new(format!(
                        "  {}  ({}, {} followers)",
                        artist.name, artist.genre, artist.followers
                    ))
                    .style(Style::new().fg(palette.text_primary))
                })
                .collect(),
        };

        if items.is_empty() {
            let empty = Paragraph::new("No results. Try another query or genre.")
                .style(Style::new().fg(palette.text_secondary));
            f.render_widget(empty, results_area);
            return;
        }

        let list = List::new(items)
            .highlight_style(
                Style::new()
                    .fg(palette.accent_hover)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, results_area, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.is_editing {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
                KeyCode::Char(c) => {
                    self.input.push(c);
                    self.list_state.select(Some(0));
                    Some(Action::None)
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    self.list_state.select(Some(0));
                    Some(Action::None)
                }
                KeyCode::Enter | KeyCode::Esc => {
                    self.is_editing = false;
                    Some(Action::None)
                }
                _ => Some(Action::None),
            }
        } else {
            match key.code {
                KeyCode::Char('/') => {
                    self.is_editing = true;
                    Some(Action::None)
                }
                KeyCode::Char('g') => {
                    self.cycle_genre();
                    Some(Action::None)
                }
                KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                    self.active_tab = self.active_tab.other();
                    self.list_state.select(Some(0));
                    Some(Action::None)
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let i = self.list_state.selected().unwrap_or(0);
                    self.list_state.select(Some(i + 1));
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
                    match self.active_tab {
                        ResultsTab::Songs => {
                            let songs = library::search_songs(&self.input, self.genre_name());
                            if let Some(song) = songs.get(i) {
                                let _ = ctx.event_tx.send(Event::Play(song.id));
                            }
                        }
                        ResultsTab::Artists => {
                            let artists = library::search_artists(&self.input);
                            if let Some(artist) = artists.get(i) {
                                let _ = ctx
                                    .event_tx
                                    .send(Event::Navigate(NavigationTarget::artist(artist.id)));
                            }
                        }
                    }
                    Some(Action::None)
                }
                _ => None,
            }
        }
    }
}
