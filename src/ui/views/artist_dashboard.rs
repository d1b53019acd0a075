use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::event::events::Event;
use crate::library::catalog;
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};

/// Artist dashboard: play-count stats and a top-songs breakdown with a bar
/// scaled against the most played track.
#[derive(Default)]
pub struct ArtistDashboard;

#[async_trait]
impl View for ArtistDashboard {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let palette = state.session.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let stat_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(chunks[0]);

        for (stat, column) in catalog::DASHBOARD_STATS.iter().zip(stat_columns.iter()) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    stat.value,
                    Style::new()
                        .fg(palette.accent_hover)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(stat.label, Style::new().fg(palette.text_secondary))),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::new().fg(palette.border)),
            );
            f.render_widget(card, *column);
        }

        let max_plays = catalog::DASHBOARD_SONGS
            .iter()
            .map(|song| song.plays)
            .max()
            .unwrap_or(1)
            .max(1);

        let mut lines = Vec::new();
        for song in &catalog::DASHBOARD_SONGS {
            let width = 30usize;
            let filled = (song.plays as usize * width) / max_plays as usize;
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<18}", song.title),
                    Style::new().fg(palette.text_primary),
                ),
                Span::styled(
                    "█".repeat(filled),
                    Style::new().fg(palette.accent_primary),
                ),
                Span::styled(
                    "░".repeat(width - filled),
                    Style::new().fg(palette.bg_tertiary),
                ),
                Span::styled(
                    format!("  {} plays", song.plays),
                    Style::new().fg(palette.text_secondary),
                ),
            ]));
        }

        let top_songs = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Top songs")
                .border_style(Style::new().fg(palette.border)),
        );
        f.render_widget(top_songs, chunks[1]);

        let help =
            Paragraph::new("u: upload a track").style(Style::new().fg(palette.border));
        f.render_widget(help, chunks[2]);
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
            _ => None,
        }
    }
}
