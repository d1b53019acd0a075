use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::event::events::Event;
use crate::ui::router::Page;
use crate::ui::util::centered_rect;
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};

/// Mock sign-in. No credentials are checked; Enter simply flips the session
/// into the chosen role.
#[derive(Default)]
pub struct Auth {
    artist_mode: bool,
}

#[async_trait]
impl View for Auth {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let palette = state.session.palette();

        let dialog = centered_rect(46, 9, area);
        f.render_widget(Clear, dialog);

        let mode = if self.artist_mode { "Artist" } else { "Listener" };
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                "Welcome back",
                Style::new()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Signing in as: ", Style::new().fg(palette.text_secondary)),
                Span::styled(
                    mode,
                    Style::new()
                        .fg(palette.accent_hover)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "a: switch role   Enter: sign in",
                Style::new().fg(palette.text_secondary),
            )),
            Line::from(Span::styled(
                "Esc: continue as guest",
                Style::new().fg(palette.border),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ♪ MusicStream ")
                .title_style(Style::new().fg(palette.accent_primary))
                .border_style(Style::new().fg(palette.border)),
        );
        f.render_widget(body, dialog);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char('a') | KeyCode::Tab => {
                self.artist_mode = !self.artist_mode;
                Some(Action::None)
            }
            KeyCode::Enter => {
                let _ = ctx.event_tx.send(Event::Login {
                    as_artist: self.artist_mode,
                });
                Some(Action::None)
            }
            KeyCode::Esc => {
                let _ = ctx.event_tx.send(Event::Navigate(Page::Home.into()));
                Some(Action::None)
            }
            _ => None,
        }
    }
}
