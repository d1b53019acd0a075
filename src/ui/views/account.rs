use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::event::events::Event;
use crate::ui::util::check_mark;
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};

/// Account settings: avatar URL, admin toggle, logout.
#[derive(Default)]
pub struct Account {
    editing_avatar: bool,
    avatar_input: String,
}

#[async_trait]
impl View for Account {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let palette = state.session.palette();
        let session = state.session.state();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let avatar = if session.avatar_url.is_empty() {
            Span::styled("(no avatar set)", Style::new().fg(palette.text_secondary))
        } else {
            Span::styled(session.avatar_url.clone(), Style::new().fg(palette.text_primary))
        };

        let profile = Paragraph::new(vec![
            Line::from(Span::styled(
                "Your account",
                Style::new()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![Span::styled("avatar:  ", Style::new().fg(palette.text_secondary)), avatar]),
            Line::from(Span::styled(
                format!("signed in: {}", check_mark(session.authenticated)),
                Style::new().fg(palette.text_secondary),
            )),
            Line::from(Span::styled(
                format!("admin:     {}", check_mark(session.is_admin)),
                Style::new().fg(palette.text_secondary),
            )),
            Line::from(Span::styled(
                format!("artist:    {}", check_mark(session.is_artist)),
                Style::new().fg(palette.text_secondary),
            )),
            Line::from(Span::styled(
                format!("theme:     {}", session.theme.as_str()),
                Style::new().fg(palette.text_secondary),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(palette.border)),
        );
        f.render_widget(profile, chunks[0]);

        if self.editing_avatar {
            let input = Paragraph::new(self.avatar_input.clone())
                .style(Style::new().fg(palette.text_primary))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Avatar URL (Enter: save, Esc: cancel)")
                        .border_style(Style::new().fg(palette.accent_primary)),
                );
            f.render_widget(input, chunks[1]);
            let x = chunks[1].x + 1 + self.avatar_input.width() as u16;
            f.set_cursor_position((x, chunks[1].y + 1));
        }

        let help = Paragraph::new("e: edit avatar   a: toggle admin mode   x: log out   t: toggle theme")
            .style(Style::new().fg(palette.border));
        f.render_widget(help, chunks[2]);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.editing_avatar {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return None,
                KeyCode::Char(c) => self.avatar_input.push(c),
                KeyCode::Backspace => {
                    self.avatar_input.pop();
                }
                KeyCode::Enter => {
                    let _ = ctx
                        .event_tx
                        .send(Event::SetAvatar(self.avatar_input.clone()));
                    self.editing_avatar = false;
                }
                KeyCode::Esc => self.editing_avatar = false,
                _ => {}
            }
            return Some(Action::None);
        }

        match key.code {
            KeyCode::Char('e') => {
                self.avatar_input = state.session.avatar_url().to_string();
                self.editing_avatar = true;
                Some(Action::None)
            }
            KeyCode::Char('a') => {
                let _ = ctx
                    .event_tx
                    .send(Event::SetAdmin(!state.session.is_admin()));
                Some(Action::None)
            }
            KeyCode::Char('x') => {
                let _ = ctx.event_tx.send(Event::Logout);
                Some(Action::None)
            }
            _ => None,
        }
    }
}
