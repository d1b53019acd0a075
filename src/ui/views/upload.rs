use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::event::events::Event;
use crate::ui::util::centered_rect;
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Genre,
}

/// Upload dialog, rendered as a router overlay on top of whatever page
/// opened it. Submitting only logs; there is nothing to upload to.
pub struct UploadModal {
    title: String,
    genre: String,
    field: Field,
}

impl Default for UploadModal {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: String::new(),
            field: Field::Title,
        }
    }
}

impl UploadModal {
    fn active_input(&mut self) -> &mut String {
        match self.field {
            Field::Title => &mut self.title,
            Field::Genre => &mut self.genre,
        }
    }
}

#[async_trait]
impl View for UploadModal {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let palette = state.session.palette();

        let dialog = centered_rect(50, 10, area);
        f.render_widget(Clear, dialog);

        let field_line = |label: &str, value: &str, active: bool| {
            let marker = if active { "▸ " } else { "  " };
            Line::from(vec![
                Span::styled(
                    format!("{marker}{label:<7}"),
                    if active {
                        Style::new()
                            .fg(palette.accent_primary)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::new().fg(palette.text_secondary)
                    },
                ),
                Span::styled(value.to_string(), Style::new().fg(palette.text_primary)),
            ])
        };

        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                "Share a new track",
                Style::new()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            field_line("title", &self.title, self.field == Field::Title),
            field_line("genre", &self.genre, self.field == Field::Genre),
            Line::default(),
            Line::from(Span::styled(
                "Tab: next field   Enter: publish   Esc: cancel",
                Style::new().fg(palette.border),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Upload")
                .title_style(Style::new().fg(palette.accent_hover))
                .border_style(Style::new().fg(palette.accent_primary)),
        );
        f.render_widget(body, dialog);

        let (row, value) = match self.field {
            Field::Title => (3, &self.title),
            Field::Genre => (4, &self.genre),
        };
        let x = dialog.x + 10 + value.width() as u16;
        f.set_cursor_position((x, dialog.y + row));
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return None,
            KeyCode::Esc => {
                let _ = ctx.event_tx.send(Event::CloseUpload);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.field = match self.field {
                    Field::Title => Field::Genre,
                    Field::Genre => Field::Title,
                };
            }
            KeyCode::Enter => {
                if !self.title.is_empty() {
                    info!(title = %self.title, genre = %self.genre, "mock upload submitted");
                    let _ = ctx.event_tx.send(Event::CloseUpload);
                }
            }
            KeyCode::Char(c) => self.active_input().push(c),
            KeyCode::Backspace => {
                self.active_input().pop();
            }
            _ => {}
        }

        // The dialog is modal; nothing falls through to the global keymap.
        Some(Action::None)
    }
}
