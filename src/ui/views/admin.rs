use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::library::catalog;
use crate::ui::{
    context::AppContext,
    state::AppState,
    traits::{Action, View},
};

/// Read-only admin panel: platform stats and the user moderation table.
#[derive(Default)]
pub struct AdminPanel;

#[async_trait]
impl View for AdminPanel {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let palette = state.session.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(1)])
            .split(area);

        let stat_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(chunks[0]);

        for (stat, column) in catalog::PLATFORM_STATS.iter().zip(stat_columns.iter()) {
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

        let rows = catalog::USERS.iter().map(|user| {
            let status_style = if user.status == "suspended" {
                Style::new().fg(palette.accent_primary)
            } else {
                Style::new().fg(palette.text_secondary)
            };
            Row::new(vec![
                Span::styled(user.name, Style::new().fg(palette.text_primary)),
                Span::styled(user.email, Style::new().fg(palette.text_secondary)),
                Span::styled(user.role, Style::new().fg(palette.text_secondary)),
                Span::styled(user.status, status_style),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(18),
                Constraint::Length(24),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec!["Name", "Email", "Role", "Status"])
                .style(Style::new().fg(palette.accent_primary).add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Users")
                .border_style(Style::new().fg(palette.border)),
        );
        f.render_widget(table, chunks[1]);
    }

    async fn handle_input(
        &mut self,
        _key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        None
    }
}
