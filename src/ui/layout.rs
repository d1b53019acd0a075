use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::ui::{
    app::App,
    components::{navbar::NavBar, player::PlayerBar},
};

/// The page shell: nav bar on top, bordered content, player bar below. The
/// router decides which of the three are present on the current page.
pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let app = self.app;
        let palette = app.state.session.palette();

        f.buffer_mut().set_style(
            area,
            Style::new().bg(palette.bg_primary).fg(palette.text_primary),
        );

        let show_navigation = app.router.show_navigation();
        let show_player = app.router.show_player();

        let mut constraints = Vec::new();
        if show_navigation {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(1));
        if show_player {
            constraints.push(Constraint::Length(2));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut index = 0;
        if show_navigation {
            f.render_widget(
                NavBar::new(app.router.current(), app.state.session.state(), palette),
                chunks[index],
            );
            index += 1;
        }

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(palette.border));
        let content_inner = content_block.inner(chunks[index]);
        f.render_widget(content_block, chunks[index]);
        app.router.render(f, content_inner, &app.state, &app.ctx);

        if show_player {
            index += 1;
            f.render_widget(PlayerBar::new(&app.state.playback, palette), chunks[index]);
        }
    }
}
