use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::session::SessionState;
use crate::theme::ThemePalette;
use crate::ui::router::Page;

/// Top bar: logo, the page links this session is allowed to see, and the
/// theme/avatar markers on the right.
pub struct NavBar<'a> {
    current: Page,
    session: &'a SessionState,
    palette: &'static ThemePalette,
}

impl<'a> NavBar<'a> {
    pub fn new(current: Page, session: &'a SessionState, palette: &'static ThemePalette) -> Self {
        Self {
            current,
            session,
            palette,
        }
    }

    /// Account shows up once signed in, admin and dashboard only with the
    /// matching role flag.
    pub fn links(session: &SessionState) -> Vec<Page> {
        let mut links = vec![Page::Home, Page::Search, Page::Library];
        if session.authenticated {
            links.push(Page::Account);
        }
        if session.is_admin {
            links.push(Page::Admin);
        }
        if session.is_artist {
            links.push(Page::ArtistDashboard);
        }
        links
    }
}

impl<'a> Widget for NavBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(self.palette.nav_bg));

        let mut spans = vec![
            Span::styled(
                " ♪ MusicStream ",
                Style::new()
                    .fg(self.palette.accent_hover)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        for page in Self::links(self.session) {
            let style = if page == self.current {
                Style::new()
                    .fg(self.palette.accent_primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::new().fg(self.palette.text_secondary)
            };
            spans.push(Span::styled(page.title(), style));
            spans.push(Span::raw("   "));
        }

        let account = if self.session.authenticated {
            if self.session.avatar_url.is_empty() {
                "signed in".to_string()
            } else {
                format!("@ {}", self.session.avatar_url)
            }
        } else {
            "guest".to_string()
        };
        spans.push(Span::styled(
            format!("· {} · {}", self.session.theme.as_str(), account),
            Style::new().fg(self.palette.text_secondary),
        ));

        let y = area.y + area.height / 2;
        buf.set_line(area.x, y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_follow_the_session_flags() {
        let mut session = SessionState::default();
        assert_eq!(
            NavBar::links(&session),
            vec![Page::Home, Page::Search, Page::Library]
        );

        session.authenticated = true;
        session.is_artist = true;
        assert_eq!(
            NavBar::links(&session),
            vec![Page::Home, Page::Search, Page::Library, Page::Account, Page::ArtistDashboard]
        );

        session.is_admin = true;
        assert!(NavBar::links(&session).contains(&Page::Admin));
    }
}
