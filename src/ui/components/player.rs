use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemePalette;
use crate::ui::state::PlaybackState;
use crate::ui::util::play_icon;

/// Bottom now-playing line. Purely cosmetic, fed by the mock playback state.
pub struct PlayerBar<'a> {
    playback: &'a PlaybackState,
    palette: &'static ThemePalette,
}

impl<'a> PlayerBar<'a> {
    pub fn new(playback: &'a PlaybackState, palette: &'static ThemePalette) -> Self {
        Self { playback, palette }
    }
}

impl<'a> Widget for PlayerBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(self.palette.bg_secondary));

        let line = match self.playback.current {
            Some(song) => Line::from(vec![
                Span::styled(
                    format!(" {} ", play_icon(self.playback.playing)),
                    Style::new()
                        .fg(self.palette.accent_hover)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(song.title, Style::new().fg(self.palette.text_primary)),
                Span::styled(
                    format!(" · {}  {}", song.artist, song.duration),
                    Style::new().fg(self.palette.text_secondary),
                ),
                Span::styled(
                    "   space: play/pause",
                    Style::new().fg(self.palette.border),
                ),
            ]),
            None => Line::from(Span::styled(
                " nothing playing · pick a song and press Enter",
                Style::new().fg(self.palette.text_secondary),
            )),
        };

        let y = area.y + area.height / 2;
        buf.set_line(area.x, y, &line, area.width);
    }
}
