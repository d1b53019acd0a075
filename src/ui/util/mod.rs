pub mod handler;

use ratatui::layout::Rect;

pub fn play_icon(playing: bool) -> &'static str {
    if playing { "⏸" } else { "▶" }
}

pub fn check_mark(value: bool) -> &'static str {
    if value { "✓" } else { "✗" }
}

/// A fixed-size rect centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clamps_to_the_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(50, 40, area);
        assert_eq!(rect, area);

        let rect = centered_rect(10, 4, area);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }
}
