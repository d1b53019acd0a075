use ratatui::style::Color;

/// Palette mode. Anything that is not explicitly `"light"` resolves to dark,
/// including the empty string read from a fresh session store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(&self) -> &'static ThemePalette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// The nine named colors every page renders with. Exactly one palette is
/// active at a time and both are fixed at compile time.
#[derive(Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,
    pub accent_primary: Color,
    pub accent_hover: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub nav_bg: Color,
}

// Terminal cells carry no alpha, so the translucent nav background collapses
// to its opaque base color.
pub const DARK: ThemePalette = ThemePalette {
    bg_primary: Color::from_u32(0x000F0A1A),
    bg_secondary: Color::from_u32(0x001A0F2E),
    bg_tertiary: Color::from_u32(0x002A1F3E),
    accent_primary: Color::from_u32(0x007B2CBF),
    accent_hover: Color::from_u32(0x009D4EDD),
    text_primary: Color::from_u32(0x00E8E1FF),
    text_secondary: Color::from_u32(0x00B0A3CC),
    border: Color::from_u32(0x003E2A66),
    nav_bg: Color::from_u32(0x001A0F2E),
};

pub const LIGHT: ThemePalette = ThemePalette {
    bg_primary: Color::from_u32(0x00F5F1E8),
    bg_secondary: Color::from_u32(0x00E8DCC8),
    bg_tertiary: Color::from_u32(0x00D4C4A8),
    accent_primary: Color::from_u32(0x007B2CBF),
    accent_hover: Color::from_u32(0x009D4EDD),
    text_primary: Color::from_u32(0x002A1A4A),
    text_secondary: Color::from_u32(0x005A4A7A),
    border: Color::from_u32(0x00C8B8A8),
    nav_bg: Color::from_u32(0x00E8DCC8),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_pure() {
        assert!(std::ptr::eq(Theme::Dark.palette(), Theme::Dark.palette()));
        assert!(std::ptr::eq(Theme::Light.palette(), Theme::Light.palette()));
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
    }

    #[test]
    fn unknown_mode_defaults_to_dark() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggle().toggle(), theme);
            assert_ne!(theme.toggle(), theme);
        }
    }

    #[test]
    fn accents_are_shared_between_modes() {
        assert_eq!(DARK.accent_primary, LIGHT.accent_primary);
        assert_eq!(DARK.accent_hover, LIGHT.accent_hover);
    }
}
