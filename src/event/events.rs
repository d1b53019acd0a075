use crate::ui::router::NavigationTarget;

/// Everything a key press or a view can ask the app to do. All of these are
/// applied synchronously in `App::update`; none of them can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Session
    ToggleTheme,
    Login { as_artist: bool },
    Logout,
    SetAdmin(bool),
    SetAvatar(String),

    // Navigation
    Navigate(NavigationTarget),
    OpenUpload,
    CloseUpload,

    // Mock playback
    Play(u64),
    PlayPause,

    Quit,
}
