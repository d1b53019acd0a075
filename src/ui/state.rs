use crate::library::{self, Song};
use crate::session::Session;

/// Everything the views read while rendering: the session store plus the
/// mock playback line at the bottom of the screen.
pub struct AppState {
    pub session: Session,
    pub playback: PlaybackState,
}

/// Fake now-playing state. There is no audio pipeline behind this, it only
/// feeds the player bar.
#[derive(Debug, Default)]
pub struct PlaybackState {
    pub current: Option<&'static Song>,
    pub playing: bool,
}

impl PlaybackState {
    pub fn play(&mut self, song_id: u64) {
        if let Some(song) = library::song(song_id) {
            self.current = Some(song);
            self.playing = true;
        }
    }

    pub fn toggle(&mut self) {
        if self.current.is_some() {
            self.playing = !self.playing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_song_id_is_ignored() {
        let mut playback = PlaybackState::default();
        playback.play(999);
        assert!(playback.current.is_none());
        assert!(!playback.playing);
    }

    #[test]
    fn toggle_without_a_track_does_nothing() {
        let mut playback = PlaybackState::default();
        playback.toggle();
        assert!(!playback.playing);

        playback.play(1);
        assert!(playback.playing);
        playback.toggle();
        assert!(!playback.playing);
        assert_eq!(playback.current.map(|s| s.id), Some(1));
    }
}
