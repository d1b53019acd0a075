use flume::Receiver;
use ratatui::Frame;
use tracing::warn;

use crate::event::events::Event;
use crate::session::Session;
use crate::session::store::{FileStore, MemoryStore, SessionStore};
use crate::ui::views::UploadModal;
use crate::ui::{
    context::AppContext,
    layout::AppLayout,
    router::{Page, Router},
    state::{AppState, PlaybackState},
    tui,
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let store: Box<dyn SessionStore> = match FileStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                warn!("session storage unavailable, state will not survive a restart: {e}");
                Box::new(MemoryStore::default())
            }
        };
        Self::with_store(store)
    }

    pub fn with_store(store: Box<dyn SessionStore>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let session = Session::initialize(store);

        Self {
            event_rx,
            ctx: AppContext { event_tx },
            state: AppState {
                session,
                playback: PlaybackState::default(),
            },
            router: Router::new(Page::default()),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            AppLayout::new(self).render(frame, frame.area());
        }
    }

    /// The single mutation point. All session operations and their
    /// navigation side effects live here, so every transition is auditable.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => self.should_quit = true,
            Event::ToggleTheme => self.state.session.toggle_theme(),
            Event::Navigate(target) => self.router.navigate(target),
            Event::Login { as_artist } => {
                self.state.session.login(as_artist);
                self.router.navigate(Page::Home.into());
            }
            Event::Logout => {
                self.state.session.logout();
                self.router.navigate(Page::Auth.into());
            }
            Event::SetAdmin(is_admin) => self.state.session.set_admin(is_admin),
            Event::SetAvatar(url) => self.state.session.set_avatar(url),
            Event::OpenUpload => self.router.set_overlay(Box::new(UploadModal::default())),
            Event::CloseUpload => self.router.clear_overlay(),
            Event::Play(song_id) => self.state.playback.play(song_id),
            Event::PlayPause => self.state.playback.toggle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;
    use crate::theme::Theme;
    use crate::ui::router::NavigationTarget;

    fn fresh_app() -> App {
        App::with_store(Box::new(MemoryStore::default()))
    }

    #[test]
    fn starts_on_home_with_defaults() {
        let app = fresh_app();
        assert_eq!(app.router.current(), Page::Home);
        assert_eq!(app.state.session.state(), &SessionState::default());
    }

    #[test]
    fn login_navigates_home_and_sets_roles() {
        let mut app = fresh_app();
        app.update(Event::Navigate(Page::Auth.into()));
        app.update(Event::Login { as_artist: true });

        assert!(app.state.session.is_authenticated());
        assert!(app.state.session.is_artist());
        assert!(!app.state.session.is_admin());
        assert_eq!(app.router.current(), Page::Home);
    }

    #[test]
    fn logout_navigates_to_auth_and_resets_everything_but_theme() {
        let mut app = fresh_app();
        app.update(Event::ToggleTheme);
        app.update(Event::Login { as_artist: false });
        app.update(Event::SetAdmin(true));
        app.update(Event::SetAvatar("me.png".to_string()));
        app.update(Event::Logout);

        assert_eq!(app.router.current(), Page::Auth);

        // Simulated reload: rebuild the app over the same store.
        let app = App::with_store(app.state.session.into_store());
        assert_eq!(
            app.state.session.state(),
            &SessionState {
                theme: Theme::Light,
                ..SessionState::default()
            }
        );
    }

    #[test]
    fn artist_selection_survives_going_home() {
        let mut app = fresh_app();
        app.update(Event::Navigate(NavigationTarget::artist(7)));
        app.update(Event::Navigate(Page::Home.into()));
        assert_eq!(app.router.selected_artist_id(), Some(7));
    }

    #[test]
    fn upload_overlay_opens_and_closes() {
        let mut app = fresh_app();
        app.update(Event::OpenUpload);
        assert!(app.router.has_overlay());
        app.update(Event::CloseUpload);
        assert!(!app.router.has_overlay());
    }

    #[test]
    fn mock_playback_reacts_to_events() {
        let mut app = fresh_app();
        app.update(Event::Play(3));
        assert_eq!(app.state.playback.current.map(|s| s.title), Some("Street Poetry"));
        assert!(app.state.playback.playing);

        app.update(Event::PlayPause);
        assert!(!app.state.playback.playing);
    }
}
