pub mod store;

use crate::theme::{Theme, ThemePalette};
use self::store::{SessionStore, keys};

/// User-specific flags that survive a restart. Everything defaults when the
/// backing store has nothing for a key; there is no error path here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub theme: Theme,
    pub authenticated: bool,
    pub is_admin: bool,
    pub is_artist: bool,
    pub avatar_url: String,
}

/// The session store: in-memory state plus the injected persistence backend.
/// Every mutation goes through one of the named operations below and is
/// written through immediately.
pub struct Session {
    state: SessionState,
    store: Box<dyn SessionStore>,
}

impl Session {
    pub fn initialize(store: Box<dyn SessionStore>) -> Self {
        let state = SessionState {
            theme: store
                .get(keys::THEME)
                .map(|v| Theme::parse(&v))
                .unwrap_or_default(),
            authenticated: flag(&*store, keys::AUTHENTICATED),
            is_admin: flag(&*store, keys::ADMIN),
            is_artist: flag(&*store, keys::ARTIST),
            avatar_url: store.get(keys::AVATAR).unwrap_or_default(),
        };

        Self { state, store }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn palette(&self) -> &'static ThemePalette {
        self.state.theme.palette()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin
    }

    pub fn is_artist(&self) -> bool {
        self.state.is_artist
    }

    pub fn avatar_url(&self) -> &str {
        &self.state.avatar_url
    }

    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggle();
        self.store.set(keys::THEME, self.state.theme.as_str());
    }

    pub fn login(&mut self, as_artist: bool) {
        self.state.authenticated = true;
        self.state.is_artist = as_artist;
        self.store.set(keys::AUTHENTICATED, "true");
        self.store.set(keys::ARTIST, bool_str(as_artist));
    }

    /// Drops the four account keys from the store. The theme key survives a
    /// logout on purpose, so the next visitor keeps the chosen palette.
    pub fn logout(&mut self) {
        self.state.authenticated = false;
        self.state.is_admin = false;
        self.state.is_artist = false;
        self.state.avatar_url.clear();

        self.store.remove(keys::AUTHENTICATED);
        self.store.remove(keys::ADMIN);
        self.store.remove(keys::ARTIST);
        self.store.remove(keys::AVATAR);
    }

    pub fn set_admin(&mut self, is_admin: bool) {
        self.state.is_admin = is_admin;
        self.store.set(keys::ADMIN, bool_str(is_admin));
    }

    /// Any string is accepted as an avatar reference, including empty.
    pub fn set_avatar(&mut self, url: impl Into<String>) {
        self.state.avatar_url = url.into();
        self.store.set(keys::AVATAR, &self.state.avatar_url);
    }

    /// Hands the backing store back, e.g. to rebuild the session after a
    /// simulated restart.
    pub fn into_store(self) -> Box<dyn SessionStore> {
        self.store
    }
}

fn flag(store: &dyn SessionStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::store::MemoryStore;
    use super::*;

    fn fresh() -> Session {
        Session::initialize(Box::new(MemoryStore::default()))
    }

    #[test]
    fn empty_store_yields_defaults() {
        let session = fresh();
        assert_eq!(session.state(), &SessionState::default());
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn toggle_theme_twice_returns_to_start() {
        let mut session = fresh();
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Light);
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn theme_survives_restart() {
        let mut session = fresh();
        session.toggle_theme();

        let session = Session::initialize(session.into_store());
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn login_sets_auth_and_role_only() {
        let mut session = fresh();
        session.login(true);
        assert!(session.is_authenticated());
        assert!(session.is_artist());
        assert!(!session.is_admin());
    }

    #[test]
    fn logout_clears_account_keys_but_not_theme() {
        let mut session = fresh();
        session.toggle_theme();
        session.login(false);
        session.set_admin(true);
        session.set_avatar("https://cdn.example/me.png");
        session.logout();

        let store = session.into_store();
        assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));
        assert_eq!(store.get(keys::AUTHENTICATED), None);
        assert_eq!(store.get(keys::ADMIN), None);
        assert_eq!(store.get(keys::ARTIST), None);
        assert_eq!(store.get(keys::AVATAR), None);
    }

    #[test]
    fn logout_then_restart_keeps_only_theme() {
        let mut session = fresh();
        session.toggle_theme();
        session.login(true);
        session.set_admin(true);
        session.set_avatar("avatar.png");
        session.logout();

        let session = Session::initialize(session.into_store());
        assert_eq!(
            session.state(),
            &SessionState {
                theme: Theme::Light,
                ..SessionState::default()
            }
        );
    }

    #[test]
    fn avatar_accepts_any_string() {
        let mut session = fresh();
        session.set_avatar("not a url at all");
        assert_eq!(session.avatar_url(), "not a url at all");
        session.set_avatar("");
        assert_eq!(session.avatar_url(), "");
    }
}
