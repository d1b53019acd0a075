use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tracing::debug;

use crate::ui::context::AppContext;
use crate::ui::state::AppState;
use crate::ui::traits::{Action, View};
use crate::ui::views::{
    Account, AdminPanel, ArtistDashboard, ArtistPage, Auth, Landing, Library, Search,
};

/// The closed set of pages. Identifiers nobody recognizes fall back to the
/// landing page instead of erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Search,
    Library,
    Artist,
    Account,
    Admin,
    ArtistDashboard,
    Auth,
}

impl Page {
    pub fn parse(value: &str) -> Self {
        match value {
            "home" => Page::Home,
            "search" => Page::Search,
            "library" => Page::Library,
            "artist" => Page::Artist,
            "account" => Page::Account,
            "admin" => Page::Admin,
            "artist-dashboard" => Page::ArtistDashboard,
            "auth" => Page::Auth,
            _ => Page::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Search => "search",
            Page::Library => "library",
            Page::Artist => "artist",
            Page::Account => "account",
            Page::Admin => "admin",
            Page::ArtistDashboard => "artist-dashboard",
            Page::Auth => "auth",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Search => "Search",
            Page::Library => "Library",
            Page::Artist => "Artist",
            Page::Account => "Account",
            Page::Admin => "Admin",
            Page::ArtistDashboard => "Dashboard",
            Page::Auth => "Sign in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTarget {
    pub page: Page,
    pub artist_id: Option<u64>,
}

impl NavigationTarget {
    pub fn artist(id: u64) -> Self {
        Self {
            page: Page::Artist,
            artist_id: Some(id),
        }
    }
}

impl From<Page> for NavigationTarget {
    fn from(page: Page) -> Self {
        Self {
            page,
            artist_id: None,
        }
    }
}

/// Single current-page pointer plus the upload overlay. Navigating rebuilds
/// the page view, so view-local state (inputs, tabs, scroll offsets) always
/// starts from the top of a freshly opened page.
pub struct Router {
    current: Page,
    view: Box<dyn View>,
    overlay: Option<Box<dyn View>>,
    selected_artist_id: Option<u64>,
}

impl Router {
    pub fn new(initial: Page) -> Self {
        Self {
            current: initial,
            view: Self::build_view(initial, None),
            overlay: None,
            selected_artist_id: None,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn selected_artist_id(&self) -> Option<u64> {
        self.selected_artist_id
    }

    /// Any page is reachable from any page. The selected artist id is sticky:
    /// it is recorded when a target carries one and left untouched otherwise.
    pub fn navigate(&mut self, target: NavigationTarget) {
        if let Some(id) = target.artist_id {
            self.selected_artist_id = Some(id);
        }
        debug!("navigate to {}", target.page.as_str());
        self.current = target.page;
        self.view = Self::build_view(target.page, self.selected_artist_id);
    }

    fn build_view(page: Page, artist_id: Option<u64>) -> Box<dyn View> {
        match page {
            Page::Home => Box::new(Landing::default()),
            Page::Search => Box::new(Search::default()),
            Page::Library => Box::new(Library::default()),
            Page::Artist => Box::new(ArtistPage::new(artist_id)),
            Page::Account => Box::new(Account::default()),
            Page::Admin => Box::new(AdminPanel::default()),
            Page::ArtistDashboard => Box::new(ArtistDashboard::default()),
            Page::Auth => Box::new(Auth::default()),
        }
    }

    pub fn set_overlay(&mut self, view: Box<dyn View>) {
        self.overlay = Some(view);
    }

    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// The navigation bar is hidden on the auth page.
    pub fn show_navigation(&self) -> bool {
        self.current != Page::Auth
    }

    /// The player bar is hidden on auth and on the two management pages.
    pub fn show_player(&self) -> bool {
        !matches!(self.current, Page::Auth | Page::Admin | Page::ArtistDashboard)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        self.view.render(f, area, state, ctx);
        if let Some(overlay) = &mut self.overlay {
            overlay.render(f, area, state, ctx);
        }
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if let Some(overlay) = &mut self.overlay {
            overlay.handle_input(key, state, ctx).await
        } else {
            self.view.handle_input(key, state, ctx).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::UploadModal;

    #[test]
    fn unknown_identifiers_fall_back_to_home() {
        assert_eq!(Page::parse("unknown-page"), Page::Home);
        assert_eq!(Page::parse(""), Page::Home);
        assert_eq!(Page::parse("artist-dashboard"), Page::ArtistDashboard);
    }

    #[test]
    fn page_names_roundtrip() {
        for page in [
            Page::Home,
            Page::Search,
            Page::Library,
            Page::Artist,
            Page::Account,
            Page::Admin,
            Page::ArtistDashboard,
            Page::Auth,
        ] {
            assert_eq!(Page::parse(page.as_str()), page);
        }
    }

    #[test]
    fn artist_id_is_sticky_across_navigations() {
        let mut router = Router::new(Page::Home);
        assert_eq!(router.selected_artist_id(), None);

        router.navigate(NavigationTarget::artist(7));
        assert_eq!(router.current(), Page::Artist);
        assert_eq!(router.selected_artist_id(), Some(7));

        // Navigating without an id must not clear the previous selection.
        router.navigate(Page::Home.into());
        assert_eq!(router.current(), Page::Home);
        assert_eq!(router.selected_artist_id(), Some(7));

        router.navigate(NavigationTarget::artist(2));
        assert_eq!(router.selected_artist_id(), Some(2));
    }

    #[test]
    fn chrome_visibility_follows_the_page() {
        let mut router = Router::new(Page::Home);
        assert!(router.show_navigation());
        assert!(router.show_player());

        router.navigate(Page::Auth.into());
        assert!(!router.show_navigation());
        assert!(!router.show_player());

        router.navigate(Page::Admin.into());
        assert!(router.show_navigation());
        assert!(!router.show_player());

        router.navigate(Page::ArtistDashboard.into());
        assert!(!router.show_player());
    }

    #[test]
    fn overlay_slot_opens_and_closes() {
        let mut router = Router::new(Page::Library);
        assert!(!router.has_overlay());

        router.set_overlay(Box::new(UploadModal::default()));
        assert!(router.has_overlay());

        router.clear_overlay();
        assert!(!router.has_overlay());
    }
}
