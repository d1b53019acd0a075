pub mod account;
pub mod admin;
pub mod artist_dashboard;
pub mod artist_page;
pub mod auth;
pub mod landing;
pub mod library;
pub mod search;
pub mod upload;

pub use account::Account;
pub use admin::AdminPanel;
pub use artist_dashboard::ArtistDashboard;
pub use artist_page::ArtistPage;
pub use auth::Auth;
pub use landing::Landing;
pub use library::Library;
pub use search::Search;
pub use upload::UploadModal;
