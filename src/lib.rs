pub mod event;
pub mod library;
pub mod session;
pub mod theme;
pub mod ui;
pub mod util;
