pub mod navbar;
pub mod player;
