//! Hard-coded mock datasets. This is presentational content, not contract:
//! the titles and numbers exist so the pages have something to render.

use super::{Artist, DashboardSong, Playlist, Song, Stat, UserRow};

pub static SONGS: [Song; 8] = [
    Song {
        id: 1,
        title: "Midnight Echoes",
        artist: "Luna Noir",
        artist_id: 1,
        genre: "Alternative",
        duration: "3:45",
    },
    Song {
        id: 2,
        title: "Digital Dreams",
        artist: "Echo Theory",
        artist_id: 2,
        genre: "Electronic",
        duration: "4:12",
    },
    Song {
        id: 3,
        title: "Street Poetry",
        artist: "The Cipher",
        artist_id: 3,
        genre: "Hip-Hop",
        duration: "3:28",
    },
    Song {
        id: 4,
        title: "Rebel Heart",
        artist: "Velvet Rebels",
        artist_id: 4,
        genre: "Rock",
        duration: "4:56",
    },
    Song {
        id: 5,
        title: "Neon Nights",
        artist: "Echo Theory",
        artist_id: 2,
        genre: "Electronic",
        duration: "3:55",
    },
    Song {
        id: 6,
        title: "Shadows Fall",
        artist: "Luna Noir",
        artist_id: 1,
        genre: "Alternative",
        duration: "4:20",
    },
    Song {
        id: 7,
        title: "Urban Legend",
        artist: "The Cipher",
        artist_id: 3,
        genre: "Hip-Hop",
        duration: "3:33",
    },
    Song {
        id: 8,
        title: "Thunder Road",
        artist: "Velvet Rebels",
        artist_id: 4,
        genre: "Rock",
        duration: "5:12",
    },
];

pub static ARTISTS: [Artist; 4] = [
    Artist {
        id: 1,
        name: "Luna Noir",
        genre: "Alternative",
        followers: "12.5K",
    },
    Artist {
        id: 2,
        name: "Echo Theory",
        genre: "Electronic",
        followers: "8.9K",
    },
    Artist {
        id: 3,
        name: "The Cipher",
        genre: "Hip-Hop",
        followers: "15.2K",
    },
    Artist {
        id: 4,
        name: "Velvet Rebels",
        genre: "Rock",
        followers: "20.1K",
    },
];

pub static PLAYLISTS: [Playlist; 6] = [
    Playlist { id: 1, title: "My Favorites", tracks: 24 },
    Playlist { id: 2, title: "Discoveries 2024", tracks: 18 },
    Playlist { id: 3, title: "Study Night", tracks: 32 },
    Playlist { id: 4, title: "Underground Gems", tracks: 45 },
    Playlist { id: 5, title: "Chill Vibes", tracks: 28 },
    Playlist { id: 6, title: "Positive Energy", tracks: 19 },
];

pub static PLATFORM_STATS: [Stat; 4] = [
    Stat { label: "Total Users", value: "1,247" },
    Stat { label: "Total Songs", value: "3,891" },
    Stat { label: "Active Artists", value: "284" },
    Stat { label: "Pending Reports", value: "12" },
];

pub static USERS: [UserRow; 5] = [
    UserRow { name: "Juan Perez", email: "juan@example.com", role: "listener", status: "active" },
    UserRow { name: "Maria Garcia", email: "maria@example.com", role: "artist", status: "active" },
    UserRow { name: "Carlos Ruiz", email: "carlos@example.com", role: "listener", status: "suspended" },
    UserRow { name: "Ana Lopez", email: "ana@example.com", role: "artist", status: "active" },
    UserRow { name: "Pedro Martinez", email: "pedro@example.com", role: "listener", status: "active" },
];

pub static DASHBOARD_STATS: [Stat; 4] = [
    Stat { label: "Total Plays", value: "124.5K" },
    Stat { label: "Followers", value: "8,942" },
    Stat { label: "Songs Published", value: "23" },
    Stat { label: "Monthly Listeners", value: "45.2K" },
];

pub static DASHBOARD_SONGS: [DashboardSong; 4] = [
    DashboardSong { title: "Echo Chamber", plays: 15234 },
    DashboardSong { title: "Midnight Echoes", plays: 12547 },
    DashboardSong { title: "Shadows Fall", plays: 8934 },
    DashboardSong { title: "Dark Symphony", plays: 0 },
];
