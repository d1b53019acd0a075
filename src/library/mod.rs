pub mod catalog;

use lazy_static::lazy_static;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: u64,
    pub title: &'static str,
    pub artist: &'static str,
    pub artist_id: u64,
    pub genre: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: u64,
    pub name: &'static str,
    pub genre: &'static str,
    pub followers: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: u64,
    pub title: &'static str,
    pub tracks: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct UserRow {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardSong {
    pub title: &'static str,
    pub plays: u64,
}

lazy_static! {
    /// Genre filter options, derived from whatever the catalog contains.
    pub static ref GENRES: Vec<&'static str> = {
        let mut genres: Vec<&'static str> = catalog::SONGS.iter().map(|s| s.genre).collect();
        genres.sort_unstable();
        genres.dedup();
        genres
    };
}

pub fn song(id: u64) -> Option<&'static Song> {
    catalog::SONGS.iter().find(|song| song.id == id)
}

pub fn artist(id: u64) -> Option<&'static Artist> {
    catalog::ARTISTS.iter().find(|artist| artist.id == id)
}

pub fn songs_by_artist(artist_id: u64) -> Vec<&'static Song> {
    catalog::SONGS
        .iter()
        .filter(|song| song.artist_id == artist_id)
        .collect()
}

/// Case-insensitive substring match on title or artist name, optionally
/// narrowed to one genre. An empty query matches everything.
pub fn search_songs(query: &str, genre: Option<&str>) -> Vec<&'static Song> {
    let query = query.to_lowercase();
    catalog::SONGS
        .iter()
        .filter(|song| {
            let matches_query = song.title.to_lowercase().contains(&query)
                || song.artist.to_lowercase().contains(&query);
            let matches_genre = genre.is_none_or(|g| song.genre == g);
            matches_query && matches_genre
        })
        .collect()
}

pub fn search_artists(query: &str) -> Vec<&'static Artist> {
    let query = query.to_lowercase();
    catalog::ARTISTS
        .iter()
        .filter(|artist| artist.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_title_and_artist_case_insensitively() {
        let by_title = search_songs("midnight", None);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Midnight Echoes");

        let by_artist = search_songs("ECHO THEORY", None);
        assert_eq!(by_artist.len(), 2);
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(search_songs("", None).len(), catalog::SONGS.len());
        assert_eq!(search_artists("").len(), catalog::ARTISTS.len());
    }

    #[test]
    fn genre_filter_narrows_results() {
        let rock = search_songs("", Some("Rock"));
        assert!(rock.iter().all(|song| song.genre == "Rock"));
        assert_eq!(rock.len(), 2);

        assert!(search_songs("midnight", Some("Rock")).is_empty());
    }

    #[test]
    fn lookups_by_id() {
        assert_eq!(artist(3).map(|a| a.name), Some("The Cipher"));
        assert_eq!(artist(99), None);
        assert_eq!(song(8).map(|s| s.title), Some("Thunder Road"));
        assert_eq!(song(0), None);
    }

    #[test]
    fn songs_by_artist_follows_the_id_not_the_name() {
        let songs = songs_by_artist(1);
        assert_eq!(songs.len(), 2);
        assert!(songs.iter().all(|song| song.artist == "Luna Noir"));
        assert!(songs_by_artist(42).is_empty());
    }

    #[test]
    fn genres_are_unique_and_sorted() {
        assert_eq!(*GENRES, vec!["Alternative", "Electronic", "Hip-Hop", "Rock"]);
    }
}
