/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Length in whole seconds, always > 0.
    pub duration: u32,
    /// Cover art locator, resolved by `CoverResolver`.
    pub cover: String,
}

// id, title, artist, album, duration, cover
const SAMPLE_TRACKS: [(u32, &str, &str, &str, u32, &str); 3] = [
    (
        1,
        "Midnight Dreams",
        "Luna Eclipse",
        "Nocturnal Vibes",
        245,
        "midnight-dreams",
    ),
    (
        2,
        "Ocean Waves",
        "Coastal Sounds",
        "Nature's Symphony",
        198,
        "ocean-waves",
    ),
    (
        3,
        "City Lights",
        "Urban Pulse",
        "Metropolitan",
        267,
        "city-lights",
    ),
];

/// Return the built-in track list.
pub fn sample_tracks() -> Vec<Track> {
    SAMPLE_TRACKS
        .iter()
        .map(|&(id, title, artist, album, duration, cover)| Track {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            duration,
            cover: cover.to_string(),
        })
        .collect()
}
