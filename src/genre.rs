/// Genre label returned when no keyword row matches.
pub const DEFAULT_GENRE: &str = "Electronic";

// Keyword table, one row per genre. Row order decides ties: a title that
// matches keywords from several rows is classified by the earliest row, so
// this order is part of the output contract.
const GENRE_KEYWORDS: [(&str, &[&str]); 9] = [
    ("Progressive House", &["progressive", "prog house", "melodic"]),
    ("Techno", &["techno", "tech house"]),
    ("Trance", &["trance", "uplifting", "psy"]),
    ("House", &["house", "deep house"]),
    ("Future Bass", &["future bass", "future"]),
    ("Dubstep", &["dubstep", "bass"]),
    ("Drum & Bass", &["drum and bass", "dnb", "d&b"]),
    ("Synthwave", &["synthwave", "retro"]),
    ("Ambient", &["ambient", "chill"]),
];

/// Classify a video title into a single genre label.
///
/// The title is lower-cased and each table row is tested in order; the first
/// row with any keyword appearing as a substring wins. Titles matching no
/// row are classified as [`DEFAULT_GENRE`]. Total over all inputs.
#[must_use]
pub fn classify(title: &str) -> &'static str {
    let title_lower = title.to_lowercase();

    for (genre, keywords) in GENRE_KEYWORDS {
        if keywords.iter().any(|keyword| title_lower.contains(keyword)) {
            return genre;
        }
    }

    DEFAULT_GENRE
}
