//! The known LA-area neighborhood set.
//!
//! The parser anchors on these names: every input line ends its first
//! segment with one of them, and the lookup stage reuses the matched name
//! as a search-query qualifier. Kept as static configuration data rather
//! than inline literals so the set can be audited and extended in one
//! place.

use std::sync::LazyLock;

/// Every neighborhood the parser recognizes.
pub const NEIGHBORHOODS: [&str; 53] = [
    "Alhambra",
    "Arcadia",
    "Atwater Village",
    "Beverly Hills",
    "Boyle Heights",
    "Brentwood",
    "Burbank",
    "Chinatown",
    "Culver City",
    "Downtown",
    "Eagle Rock",
    "East Hollywood",
    "Echo Park",
    "El Segundo",
    "Encino",
    "Glendale",
    "Highland Park",
    "Hollywood",
    "Huntington Park",
    "Inglewood",
    "Koreatown",
    "Little Tokyo",
    "Long Beach",
    "Los Feliz",
    "Malibu",
    "Manhattan Beach",
    "Mar Vista",
    "Marina del Rey",
    "Mid-City",
    "Mid-Wilshire",
    "Monterey Park",
    "North Hollywood",
    "Pacific Palisades",
    "Palms",
    "Pasadena",
    "Pico-Robertson",
    "Playa del Rey",
    "Redondo Beach",
    "Rosemead",
    "San Gabriel",
    "San Pedro",
    "Santa Monica",
    "Sawtelle",
    "Sherman Oaks",
    "Silver Lake",
    "South Pasadena",
    "Studio City",
    "Torrance",
    "Venice",
    "Vernon",
    "West Adams",
    "West Hollywood",
    "Westwood",
];

// Longest-first search order, so "West Hollywood" is tried before
// "Hollywood". Computed once on first use.
static BY_DESCENDING_LENGTH: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut names = NEIGHBORHOODS.to_vec();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    names
});

/// The neighborhood set in declaration order.
pub fn all() -> &'static [&'static str] {
    &NEIGHBORHOODS
}

/// The neighborhood set sorted by descending name length.
pub fn by_descending_length() -> &'static [&'static str] {
    &BY_DESCENDING_LENGTH
}

/// Split a name blob at its trailing neighborhood.
///
/// Tries the known names longest-first so a compound name wins over a
/// shorter name it contains. If the chosen name occurs more than once in
/// the blob, the split happens at the last occurrence. Returns the trimmed
/// text before the match and the matched neighborhood, or `None` when the
/// blob contains no known neighborhood.
pub fn split_trailing(blob: &str) -> Option<(&str, &'static str)> {
    for name in by_descending_length().iter().copied() {
        if let Some(pos) = blob.rfind(name) {
            return Some((blob[..pos].trim(), name));
        }
    }
    None
}
