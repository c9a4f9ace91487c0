//! Built-in detection data
//!
//! Informal English abbreviations common in Serbian tweets, and the vowel set
//! used by the fuzzy eligibility filter.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default closed acronym set
///
/// Curated so that entries rarely collide with common words in the target
/// corpus. `rip` and `pm` are ordinary English words too; the dictionary
/// detector skips anything in this set, so such tokens are only reported as
/// acronyms.
pub static DEFAULT_ACRONYMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for a in [
        "lol", "wtf", "omg", "btw", "rip", "lmao", "lmfao", "rofl", "idk", "brb",
        "gtg", "imo", "fyi", "smh", "tbh", "tfw", "wyd", "yt", "pm",
    ] {
        set.insert(a);
    }
    set
});

/// Vowels required (at least one) for a token to be fuzzy-matched
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Whether `word` contains at least one of [`VOWELS`]
pub fn has_vowel(word: &str) -> bool {
    word.chars().any(|c| VOWELS.contains(&c))
}
