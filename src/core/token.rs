//! Word-level tokenizer
//!
//! Splits text on whitespace, then peels leading and trailing punctuation off
//! each chunk as separate tokens. Interior punctuation also splits
//! (`kuca,house` -> `kuca` `,` `house`), except word joiners (`e-mail`,
//! `o'k`) and separators between digits (`3.5`, `12:30`, `1,000`).

/// One token occurrence within a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Form as it appeared in the text
    pub surface: String,
    /// Surface with ASCII punctuation trimmed, lower-cased
    pub cleaned: String,
    /// Position within the token sequence of its source text
    pub index: usize,
}

impl Token {
    fn new(surface: &str, index: usize) -> Self {
        Self {
            surface: surface.to_string(),
            cleaned: clean(surface),
            index,
        }
    }

    /// Cleaned form is non-empty and consists only of alphabetic characters
    pub fn is_alphabetic(&self) -> bool {
        is_alphabetic(&self.cleaned)
    }

    /// Cleaned form length in characters
    pub fn len(&self) -> usize {
        self.cleaned.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty()
    }
}

/// Trims ASCII punctuation from both ends without changing case
pub fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Trims ASCII punctuation and lower-cases
pub fn clean(word: &str) -> String {
    strip_punctuation(word).to_lowercase()
}

/// Non-empty and every character alphabetic (Unicode aware, so `č` counts)
pub fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Splits `text` into an ordered token sequence
///
/// Total over any input: empty or whitespace-only text yields no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        let is_edge = |c: char| !c.is_alphanumeric();

        let core_start = chunk.find(|c: char| !is_edge(c));
        let Some(core_start) = core_start else {
            // symbol-only chunk: one token per character
            for (i, c) in chunk.char_indices() {
                let piece = &chunk[i..i + c.len_utf8()];
                tokens.push(Token::new(piece, tokens.len()));
            }
            continue;
        };
        let core_end = chunk
            .rfind(|c: char| !is_edge(c))
            .map(|i| i + chunk[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(chunk.len());

        for (i, c) in chunk[..core_start].char_indices() {
            let piece = &chunk[i..i + c.len_utf8()];
            tokens.push(Token::new(piece, tokens.len()));
        }

        push_core(&mut tokens, &chunk[core_start..core_end]);

        let tail = &chunk[core_end..];
        for (i, c) in tail.char_indices() {
            let piece = &tail[i..i + c.len_utf8()];
            tokens.push(Token::new(piece, tokens.len()));
        }
    }

    tokens
}

/// Whether interior punctuation `c` stays inside the word it sits in
fn joins(prev: char, c: char, next: char) -> bool {
    match c {
        '-' | '\'' | '\u{2019}' => true,
        '.' | ',' | ':' => prev.is_ascii_digit() && next.is_ascii_digit(),
        _ => false,
    }
}

/// Pushes a chunk core (alphanumeric at both ends), splitting at interior
/// punctuation that does not join
fn push_core(tokens: &mut Vec<Token>, core: &str) {
    let chars: Vec<(usize, char)> = core.char_indices().collect();
    let mut start = 0;

    for (k, &(i, c)) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            continue;
        }
        // interior position: both neighbours exist
        let prev = chars[k - 1].1;
        let next = chars[k + 1].1;
        if joins(prev, c, next) {
            continue;
        }
        if start < i {
            tokens.push(Token::new(&core[start..i], tokens.len()));
        }
        let end = i + c.len_utf8();
        tokens.push(Token::new(&core[i..end], tokens.len()));
        start = end;
    }

    if start < core.len() {
        tokens.push(Token::new(&core[start..], tokens.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.surface).collect()
    }

    #[test]
    fn test_splits_whitespace() {
        assert_eq!(surfaces("auto lol house"), vec!["auto", "lol", "house"]);
        assert_eq!(surfaces("  a \t b\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_peels_edge_punctuation() {
        assert_eq!(surfaces("kuca, house!"), vec!["kuca", ",", "house", "!"]);
        assert_eq!(surfaces("\"lol\""), vec!["\"", "lol", "\""]);
        assert_eq!(surfaces("#hashtag"), vec!["#", "hashtag"]);
        assert_eq!(surfaces("@user:"), vec!["@", "user", ":"]);
    }

    #[test]
    fn test_keeps_inner_punctuation() {
        assert_eq!(surfaces("e-mail"), vec!["e-mail"]);
        assert_eq!(surfaces("o'k"), vec!["o'k"]);
        assert_eq!(surfaces("3.5"), vec!["3.5"]);
        assert_eq!(surfaces("12:30"), vec!["12:30"]);
        assert_eq!(surfaces("1,000"), vec!["1,000"]);
    }

    #[test]
    fn test_splits_inner_punctuation() {
        assert_eq!(surfaces("kuca,house"), vec!["kuca", ",", "house"]);
        assert_eq!(surfaces("auto,lol"), vec!["auto", ",", "lol"]);
        assert_eq!(surfaces("kraj.Sutra"), vec!["kraj", ".", "Sutra"]);
        assert_eq!(surfaces("vreme:5"), vec!["vreme", ":", "5"]);
        assert_eq!(surfaces("a,,b!"), vec!["a", ",", ",", "b", "!"]);
        assert_eq!(surfaces("lol!!brate"), vec!["lol", "!", "!", "brate"]);
    }

    #[test]
    fn test_inner_split_positions() {
        let tokens = tokenize("idemo u shopping,brate");
        let cleaned: Vec<_> = tokens.iter().map(|t| t.cleaned.as_str()).collect();
        assert_eq!(cleaned, vec!["idemo", "u", "shopping", "", "brate"]);
        for (i, t) in tokens.iter().enumerate() {
            assert_eq!(t.index, i);
        }
    }

    #[test]
    fn test_punctuation_only() {
        assert_eq!(surfaces("?!"), vec!["?", "!"]);
        assert_eq!(surfaces("..."), vec![".", ".", "."]);
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokens = tokenize("lajk, brate!");
        for (i, t) in tokens.iter().enumerate() {
            assert_eq!(t.index, i);
        }
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_cleaned_form() {
        let tokens = tokenize("Čaj HOUSE");
        assert_eq!(tokens[0].surface, "Čaj");
        assert_eq!(tokens[0].cleaned, "čaj");
        assert_eq!(tokens[1].cleaned, "house");
        assert!(tokens[0].is_alphabetic());
        assert_eq!(tokens[0].len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn test_clean_helpers() {
        assert_eq!(strip_punctuation("..Kuća!"), "Kuća");
        assert_eq!(clean("(Auto)"), "auto");
        assert!(is_alphabetic("šuma"));
        assert!(!is_alphabetic("a1"));
        assert!(!is_alphabetic(""));
    }
}
