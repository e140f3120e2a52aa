use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase and decompose a single character, dropping combining marks.
///
/// `'É'` folds to `'e'`; most characters fold to exactly one character, a
/// few (e.g. `'İ'`) fold to more.
pub fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().nfd().filter(|m| !is_combining_mark(*m))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Matching form of display text: lowercase, diacritics stripped, only
/// ASCII word characters and single spaces left, trimmed.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(fold_char) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else if is_word_char(c) {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}

/// URL form of display text: runs of anything outside `[a-z0-9]` become a
/// single hyphen, with no leading or trailing hyphen.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(fold_char) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(c);
        } else {
            pending_hyphen = !out.is_empty();
        }
    }

    out
}
