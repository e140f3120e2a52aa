use indexmap::IndexSet;

pub const UNKNOWN_DECADE: &str = "Unknown";

fn decade_start(year: i32) -> i32 {
    year.div_euclid(10).saturating_mul(10)
}

/// Decade bucket for a release year, e.g. `1985 -> "1980s"`.
pub fn decade_label(release_year: Option<i32>) -> String {
    match release_year {
        Some(year) => format!("{}s", decade_start(year)),
        None => UNKNOWN_DECADE.to_string(),
    }
}

/// Tokens a searcher might type for a release year.
///
/// For 1985 this is `1983..=1987`, `1980s`, `1980`, `80s`, `80` and the
/// three-digit prefix `198`. Order is stable, duplicates are dropped.
pub fn year_tokens(release_year: Option<i32>) -> Vec<String> {
    let Some(year) = release_year else {
        return Vec::new();
    };

    let mut tokens = IndexSet::new();
    for offset in -2..=2 {
        if let Some(near) = year.checked_add(offset) {
            tokens.insert(near.to_string());
        }
    }

    let decade = decade_start(year).to_string();
    tokens.insert(format!("{}s", decade));
    tokens.insert(decade.clone());

    let short: String = decade.chars().skip(2).collect();
    if !short.is_empty() {
        tokens.insert(format!("{}s", short));
        tokens.insert(short);
    }

    tokens.insert(year.to_string().chars().take(3).collect());

    tokens.into_iter().collect()
}
