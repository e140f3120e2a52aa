use crate::tokenizer::fold_char;
use crate::types::EnrichedProduct;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Which field an autocomplete snippet was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetField {
    Year,
    Brand,
    Manufacturer,
    Type,
    Collection,
    Description,
}

/// Short text explaining why a product matched a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub text: String,
    pub field: SnippetField,
}

impl Snippet {
    fn new(field: SnippetField, text: String) -> Self {
        Snippet { text, field }
    }
}

/// Remove HTML-like tags from display text.
pub fn strip_markup(text: &str) -> String {
    MARKUP.replace_all(text, "").into_owned()
}

/// Picks the first field containing the whole normalized query, in a fixed
/// priority, and renders it for display.
pub struct Highlighter {
    before: usize,
    after: usize,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self {
            before: 20,
            after: 50,
        }
    }
}

impl Highlighter {
    /// `before` and `after` are description context widths in characters.
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// `normalized_query` must already be in the form produced by
    /// [`normalize`](crate::tokenizer::normalize). Returns `None` for an empty
    /// query or when no field contains it.
    pub fn snippet(&self, product: &EnrichedProduct, normalized_query: &str) -> Option<Snippet> {
        let q = normalized_query;
        if q.is_empty() {
            return None;
        }

        if let Some(year) = product.release_year() {
            if year.to_string().contains(q) {
                return Some(Snippet::new(
                    SnippetField::Year,
                    format!("Release year: {}", year),
                ));
            }
        }

        let fields = &product.search;
        if fields.brand.contains(q) {
            if let Some(brand) = &product.brand {
                return Some(Snippet::new(SnippetField::Brand, format!("Brand: {}", brand)));
            }
        }
        if fields.manufacturer.contains(q) {
            if let Some(manufacturer) = &product.manufacturer {
                return Some(Snippet::new(
                    SnippetField::Manufacturer,
                    format!("Manufacturer: {}", manufacturer),
                ));
            }
        }
        if fields.product_type.contains(q) {
            if let Some(product_type) = &product.product_type {
                return Some(Snippet::new(SnippetField::Type, format!("Type: {}", product_type)));
            }
        }
        if fields.collection.contains(q) {
            return Some(Snippet::new(
                SnippetField::Collection,
                format!("Collection: {}", product.collection),
            ));
        }
        if fields.description.contains(q) {
            let description = product.description.as_deref().unwrap_or("");
            return self
                .excerpt(description, q)
                .map(|text| Snippet::new(SnippetField::Description, text));
        }
        None
    }

    /// Window of `text` around the first occurrence of `normalized_query`,
    /// with markup removed and `...` marking each truncated side.
    pub fn excerpt(&self, text: &str, normalized_query: &str) -> Option<String> {
        let plain: Vec<char> = strip_markup(text).chars().collect();
        let (folded, origin) = fold_with_offsets(&plain);

        let at = folded.find(normalized_query)?;
        let last = at + normalized_query.len().checked_sub(1)?;
        // folded text is ASCII, so byte offsets are char offsets
        let match_start = origin[at];
        let match_end = origin[last] + 1;

        let start = match_start.saturating_sub(self.before);
        let end = (match_end + self.after).min(plain.len());

        let window: String = plain[start..end].iter().collect();
        let mut out = String::with_capacity(window.len() + 6);
        if start > 0 {
            out.push_str("...");
        }
        out.push_str(window.trim());
        if end < plain.len() {
            out.push_str("...");
        }
        Some(out)
    }
}

/// Fold `chars` the way `normalize` does, recording for every output char
/// the index of the source char it came from.
fn fold_with_offsets(chars: &[char]) -> (String, Vec<usize>) {
    let mut folded = String::with_capacity(chars.len());
    let mut origin = Vec::with_capacity(chars.len());
    let mut pending_space = false;

    for (idx, &c) in chars.iter().enumerate() {
        for f in fold_char(c) {
            if f.is_whitespace() {
                pending_space = !folded.is_empty();
            } else if f.is_ascii_alphanumeric() || f == '_' {
                if pending_space {
                    folded.push(' ');
                    origin.push(idx);
                    pending_space = false;
                }
                folded.push(f);
                origin.push(idx);
            }
        }
    }

    (folded, origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::enrich::enrich_product;
    use crate::catalogue::settings::CatalogueSettings;
    use crate::types::RawProduct;
    use serde_json::json;

    fn product(value: serde_json::Value) -> EnrichedProduct {
        let raw: RawProduct = serde_json::from_value(value).unwrap();
        enrich_product(0, &raw, &CatalogueSettings::default()).unwrap()
    }

    fn lion_o() -> EnrichedProduct {
        product(json!({
            "id": 1, "name": "Lion-O", "brand": "Thundercats", "manufacturer": "LJN",
            "collection": "Thundercats", "type": "Action Figure", "releaseDate": 1985,
            "price": 45, "stock": 2,
            "description": "With the <b>Sword of Omens</b> and claw shield."
        }))
    }

    #[test]
    fn test_year_has_priority() {
        let s = Highlighter::default().snippet(&lion_o(), "198").unwrap();
        assert_eq!(s.field, SnippetField::Year);
        assert_eq!(s.text, "Release year: 1985");
    }

    #[test]
    fn test_field_priority_order() {
        let h = Highlighter::default();
        let p = lion_o();
        // brand wins over collection even though both contain it
        assert_eq!(h.snippet(&p, "thunder").unwrap().text, "Brand: Thundercats");
        assert_eq!(h.snippet(&p, "ljn").unwrap().text, "Manufacturer: LJN");
        assert_eq!(h.snippet(&p, "figure").unwrap().text, "Type: Action Figure");
    }

    #[test]
    fn test_collection_snippet() {
        let p = product(json!({
            "id": 2, "name": "Goliath", "collection": "Gargoyles", "price": 10, "stock": 1
        }));
        let s = Highlighter::default().snippet(&p, "garg").unwrap();
        assert_eq!(s.field, SnippetField::Collection);
        assert_eq!(s.text, "Collection: Gargoyles");
    }

    #[test]
    fn test_description_excerpt_strips_markup() {
        let s = Highlighter::default().snippet(&lion_o(), "omens").unwrap();
        assert_eq!(s.field, SnippetField::Description);
        assert_eq!(s.text, "With the Sword of Omens and claw shield.");
    }

    #[test]
    fn test_excerpt_marks_truncation() {
        let h = Highlighter::new(5, 5);
        let text = "aaaaaaaaaa Lion-O bbbbbbbbbb";
        assert_eq!(h.excerpt(text, "liono").unwrap(), "...aaaa Lion-O bbbb...");
        assert_eq!(h.excerpt("Lion-O", "liono").unwrap(), "Lion-O");
        assert!(h.excerpt(text, "panthro").is_none());
    }

    #[test]
    fn test_excerpt_handles_diacritics() {
        let h = Highlighter::new(0, 0);
        assert_eq!(h.excerpt("Un Pokémon rare", "pokemon").unwrap(), "...Pokémon...");
    }

    #[test]
    fn test_no_snippet() {
        let h = Highlighter::default();
        assert!(h.snippet(&lion_o(), "").is_none());
        assert!(h.snippet(&lion_o(), "liono").is_none());
    }
}
