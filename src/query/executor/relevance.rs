use crate::types::SearchFields;

pub const NAME_PREFIX_WEIGHT: u32 = 20;
pub const NAME_WEIGHT: u32 = 10;
pub const BRAND_WEIGHT: u32 = 8;
pub const MANUFACTURER_WEIGHT: u32 = 8;
pub const COLLECTION_WEIGHT: u32 = 6;
pub const TYPE_WEIGHT: u32 = 6;
pub const YEAR_WEIGHT: u32 = 15;
pub const DESCRIPTION_WEIGHT: u32 = 1;

fn year_matches(fields: &SearchFields, token: &str) -> bool {
    fields.years.iter().any(|y| y == token)
}

/// A token matches when it is a substring of any normalized text field or
/// exactly one of the year tokens.
pub fn token_matches(fields: &SearchFields, token: &str) -> bool {
    fields.name.contains(token)
        || fields.brand.contains(token)
        || fields.manufacturer.contains(token)
        || fields.collection.contains(token)
        || fields.product_type.contains(token)
        || fields.description.contains(token)
        || year_matches(fields, token)
}

/// Field-weighted score of one token. Zero when nothing matches.
pub fn token_score(fields: &SearchFields, token: &str) -> u32 {
    let mut score = 0;
    if fields.name.contains(token) {
        score += if fields.name.starts_with(token) {
            NAME_PREFIX_WEIGHT
        } else {
            NAME_WEIGHT
        };
    }
    if fields.brand.contains(token) {
        score += BRAND_WEIGHT;
    }
    if fields.manufacturer.contains(token) {
        score += MANUFACTURER_WEIGHT;
    }
    if fields.collection.contains(token) {
        score += COLLECTION_WEIGHT;
    }
    if fields.product_type.contains(token) {
        score += TYPE_WEIGHT;
    }
    if year_matches(fields, token) {
        score += YEAR_WEIGHT;
    }
    if fields.description.contains(token) {
        score += DESCRIPTION_WEIGHT;
    }
    score
}

/// AND across tokens, OR across fields. Returns the summed score when every
/// token matches somewhere, `None` otherwise.
pub fn match_and_score(fields: &SearchFields, tokens: &[String]) -> Option<u32> {
    if !tokens.iter().all(|t| token_matches(fields, t)) {
        return None;
    }
    Some(tokens.iter().map(|t| token_score(fields, t)).sum())
}
