use super::settings::RelatedSettings;
use crate::types::{EnrichedProduct, ProductId};

pub const SAME_COLLECTION: u32 = 10;
pub const SAME_TYPE: u32 = 8;
pub const SAME_DECADE: u32 = 5;
pub const SAME_MANUFACTURER: u32 = 3;
pub const SAME_DEMOGRAPHIC: u32 = 2;
pub const NEUTRAL_DEMOGRAPHIC: u32 = 1;

const NEUTRAL: &str = "neutral";

/// Fixed-weight similarity between two products.
pub fn similarity(a: &EnrichedProduct, b: &EnrichedProduct) -> u32 {
    let mut score = 0;
    if a.collection == b.collection {
        score += SAME_COLLECTION;
    }
    if a.product_type == b.product_type {
        score += SAME_TYPE;
    }
    if a.decade == b.decade {
        score += SAME_DECADE;
    }
    if a.manufacturer == b.manufacturer {
        score += SAME_MANUFACTURER;
    }
    if a.demographic == b.demographic {
        score += SAME_DEMOGRAPHIC;
    } else if a.demographic.as_deref() == Some(NEUTRAL) || b.demographic.as_deref() == Some(NEUTRAL)
    {
        score += NEUTRAL_DEMOGRAPHIC;
    }
    score
}

fn related_limit(scores: &[u32], settings: &RelatedSettings) -> usize {
    let super_relevant = scores.iter().filter(|s| **s >= settings.super_score).count();
    if super_relevant > settings.super_count {
        return super_relevant.min(settings.max_limit);
    }
    let strong = scores.iter().filter(|s| **s >= settings.strong_score).count();
    if strong >= settings.strong_count {
        settings.expanded_limit
    } else {
        settings.default_limit
    }
}

/// Related product ids for `products[index]`.
///
/// Candidates are every other in-stock product with a non-zero score,
/// ordered by score descending with ties kept in catalogue order.
pub fn related_for(
    index: usize,
    products: &[EnrichedProduct],
    settings: &RelatedSettings,
) -> Vec<ProductId> {
    let product = &products[index];
    let mut scored: Vec<(ProductId, u32)> = products
        .iter()
        .filter(|c| c.id != product.id && !c.is_sold)
        .map(|c| (c.id, similarity(product, c)))
        .filter(|(_, score)| *score > 0)
        .collect();

    // sort_by is stable, so equal scores keep catalogue order
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let scores: Vec<u32> = scored.iter().map(|(_, s)| *s).collect();
    let limit = related_limit(&scores, settings);

    scored.into_iter().take(limit).map(|(id, _)| id).collect()
}

/// Fill `related_ids` for every product. O(n²), fine at catalogue scale.
pub fn assign_related(products: &mut [EnrichedProduct], settings: &RelatedSettings) {
    let related: Vec<Vec<ProductId>> = (0..products.len())
        .map(|i| related_for(i, products, settings))
        .collect();
    for (product, ids) in products.iter_mut().zip(related) {
        product.related_ids = ids;
    }
}
