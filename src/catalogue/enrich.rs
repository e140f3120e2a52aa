use super::settings::CatalogueSettings;
use crate::error::{CatalogueError, Result};
use crate::tokenizer::{decade_label, normalize, slugify, year_tokens};
use crate::types::{EnrichedProduct, MediaItem, RawProduct, SearchFields};

const NEW_CONDITION: &str = "https://schema.org/NewCondition";
const USED_CONDITION: &str = "https://schema.org/UsedCondition";
const MAX_RELEASE_YEAR: i32 = 9999;

/// YouTube video id for `youtu.be/<id>` or `youtube.com/watch?v=<id>` URLs.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    if url.contains("youtu.be/") {
        return url
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string);
    }
    if url.contains("youtube.com/watch") {
        let parsed = url::Url::parse(url).ok()?;
        return parsed
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned());
    }
    None
}

fn build_media(images: &[String], public_url: &str) -> Vec<MediaItem> {
    images
        .iter()
        .map(|url| match extract_youtube_id(url) {
            Some(id) => MediaItem {
                original: url.clone(),
                thumbnail: format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id),
                is_video: true,
                video_id: Some(id),
            },
            None => {
                let resolved = if url.starts_with('/') {
                    format!("{}{}", public_url, url)
                } else {
                    url.clone()
                };
                MediaItem {
                    original: resolved.clone(),
                    thumbnail: resolved,
                    is_video: false,
                    video_id: None,
                }
            }
        })
        .collect()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn validate(position: usize, raw: &RawProduct) -> Result<(String, f64)> {
    let name = non_blank(&raw.name).ok_or_else(|| CatalogueError::MissingField {
        position,
        id: Some(raw.id),
        field: "name".to_string(),
    })?;

    let price = raw.price.ok_or_else(|| CatalogueError::MissingField {
        position,
        id: Some(raw.id),
        field: "price".to_string(),
    })?;
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogueError::InvalidProduct {
            id: raw.id,
            reason: format!("price must be a non-negative number, got {}", price),
        });
    }

    if let Some(year) = raw.release_date.filter(|y| *y != 0) {
        if !(1..=MAX_RELEASE_YEAR).contains(&year) {
            return Err(CatalogueError::InvalidProduct {
                id: raw.id,
                reason: format!(
                    "releaseDate must be a year between 1 and {}, got {}",
                    MAX_RELEASE_YEAR, year
                ),
            });
        }
    }

    Ok((name.to_string(), price))
}

/// Derive everything about one product that does not depend on the rest of
/// the catalogue. `related_ids` is left empty.
pub fn enrich_product(
    position: usize,
    raw: &RawProduct,
    settings: &CatalogueSettings,
) -> Result<EnrichedProduct> {
    let (name, price) = validate(position, raw)?;

    let collection = non_blank(&raw.collection)
        .unwrap_or(&settings.default_collection)
        .to_string();
    let release_year = raw.release_date.filter(|y| *y != 0);

    let collection_slug = slugify(&collection);
    let year_part = release_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "vintage".to_string());
    let item_slug = slugify(&format!(
        "{}-{}-{}",
        year_part,
        raw.manufacturer.as_deref().unwrap_or(""),
        name
    ));
    let full_slug = format!("{}/{}", collection_slug, item_slug);

    let media = build_media(&raw.images, &settings.public_url);
    let main_image = media
        .iter()
        .find(|m| !m.is_video)
        .or_else(|| media.first())
        .map(|m| m.thumbnail.clone());

    let schema_condition = match &raw.condition {
        Some(c) if c.to_lowercase().contains("new") => NEW_CONDITION,
        _ => USED_CONDITION,
    };

    let search = SearchFields {
        name: normalize(&name),
        brand: normalize(raw.brand.as_deref().unwrap_or("")),
        manufacturer: normalize(raw.manufacturer.as_deref().unwrap_or("")),
        collection: normalize(&collection),
        product_type: normalize(raw.product_type.as_deref().unwrap_or("")),
        description: normalize(raw.description.as_deref().unwrap_or("")),
        years: year_tokens(release_year),
    };

    Ok(EnrichedProduct {
        id: raw.id,
        name,
        brand: raw.brand.clone(),
        manufacturer: raw.manufacturer.clone(),
        collection,
        product_type: raw.product_type.clone(),
        release_date: raw.release_date,
        price,
        stock: raw.stock,
        description: raw.description.clone(),
        images: raw.images.clone(),
        links: raw.links.clone(),
        demographic: raw.demographic.clone(),
        condition: raw.condition.clone(),
        image_color: raw
            .image_color
            .clone()
            .unwrap_or_else(|| settings.default_image_color.clone()),
        collection_slug,
        item_slug,
        full_slug,
        decade: decade_label(release_year),
        is_sold: raw.stock < 1,
        media,
        main_image,
        schema_condition: schema_condition.to_string(),
        related_ids: Vec::new(),
        search,
    })
}
