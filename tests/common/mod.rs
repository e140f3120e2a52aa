#![allow(dead_code)]

use loftloot::{Catalogue, CatalogueSettings, EnrichedProduct, RawProduct};
use serde_json::json;

/// A small shop covering every facet combination the tests need.
///
/// Ids 2 and 8 are sold; 7 has no collection, type or release year.
pub fn fixture_products() -> serde_json::Value {
    json!([
        {"id": 1, "name": "Lion-O", "brand": "Thundercats", "manufacturer": "LJN",
         "collection": "Thundercats", "type": "Action Figure", "releaseDate": 1985,
         "price": 45, "stock": 2, "demographic": "Boys", "condition": "Used - complete",
         "images": ["/img/lion-o.jpg", "https://youtu.be/abc123XYZ_-"],
         "description": "Lord of the <b>Thundercats</b> with the Sword of Omens."},
        {"id": 2, "name": "Thundertank", "brand": "Thundercats", "manufacturer": "LJN",
         "collection": "Thundercats", "type": "Vehicle", "releaseDate": 1986,
         "price": 120, "stock": 0, "demographic": "Boys"},
        {"id": 3, "name": "Panthro", "brand": "Thundercats", "manufacturer": "LJN",
         "collection": "Thundercats", "type": "Action Figure", "releaseDate": 1985,
         "price": 38, "stock": 1, "demographic": "Boys"},
        {"id": 4, "name": "Leonardo", "manufacturer": "Playmates", "collection": "TMNT",
         "type": "Action Figure", "releaseDate": 1988, "price": 15, "stock": 4,
         "description": "Leader in blue, with twin katana."},
        {"id": 5, "name": "Pikachu Plush", "manufacturer": "Tomy", "collection": "Pokémon",
         "type": "Plush", "releaseDate": 1998, "price": 12.5, "stock": 3,
         "demographic": "neutral", "condition": "New in box"},
        {"id": 6, "name": "Goliath", "manufacturer": "Kenner", "collection": "Gargoyles",
         "type": "Action Figure", "releaseDate": 1995, "price": 22, "stock": 1},
        {"id": 7, "name": "Mystery Tin", "price": 5, "stock": 6},
        {"id": 8, "name": "Castle Grayskull", "manufacturer": "Mattel",
         "collection": "Masters of the Universe", "type": "Playset", "releaseDate": 1982,
         "price": 150, "stock": 0}
    ])
}

pub fn raw_products() -> Vec<RawProduct> {
    serde_json::from_value(fixture_products()).unwrap()
}

pub fn catalogue() -> Catalogue {
    catalogue_with(CatalogueSettings::default())
}

pub fn catalogue_with(settings: CatalogueSettings) -> Catalogue {
    Catalogue::build_with_settings(&raw_products(), settings).unwrap()
}

pub fn ids<'a, I>(products: I) -> Vec<i64>
where
    I: IntoIterator<Item = &'a EnrichedProduct>,
{
    products.into_iter().map(|p| p.id).collect()
}
