use super::Catalogue;
use crate::types::EnrichedProduct;
use serde::Serialize;

pub const ABOUT_SEGMENT: &str = "about";

/// What a site path points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Route<'a> {
    Home,
    About,
    Collection { slug: &'a str, name: &'a str },
    Product { product: &'a EnrichedProduct },
    NotFound,
}

impl Route<'_> {
    pub fn is_found(&self) -> bool {
        !matches!(self, Route::NotFound)
    }
}

impl Catalogue {
    /// Map a site path to a route.
    ///
    /// Leading and trailing slashes are optional and a query string or
    /// fragment is ignored. Unknown paths resolve to [`Route::NotFound`].
    pub fn resolve(&self, path: &str) -> Route<'_> {
        let path = path
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            [ABOUT_SEGMENT] => Route::About,
            [collection] => self
                .collection_names
                .get_key_value(*collection)
                .map(|(slug, name)| Route::Collection {
                    slug: slug.as_str(),
                    name: name.as_str(),
                })
                .unwrap_or(Route::NotFound),
            [collection, item] => self
                .by_slug(&format!("{}/{}", collection, item))
                .map(|product| Route::Product { product })
                .unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        };

        tracing::debug!(path, found = route.is_found(), "[ROUTE]");
        route
    }

    /// Every reachable page path, home first, each ending in `/`.
    pub fn routes(&self) -> Vec<String> {
        let mut routes = Vec::with_capacity(2 + self.collection_names.len() + self.by_slug.len());
        routes.push("/".to_string());
        routes.push(format!("/{}/", ABOUT_SEGMENT));
        routes.extend(self.collection_names.keys().map(|slug| format!("/{}/", slug)));
        routes.extend(
            self.products()
                .iter()
                .enumerate()
                .filter(|(idx, p)| self.by_slug.get(&p.full_slug) == Some(idx))
                .map(|(_, p)| format!("/{}/", p.full_slug)),
        );
        routes
    }
}
