use serde::Serialize;

use catalog_products::Product;

// -------------------------
// Response DTOs
// -------------------------

/// `{ "product": ... }` wrapper returned by create and update.
#[derive(Debug, Serialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
