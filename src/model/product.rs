use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Organic,
    Liquid,
    Specialty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpecs {
    pub npk: String,
    pub application: String,
    pub coverage: String,
}

/// A fertilizer product from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: ProductCategory,
    pub features: Vec<String>,
    pub specs: ProductSpecs,
    /// Display price including pack size, e.g. "$42/bag (25kg)".
    pub price: String,
}
