use crate::model::product::{Product, ProductCategory, ProductSpecs};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

fn product(
    slug: &str,
    title: &str,
    description: &str,
    category: ProductCategory,
    features: [&str; 5],
    (npk, application, coverage): (&str, &str, &str),
    price: &str,
) -> Product {
    Product {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        features: features.iter().map(|f| f.to_string()).collect(),
        specs: ProductSpecs {
            npk: npk.to_string(),
            application: application.to_string(),
            coverage: coverage.to_string(),
        },
        price: price.to_string(),
    }
}

/// The product catalog, in display order.
pub fn products() -> Vec<Product> {
    use ProductCategory::*;
    vec![
        product(
            "npk-20-20-20",
            "NPK 20-20-20",
            "Balanced all-purpose fertilizer ideal for general crop nutrition and greenhouse applications.",
            Specialty,
            [
                "Equal NPK ratio for balanced growth",
                "Water soluble formula",
                "Suitable for all crops",
                "Quick nutrient release",
                "Versatile application methods",
            ],
            ("20-20-20", "Foliar spray or fertigation", "25 lbs per acre"),
            "$42/bag (25kg)",
        ),
        product(
            "urea-46-0-0",
            "Urea (46-0-0)",
            "High nitrogen fertilizer for rapid vegetative growth and greening of crops.",
            Organic,
            [
                "46% nitrogen content",
                "Cost-effective solution",
                "Fast-acting nitrogen source",
                "Increases protein content",
                "Promotes leafy growth",
            ],
            ("46-0-0", "Broadcast or top dressing", "40 lbs per acre"),
            "$28/bag (50kg)",
        ),
        product(
            "dap-18-46-0",
            "DAP (18-46-0)",
            "Diammonium Phosphate for strong root development and early plant establishment.",
            Specialty,
            [
                "High phosphorus content",
                "Excellent for root growth",
                "Ideal for planting season",
                "Improves seedling vigor",
                "Long-lasting phosphate source",
            ],
            ("18-46-0", "Band or broadcast at planting", "35 lbs per acre"),
            "$38/bag (50kg)",
        ),
        product(
            "muriate-of-potash-0-0-60",
            "Muriate of Potash (0-0-60)",
            "Premium potassium fertilizer for fruit development and disease resistance.",
            Liquid,
            [
                "60% potassium content",
                "Enhances fruit quality",
                "Improves stress tolerance",
                "Increases crop yield",
                "Boosts disease resistance",
            ],
            ("0-0-60", "Broadcast or side dressing", "30 lbs per acre"),
            "$32/bag (50kg)",
        ),
        product(
            "organic-compost-blend",
            "Organic Compost Blend",
            "100% natural organic fertilizer enriched with beneficial microorganisms.",
            Organic,
            [
                "100% Natural ingredients",
                "Improves soil structure",
                "Rich in organic matter",
                "Slow-release nutrients",
                "Environmentally safe",
            ],
            ("5-3-2", "Broadcast or incorporation", "2 tons per acre"),
            "$25/bag (40kg)",
        ),
        product(
            "npk-15-15-15",
            "NPK 15-15-15",
            "Complete balanced fertilizer for all-season crop nutrition and maintenance.",
            Specialty,
            [
                "Balanced nutrition profile",
                "Suitable for most crops",
                "Consistent nutrient release",
                "Easy to apply",
                "All-purpose formula",
            ],
            ("15-15-15", "Broadcast or banding", "40 lbs per acre"),
            "$35/bag (50kg)",
        ),
        product(
            "liquid-npk-10-5-5",
            "Liquid NPK 10-5-5",
            "Fast-acting liquid fertilizer for immediate nutrient uptake and quick results.",
            Liquid,
            [
                "Instant absorption",
                "Perfect for foliar feeding",
                "Water soluble concentrate",
                "Precise dosing control",
                "Rapid green-up effect",
            ],
            ("10-5-5", "Foliar spray or drip irrigation", "1 liter per 200 sq ft"),
            "$45/gallon (5L)",
        ),
        product(
            "calcium-nitrate",
            "Calcium Nitrate",
            "Premium calcium and nitrogen source for preventing blossom end rot and calcium deficiency.",
            Organic,
            [
                "Dual calcium-nitrogen source",
                "Prevents calcium deficiency",
                "Water soluble",
                "Improves fruit firmness",
                "Reduces plant stress",
            ],
            ("15.5-0-0 + 19% Ca", "Fertigation or foliar spray", "20 lbs per acre"),
            "$48/bag (25kg)",
        ),
        product(
            "micronutrient-mix",
            "Micronutrient Mix",
            "Complete micronutrient blend containing zinc, iron, manganese, and boron.",
            Specialty,
            [
                "Essential trace elements",
                "Prevents micronutrient deficiency",
                "Chelated for better absorption",
                "Improves crop quality",
                "Compatible with most fertilizers",
            ],
            ("Zn, Fe, Mn, B, Cu, Mo", "Foliar or soil application", "5 lbs per acre"),
            "$65/bag (10kg)",
        ),
    ]
}

/// Read-only product lookup.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        ProductCatalog { products: products() }
    }
}

impl ProductCatalog {
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get_by_slug(&self, slug: &str) -> RepositoryResult<Product> {
        self.products
            .iter()
            .find(|p| p.slug.eq_ignore_ascii_case(slug))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Product not found for slug: {}", slug)))
    }

    /// Whether `title` names a catalog product, ignoring case.
    pub fn contains_title(&self, title: &str) -> bool {
        self.products.iter().any(|p| p.title.eq_ignore_ascii_case(title.trim()))
    }
}
