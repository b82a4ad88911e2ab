pub mod quote_router;
pub mod product_router;
pub mod inquiry_router;
