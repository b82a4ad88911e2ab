pub mod quote;
pub mod product;
