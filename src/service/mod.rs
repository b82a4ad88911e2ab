pub mod quote_service;
pub mod catalog_service;
pub mod inquiry_service;
