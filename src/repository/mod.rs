pub mod quote_store;
pub mod quote_repo;
pub mod repository_error;
pub mod catalog;
pub mod seed;
