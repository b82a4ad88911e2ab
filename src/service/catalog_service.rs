use tracing::{info, instrument};
use crate::model::product::Product;
use crate::repository::catalog::ProductCatalog;
use crate::util::error::ServiceError;

pub trait CatalogService: Send + Sync {
	fn list_products(&self) -> Vec<Product>;
	fn get_product(&self, slug: &str) -> Result<Product, ServiceError>;
}

#[derive(Debug, Clone, Default)]
pub struct CatalogServiceImpl {
	pub catalog: ProductCatalog,
}

impl CatalogService for CatalogServiceImpl {
	fn list_products(&self) -> Vec<Product> {
		self.catalog.list().to_vec()
	}

	#[instrument(skip(self))]
	fn get_product(&self, slug: &str) -> Result<Product, ServiceError> {
		let product = self.catalog.get_by_slug(slug)?;
		info!(title = %product.title, "Product fetched");
		Ok(product)
	}
}
