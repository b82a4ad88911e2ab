use axum::{Router, routing::get};
use tracing::info;
use crate::config::{AppConfig, QuoteConfig, ConfigError};
use crate::middlewares::admin_middleware::AdminAuthState;
use crate::repository::quote_repo::{InMemoryQuoteRepository, QuoteRepository};
use crate::service::quote_service::QuoteServiceImpl;
use crate::service::catalog_service::CatalogServiceImpl;
use crate::service::inquiry_service::InquiryServiceImpl;
use std::sync::Arc;


pub struct App {
    config: AppConfig,
    router: Router,
    pub quote_service: Arc<QuoteServiceImpl>,
    pub catalog_service: Arc<CatalogServiceImpl>,
    pub inquiry_service: Arc<InquiryServiceImpl>,
}

impl App {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = AppConfig::from_env()?;
        let quote_config = QuoteConfig::from_env()?;
        Ok(Self::new(config, quote_config))
    }

    pub fn new(config: AppConfig, quote_config: QuoteConfig) -> Self {
        let quote_repo: Arc<dyn QuoteRepository> = if quote_config.seed_samples {
            info!("Seeding sample quote requests");
            Arc::new(InMemoryQuoteRepository::seeded())
        } else {
            Arc::new(InMemoryQuoteRepository::empty())
        };
        let quote_service = Arc::new(QuoteServiceImpl::new(quote_repo, quote_config.strict_transitions));
        let catalog_service = Arc::new(CatalogServiceImpl::default());
        let inquiry_service = Arc::new(InquiryServiceImpl::default());

        let admin_auth_state = Arc::new(AdminAuthState {
            api_key: quote_config.admin_api_key.clone(),
        });

        let mut app = App {
            config,
            router: Router::new(),
            quote_service,
            catalog_service,
            inquiry_service,
        };
        app.router = app.create_router(admin_auth_state);
        app
    }

    fn create_router(&self, admin_auth_state: Arc<AdminAuthState>) -> Router {
        use crate::router::quote_router::quote_router;
        use crate::router::product_router::product_router;
        use crate::router::inquiry_router::inquiry_router;
        Router::new()
            .merge(quote_router(self.quote_service.clone(), admin_auth_state))
            .merge(product_router(self.catalog_service.clone()))
            .merge(inquiry_router(self.inquiry_service.clone()))
            .route("/health", get(|| async { "OK" }))
    }

    /// The assembled router, for serving or driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn start(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.socket_addr()?;
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
