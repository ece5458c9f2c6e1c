use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::info;
use storefront_engine::{CatalogApi, PaymentIntentApi, PaymentProcessor};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::stripe::StripeProcessor,
    routes::{health, CreatePaymentIntentRoute, ProductsRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let processor =
        StripeProcessor::new(config.stripe.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, processor)?;
    srv.await.map_err(ServerError::IOError)
}

/// Builds the server. The processor is created once by the caller and cloned into each worker, so all workers share
/// the same client and credentials.
pub fn create_server_instance<B>(config: ServerConfig, processor: B) -> Result<Server, ServerError>
where B: PaymentProcessor + Clone + Send + 'static {
    info!(
        "🛒️ Catalog lists '{}' products, with up to {} price lookups at a time. Payments are in {}.",
        config.catalog.category, config.catalog.price_lookup_concurrency, config.currency
    );
    let currency = config.currency.clone();
    let policy = config.catalog.clone();
    let srv = HttpServer::new(move || {
        let payments_api = PaymentIntentApi::new(processor.clone(), &currency);
        let catalog_api = CatalogApi::new(processor.clone(), policy.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %r").log_target("sfs::access_log"))
            .app_data(web::Data::new(payments_api))
            .app_data(web::Data::new(catalog_api))
            .configure(configure::<B>)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

/// Registers the storefront's routes. The `PaymentIntentApi<B>` and `CatalogApi<B>` app data must be supplied by the
/// caller.
pub fn configure<B: PaymentProcessor + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(CreatePaymentIntentRoute::<B>::new()).service(ProductsRoute::<B>::new());
}
