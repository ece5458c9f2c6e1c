use actix_web::{
    http::{header::HeaderMap, StatusCode},
    test,
    test::TestRequest,
    web,
    App,
};
use log::debug;
use storefront_engine::{test_utils::MockPaymentProcessor, CatalogApi, CatalogPolicy, PaymentIntentApi};

use crate::server::configure;

/// Sends `req` to an app wired up like the real server, with `payments` behind the payment intent route and `catalog`
/// behind the catalog route. Mock expectations are checked when the app is dropped at the end of the call.
pub async fn send_request(
    req: TestRequest,
    payments: MockPaymentProcessor,
    catalog: MockPaymentProcessor,
) -> (StatusCode, HeaderMap, String) {
    let _ = env_logger::try_init();
    let app = App::new()
        .app_data(web::Data::new(PaymentIntentApi::new(payments, "usd")))
        .app_data(web::Data::new(CatalogApi::new(catalog, CatalogPolicy::default())))
        .configure(configure::<MockPaymentProcessor>);
    let service = test::init_service(app).await;
    debug!("Making request");
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let headers = res.headers().clone();
    let body = String::from_utf8_lossy(&test::read_body(res).await).into_owned();
    (status, headers, body)
}

pub fn content_type(headers: &HeaderMap) -> &str {
    headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or_default()
}
