use actix_web::{http::StatusCode, test::TestRequest};
use mockall::predicate::eq;
use serde_json::{json, Value};
use storefront_engine::{
    test_utils::{price, product, MockPaymentProcessor},
    ProcessorError,
    DEFAULT_PLACEHOLDER_IMAGE,
};

use super::helpers::{content_type, send_request};

fn get() -> TestRequest {
    TestRequest::get().uri("/products")
}

#[actix_web::test]
async fn list_products() {
    let mut catalog = MockPaymentProcessor::new();
    catalog.expect_fetch_active_products().times(1).returning(|| {
        Ok(vec![
            product("prod_1", "Electronics", true, &["https://img/1.png"]),
            product("prod_2", "Books", true, &["https://img/2.png"]),
            product("prod_3", "Electronics", false, &[]),
            product("prod_4", "Electronics", true, &[]),
        ])
    });
    catalog.expect_fetch_price().with(eq("price_prod_1")).times(1).returning(|id| Ok(price(id, 1999)));
    catalog.expect_fetch_price().with(eq("price_prod_4")).times(1).returning(|id| Ok(price(id, 450)));
    let (status, headers, body) = send_request(get(), MockPaymentProcessor::new(), catalog).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type(&headers), "application/json");
    let items: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        items,
        json!([
            {"id": "prod_1", "name": "Product prod_1", "price": 1999, "image": "https://img/1.png", "category": "Electronics"},
            {"id": "prod_4", "name": "Product prod_4", "price": 450, "image": DEFAULT_PLACEHOLDER_IMAGE, "category": "Electronics"},
        ])
    );
}

#[actix_web::test]
async fn empty_catalog() {
    let mut catalog = MockPaymentProcessor::new();
    catalog.expect_fetch_active_products().times(1).returning(|| Ok(vec![product("prod_1", "Books", true, &[])]));
    let (status, _, body) = send_request(get(), MockPaymentProcessor::new(), catalog).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[actix_web::test]
async fn post_is_not_allowed() {
    let req = TestRequest::post().uri("/products");
    let (status, headers, _) = send_request(req, MockPaymentProcessor::new(), MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(headers.get("allow").unwrap(), "GET");
}

#[actix_web::test]
async fn put_is_not_allowed() {
    let req = TestRequest::put().uri("/products");
    let (status, _, _) = send_request(req, MockPaymentProcessor::new(), MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn price_failure_returns_no_catalog() {
    let mut catalog = MockPaymentProcessor::new();
    catalog.expect_fetch_active_products().times(1).returning(|| {
        Ok(vec![
            product("prod_1", "Electronics", true, &[]),
            product("prod_2", "Electronics", true, &[]),
            product("prod_3", "Electronics", true, &[]),
        ])
    });
    catalog.expect_fetch_price().with(eq("price_prod_1")).times(1).returning(|id| Ok(price(id, 100)));
    catalog
        .expect_fetch_price()
        .with(eq("price_prod_2"))
        .times(1)
        .returning(|_| Err(ProcessorError::Timeout("operation timed out".into())));
    let (status, headers, body) = send_request(get(), MockPaymentProcessor::new(), catalog).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type(&headers), "text/plain; charset=utf-8");
    assert_eq!(body, "The payment processor did not respond in time: operation timed out\n");
}

#[actix_web::test]
async fn product_list_failure() {
    let mut catalog = MockPaymentProcessor::new();
    catalog
        .expect_fetch_active_products()
        .times(1)
        .returning(|| Err(ProcessorError::Unavailable("Query failed. Error 500.".into())));
    let (status, _, _) = send_request(get(), MockPaymentProcessor::new(), catalog).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
