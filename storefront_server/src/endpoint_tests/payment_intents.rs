use actix_web::{http::StatusCode, test::TestRequest};
use serde_json::Value;
use storefront_common::MinorUnits;
use storefront_engine::{test_utils::MockPaymentProcessor, PaymentIntentResult, ProcessorError};

use super::helpers::{content_type, send_request};

const CART_JSON: &str = r#"[
    {"id": "prod_1", "name": "Headphones", "price": 500, "image": "https://img/1.png", "category": "Electronics"},
    {"id": "prod_2", "name": "Speaker", "price": 1200, "image": "https://img/2.png", "category": "Electronics"},
    {"id": "prod_3", "name": "Cable", "price": 99, "image": "https://img/3.png", "category": "Electronics"}
]"#;

fn post(body: &str) -> TestRequest {
    TestRequest::post()
        .uri("/create-payment-intent")
        .insert_header(("content-type", "application/json"))
        .set_payload(body.to_string())
}

#[actix_web::test]
async fn create_payment_intent() {
    let mut payments = MockPaymentProcessor::new();
    payments
        .expect_create_payment_intent()
        .withf(|req| req.amount == MinorUnits::from(1799) && req.currency == "usd" && req.automatic_payment_methods)
        .times(1)
        .returning(|_| {
            Ok(PaymentIntentResult {
                client_secret: "pi_3MtwBwLkdIwHu7ix28a3tqPa_secret_YrKJUKribcBjcG8HVhfZluoGH".into(),
                payment_intent_id: "pi_3MtwBwLkdIwHu7ix28a3tqPa".into(),
            })
        });
    let (status, headers, body) = send_request(post(CART_JSON), payments, MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type(&headers), "application/json");
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["clientSecret"], "pi_3MtwBwLkdIwHu7ix28a3tqPa_secret_YrKJUKribcBjcG8HVhfZluoGH");
    assert_eq!(json["paymentintentid"], "pi_3MtwBwLkdIwHu7ix28a3tqPa");
}

#[actix_web::test]
async fn get_is_not_allowed() {
    let req = TestRequest::get().uri("/create-payment-intent");
    let (status, headers, body) = send_request(req, MockPaymentProcessor::new(), MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(headers.get("allow").unwrap(), "POST");
    assert_eq!(body, "Method Not Allowed\n");
}

#[actix_web::test]
async fn bare_object_is_a_bad_request() {
    let body = r#"{"id": "prod_1", "name": "Headphones", "price": 500}"#;
    let (status, headers, body) = send_request(post(body), MockPaymentProcessor::new(), MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&headers), "text/plain; charset=utf-8");
    assert!(body.starts_with("The cart could not be read. invalid type: map, expected a sequence"), "{body}");
}

#[actix_web::test]
async fn negative_prices_are_rejected() {
    let body = r#"[{"id": "prod_1", "name": "Refund", "price": -500}]"#;
    let (status, _, _) = send_request(post(body), MockPaymentProcessor::new(), MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn overflowing_totals_are_rejected() {
    let body = format!(r#"[{{"id": "a", "name": "A", "price": {}}}, {{"id": "b", "name": "B", "price": 1}}]"#, u64::MAX);
    let (status, _, body) = send_request(post(&body), MockPaymentProcessor::new(), MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("The order total is too large."), "{body}");
}

#[actix_web::test]
async fn processor_failure_is_an_internal_error() {
    let mut payments = MockPaymentProcessor::new();
    payments
        .expect_create_payment_intent()
        .times(1)
        .returning(|_| Err(ProcessorError::Rejected("Invalid API Key provided: sk_test_****".into())));
    let (status, headers, body) = send_request(post(CART_JSON), payments, MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type(&headers), "text/plain; charset=utf-8");
    assert_eq!(body, "The payment processor rejected the request: Invalid API Key provided: sk_test_****\n");
}

#[actix_web::test]
async fn empty_cart_is_forwarded_to_processor() {
    let mut payments = MockPaymentProcessor::new();
    payments
        .expect_create_payment_intent()
        .withf(|req| req.amount == MinorUnits::ZERO)
        .times(1)
        .returning(|_| Err(ProcessorError::Rejected("This value must be greater than or equal to 1.".into())));
    let (status, _, _) = send_request(post("[]"), payments, MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn null_body_is_an_empty_cart() {
    let mut payments = MockPaymentProcessor::new();
    payments
        .expect_create_payment_intent()
        .withf(|req| req.amount == MinorUnits::ZERO)
        .times(1)
        .returning(|_| Ok(PaymentIntentResult { client_secret: "pi_0_secret".into(), payment_intent_id: "pi_0".into() }));
    let (status, _, body) = send_request(post("null"), payments, MockPaymentProcessor::new()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"clientSecret":"pi_0_secret","paymentintentid":"pi_0"}"#);
}
