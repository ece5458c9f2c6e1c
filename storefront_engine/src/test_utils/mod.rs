//! Mocks and fixtures for testing code that depends on a [`PaymentProcessor`].
use std::collections::HashMap;

use mockall::mock;
use storefront_common::MinorUnits;

use crate::{
    storefront_types::{CATEGORY_KEY, CartItem, PaymentIntentRequest, PaymentIntentResult, Price, Product},
    traits::{PaymentProcessor, ProcessorError},
};

mock! {
    pub PaymentProcessor {}
    impl PaymentProcessor for PaymentProcessor {
        async fn fetch_active_products(&self) -> Result<Vec<Product>, ProcessorError>;
        async fn fetch_price(&self, price_id: &str) -> Result<Price, ProcessorError>;
        async fn create_payment_intent(&self, request: &PaymentIntentRequest) -> Result<PaymentIntentResult, ProcessorError>;
    }
}

pub fn cart_item(id: &str, price: u64) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: format!("Item {id}"),
        unit_price: MinorUnits::from(price),
        image: format!("https://img/{id}.png"),
        category: "Electronics".to_string(),
    }
}

/// A product whose default price id is `price_{id}`.
pub fn product(id: &str, category: &str, active: bool, images: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        active,
        metadata: HashMap::from([(CATEGORY_KEY.to_string(), category.to_string())]),
        default_price_id: Some(format!("price_{id}")),
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn price(id: &str, unit_amount: u64) -> Price {
    Price { id: id.to_string(), unit_amount: Some(MinorUnits::from(unit_amount)) }
}
