use std::{collections::HashMap, fmt::Display};

use serde::{Deserialize, Serialize};
use storefront_common::MinorUnits;
use uuid::Uuid;

/// The metadata key that products are categorised under.
pub const CATEGORY_KEY: &str = "Category";

//--------------------------------------     CartItem       ----------------------------------------------------------
/// An item in a cart submitted by a client. Only `price` takes part in the order total, so it is the only required
/// field. The others are carried so that the storefront can post back exactly what it displayed, and are empty when
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: MinorUnits,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

//--------------------------------------     CatalogItem       -------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: MinorUnits,
    pub image: String,
    pub category: String,
}

//--------------------------------------     Product       -----------------------------------------------------------
/// The processor's view of a product, reduced to what the catalog needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub metadata: HashMap<String, String>,
    pub default_price_id: Option<String>,
    pub images: Vec<String>,
}

impl Product {
    /// The product's category, if one was assigned in its metadata.
    pub fn category(&self) -> Option<&str> {
        self.metadata.get(CATEGORY_KEY).map(String::as_str)
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Price {
    pub id: String,
    /// `None` when the price is not a flat per-unit amount.
    pub unit_amount: Option<MinorUnits>,
}

//--------------------------------------     Payment intents       ---------------------------------------------------
/// A token that lets the processor recognise retries of the same payment request. Keys are random (UUID v4) and must
/// never be shared between distinct payment requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for IdempotencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentRequest {
    pub amount: MinorUnits,
    pub currency: String,
    pub automatic_payment_methods: bool,
    pub idempotency_key: IdempotencyKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentResult {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
    #[serde(rename = "paymentintentid")]
    pub payment_intent_id: String,
}
