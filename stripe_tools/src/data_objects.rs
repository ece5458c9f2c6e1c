use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Stripe's envelope for list endpoints. `has_more` signals that another page can be fetched by passing the id of the
/// last element as `starting_after`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StripeProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// The id of the product's default price. Products created without a price have none.
    #[serde(default)]
    pub default_price: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StripePrice {
    pub id: String,
    /// Null for prices that are not a simple per-unit amount, such as tiered prices.
    #[serde(default)]
    pub unit_amount: Option<u64>,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StripePaymentIntent {
    pub id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: String,
}

/// Form parameters for `POST /v1/payment_intents`. Stripe takes form-encoded bodies, with nested fields flattened
/// into bracketed keys.
#[derive(Debug, Clone, Serialize)]
pub struct NewPaymentIntent {
    pub amount: u64,
    pub currency: String,
    #[serde(rename = "automatic_payment_methods[enabled]")]
    pub automatic_payment_methods: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StripeErrorEnvelope {
    pub error: StripeErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StripeErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
