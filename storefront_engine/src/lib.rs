//! Storefront Engine
//!
//! The engine holds the two request-handling workflows of the storefront payment server. It is processor-agnostic:
//! everything it needs from the payment processor is expressed by the [`PaymentProcessor`] trait, and the server
//! supplies a concrete implementation at startup.
//!
//! 1. Payment intents ([`PaymentIntentApi`]). A client-submitted cart is totalled with
//!    [`helpers::calculate_order_amount`] and sent to the processor as an idempotent payment intent. A fresh
//!    [`IdempotencyKey`] is generated for every call.
//! 2. The product catalog ([`CatalogApi`]). The processor's active products are filtered by category, priced, given a
//!    display image and returned in the processor's listing order. Any processor failure aborts the whole listing.
pub mod helpers;
pub mod storefront_types;
pub mod traits;

mod sfe_api;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use sfe_api::{
    catalog_api::{CatalogApi, CatalogPolicy, DEFAULT_CATALOG_CATEGORY, DEFAULT_PLACEHOLDER_IMAGE},
    errors::{CatalogError, PaymentIntentError},
    payment_intent_api::{PaymentIntentApi, DEFAULT_CURRENCY},
};
pub use storefront_types::{
    CartItem,
    CatalogItem,
    IdempotencyKey,
    PaymentIntentRequest,
    PaymentIntentResult,
    Price,
    Product,
};
pub use traits::{PaymentProcessor, ProcessorError};
