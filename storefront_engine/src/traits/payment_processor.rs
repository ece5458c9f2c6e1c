use thiserror::Error;

use crate::storefront_types::{PaymentIntentRequest, PaymentIntentResult, Price, Product};

#[derive(Debug, Clone, Error)]
pub enum ProcessorError {
    #[error("The payment processor rejected the request: {0}")]
    Rejected(String),
    #[error("The payment processor is unavailable: {0}")]
    Unavailable(String),
    #[error("The payment processor did not respond in time: {0}")]
    Timeout(String),
    #[error("The payment processor sent an invalid response: {0}")]
    InvalidResponse(String),
}

/// The operations the storefront needs from its payment processor.
///
/// Implementations are expected to be cheap to clone (an `Arc`'d HTTP client, say) and hold no mutable state: one
/// instance is shared by every request a worker handles.
#[allow(async_fn_in_trait)]
pub trait PaymentProcessor {
    /// Fetch every active product, in the processor's listing order.
    async fn fetch_active_products(&self) -> Result<Vec<Product>, ProcessorError>;
    /// Fetch a single price by its id.
    async fn fetch_price(&self, price_id: &str) -> Result<Price, ProcessorError>;
    /// Create a payment intent. The processor must treat two requests with the same idempotency key as one.
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResult, ProcessorError>;
}
