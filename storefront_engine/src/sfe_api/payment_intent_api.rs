use std::fmt::Debug;

use log::*;

use crate::{
    helpers::calculate_order_amount,
    sfe_api::errors::PaymentIntentError,
    storefront_types::{CartItem, IdempotencyKey, PaymentIntentRequest, PaymentIntentResult},
    traits::PaymentProcessor,
};

pub const DEFAULT_CURRENCY: &str = "usd";

/// `PaymentIntentApi` turns a client's cart into a payment intent with the payment processor.
pub struct PaymentIntentApi<B> {
    processor: B,
    currency: String,
}

impl<B> Debug for PaymentIntentApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PaymentIntentApi({})", self.currency)
    }
}

impl<B> PaymentIntentApi<B> {
    pub fn new(processor: B, currency: &str) -> Self {
        Self { processor, currency: currency.to_lowercase() }
    }
}

impl<B> PaymentIntentApi<B>
where B: PaymentProcessor
{
    /// Totals the cart and asks the processor for a payment intent of that amount.
    ///
    /// Every call generates a new idempotency key. A client that retries the HTTP request therefore gets a new
    /// intent; the key only protects against the processor client's own retransmissions of this one request.
    pub async fn create_payment_intent(&self, items: &[CartItem]) -> Result<PaymentIntentResult, PaymentIntentError> {
        let amount = calculate_order_amount(items)?;
        let request = PaymentIntentRequest {
            amount,
            currency: self.currency.clone(),
            automatic_payment_methods: true,
            idempotency_key: IdempotencyKey::generate(),
        };
        debug!(
            "💳️ Requesting payment intent for {} items, total {amount} {} [{}]",
            items.len(),
            self.currency,
            request.idempotency_key
        );
        let result = self.processor.create_payment_intent(&request).await.map_err(|e| {
            warn!("💳️ Payment intent for {amount} {} failed [{}]. {e}", self.currency, request.idempotency_key);
            e
        })?;
        info!(
            "💳️ Payment intent {} created for {amount} {} [{}]",
            result.payment_intent_id, self.currency, request.idempotency_key
        );
        Ok(result)
    }
}
