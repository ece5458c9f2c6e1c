use log::*;
use storefront_common::MinorUnits;
use storefront_engine::{
    PaymentIntentRequest,
    PaymentIntentResult,
    PaymentProcessor,
    Price,
    Product,
    ProcessorError,
};
use stripe_tools::{
    NewPaymentIntent,
    StripeApi,
    StripeApiError,
    StripeConfig,
    StripePaymentIntent,
    StripePrice,
    StripeProduct,
};

/// Stripe as the storefront's payment processor.
///
/// The client (and the secret key inside it) is created once at startup and shared, read-only, by every worker.
#[derive(Clone)]
pub struct StripeProcessor {
    api: StripeApi,
}

impl StripeProcessor {
    pub fn new(config: StripeConfig) -> Result<Self, StripeApiError> {
        if config.secret_key.is_empty() {
            warn!("💳️ No Stripe secret key is configured. Stripe will reject every request.");
        }
        let api = StripeApi::new(config)?;
        Ok(Self { api })
    }
}

impl PaymentProcessor for StripeProcessor {
    async fn fetch_active_products(&self) -> Result<Vec<Product>, ProcessorError> {
        let products = self.api.fetch_all_active_products().await.map_err(to_processor_error)?;
        Ok(products.into_iter().map(product_from_stripe).collect())
    }

    async fn fetch_price(&self, price_id: &str) -> Result<Price, ProcessorError> {
        let price = self.api.fetch_price(price_id).await.map_err(to_processor_error)?;
        Ok(price_from_stripe(price))
    }

    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResult, ProcessorError> {
        let params = NewPaymentIntent {
            amount: request.amount.value(),
            currency: request.currency.clone(),
            automatic_payment_methods: request.automatic_payment_methods,
        };
        let intent = self
            .api
            .create_payment_intent(&params, request.idempotency_key.as_str())
            .await
            .map_err(to_processor_error)?;
        payment_intent_result(intent)
    }
}

pub fn to_processor_error(e: StripeApiError) -> ProcessorError {
    let rejected = e.is_rejection();
    match e {
        StripeApiError::Timeout(s) => ProcessorError::Timeout(s),
        StripeApiError::JsonError(s) => ProcessorError::InvalidResponse(s),
        StripeApiError::QueryError { message, .. } if rejected => ProcessorError::Rejected(message),
        e => ProcessorError::Unavailable(e.to_string()),
    }
}

pub fn product_from_stripe(product: StripeProduct) -> Product {
    Product {
        id: product.id,
        name: product.name,
        active: product.active,
        metadata: product.metadata,
        default_price_id: product.default_price.filter(|id| !id.is_empty()),
        images: product.images,
    }
}

pub fn price_from_stripe(price: StripePrice) -> Price {
    Price { id: price.id, unit_amount: price.unit_amount.map(MinorUnits::from) }
}

/// Stripe always returns the client secret to the API key that created the intent. Its absence means the response
/// cannot be used to complete a payment.
pub fn payment_intent_result(intent: StripePaymentIntent) -> Result<PaymentIntentResult, ProcessorError> {
    match intent.client_secret {
        Some(client_secret) => Ok(PaymentIntentResult { client_secret, payment_intent_id: intent.id }),
        None => {
            error!("💳️ Stripe returned payment intent {} without a client secret", intent.id);
            Err(ProcessorError::InvalidResponse(format!("Payment intent {} has no client secret", intent.id)))
        },
    }
}
