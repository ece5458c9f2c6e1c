use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::StripeConfig,
    data_objects::{NewPaymentIntent, StripeList, StripePaymentIntent, StripePrice, StripeProduct},
    helpers::stripe_error_message,
    StripeApiError,
};

/// Stripe caps list pages at 100 entries.
const PAGE_SIZE: u32 = 100;

#[derive(Clone)]
pub struct StripeApi {
    config: StripeConfig,
    client: Arc<Client>,
}

impl StripeApi {
    pub fn new(config: StripeConfig) -> Result<Self, StripeApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        let mut val = HeaderValue::from_str(&format!("Bearer {}", config.secret_key.reveal()))
            .map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        val.set_sensitive(true);
        headers.insert(AUTHORIZATION, val);
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub async fn rest_query<T: DeserializeOwned, F: Serialize>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        form: Option<F>,
        idempotency_key: Option<&str>,
    ) -> Result<T, StripeApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {method} {url}");
        let mut req = self.client.request(method, url);
        if !params.is_empty() {
            req = req.query(params);
        }
        if let Some(form) = form {
            req = req.form(&form);
        }
        if let Some(key) = idempotency_key {
            req = req.header("Idempotency-Key", key);
        }
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            trace!("REST query successful. {status}");
            response.json::<T>().await.map_err(|e| StripeApiError::JsonError(e.to_string()))
        } else {
            let body = response.text().await?;
            let message = stripe_error_message(&body);
            Err(StripeApiError::QueryError { status: status.as_u16(), message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/v1{path}", self.config.api_url.trim_end_matches('/'))
    }

    /// Fetches a single page of products, in Stripe's listing order.
    pub async fn fetch_products(
        &self,
        active: bool,
        starting_after: Option<&str>,
        limit: u32,
    ) -> Result<StripeList<StripeProduct>, StripeApiError> {
        let active = active.to_string();
        let limit = limit.to_string();
        let mut params = vec![("active", active.as_str()), ("limit", limit.as_str())];
        if let Some(cursor) = starting_after {
            params.push(("starting_after", cursor));
        }
        let result = self.rest_query::<StripeList<StripeProduct>, ()>(Method::GET, "/products", &params, None, None).await?;
        debug!("Fetched {} products. More available: {}", result.data.len(), result.has_more);
        Ok(result)
    }

    /// Fetches every active product, following Stripe's cursor pagination until the last page. The listing order is
    /// preserved across pages.
    pub async fn fetch_all_active_products(&self) -> Result<Vec<StripeProduct>, StripeApiError> {
        let mut products: Vec<StripeProduct> = vec![];
        let mut after: Option<String> = None;
        loop {
            let page = self.fetch_products(true, after.as_deref(), PAGE_SIZE).await?;
            let has_more = page.has_more;
            products.extend(page.data);
            match products.last() {
                Some(last) if has_more => after = Some(last.id.clone()),
                _ => break,
            }
        }
        info!("Fetched {} active products", products.len());
        Ok(products)
    }

    pub async fn fetch_price(&self, price_id: &str) -> Result<StripePrice, StripeApiError> {
        let path = format!("/prices/{price_id}");
        trace!("Fetching price {price_id}");
        let result = self.rest_query::<StripePrice, ()>(Method::GET, &path, &[], None, None).await?;
        debug!("Fetched price {price_id}: {:?} {}", result.unit_amount, result.currency);
        Ok(result)
    }

    /// Creates a payment intent. Stripe replays the original response for any later request carrying the same
    /// `idempotency_key`, so the key must be unique per logical payment.
    pub async fn create_payment_intent(
        &self,
        params: &NewPaymentIntent,
        idempotency_key: &str,
    ) -> Result<StripePaymentIntent, StripeApiError> {
        debug!("Creating payment intent for {} {} [{idempotency_key}]", params.amount, params.currency);
        let result = self
            .rest_query::<StripePaymentIntent, &NewPaymentIntent>(
                Method::POST,
                "/payment_intents",
                &[],
                Some(params),
                Some(idempotency_key),
            )
            .await?;
        info!("Created payment intent {} ({}) [{idempotency_key}]", result.id, result.status);
        Ok(result)
    }
}
