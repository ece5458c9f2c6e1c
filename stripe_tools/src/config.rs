use std::time::Duration;

use log::*;
use storefront_common::Secret;

pub const DEFAULT_STRIPE_API_URL: &str = "https://api.stripe.com";
pub const DEFAULT_STRIPE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Base URL of the Stripe API, without the `/v1` version prefix.
    pub api_url: String,
    pub secret_key: Secret<String>,
    /// Applied to every request made by the client. Expiry is reported as [`crate::StripeApiError::Timeout`].
    pub timeout: Duration,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_STRIPE_API_URL.to_string(), secret_key: Secret::default(), timeout: DEFAULT_STRIPE_TIMEOUT }
    }
}

impl StripeConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_url = std::env::var("SFS_STRIPE_API_URL").unwrap_or_else(|_| {
            debug!("SFS_STRIPE_API_URL not set, using {DEFAULT_STRIPE_API_URL}");
            DEFAULT_STRIPE_API_URL.to_string()
        });
        let secret_key = std::env::var("SFS_STRIPE_SECRET_KEY").or_else(|_| std::env::var("SK_TEST_KEY")).unwrap_or_else(
            |_| {
                warn!("SFS_STRIPE_SECRET_KEY not set. Every call to Stripe will be rejected as unauthorized.");
                String::default()
            },
        );
        let timeout = std::env::var("SFS_STRIPE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| {
                s.parse::<u64>()
                    .map_err(|e| warn!("Invalid value for SFS_STRIPE_TIMEOUT_SECS ({s}). {e}"))
                    .ok()
            })
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_STRIPE_TIMEOUT);
        Self { api_url, secret_key: Secret::new(secret_key), timeout }
    }
}
