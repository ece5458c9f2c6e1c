use std::{env, str::FromStr};

use log::*;
use storefront_engine::{CatalogPolicy, DEFAULT_CATALOG_CATEGORY, DEFAULT_CURRENCY, DEFAULT_PLACEHOLDER_IMAGE};
use stripe_tools::StripeConfig;

const DEFAULT_SFS_HOST: &str = "0.0.0.0";
const DEFAULT_SFS_PORT: u16 = 8080;
const DEFAULT_PRICE_LOOKUP_CONCURRENCY: usize = 1;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Currency that payment intents are created in. Cart prices are assumed to be in this currency's minor units.
    pub currency: String,
    /// Which products the catalog lists, and how.
    pub catalog: CatalogPolicy,
    /// Connection details and the secret key for Stripe.
    pub stripe: StripeConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SFS_HOST.to_string(),
            port: DEFAULT_SFS_PORT,
            currency: DEFAULT_CURRENCY.to_string(),
            catalog: CatalogPolicy::default(),
            stripe: StripeConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("SFS_HOST").ok().unwrap_or_else(|| DEFAULT_SFS_HOST.into());
        let port = parse_env_or("SFS_PORT", DEFAULT_SFS_PORT);
        let currency = env::var("SFS_CURRENCY").ok().filter(|s| !s.trim().is_empty()).unwrap_or_else(|| {
            info!("🪛️ SFS_CURRENCY is not set. Payment intents will be created in {DEFAULT_CURRENCY}.");
            DEFAULT_CURRENCY.into()
        });
        let catalog = catalog_policy_from_env();
        let stripe = StripeConfig::new_from_env_or_default();
        Self { host, port, currency, catalog, stripe }
    }
}

fn catalog_policy_from_env() -> CatalogPolicy {
    let category = env::var("SFS_CATALOG_CATEGORY").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| {
        info!("🪛️ SFS_CATALOG_CATEGORY is not set. The catalog will list '{DEFAULT_CATALOG_CATEGORY}' products.");
        DEFAULT_CATALOG_CATEGORY.into()
    });
    let placeholder_image = env::var("SFS_PLACEHOLDER_IMAGE")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.into());
    let price_lookup_concurrency = parse_env_or("SFS_PRICE_LOOKUP_CONCURRENCY", DEFAULT_PRICE_LOOKUP_CONCURRENCY);
    let price_lookup_concurrency = if price_lookup_concurrency == 0 {
        warn!("🪛️ SFS_PRICE_LOOKUP_CONCURRENCY must be at least 1. Using {DEFAULT_PRICE_LOOKUP_CONCURRENCY}.");
        DEFAULT_PRICE_LOOKUP_CONCURRENCY
    } else {
        price_lookup_concurrency
    };
    CatalogPolicy { category, placeholder_image, price_lookup_concurrency }
}

fn parse_env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    parse_or(name, env::var(name).ok(), default)
}

/// Parses `value`, falling back to `default` (with a log message) if it is missing or invalid.
fn parse_or<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match value {
        None => {
            debug!("🪛️ {name} is not set. Using the default, {default}.");
            default
        },
        Some(s) => s.trim().parse::<T>().unwrap_or_else(|e| {
            error!("🪛️ {s} is not a valid value for {name}. {e} Using the default, {default}, instead.");
            default
        }),
    }
}
