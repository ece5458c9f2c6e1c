use std::fmt::Debug;

use futures_util::{stream, StreamExt, TryStreamExt};
use log::*;

use crate::{
    sfe_api::errors::CatalogError,
    storefront_types::{CatalogItem, Product},
    traits::PaymentProcessor,
};

pub const DEFAULT_CATALOG_CATEGORY: &str = "Electronics";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://www.dentee.com/buy/content/images/thumbs/default-image_450.png";

/// Controls which products make it into the catalog and how they are presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPolicy {
    /// Only products whose `Category` metadata equals this value are listed.
    pub category: String,
    /// Shown for products that have no images.
    pub placeholder_image: String,
    /// The maximum number of price lookups in flight for one listing. 1 means lookups happen one after another.
    pub price_lookup_concurrency: usize,
}

impl Default for CatalogPolicy {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATALOG_CATEGORY.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            price_lookup_concurrency: 1,
        }
    }
}

/// `CatalogApi` builds the storefront's product catalog from the payment processor's product and price records.
pub struct CatalogApi<B> {
    processor: B,
    policy: CatalogPolicy,
}

impl<B> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi({})", self.policy.category)
    }
}

impl<B> CatalogApi<B> {
    pub fn new(processor: B, policy: CatalogPolicy) -> Self {
        Self { processor, policy }
    }

    /// True if the product is active and filed under the catalog's category. Products without a category are never
    /// listed.
    pub fn is_listed(&self, product: &Product) -> bool {
        product.active && product.category() == Some(self.policy.category.as_str())
    }
}

impl<B> CatalogApi<B>
where B: PaymentProcessor
{
    /// Lists every active product in the catalog's category, priced and with a display image.
    ///
    /// Items come out in the processor's listing order, regardless of how many price lookups run at once. Prices are
    /// only looked up for listed products. If the processor fails at any point, the whole listing fails.
    ///
    /// Products without a default price, or whose price is not a flat unit amount, cannot be sold from the storefront
    /// and are left out with a warning.
    pub async fn list_products(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let products = self.processor.fetch_active_products().await?;
        let total = products.len();
        let listed = products.into_iter().filter(|p| self.is_listed(p)).collect::<Vec<Product>>();
        debug!("🛒️ {} of {total} active products are in category {}", listed.len(), self.policy.category);
        let concurrency = self.policy.price_lookup_concurrency.max(1);
        let items = stream::iter(listed)
            .map(|product| self.to_catalog_item(product))
            .buffered(concurrency)
            .try_collect::<Vec<Option<CatalogItem>>>()
            .await?;
        let items = items.into_iter().flatten().collect::<Vec<CatalogItem>>();
        info!("🛒️ Catalog listing has {} items", items.len());
        Ok(items)
    }

    async fn to_catalog_item(&self, product: Product) -> Result<Option<CatalogItem>, CatalogError> {
        let Some(price_id) = product.default_price_id.as_deref() else {
            warn!("🛒️ Product {} ({}) has no default price. It will not be listed.", product.id, product.name);
            return Ok(None);
        };
        let price = self.processor.fetch_price(price_id).await.map_err(|e| {
            warn!("🛒️ Could not fetch price {price_id} for product {}. {e}", product.id);
            e
        })?;
        let Some(unit_price) = price.unit_amount else {
            warn!("🛒️ Price {price_id} of product {} has no unit amount. It will not be listed.", product.id);
            return Ok(None);
        };
        let image = product.primary_image().unwrap_or(self.policy.placeholder_image.as_str()).to_string();
        let category = product.category().unwrap_or_default().to_string();
        trace!("🛒️ Listing {} ({}) at {unit_price}", product.id, product.name);
        Ok(Some(CatalogItem { id: product.id, name: product.name, unit_price, image, category }))
    }
}
