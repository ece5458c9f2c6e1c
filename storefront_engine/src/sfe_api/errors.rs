use storefront_common::AmountOverflowError;
use thiserror::Error;

use crate::traits::ProcessorError;

#[derive(Debug, Clone, Error)]
pub enum PaymentIntentError {
    #[error("The cart could not be read. {0}")]
    MalformedCart(String),
    #[error("The order total is too large. {0}")]
    AmountOverflow(#[from] AmountOverflowError),
    #[error("{0}")]
    ProcessorError(#[from] ProcessorError),
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("{0}")]
    ProcessorError(#[from] ProcessorError),
}
