use crate::{sfe_api::errors::PaymentIntentError, storefront_types::CartItem};

/// Decodes a request body into a cart. The body must be a JSON array of cart items, or `null` for an empty cart. The
/// decoder's message is kept in the error so that the client can see what was wrong.
pub fn parse_cart(body: &[u8]) -> Result<Vec<CartItem>, PaymentIntentError> {
    serde_json::from_slice::<Option<Vec<CartItem>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| PaymentIntentError::MalformedCart(e.to_string()))
}
