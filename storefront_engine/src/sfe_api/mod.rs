pub mod catalog_api;
pub mod errors;
pub mod payment_intent_api;
