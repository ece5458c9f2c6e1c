mod api;
mod config;
mod error;

pub mod data_objects;
pub mod helpers;

pub use api::StripeApi;
pub use config::StripeConfig;
pub use data_objects::{NewPaymentIntent, StripeList, StripePaymentIntent, StripePrice, StripeProduct};
pub use error::StripeApiError;
