//! # Storefront server
//! This crate hosts the HTTP server for the storefront. It is responsible for:
//! Serving the product catalog, built from the active products and prices held by Stripe.
//! Creating Stripe payment intents for the carts that the storefront checks out.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/products` (GET): The product catalog.
//! * `/create-payment-intent` (POST): Totals a cart and returns the new payment intent's client secret and id.
//!
//! Any other method on the last two routes gets a 405 response.

pub mod cli;
pub mod config;
pub mod errors;
pub mod integrations;
pub mod routes;
pub mod server;
