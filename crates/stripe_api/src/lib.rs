//! # Stripe API
//!
//! This crate provides a client for the Stripe PaymentIntents API, which is used to start
//! card charges for camp registration fees.

/// Client for creating payment intents on the Stripe API.
mod client;
pub use client::*;

/// Request/response structures and errors for the Stripe API.
mod types;
pub use types::*;
