//! # Web Handlers for the MediCamp Platform
//!
//! This crate provides the web handlers for the medical camp registration platform.

/// Session-token handlers (sign-in token, logout)
mod auth_handlers;
pub use auth_handlers::*;

/// User account handlers (create, existence check, profile get/update, listing)
mod user_handlers;
pub use user_handlers::*;

/// Handlers for camp API endpoints
mod camp_handlers;
pub use camp_handlers::*;
mod camp_service;
pub use camp_service::*;
mod camp_types;
pub use camp_types::*;

/// Handlers for camp registration API endpoints
mod registration_handlers;
pub use registration_handlers::*;
mod registration_service;
pub use registration_service::*;
mod registration_types;
pub use registration_types::*;

/// Handlers for feedback API endpoints
mod feedback_handlers;
pub use feedback_handlers::*;
mod feedback_service;
pub use feedback_service::*;
mod feedback_types;
pub use feedback_types::*;

/// Handlers for payment API endpoints
mod payment_handlers;
pub use payment_handlers::*;
mod payment_service;
pub use payment_service::*;
mod payment_types;
pub use payment_types::*;
