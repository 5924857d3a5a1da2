//! # Auth Services
//!
//! This crate provides authentication services for the application.
//! It includes JWT session-token handling, middleware for request authentication
//! and organizer authorization, and the user account service.

/// JWT session-token handling.
pub mod jwt;
/// Middleware for request authentication and organizer-only routes.
pub mod middleware;
/// Service definitions for user account operations.
pub mod service;
/// Types and structures used in authentication services.
pub mod types;
