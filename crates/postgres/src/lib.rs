//! # Postgres
//!
//! This crate provides a client for the MediCamp application to interact with a PostgreSQL database.

/// Database client for the medical camp registration platform.
pub mod database;
