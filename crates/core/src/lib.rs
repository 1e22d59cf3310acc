//! Stockist Core - Shared types library.
//!
//! This crate provides common types used across all Stockist components:
//! - `api` - The merchant/product REST API
//! - `cli` - Command-line tools for migrations, seeding and token minting
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product ids and merchant keys

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
