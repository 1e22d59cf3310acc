//! Domain models for the Stockist API.
//!
//! Row types serialized straight to the wire; the store is the sole owner
//! of record lifetime, so there is no separate domain/DTO split here.

pub mod merchant;
pub mod product;

pub use merchant::Merchant;
pub use product::Product;
