//! Pomelo Core - Shared types library.
//!
//! This crate provides common types used across all Pomelo components:
//! - `storefront` - Client-side storefront state (cart, notifications)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! timers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, cart lines, quantity coercion,
//!   toast entities, and severities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
