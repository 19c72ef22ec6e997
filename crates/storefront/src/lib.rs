//! Pomelo Storefront - Client-side storefront state library.
//!
//! This crate provides the two stateful pieces a storefront UI consumes:
//!
//! - [`services::cart::CartStore`] - persisted shopping cart with quantity
//!   merging, mirrored to a durable key-value slot after every mutation
//! - [`services::notifications::Notifier`] - transient toast queue with
//!   timer-driven auto-expiry
//!
//! Both are clonable handles over shared state and publish full snapshots
//! through `tokio::sync::watch` channels, so any UI layer can observe them
//! reactively. [`state::AppState`] bundles the pair with configuration and
//! a storage backend for applications that want a single handle.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod storage;
