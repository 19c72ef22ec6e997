//! Core types for Pomelo.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod quantity;
pub mod severity;
pub mod toast;

pub use cart::{CartLine, Product};
pub use id::{ProductId, ToastId};
pub use quantity::QuantityInput;
pub use severity::Severity;
pub use toast::Toast;
