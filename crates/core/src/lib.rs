//! Orderdesk Core - Shared types library.
//!
//! This crate provides common types used across all Orderdesk components:
//! - `server` - Order intake and admin dashboard web application
//! - `cli` - Command-line tools for migrations and account management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the `Role` enumeration, and order-total parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
