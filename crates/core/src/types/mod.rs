//! Core types for Orderdesk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod role;
pub mod total;

pub use id::*;
pub use role::{Role, RoleParseError};
pub use total::{OrderTotal, OrderTotalError};
