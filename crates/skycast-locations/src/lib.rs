//! Client for the saved-locations REST collaborator.
//!
//! The store owns persistence (one relational table behind
//! `/api/locations`); this crate only speaks its HTTP contract.

pub mod client;
pub mod types;

pub use client::LocationClient;
pub use types::{LocationStoreError, SavedLocation};
