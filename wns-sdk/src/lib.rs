#![deny(missing_docs)]

//! WNS partner SDK - Complete SDK.
//!
//! Re-exports all WNS SDK components for convenient single-crate usage.

pub use wns_client as client;
pub use wns_primitives as primitives;
