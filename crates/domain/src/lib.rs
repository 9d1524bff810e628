//! # LINE SDK Domain
//!
//! Domain types and models for the LINE platform client SDK.
//!
//! This crate contains:
//! - Response snapshot types (UserProfile, DeliveryStatus, MessageQuota, ...)
//! - The outbound message model and its canonical wire serialization
//! - The SDK error type and Result definition
//! - Wire constants (endpoint roots, cardinality limits)
//!
//! ## Architecture
//! - No dependencies on other SDK crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
