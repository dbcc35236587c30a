//! Shared test fixtures for DispatchForge crates.
//!
//! This crate provides data builders and canned scenarios for testing.
//! It depends only on `dispatchforge-core`.
//!
//! - [`resources`] - Terse resource builders and a synthetic pool generator
//! - [`scenario`] - Hand-checked planning scenarios with known answers
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! dispatchforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use dispatchforge_test::resources::{bear, filler};
//! use dispatchforge_test::scenario::bear_patrol;
//! ```

pub mod resources;
pub mod scenario;

pub use resources::{ids, synthetic_groups, synthetic_pool};
pub use scenario::Scenario;
