//! Shared test fixtures for legality crates.
//!
//! This crate provides origin constructors and lineage resolvers for tests.
//! It does NOT depend on `legality-verify` so the verifier crate can use it
//! as a dev-dependency.
//!
//! - [`origin`] - one-line constructors for every candidate origin kind
//! - [`lineage`] - resolvers with fixed or catalog-backed lineages
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! legality-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use legality_test::origin::{egg, wild};
//! use legality_test::lineage::FixedLineage;
//! ```

pub mod lineage;
pub mod origin;

pub use lineage::{builtin_lineage, FixedLineage, SelfLineage};
