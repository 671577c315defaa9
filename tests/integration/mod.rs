//! Integration test suite for static-extract
//!
//! End-to-end tests of the extraction library over real Tera forests and of
//! the `static-extract` binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **extraction**: files written, tags emitted, explicit placement
//! - **idempotence**: unchanged files keep their modification time
//! - **isolation**: the caller's forest is never modified, failures write nothing
//! - **cli**: the `build` and `plan` commands

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod extraction;
mod isolation;
