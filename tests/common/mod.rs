#![allow(dead_code)]
//! Shared test utilities for quickdex integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Helpers are deterministic; the only randomness lives in
//! `big_index`, which generates filler titles that never collide with the
//! queries the harnesses use.

pub mod assertions;
pub mod builders;
pub mod fake_site;
pub mod fake_sources;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
