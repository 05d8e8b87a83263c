// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod decoding;
pub mod lines;
pub mod persistence;
