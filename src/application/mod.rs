//! Application layer.
//!
//! Defines `CustomerDirectory`, the entry point for enrolling and looking up
//! customers on top of a `CustomerStore` backend.

pub mod directory;
