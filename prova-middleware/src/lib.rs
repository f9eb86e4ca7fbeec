#![doc = include_str!("../README.md")]
//! prova-middleware
//!
//! Re-exports for store wrappers.

mod cache;

pub use crate::cache::CachingStore;
