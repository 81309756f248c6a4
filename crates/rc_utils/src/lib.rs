//! Small shared utilities for the `recast` crates.
//!
//! - [`hash`]: hash containers built on *hashbrown* and *foldhash*.
//! - [`index`]: insertion-ordered containers built on *indexmap*.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;
pub mod index;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
