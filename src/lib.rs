#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod dates;
mod helpers;

mod bridge;
mod params;
mod store;

// Public API
pub use bridge::{LocationBridge, MemoryBridge, NoopBridge};
pub use params::{ParamMap, ParamMatch, ParamValue};
pub use store::{DATE_LIST_KEY, QueryStringStore, StoreOptions};
