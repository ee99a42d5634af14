//! Track catalog: the compiled-in track list and cover art lookup.
//!
//! Tracks never change at runtime. Cover locators are resolved lazily by
//! `CoverResolver`, which falls back to a placeholder when a locator cannot
//! be resolved.

mod covers;
mod model;

pub use covers::*;
pub use model::*;

#[cfg(test)]
mod tests;
