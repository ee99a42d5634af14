//! Application module: the player state holder and its transitions.
//!
//! `App` in `app::model` owns every mutable player field. The pure rules it
//! applies (advance, rewind, scrub, formatting) live in `app::transport`, and
//! `Action` is the vocabulary both key bindings and mouse hits speak.

mod action;
mod model;
pub mod transport;

pub use action::Action;
pub use model::*;
pub use transport::RepeatMode;

#[cfg(test)]
mod tests;
