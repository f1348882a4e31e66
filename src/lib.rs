//! Workspace host crate. Re-exports [`city_explorer_core`] so the demos in
//! `demos/` can be run with `cargo run --example <name>` from the root.
pub use city_explorer_core::*;
