//! Lanternfest library crate — re-exports all modules for integration
//! testing.
//!
//! The binary crate (`main.rs`) is the scripted demo driver. This
//! library crate exposes the same modules so that `tests/` integration
//! tests can import types, systems, and resources without needing a
//! window or GPU.

pub mod actors;
pub mod calendar;
pub mod data;
pub mod festival;
pub mod fireworks;
pub mod shared;
pub mod wardrobe;
