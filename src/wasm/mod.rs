//! WebAssembly bindings for the step6502 core.
//!
//! This module provides JavaScript-callable interfaces to the tick-stepped
//! CPU, so a browser front end can drive it cycle by cycle.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6502;
