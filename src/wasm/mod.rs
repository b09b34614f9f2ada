//! WebAssembly bindings for the 6502 simulator.
//!
//! A thin JavaScript-callable driver over the public Rust API, so the
//! simulator can run in a browser.

pub mod api;

pub use api::Simulator;
