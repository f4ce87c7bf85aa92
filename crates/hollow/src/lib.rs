//! # HOLLOW
//!
//! Application shell around the generation core. The interesting parts
//! live in [`hollow_procedural`]; this crate contributes the ASCII
//! painter the demo binaries draw with.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod ascii;

pub use ascii::AsciiCanvas;
