//! # HOLLOW Core
//!
//! Shared primitives for the HOLLOW cave generator.
//!
//! The only resident so far is [`Grid`], the owned 2D cell container every
//! generation stage reads from and writes to. It lives in its own crate so
//! that consumers of generated maps (painters, exporters) do not have to
//! pull in the generation machinery.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod grid;

pub use grid::Grid;
