//! homecount core: runtime-free primitives shared by the server and tests.
//!
//! This crate holds the visit counter, the home page message, the IP-echo
//! wire contract, and the error surface. It carries no transport or runtime
//! dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `HomecountError`/`Result` so the
//! server process does not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod ipecho;
pub mod page;

/// Shared result type.
pub use error::{HomecountError, Result};
