//! homecount server library entry.
//!
//! This crate wires the config loader, shared state, router, home page,
//! startup probe, and scheduled greeter into a runnable server. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod greeter;
pub mod html;
pub mod probe;
pub mod router;
