//! Top-level facade crate for homecount.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use homecount_core::*;
}

pub mod server {
    pub use homecount_server::*;
}
