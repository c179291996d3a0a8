//! Logger initialization.
//!
//! Centralizes `env_logger` setup so every demo binary starts its
//! diagnostics the same way. The `log` facade is used everywhere else.

mod init;

pub use init::init;
