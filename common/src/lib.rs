//! Shared model and port definitions for `netprobe`.
//!
//! * [`network`]: interface records, raw address entries and the reachability outcome.
//! * [`system`]: traits the core implements against the operating system.
//! * [`config`]: run-time constants of a diagnostics pass.
//! * [`error`]: error types surfaced by the OS adapters.

pub mod config;
pub mod error;
pub mod network;
pub mod system;
