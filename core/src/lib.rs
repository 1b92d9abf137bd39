//! Host network diagnostics.
//!
//! The [`interfaces`] enumerator and the [`network::tcp`] prober are independent;
//! [`diagnostics`] runs the probe concurrently with the interface report and
//! [`report`] renders both halves.

pub mod diagnostics;
pub mod interfaces;
pub mod network;
pub mod report;
pub mod system;
