//! Core components of the `marketpulse` client.
//!
//! This module contains the foundational building blocks of the crate:
//! - The main [`PulseClient`] and its builder.
//! - The primary [`PulseError`] type.
//! - The [`Market`] selector shared by every other module.

/// The main client (`PulseClient`), builder, and configuration.
pub mod client;
/// The primary error type (`PulseError`) for the crate.
pub mod error;
/// Shared models used across modules.
pub mod models;

pub use client::{PulseClient, PulseClientBuilder, SearchCredentials};
pub use error::PulseError;
pub use models::Market;
