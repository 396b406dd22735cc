//! YandexGPT integration module
//!
//! Provides the client and wire types for the foundation models completion API.

pub mod client;
pub mod models;

pub use client::YandexGptClient;
pub use models::*;
