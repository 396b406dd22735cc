//! Integration tests for the prompt relay
//!
//! These tests drive the real router end to end, with the YandexGPT API
//! replaced by a wiremock server.

mod health;
