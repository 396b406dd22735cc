//! Proxy module
//!
//! Abstractions shared by upstream completion providers: the provider trait,
//! outbound header construction and per-request logging.

pub mod headers;
pub mod logging;
pub mod provider;

pub use logging::RequestContext;
pub use provider::CompletionProvider;
