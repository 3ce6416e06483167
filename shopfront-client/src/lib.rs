//! HTTP implementation of the storefront service interfaces
//!
//! `ClientConfig` builds an [`HttpClient`] bound to a shared
//! [`Session`](shopfront_core::session::Session); the client implements the
//! service traits from `shopfront-core`, so the state machines can be handed
//! one `Arc<HttpClient>` for all of their remote work.

pub mod config;
mod endpoints;
pub mod http;

pub use config::ClientConfig;
pub use http::HttpClient;
