//! # HTTP Layer
//!
//! Route modules, shared state, and the server entry point. Each route
//! module owns its request/response types; cross-cutting concerns (CORS,
//! error-to-status mapping) live in the server and error modules.

pub mod config;
pub mod health_routes;
pub mod key_routes;
pub mod localization_routes;
pub mod server;
pub mod translation_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;

use crate::store::TranslationStore;

/// State shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: TranslationStore,
}

impl AppState {
    pub fn new(store: TranslationStore) -> Self {
        Self { store }
    }
}
