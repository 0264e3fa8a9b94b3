use std::sync::Arc;

use crate::analysis::taxonomy::KeywordTaxonomy;
use crate::config::Config;
use crate::cover_letter::client::CompletionClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only; per-request analysis state is
/// built fresh inside each handler.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; no handler reads it yet.
    #[allow(dead_code)]
    pub config: Config,
    /// Fixed category → keyword mapping, built once at startup.
    pub taxonomy: Arc<KeywordTaxonomy>,
    /// Chat-completion upstream for cover letters. `None` when no API key is
    /// configured; the endpoint then degrades to an empty result.
    pub completions: Option<Arc<dyn CompletionClient>>,
}
