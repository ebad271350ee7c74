/// MCP server exposing the legal page classifier.
///
/// Exposes three tools:
/// - `detect_legal_page`: Score a page and decide whether it is a legal document
/// - `extract_signals`: Show the normalized signals the classifier would see
/// - `list_indicators`: List keywords, phrases, weights and the threshold
use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::info;

use legal_lens_core::classifier::{self, THRESHOLD};
use legal_lens_core::mcp_api::{
    DetectLegalPageResponse, ExtractSignalsResponse, IndicatorSetResponse, PageParams,
};
use legal_lens_core::signals::PageSignals;

#[derive(Clone)]
pub struct LegalPageDetectorServer {
    tool_router: ToolRouter<LegalPageDetectorServer>,
}

impl LegalPageDetectorServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for LegalPageDetectorServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl LegalPageDetectorServer {
    #[tool(description = "Decide whether a web page is a legal document (terms of service, privacy policy, EULA) from its URL, title and visible text. Returns the heuristic score, the decision and the signals that matched.")]
    async fn detect_legal_page(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<Json<DetectLegalPageResponse>, String> {
        let text_truncated = PageSignals::was_truncated(&params.text);
        let signals = PageSignals::extract(&params.url, &params.title, &params.text);
        let breakdown = classifier::explain(&signals);
        let response = DetectLegalPageResponse::from_breakdown(&breakdown, text_truncated);

        info!(
            url = signals.url(),
            score = response.score,
            threshold = THRESHOLD,
            is_legal_page = response.is_legal_page,
            phrases = breakdown.phrases.len(),
            "legal page score"
        );

        Ok(Json(response))
    }

    #[tool(description = "Return the normalized signals used for classification: lowercased URL and title, and the lowercased first 5000 characters of the visible text.")]
    async fn extract_signals(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<Json<ExtractSignalsResponse>, String> {
        let text_truncated = PageSignals::was_truncated(&params.text);
        let signals = PageSignals::extract(&params.url, &params.title, &params.text);
        Ok(Json(ExtractSignalsResponse::new(signals, text_truncated)))
    }

    #[tool(description = "List the strong keywords, legal phrases, per-signal weights and decision threshold used by detect_legal_page.")]
    async fn list_indicators(&self) -> Result<Json<IndicatorSetResponse>, String> {
        Ok(Json(IndicatorSetResponse::current()))
    }
}

#[tool_handler]
impl ServerHandler for LegalPageDetectorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "legal-page-detector".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Legal page detector MCP server. Call detect_legal_page once the page's URL, \
                 title and visible text are available; show an indicator only when \
                 is_legal_page is true. Use extract_signals to inspect normalization and \
                 list_indicators to see the scoring tables."
                    .to_string(),
            ),
        }
    }
}
