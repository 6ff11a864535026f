//! HTTP surface: routes, handlers and the server value that owns them

use crate::aggregator::{Aggregator, ApiResponse, LookupParams};
use crate::config::AggregatorConfig;
use crate::ip_lookup::{IpIntel, ReverseResolver};
use anyhow::Result;
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub const BANNER: &str =
    "Ultimate Naruto Intelligence API Live! Parameters: num, aadhar, pan, email, ip, username";

/// Owns the lookup services and hands out the router that serves them
#[derive(Clone)]
pub struct LookupServer {
    aggregator: Arc<Aggregator>,
}

impl LookupServer {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }

    pub fn from_config(
        config: &AggregatorConfig,
        resolver: Arc<dyn ReverseResolver>,
    ) -> Result<Self> {
        let phone = config.phone_intel()?;
        let ip = IpIntel::new(resolver);
        info!("Responses report developer {:?}", config.developer);
        Ok(Self::new(Aggregator::new(phone, ip, config.developer.clone())))
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(|| async { "OK" }))
            .route("/api", get(api_handler))
            .with_state(self.aggregator.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }
}

async fn root_handler() -> &'static str {
    BANNER
}

async fn api_handler(
    State(aggregator): State<Arc<Aggregator>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ApiResponse> {
    let params = LookupParams::from_pairs(pairs);
    Json(aggregator.aggregate(&params).await)
}
