use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::health::HealthState;
use crate::engine::KeywordEngine;
use crate::types::{CompetitionTier, KeywordRecord};

#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<KeywordEngine>,
    pub health: Arc<HealthState>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/keywords", get(get_keywords))
        .route("/keywords/suggestions", get(get_suggestions))
        .route("/health", get(get_health))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Query param structs
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct KeywordsQuery {
    pub q: Option<String>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Keyword record as consumed by the JS dashboard, hence camelCase fields.
/// `opportunityScore` is recomputed here rather than stored on the record.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResponse {
    pub keyword: String,
    pub search_volume: u32,
    pub difficulty: u8,
    pub cpc: f64,
    pub competition: CompetitionTier,
    pub trend: [u8; 7],
    pub related_keywords: Vec<String>,
    pub google_shopping_results: u32,
    pub mercadolibre_results: u32,
    pub opportunity_score: u8,
}

impl From<KeywordRecord> for KeywordResponse {
    fn from(record: KeywordRecord) -> Self {
        let opportunity_score = record.opportunity_score();
        Self {
            keyword: record.keyword,
            search_volume: record.search_volume,
            difficulty: record.difficulty,
            cpc: record.cpc,
            competition: record.competition,
            trend: record.trend,
            related_keywords: record.related_keywords,
            google_shopping_results: record.google_shopping_results,
            mercadolibre_results: record.mercadolibre_results,
            opportunity_score,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Missing or blank `q` is "nothing to analyze": an empty array, not an
/// error.
async fn get_keywords(
    State(state): State<ApiState>,
    Query(params): Query<KeywordsQuery>,
) -> Json<Vec<KeywordResponse>> {
    let query = params.q.unwrap_or_default();
    let records = state.engine.generate(&query);
    debug!(
        query = %query.trim(),
        records = records.len(),
        "keyword generation run"
    );
    state.health.record_generation(records.len(), now_ns());
    Json(records.into_iter().map(KeywordResponse::from).collect())
}

async fn get_suggestions(State(state): State<ApiState>) -> Json<Vec<&'static str>> {
    Json(state.engine.popular_suggestions().to_vec())
}

async fn get_health(State(state): State<ApiState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "queries_served": state.health.queries_served(),
        "records_emitted": state.health.records_emitted(),
        "last_generated_at_ns": state.health.last_generated_at_ns(),
    }))
}

fn now_ns() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
