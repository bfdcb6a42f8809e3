//! Roadmap generation route

use crate::error::ApiError;
use crate::prompt::RoadmapPrompt;
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use roadmap_core::{GenerateRequest, LabelUpdate};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub async fn generate_roadmap(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Vec<LabelUpdate>>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let request_id = Uuid::new_v4();
    let query = request.effective_query();

    info!(%request_id, query, nodes = request.current_nodes.len(), "Generating roadmap");

    let documents = state.knowledge.query(query, state.config.results);
    debug!(%request_id, documents = documents.len(), "Knowledge base query complete");

    let prompt = RoadmapPrompt::build(query, &request.current_nodes, &documents);
    let labels = state.advisor.generate(&prompt).await?;

    info!(%request_id, labels = labels.len(), "Roadmap generated");
    Ok(Json(labels))
}
