//! Composition of analysis and model selection into a single answer.

use serde::Serialize;

use super::analyzer::{Analysis, analyze};
use super::catalog::ModelId;
use super::scorer::select_model;

/// Merged view returned by `POST /orchestrate`.
///
/// Carries the full [`Analysis`] but only the headline of the selection; the
/// per-model breakdown stays on `/select-model`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Orchestration {
    pub query: String,
    pub analysis: Analysis,
    pub selected_model: ModelId,
    pub model_name: String,
    pub confidence: f64,
}

/// Analyze `query` and pick a model for it.
///
/// `user_id` is recorded in logs only.
pub fn orchestrate(query: &str, user_id: Option<&str>) -> Orchestration {
    let analysis = analyze(query);
    let selection = select_model(query);

    tracing::debug!(
        user_id = user_id.unwrap_or(""),
        task_type = %analysis.task_type,
        selected = %selection.selected,
        "query orchestrated"
    );

    Orchestration {
        query: query.to_string(),
        analysis,
        selected_model: selection.selected,
        model_name: selection.display_name,
        confidence: selection.confidence,
    }
}
